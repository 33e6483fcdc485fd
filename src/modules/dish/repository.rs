use serde::{Deserialize, Serialize};

use crate::utils::{
    id::next_id,
    store::{Record, Store},
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

impl Record for Dish {
    fn id(&self) -> &str {
        &self.id
    }
}

pub struct CreateDishPayload {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

pub fn create(store: &mut Store<Dish>, payload: CreateDishPayload) -> Dish {
    store
        .insert(Dish {
            id: next_id(),
            name: payload.name,
            description: payload.description,
            price: payload.price,
            image_url: payload.image_url,
        })
        .clone()
}

pub fn find_many(store: &Store<Dish>) -> Vec<Dish> {
    store.find_many().to_vec()
}

pub fn find_by_id(store: &Store<Dish>, id: &str) -> Option<Dish> {
    store.find_by_id(id).cloned()
}

pub struct UpdateDishPayload {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

/// Overwrites every mutable field of the stored dish. The id never changes.
pub fn update_by_id(store: &mut Store<Dish>, id: &str, payload: UpdateDishPayload) -> Option<Dish> {
    let dish = store.find_by_id_mut(id)?;

    dish.name = payload.name;
    dish.description = payload.description;
    dish.price = payload.price;
    dish.image_url = payload.image_url;

    Some(dish.clone())
}
