use super::types::{request, response};
use crate::{
    modules::dish::{repository, validation},
    types::Context,
    utils::validation::body_id,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut dishes = ctx.store.dishes.lock().await;

    if dishes.find_by_id(&payload.id).is_none() {
        return Err(response::Error::DishNotFound(payload.id));
    }

    let fields = validation::has_dish_fields(&payload.data).map_err(|err| {
        tracing::warn!("Failed to validate dish {}: {err}", payload.id);
        response::Error::FailedToValidate(err)
    })?;

    if let Some(id) = body_id(&payload.data) {
        if id != payload.id {
            tracing::warn!("Dish id {} does not match route id {}", id, payload.id);
            return Err(response::Error::IdMismatch {
                body_id: id,
                route_id: payload.id,
            });
        }
    }

    let dish = repository::update_by_id(
        &mut dishes,
        &payload.id,
        repository::UpdateDishPayload {
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
        },
    )
    .ok_or(response::Error::DishNotFound(payload.id.clone()))?;

    tracing::debug!("Updated dish {}", dish.id);

    Ok(response::Success::DishUpdated(dish))
}
