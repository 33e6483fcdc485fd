use super::types::{request, response};
use crate::{
    modules::dish::{repository, validation},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let fields = validation::has_dish_fields(&payload.data).map_err(|err| {
        tracing::warn!("Failed to validate dish: {err}");
        response::Error::FailedToValidate(err)
    })?;

    let mut dishes = ctx.store.dishes.lock().await;
    let dish = repository::create(
        &mut dishes,
        repository::CreateDishPayload {
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
        },
    );

    tracing::debug!("Created dish {}", dish.id);

    Ok(response::Success::DishCreated(dish))
}
