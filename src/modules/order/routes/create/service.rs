use super::types::{request, response};
use crate::{
    modules::order::{repository, validation},
    types::Context,
    utils::validation::{Data, Outcome},
};
use std::sync::Arc;

fn validate(data: &Data) -> Outcome<repository::CreateOrderPayload> {
    let deliver_to = validation::has_field(data, "deliverTo")?;
    let mobile_number = validation::has_field(data, "mobileNumber")?;
    let dishes = validation::dishes_is_valid(data)?;

    Ok(repository::CreateOrderPayload {
        deliver_to,
        mobile_number,
        dishes,
    })
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let order = validate(&payload.data).map_err(|err| {
        tracing::warn!("Failed to validate order: {err}");
        response::Error::FailedToValidate(err)
    })?;

    let mut orders = ctx.store.orders.lock().await;
    let order = repository::create(&mut orders, order);

    tracing::debug!("Created order {} with {} dishes", order.id, order.dishes.len());

    Ok(response::Success::OrderCreated(order))
}
