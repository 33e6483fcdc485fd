use super::types::{request, response};
use crate::{
    modules::order::{repository, validation},
    types::Context,
    utils::validation::{body_id, Data, Outcome},
};
use std::sync::Arc;

fn validate(data: &Data) -> Outcome<repository::UpdateOrderPayload> {
    let deliver_to = validation::has_field(data, "deliverTo")?;
    let mobile_number = validation::has_field(data, "mobileNumber")?;
    let dishes = validation::dishes_is_valid(data)?;
    let status = validation::status_is_valid(data)?;

    Ok(repository::UpdateOrderPayload {
        deliver_to,
        mobile_number,
        status,
        dishes,
    })
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut orders = ctx.store.orders.lock().await;

    let current = orders
        .find_by_id(&payload.id)
        .ok_or_else(|| response::Error::OrderNotFound(payload.id.clone()))?;
    let is_delivered = current.is_delivered();

    let update = validate(&payload.data).map_err(|err| {
        tracing::warn!("Failed to validate order {}: {err}", payload.id);
        response::Error::FailedToValidate(err)
    })?;

    if is_delivered {
        tracing::warn!("Refused to change delivered order {}", payload.id);
        return Err(response::Error::OrderDelivered);
    }

    if let Some(id) = body_id(&payload.data) {
        if id != payload.id {
            tracing::warn!("Order id {} does not match route id {}", id, payload.id);
            return Err(response::Error::IdMismatch {
                body_id: id,
                route_id: payload.id,
            });
        }
    }

    let order = repository::update_by_id(&mut orders, &payload.id, update)
        .ok_or_else(|| response::Error::OrderNotFound(payload.id.clone()))?;

    tracing::debug!("Updated order {} to {}", order.id, order.status);

    Ok(response::Success::OrderUpdated(order))
}
