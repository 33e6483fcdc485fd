use super::types::{request, response};
use crate::{modules::order::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut orders = ctx.store.orders.lock().await;

    let order = orders
        .find_by_id(&payload.id)
        .ok_or_else(|| response::Error::OrderNotFound(payload.id.clone()))?;

    if !order.is_pending() {
        tracing::warn!(
            "Refused to delete order {} with status {}",
            order.id,
            order.status
        );
        return Err(response::Error::OrderNotPending);
    }

    repository::delete_by_id(&mut orders, &payload.id)
        .ok_or(response::Error::OrderNotFound(payload.id))
        .map(|order| {
            tracing::debug!("Deleted order {}", order.id);
            response::Success::OrderDeleted
        })
}
