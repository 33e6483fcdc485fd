use super::types::response;
use crate::{modules::order::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Success {
    let orders = ctx.store.orders.lock().await;

    response::Success::Orders(repository::find_many(&orders))
}
