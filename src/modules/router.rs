use super::{dish, fallback, order};
use crate::types::Context;
use axum::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/dishes", dish::get_router())
        .nest("/orders", order::get_router())
        .fallback(fallback::not_found)
}
