mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::{modules::fallback, types::Context};
use axum::routing::{get, Router};
use std::sync::Arc;

// One `MethodRouter` per path so each path carries a single 405 fallback.
pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route(
            "/",
            get(list::handler::handler)
                .post(create::handler::handler)
                .fallback(fallback::method_not_allowed),
        )
        .route(
            "/:order_id",
            get(get::handler::handler)
                .put(update::handler::handler)
                .delete(delete::handler::handler)
                .fallback(fallback::method_not_allowed),
        )
}
