use super::{service::service, types::request};
use crate::{types::Context, utils::envelope::Envelope};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Path(id): Path<String>,
    Envelope(data): Envelope,
) -> impl IntoResponse {
    service(ctx, request::Payload { id, data }).await
}
