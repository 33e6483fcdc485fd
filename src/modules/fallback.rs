use crate::utils::envelope;
use axum::{
    extract::OriginalUri,
    http::{Method, StatusCode},
    response::IntoResponse,
};

pub async fn not_found(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    envelope::message(
        StatusCode::NOT_FOUND,
        format!("Path not found: {}", uri.path()),
    )
}

pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    envelope::message(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("{} not allowed for {}", method, uri.path()),
    )
}
