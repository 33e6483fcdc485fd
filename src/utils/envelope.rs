use super::validation::Data;
use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// The `data` member of a `{ "data": { ... } }` request body.
///
/// A missing or non-object `data` member yields an empty object so the field
/// stages report which field is missing. Bodies that are not JSON objects are
/// rejected with 400.
pub struct Envelope(pub Data);

#[derive(Deserialize)]
struct Body {
    #[serde(default)]
    data: Value,
}

#[async_trait]
impl<S: Send + Sync> FromRequest<S> for Envelope {
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Body>::from_request(req, state).await {
            Ok(Json(Body {
                data: Value::Object(data),
            })) => Ok(Envelope(data)),
            Ok(_) => Ok(Envelope(Data::new())),
            Err(rejection) => {
                tracing::warn!("Failed to parse request body: {}", rejection.body_text());
                Err((
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "message": rejection.body_text() })),
                )
                    .into_response())
            }
        }
    }
}

/// Wraps a response payload as `{ "data": ... }`.
pub fn data<T: Serialize>(status: StatusCode, value: T) -> Response {
    (status, Json(json!({ "data": value }))).into_response()
}

/// Error body shared by every route: `{ "message": ... }`.
pub fn message(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "message": message.into() }))).into_response()
}
