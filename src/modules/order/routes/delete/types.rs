pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::utils::envelope;
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        OrderDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderDeleted => StatusCode::NO_CONTENT.into_response(),
            }
        }
    }

    pub enum Error {
        OrderNotFound(String),
        OrderNotPending,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderNotFound(id) => envelope::message(
                    StatusCode::NOT_FOUND,
                    format!("Order does not exist: {id}"),
                ),
                Self::OrderNotPending => envelope::message(
                    StatusCode::BAD_REQUEST,
                    "An order cannot be deleted unless it is pending",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
