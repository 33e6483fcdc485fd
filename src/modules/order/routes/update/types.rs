pub mod request {
    use crate::utils::validation::Data;

    pub struct Payload {
        pub id: String,
        pub data: Data,
    }
}

pub mod response {
    use crate::{
        modules::order::repository::Order,
        utils::{envelope, validation::ValidationError},
    };
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        OrderUpdated(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderUpdated(order) => envelope::data(StatusCode::OK, order),
            }
        }
    }

    pub enum Error {
        OrderNotFound(String),
        FailedToValidate(ValidationError),
        OrderDelivered,
        IdMismatch { body_id: String, route_id: String },
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderNotFound(id) => envelope::message(
                    StatusCode::NOT_FOUND,
                    format!("Order does not exist: {id}"),
                ),
                Self::FailedToValidate(err) => err.into_response(),
                Self::OrderDelivered => envelope::message(
                    StatusCode::BAD_REQUEST,
                    "A delivered order cannot be changed",
                ),
                Self::IdMismatch { body_id, route_id } => envelope::message(
                    StatusCode::BAD_REQUEST,
                    format!("Order id does not match route id. Order: {body_id}, Route: {route_id}"),
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
