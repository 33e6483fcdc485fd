pub mod request {
    use crate::utils::validation::Data;

    pub struct Payload {
        pub id: String,
        pub data: Data,
    }
}

pub mod response {
    use crate::{
        modules::dish::repository::Dish,
        utils::{envelope, validation::ValidationError},
    };
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        DishUpdated(Dish),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishUpdated(dish) => envelope::data(StatusCode::OK, dish),
            }
        }
    }

    pub enum Error {
        DishNotFound(String),
        FailedToValidate(ValidationError),
        IdMismatch { body_id: String, route_id: String },
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishNotFound(id) => envelope::message(
                    StatusCode::NOT_FOUND,
                    format!("Dish does not exist: {id}"),
                ),
                Self::FailedToValidate(err) => err.into_response(),
                Self::IdMismatch { body_id, route_id } => envelope::message(
                    StatusCode::BAD_REQUEST,
                    format!("Dish id does not match route id. Dish: {body_id}, Route: {route_id}"),
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
