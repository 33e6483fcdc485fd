pub mod request {
    use crate::utils::validation::Data;

    pub struct Payload {
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
        DishCreated(Dish),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishCreated(dish) => envelope::data(StatusCode::CREATED, dish),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationError),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(err) => err.into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
