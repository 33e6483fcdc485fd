pub mod request {
    use crate::utils::validation::Data;

    pub struct Payload {
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
        OrderCreated(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderCreated(order) => envelope::data(StatusCode::CREATED, order),
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
