pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::{modules::order::repository::Order, utils::envelope};
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        Order(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Order(order) => envelope::data(StatusCode::OK, order),
            }
        }
    }

    pub enum Error {
        OrderNotFound(String),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderNotFound(id) => envelope::message(
                    StatusCode::NOT_FOUND,
                    format!("Order does not exist: {id}"),
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
