pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::{modules::dish::repository::Dish, utils::envelope};
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        Dish(Dish),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Dish(dish) => envelope::data(StatusCode::OK, dish),
            }
        }
    }

    pub enum Error {
        DishNotFound(String),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishNotFound(id) => envelope::message(
                    StatusCode::NOT_FOUND,
                    format!("Dish does not exist: {id}"),
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
