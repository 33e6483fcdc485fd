pub mod response {
    use crate::{modules::dish::repository::Dish, utils::envelope};
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        Dishes(Vec<Dish>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Dishes(dishes) => envelope::data(StatusCode::OK, dishes),
            }
        }
    }
}
