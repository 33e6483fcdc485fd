pub mod response {
    use crate::{modules::order::repository::Order, utils::envelope};
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        Orders(Vec<Order>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Orders(orders) => envelope::data(StatusCode::OK, orders),
            }
        }
    }
}
