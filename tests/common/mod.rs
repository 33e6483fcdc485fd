#![allow(dead_code)]

use axum::{
    body::{self, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use restaurant_orders::{
    app::App,
    types::{AppConfig, AppEnvironment, Config, Context, StoreConfig, ToContext},
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestApp {
    pub ctx: Arc<Context>,
    router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = Config {
            app: AppConfig {
                host: "127.0.0.1".to_string(),
                environment: AppEnvironment::Development,
                port: 0,
            },
            store: StoreConfig::default(),
        };
        let ctx = Arc::new(config.to_context().await.unwrap());
        let router = App::new(ctx.clone()).router();

        Self { ctx, router }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }

    pub async fn request(&self, method: Method, uri: &str, data: Option<Value>) -> (StatusCode, Value) {
        let body = match data {
            Some(data) => Body::from(json!({ "data": data }).to_string()),
            None => Body::empty(),
        };

        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(body)
                .unwrap(),
        )
        .await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, data: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(data)).await
    }

    pub async fn put(&self, uri: &str, data: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(data)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    pub async fn dish_count(&self) -> usize {
        self.ctx.store.dishes.lock().await.len()
    }

    pub async fn order_count(&self) -> usize {
        self.ctx.store.orders.lock().await.len()
    }

    /// Creates an order and returns its id.
    pub async fn create_order(&self) -> String {
        let (status, body) = self.post("/orders", order()).await;
        assert_eq!(status, StatusCode::CREATED);
        body["data"]["id"].as_str().unwrap().to_string()
    }

    /// Creates a dish and returns its id.
    pub async fn create_dish(&self) -> String {
        let (status, body) = self.post("/dishes", dish()).await;
        assert_eq!(status, StatusCode::CREATED);
        body["data"]["id"].as_str().unwrap().to_string()
    }
}

pub fn dish() -> Value {
    json!({
        "name": "Dolcelatte and chickpea spaghetti",
        "description": "Spaghetti topped with a blend of dolcelatte and fresh chickpeas",
        "price": 19,
        "image_url": "https://images.example.com/spaghetti.jpg",
    })
}

pub fn order() -> Value {
    json!({
        "deliverTo": "308 Negra Arroyo Lane, Albuquerque, NM",
        "mobileNumber": "(505) 143-3369",
        "dishes": [
            {
                "dishId": "d351db2b49b69679504652ea1cf38241",
                "name": "Dolcelatte and chickpea spaghetti",
                "price": 19,
                "quantity": 2,
            }
        ],
    })
}

pub fn order_with_status(status: &str) -> Value {
    let mut order = order();
    order["status"] = json!(status);
    order
}

pub fn message(body: &Value) -> &str {
    body["message"].as_str().unwrap_or_default()
}
