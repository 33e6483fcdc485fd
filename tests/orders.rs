mod common;

use axum::http::StatusCode;
use common::{message, order, order_with_status, TestApp};
use serde_json::json;

const INVALID_STATUS: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";

#[tokio::test]
async fn should_create_pending_orders() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/orders", order()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["status"], json!("pending"));
    assert_eq!(body["data"]["deliverTo"], order()["deliverTo"]);
    assert_eq!(body["data"]["mobileNumber"], order()["mobileNumber"]);
    assert_eq!(body["data"]["dishes"], order()["dishes"]);
    assert!(body["data"]["id"].as_str().is_some());
}

#[tokio::test]
async fn should_ignore_a_status_supplied_on_create() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/orders", order_with_status("delivered")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["status"], json!("pending"));
}

#[tokio::test]
async fn should_list_orders() {
    let app = TestApp::new().await;
    let id = app.create_order().await;

    let (status, body) = app.get("/orders").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["id"], json!(id));
}

#[tokio::test]
async fn should_require_delivery_details() {
    let app = TestApp::new().await;

    for field in ["deliverTo", "mobileNumber"] {
        let mut payload = order();
        payload[field] = json!("");

        let (status, body) = app.post("/orders", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message(&body), format!("Must include a {field}"));
    }

    assert_eq!(app.order_count().await, 0);
}

#[tokio::test]
async fn should_require_at_least_one_dish() {
    let app = TestApp::new().await;

    for dishes in [json!([]), json!("pasta"), json!(null)] {
        let mut payload = order();
        payload["dishes"] = dishes;

        let (status, body) = app.post("/orders", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message(&body), "Order must include at least one dish");
    }

    assert_eq!(app.order_count().await, 0);
}

#[tokio::test]
async fn should_report_the_first_dish_with_a_bad_quantity() {
    let app = TestApp::new().await;

    let mut payload = order();
    payload["dishes"] = json!([
        { "dishId": "a", "quantity": 1 },
        { "dishId": "b", "quantity": 3 },
        { "dishId": "c", "quantity": 0 },
        { "dishId": "d", "quantity": -1 },
    ]);

    let (status, body) = app.post("/orders", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        message(&body),
        "Dish 2 must have a quantity that is an integer greater than 0"
    );
    assert_eq!(app.order_count().await, 0);
}

#[tokio::test]
async fn should_not_find_unknown_orders() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/orders/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), "Order does not exist: abc");
}

#[tokio::test]
async fn should_move_an_order_through_every_status() {
    let app = TestApp::new().await;
    let id = app.create_order().await;

    for next in ["preparing", "out-for-delivery", "delivered"] {
        let (status, body) = app
            .put(&format!("/orders/{id}"), order_with_status(next))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], json!(next));
        assert_eq!(body["data"]["id"], json!(id));
    }

    let (_, body) = app.get(&format!("/orders/{id}")).await;
    assert_eq!(body["data"]["status"], json!("delivered"));
}

#[tokio::test]
async fn should_overwrite_order_fields_on_update() {
    let app = TestApp::new().await;
    let id = app.create_order().await;

    let (status, body) = app
        .put(
            &format!("/orders/{id}"),
            json!({
                "id": id,
                "deliverTo": "Somewhere else",
                "mobileNumber": "(202) 456-1111",
                "status": "preparing",
                "dishes": [{ "dishId": "x", "quantity": 5 }],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["deliverTo"], json!("Somewhere else"));
    assert_eq!(body["data"]["dishes"], json!([{ "dishId": "x", "quantity": 5 }]));
    assert_eq!(app.order_count().await, 1);
}

#[tokio::test]
async fn should_reject_unknown_statuses() {
    let app = TestApp::new().await;
    let id = app.create_order().await;

    for payload in [order_with_status("invalid"), order_with_status(""), order()] {
        let (status, body) = app.put(&format!("/orders/{id}"), payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message(&body), INVALID_STATUS);
    }

    let (_, body) = app.get(&format!("/orders/{id}")).await;
    assert_eq!(body["data"]["status"], json!("pending"));
}

#[tokio::test]
async fn should_validate_fields_before_status() {
    let app = TestApp::new().await;
    let id = app.create_order().await;

    let mut payload = order_with_status("invalid");
    payload["dishes"] = json!([]);

    let (status, body) = app.put(&format!("/orders/{id}"), payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), "Order must include at least one dish");
}

#[tokio::test]
async fn should_not_change_a_delivered_order() {
    let app = TestApp::new().await;
    let id = app.create_order().await;

    let (status, _) = app
        .put(&format!("/orders/{id}"), order_with_status("delivered"))
        .await;
    assert_eq!(status, StatusCode::OK);

    let mut payload = order_with_status("pending");
    payload["deliverTo"] = json!("Changed address");

    let (status, body) = app.put(&format!("/orders/{id}"), payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), "A delivered order cannot be changed");

    let (_, body) = app.get(&format!("/orders/{id}")).await;
    assert_eq!(body["data"]["status"], json!("delivered"));
    assert_eq!(body["data"]["deliverTo"], order()["deliverTo"]);
}

#[tokio::test]
async fn should_reject_an_update_whose_id_does_not_match_the_route() {
    let app = TestApp::new().await;
    let id = app.create_order().await;

    let mut payload = order_with_status("preparing");
    payload["id"] = json!("other");

    let (status, body) = app.put(&format!("/orders/{id}"), payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        message(&body),
        format!("Order id does not match route id. Order: other, Route: {id}")
    );

    let (_, body) = app.get(&format!("/orders/{id}")).await;
    assert_eq!(body["data"]["status"], json!("pending"));
}

#[tokio::test]
async fn should_not_update_unknown_orders() {
    let app = TestApp::new().await;

    let (status, body) = app
        .put("/orders/missing", order_with_status("preparing"))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), "Order does not exist: missing");
}

#[tokio::test]
async fn should_delete_a_pending_order() {
    let app = TestApp::new().await;
    let id = app.create_order().await;
    let other = app.create_order().await;

    let (status, body) = app.delete(&format!("/orders/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = app.get(&format!("/orders/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = app.get("/orders").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["id"], json!(other));
}

#[tokio::test]
async fn should_only_delete_pending_orders() {
    let app = TestApp::new().await;

    for status in ["preparing", "out-for-delivery", "delivered"] {
        let id = app.create_order().await;
        app.put(&format!("/orders/{id}"), order_with_status(status))
            .await;

        let before = app.order_count().await;
        let (code, body) = app.delete(&format!("/orders/{id}")).await;
        assert_eq!(code, StatusCode::BAD_REQUEST);
        assert_eq!(
            message(&body),
            "An order cannot be deleted unless it is pending"
        );
        assert_eq!(app.order_count().await, before);

        let (code, _) = app.get(&format!("/orders/{id}")).await;
        assert_eq!(code, StatusCode::OK);
    }
}

#[tokio::test]
async fn should_not_delete_unknown_orders() {
    let app = TestApp::new().await;
    app.create_order().await;

    let (status, body) = app.delete("/orders/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), "Order does not exist: missing");
    assert_eq!(app.order_count().await, 1);
}

#[tokio::test]
async fn should_reject_a_numeric_body_id_that_does_not_match_the_route() {
    let app = TestApp::new().await;
    let id = app.create_order().await;

    let mut payload = order_with_status("preparing");
    payload["id"] = json!(12345);

    let (status, body) = app.put(&format!("/orders/{id}"), payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        message(&body),
        format!("Order id does not match route id. Order: 12345, Route: {id}")
    );

    let (_, body) = app.get(&format!("/orders/{id}")).await;
    assert_eq!(body["data"]["status"], json!("pending"));
}

#[tokio::test]
async fn should_accept_a_numeric_mobile_number() {
    let app = TestApp::new().await;

    let mut payload = order();
    payload["mobileNumber"] = json!(5551234);

    let (status, body) = app.post("/orders", payload).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["mobileNumber"], json!("5551234"));
}

#[tokio::test]
async fn should_reject_delivery_details_of_the_wrong_type() {
    let app = TestApp::new().await;

    let mut payload = order();
    payload["deliverTo"] = json!({ "street": "Negra Arroyo Lane" });

    let (status, body) = app.post("/orders", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), "Must have a deliverTo that is a string");
    assert_eq!(app.order_count().await, 0);
}
