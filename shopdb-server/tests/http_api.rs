//! End-to-end HTTP scenarios against an in-memory store

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use shopdb_server::{build_router, AppState, Gateway, ServerConfig};

async fn app() -> Router {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("shopdb_server=debug")
        .with_test_writer()
        .try_init();

    let gateway = Gateway::in_memory().await.expect("in-memory gateway");
    build_router(AppState::new(gateway), &ServerConfig::default())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header("content-type", "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn customer(name: &str) -> Value {
    json!({
        "name": name,
        "surname": "Petrov",
        "email": format!("{name}@mail.ru"),
        "password": "secret1"
    })
}

fn item(name: &str, description: &str, price: i64) -> Value {
    json!({ "name": name, "description": description, "price": price })
}

fn with_id(mut input: Value, id: &Value) -> Value {
    input["id"] = id.clone();
    input
}

#[tokio::test]
async fn create_then_get_returns_input_plus_id() {
    let app = app().await;

    let (status, created) = send(&app, "POST", "/customers/", Some(customer("ivan"))).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].clone();
    assert!(id.is_i64());

    let (status, fetched) = send(&app, "GET", &format!("/customers/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, with_id(customer("ivan"), &id));
}

#[tokio::test]
async fn missing_ids_are_not_found() {
    let app = app().await;

    for uri in ["/customers/41", "/items/41", "/orders/41"] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["error"], "not_found");
    }
}

#[tokio::test]
async fn list_contains_every_created_record() {
    let app = app().await;

    let mut ids = Vec::new();
    for i in 0..4 {
        let (_, created) = send(&app, "POST", "/items/", Some(item(&format!("pen{i}"), "ink", i))).await;
        ids.push(created["id"].clone());
    }

    let (status, list) = send(&app, "GET", "/items/", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert!(list.len() >= 4);
    for id in &ids {
        assert!(list.iter().any(|row| &row["id"] == id));
    }
}

#[tokio::test]
async fn put_replaces_the_whole_record() {
    let app = app().await;

    let (_, created) = send(&app, "POST", "/items/", Some(item("pen", "blue ink", 3))).await;
    let id = created["id"].clone();

    let (status, updated) =
        send(&app, "PUT", &format!("/items/{id}"), Some(item("pencil", "graphite", 1))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, with_id(item("pencil", "graphite", 1), &id));

    let (_, fetched) = send(&app, "GET", &format!("/items/{id}"), None).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn put_on_missing_id_is_not_found() {
    let app = app().await;

    let (status, _) = send(&app, "PUT", "/customers/9", Some(customer("olga"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = send(&app, "GET", "/customers/", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let app = app().await;

    let (_, created) = send(&app, "POST", "/customers/", Some(customer("ivan"))).await;
    let id = created["id"].clone();

    let (status, _) = send(&app, "DELETE", &format!("/customers/?customer_id={id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", &format!("/customers/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Deleting again is still a success
    let (status, _) = send(&app, "DELETE", &format!("/customers/?customer_id={id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn order_lifecycle() {
    let app = app().await;

    let (_, c) = send(&app, "POST", "/customers/", Some(customer("ivan"))).await;
    let (_, i) = send(&app, "POST", "/items/", Some(item("pen", "blue", 3))).await;

    let order = json!({
        "customer_id": c["id"],
        "item_id": i["id"],
        "date": "2024-05-17T09:15:30",
        "status": false
    });
    let (status, created) = send(&app, "POST", "/orders/", Some(order.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].clone();
    assert_eq!(created, with_id(order.clone(), &id));

    let shipped = json!({
        "customer_id": c["id"],
        "item_id": i["id"],
        "date": "2024-05-18T10:00:00+03:00",
        "status": true
    });
    let (status, updated) = send(&app, "PUT", &format!("/orders/{id}"), Some(shipped)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], true);
    assert_eq!(updated["date"], "2024-05-18T07:00:00");

    let (status, _) = send(&app, "DELETE", &format!("/orders/?order_id={id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "GET", &format!("/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn order_with_unknown_references_is_rejected() {
    let app = app().await;

    let (_, c) = send(&app, "POST", "/customers/", Some(customer("ivan"))).await;
    let (_, i) = send(&app, "POST", "/items/", Some(item("pen", "blue", 3))).await;

    for (customer_id, item_id) in [(json!(999), i["id"].clone()), (c["id"].clone(), json!(999))] {
        let order = json!({
            "customer_id": customer_id,
            "item_id": item_id,
            "date": "2024-05-17T09:15:30",
            "status": true
        });
        let (status, body) = send(&app, "POST", "/orders/", Some(order)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "referential_integrity");
    }

    let (_, list) = send(&app, "GET", "/orders/", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn referenced_customer_delete_is_rejected() {
    let app = app().await;

    let (_, c) = send(&app, "POST", "/customers/", Some(customer("ivan"))).await;
    let (_, i) = send(&app, "POST", "/items/", Some(item("pen", "blue", 3))).await;
    let order = json!({
        "customer_id": c["id"],
        "item_id": i["id"],
        "date": "2024-05-17",
        "status": true
    });
    send(&app, "POST", "/orders/", Some(order)).await;

    let (status, _) = send(&app, "DELETE", &format!("/customers/?customer_id={}", c["id"]), None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, "GET", &format!("/customers/{}", c["id"]), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn seed_customers_then_list() {
    let app = app().await;

    let (status, body) = send(&app, "GET", "/create_table/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "msg": "database_ready" }));

    let (_, list) = send(&app, "GET", "/customers/", None).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 3);
    for (i, row) in list.iter().enumerate() {
        assert_eq!(row["name"], format!("customer{i}"));
        assert_eq!(row["email"], format!("customer{i}@mail.ru"));
    }
}

#[tokio::test]
async fn seed_items_then_list() {
    let app = app().await;

    let (status, _) = send(&app, "GET", "/create_items/5", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = send(&app, "GET", "/items/", None).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 5);
    for row in list {
        let price = row["price"].as_i64().unwrap();
        assert!((1..=10).contains(&price));
    }
}

#[tokio::test]
async fn long_description_fails_before_any_write() {
    let app = app().await;

    let (status, body) = send(&app, "POST", "/items/", Some(item("pen", &"d".repeat(101), 3))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["field"], "description");

    let (_, list) = send(&app, "GET", "/items/", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn customer_constraints_are_enforced() {
    let app = app().await;

    let cases = [
        (json!({"name": "ivan", "surname": "p", "email": "not-an-email", "password": "secret1"}), "email"),
        (json!({"name": "ivan", "surname": "p", "email": "i@mail.ru", "password": "123"}), "password"),
        (json!({"name": "n".repeat(26), "surname": "p", "email": "i@mail.ru", "password": "secret1"}), "name"),
    ];

    for (body, field) in cases {
        let (status, err) = send(&app, "POST", "/customers/", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{field}");
        assert_eq!(err["field"], field);
    }

    let (_, list) = send(&app, "GET", "/customers/", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn wrong_types_and_missing_fields_are_validation_errors() {
    let app = app().await;

    let (status, body) = send(&app, "POST", "/items/", Some(json!({"name": "pen", "description": "x", "price": "cheap"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    let (status, _) = send(&app, "POST", "/orders/", Some(json!({"customer_id": 1}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
