use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use resource_server::api::{create_router, AppState};
use resource_server::config::StoreConfig;
use resource_server::lifecycle::ResourceSystem;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    let system = ResourceSystem::new(&StoreConfig::default());
    create_router(AppState::from_system(&system), true)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn assert_error_body(body: &Value, detail: &str) {
    assert_eq!(body["detail"], detail);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_user_crud_over_http() {
    let app = test_app();

    let (status, created) = send(
        &app,
        "POST",
        "/users",
        Some(json!({"name": "John Doe", "email": "john@example.com", "age": 30})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["is_active"], true);
    assert!(created["created_at"].is_string());

    let (status, body) = send(
        &app,
        "POST",
        "/users",
        Some(json!({"name": "Johnny", "email": "john@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body, "Email already registered");

    let (status, fetched) = send(&app, "GET", "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send(&app, "PUT", "/users/1", Some(json!({"age": 31}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["age"], 31);
    assert_eq!(updated["name"], "John Doe");
    assert_eq!(updated["created_at"], created["created_at"]);

    let (status, body) = send(&app, "DELETE", "/users/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, "GET", "/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body(&body, "User not found");

    let (status, _) = send(&app, "DELETE", "/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "PUT", "/users/1", Some(json!({"name": "Ghost"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_input_is_bad_request() {
    let app = test_app();

    let cases = [
        json!({"name": "", "email": "a@example.com"}),
        json!({"name": "x".repeat(101), "email": "a@example.com"}),
        json!({"name": "Old", "email": "a@example.com", "age": 151}),
        json!({"email": "a@example.com"}),
        json!({"name": "Neg", "email": "a@example.com", "age": -1}),
    ];
    for case in cases {
        let (status, body) = send(&app, "POST", "/users", Some(case.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {case}");
        assert!(body["detail"].is_string());
    }

    let request = Request::builder()
        .method("POST")
        .uri("/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "GET", "/users/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    for method in ["GET", "DELETE"] {
        let (status, body) = send(&app, method, "/users/0", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method} /users/0");
        assert_error_body(&body, "id must be greater than 0");
    }
    let (status, _) = send(&app, "PUT", "/users/0", Some(json!({"name": "Zero"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Nothing above reached the store.
    let (_, analytics) = send(&app, "GET", "/analytics", None).await;
    assert_eq!(analytics["total_users"], 0);
}

#[tokio::test]
async fn test_list_pagination_and_limit_bounds() {
    let app = test_app();
    for i in 1..=5 {
        let (status, _) = send(
            &app,
            "POST",
            "/users",
            Some(json!({"name": format!("user{i}"), "email": format!("user{i}@example.com")})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, all) = send(&app, "GET", "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, [1, 2, 3, 4, 5]);

    let (_, page) = send(&app, "GET", "/users?skip=1&limit=2", None).await;
    assert_eq!(page[0]["id"], 2);
    assert_eq!(page.as_array().unwrap().len(), 2);

    let (_, empty) = send(&app, "GET", "/users?skip=10", None).await;
    assert_eq!(empty, json!([]));

    for uri in ["/users?limit=0", "/users?limit=1001", "/users?skip=-1", "/users?limit=ten"] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(body["detail"].is_string());
    }
}

#[tokio::test]
async fn test_root_health_and_analytics() {
    let app = test_app();

    let (status, root) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(root["message"].is_string());
    assert_eq!(root["health"], "/health");

    let (status, health) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));
    assert!(health["uptime"].as_f64().unwrap() >= 0.0);

    for (email, active) in [("a@example.com", true), ("b@example.com", false), ("c@example.com", true)] {
        send(
            &app,
            "POST",
            "/users",
            Some(json!({"name": "n", "email": email, "is_active": active})),
        )
        .await;
    }

    let (status, analytics) = send(&app, "GET", "/analytics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(analytics["total_users"], 3);
    assert_eq!(analytics["active_users"], 2);
    assert_eq!(analytics["inactive_users"], 1);
}

#[tokio::test]
async fn test_inventory_endpoints() {
    let app = test_app();
    let item = json!({
        "id": "d290f1ee-6c54-4b01-90e6-d701748f0851",
        "name": "Widget Adapter",
        "releaseDate": "2016-08-29T09:12:33.001Z",
        "manufacturer": {"name": "ACME Corporation", "homePage": "https://www.acme-corp.com"}
    });

    let (status, body) = send(&app, "POST", "/inventory", Some(item.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"message": "item created"}));

    let (status, body) = send(&app, "POST", "/inventory", Some(item)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_error_body(&body, "An existing item already exists");

    let (status, _) = send(
        &app,
        "POST",
        "/inventory",
        Some(json!({"name": "No date", "manufacturer": {"name": "ACME"}})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, found) = send(&app, "GET", "/inventory?searchString=widget", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found[0]["id"], "d290f1ee-6c54-4b01-90e6-d701748f0851");
    assert_eq!(found[0]["manufacturer"]["homePage"], "https://www.acme-corp.com");

    let (_, none) = send(&app, "GET", "/inventory?searchString=sprocket", None).await;
    assert_eq!(none, json!([]));

    let (_, all) = send(&app, "GET", "/inventory", None).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_null_age_clears_it() {
    let app = test_app();
    send(
        &app,
        "POST",
        "/users",
        Some(json!({"name": "Ada", "email": "ada@example.com", "age": 30})),
    )
    .await;

    let (status, unchanged) = send(&app, "PUT", "/users/1", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unchanged["age"], 30);

    let (status, cleared) = send(&app, "PUT", "/users/1", Some(json!({"age": null}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cleared["age"], Value::Null);
    assert_eq!(cleared["name"], "Ada");

    let (_, fetched) = send(&app, "GET", "/users/1", None).await;
    assert_eq!(fetched["age"], Value::Null);
}
