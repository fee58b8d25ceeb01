use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use receipt_points::api::{self, PointsResponse, ProcessResponse};
use receipt_points::{MemoryStore, ReceiptProcessor};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let store = Arc::new(MemoryStore::new());
    api::router(Arc::new(ReceiptProcessor::new(store)))
}

fn post_json(body: String) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/receipts/process")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn abc_receipt(time: &str, total: &str) -> Value {
    json!({
        "retailer": "ABC",
        "purchaseDate": "2023-09-19",
        "purchaseTime": time,
        "items": [{"shortDescription": "abccd", "price": "1.20"}],
        "total": total
    })
}

async fn submit(app: &Router, receipt: Value) -> String {
    let response = app.clone().oneshot(post_json(receipt.to_string())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: ProcessResponse = serde_json::from_str(&body_text(response).await).unwrap();
    body.id
}

async fn points(app: &Router, id: &str) -> u64 {
    let response = app
        .clone()
        .oneshot(get(&format!("/receipts/{id}/points")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: PointsResponse = serde_json::from_str(&body_text(response).await).unwrap();
    body.points
}

#[tokio::test]
async fn test_process_then_points() {
    let app = app();

    let id = submit(&app, abc_receipt("15:00", "10.00")).await;
    assert_eq!(points(&app, &id).await, 94);

    let id = submit(&app, abc_receipt("13:59", "10.25")).await;
    assert_eq!(points(&app, &id).await, 34);
}

#[tokio::test]
async fn test_target_receipt() {
    let app = app();
    let receipt = json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
            {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
            {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
            {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
        ],
        "total": "35.35"
    });
    let id = submit(&app, receipt).await;
    assert_eq!(points(&app, &id).await, 28);
}

#[tokio::test]
async fn test_rejections_are_plain_text_bad_requests() {
    let app = app();
    let mut negative = abc_receipt("15:00", "10.00");
    negative["items"][0]["price"] = json!("-2.50");
    let mut zero = abc_receipt("15:00", "10.00");
    zero["total"] = json!("0.00");
    let mut no_items = abc_receipt("15:00", "10.00");
    no_items["items"] = json!([]);
    let mut bad_time = abc_receipt("15:00", "10.00");
    bad_time["purchaseTime"] = json!("25:00");

    let cases = [
        ("{".to_string(), "Invalid request payload"),
        (negative.to_string(), "Invalid Price Format"),
        (zero.to_string(), "Zero Price error"),
        (no_items.to_string(), "Missing or invalid fields"),
        (bad_time.to_string(), "Invalid time format"),
    ];

    for (body, message) in cases {
        let response = app.clone().oneshot(post_json(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, message);
    }
}

#[tokio::test]
async fn test_future_date_rejected() {
    let app = app();
    let mut receipt = abc_receipt("15:00", "10.00");
    receipt["purchaseDate"] = json!("2999-01-01");

    let response = app.oneshot(post_json(receipt.to_string())).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Date cannot be in the future");
}

#[tokio::test]
async fn test_requires_json_content_type() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/receipts/process")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(abc_receipt("15:00", "10.00").to_string()))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body_text(response).await, "Content Type not allowed");
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let response = app().oneshot(get("/receipts/nope/points")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "No receipt found for that id");

    let response = app().oneshot(get("/receipts/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_receipt_details() {
    let app = app();
    let id = submit(&app, abc_receipt("15:00", "10.00")).await;

    let response = app.oneshot(get(&format!("/receipts/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["id"], json!(id));
    assert_eq!(body["points"], json!(94));
    assert_eq!(body["receipt"]["purchaseDate"], json!("2023-09-19"));
    assert_eq!(body["breakdown"]["afternoon"], json!(10));
}

#[tokio::test]
async fn test_wrong_method_not_allowed() {
    let response = app().oneshot(get("/receipts/process")).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/receipts/abc/points")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_null_fields_reported_as_missing() {
    let mut receipt = abc_receipt("15:00", "10.00");
    receipt["items"] = Value::Null;

    let response = app().oneshot(post_json(receipt.to_string())).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Missing or invalid fields");
}

#[tokio::test]
async fn test_health() {
    let response = app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");
}
