use super::helpers::{expect_status, json_request, read_json, send, spawn_app};
use axum::{body::Body, http::{Request, StatusCode}};
use serde_json::{Value, json};

fn case_payload(description: &str) -> Value {
    json!({
        "description": description,
        "latitude": 40.4406,
        "longitude": -79.9959,
    })
}

async fn create_case(app: &axum::Router, description: &str) -> Value {
    let res = send(app, json_request("POST", "/api/v1/animals", case_payload(description))).await;
    read_json(expect_status(res, StatusCode::CREATED).await).await
}

#[tokio::test]
async fn create_assigns_sequential_ids_and_open_status() {
    let app = spawn_app();

    let first = create_case(&app.app, "injured cat").await;
    let second = create_case(&app.app, "stray dog").await;

    assert_eq!(first["id"], json!(1));
    assert_eq!(second["id"], json!(2));
    assert_eq!(first["status"], json!("open"));
    assert_eq!(first["image_url"], Value::Null);
}

#[tokio::test]
async fn listing_preserves_creation_order_across_deletes() {
    let app = spawn_app();

    create_case(&app.app, "first").await;
    let second = create_case(&app.app, "second").await;
    create_case(&app.app, "third").await;

    let delete = Request::builder()
        .method("DELETE")
        .uri(format!("/api/v1/animals/{}", second["id"]))
        .body(Body::empty())
        .unwrap();
    expect_status(send(&app.app, delete).await, StatusCode::NO_CONTENT).await;

    let res = send(
        &app.app,
        Request::builder()
            .method("GET")
            .uri("/api/v1/animals")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    let listed: Vec<Value> = read_json(expect_status(res, StatusCode::OK).await).await;

    let descriptions: Vec<_> = listed.iter().map(|c| c["description"].as_str().unwrap()).collect();
    assert_eq!(descriptions, ["first", "third"]);
}

#[tokio::test]
async fn update_of_status_only_leaves_other_fields_untouched() {
    let app = spawn_app();

    let res = send(
        &app.app,
        json_request(
            "POST",
            "/api/v1/animals",
            json!({
                "description": "dog limping near bridge",
                "latitude": 40.44,
                "longitude": -79.99,
                "image_url": "/uploads/dog.jpg",
            }),
        ),
    )
    .await;
    let created: Value = read_json(expect_status(res, StatusCode::CREATED).await).await;

    let res = send(
        &app.app,
        json_request(
            "PUT",
            &format!("/api/v1/animals/{}", created["id"]),
            json!({ "status": "in_progress" }),
        ),
    )
    .await;
    let updated: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(updated["status"], json!("in_progress"));
    assert_eq!(updated["description"], json!("dog limping near bridge"));
    assert_eq!(updated["latitude"], json!(40.44));
    assert_eq!(updated["longitude"], json!(-79.99));
    assert_eq!(updated["image_url"], json!("/uploads/dog.jpg"));
}

#[tokio::test]
async fn update_on_unknown_id_returns_not_found() {
    let app = spawn_app();

    let res = send(
        &app.app,
        json_request("PUT", "/api/v1/animals/99", json!({ "status": "resolved" })),
    )
    .await;
    expect_status(res, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn unparsable_id_behaves_like_unknown_id() {
    let app = spawn_app();
    create_case(&app.app, "only case").await;

    let res = send(
        &app.app,
        json_request("PUT", "/api/v1/animals/not-a-number", json!({ "status": "resolved" })),
    )
    .await;
    expect_status(res, StatusCode::NOT_FOUND).await;

    let delete = Request::builder()
        .method("DELETE")
        .uri("/api/v1/animals/-1")
        .body(Body::empty())
        .unwrap();
    expect_status(send(&app.app, delete).await, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn delete_on_unknown_id_returns_not_found() {
    let app = spawn_app();

    let delete = Request::builder()
        .method("DELETE")
        .uri("/api/v1/animals/1")
        .body(Body::empty())
        .unwrap();
    expect_status(send(&app.app, delete).await, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn create_rejects_empty_description_and_out_of_range_coordinates() {
    let app = spawn_app();

    let res = send(
        &app.app,
        json_request(
            "POST",
            "/api/v1/animals",
            json!({ "description": "", "latitude": 0.0, "longitude": 0.0 }),
        ),
    )
    .await;
    expect_status(res, StatusCode::BAD_REQUEST).await;

    let res = send(
        &app.app,
        json_request(
            "POST",
            "/api/v1/animals",
            json!({ "description": "far away", "latitude": 91.0, "longitude": 0.0 }),
        ),
    )
    .await;
    expect_status(res, StatusCode::BAD_REQUEST).await;

    let res = send(
        &app.app,
        Request::builder()
            .method("GET")
            .uri("/api/v1/animals")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    let listed: Vec<Value> = read_json(expect_status(res, StatusCode::OK).await).await;
    assert!(listed.is_empty(), "rejected payloads must not create cases");
}
