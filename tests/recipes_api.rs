//! Integration tests for the recipe endpoints.
//!
//! Drives the full router (handlers, store, middleware) in-process with
//! `tower::ServiceExt::oneshot` against a seeded store.

use std::{sync::Arc, time::Duration};

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use recipe_rest_api::{create_router, RecipeStore};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    create_router(Arc::new(RecipeStore::seeded()), Duration::from_secs(30))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .expect("failed to build request");

    let response = app.clone().oneshot(request).await.expect("failed to make request");
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body should be valid JSON")
    };

    (status, json)
}

async fn first_recipe_id(app: &Router) -> String {
    let (_, body) = send(app, Method::GET, "/recipes", None).await;
    body[0]["id"].as_str().expect("id should be a string").to_string()
}

/// Every listed recipe has an id, a name and an ingredients array.
#[tokio::test]
async fn list_returns_all_recipes() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/recipes", None).await;

    assert_eq!(status, StatusCode::OK);
    let recipes = body.as_array().expect("body should be an array");
    assert!(!recipes.is_empty());

    for recipe in recipes {
        assert!(recipe["id"].is_string());
        assert!(recipe["name"].is_string());
        assert!(recipe["ingredients"].is_array());
    }
}

/// The created recipe echoes the request plus the assigned id.
#[tokio::test]
async fn create_returns_recipe_with_assigned_id() {
    let app = test_app();
    let new_recipe = json!({
        "name": "omelette",
        "ingredients": ["eggs", "cheese", "mushrooms", "bacon"]
    });

    let (status, body) = send(&app, Method::POST, "/recipes", Some(new_recipe.clone())).await;

    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_str().expect("id should be assigned");

    let mut expected = new_recipe;
    expected["id"] = json!(id);
    assert_eq!(body, expected);

    // The new recipe shows up in the list
    let (_, list) = send(&app, Method::GET, "/recipes", None).await;
    assert!(list.as_array().unwrap().contains(&body));
}

#[tokio::test]
async fn create_without_name_is_rejected() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/recipes",
        Some(json!({ "ingredients": ["eggs"] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "Missing `name` in request body");
}

#[tokio::test]
async fn create_with_malformed_json_is_rejected() {
    let app = test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/recipes")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = app.oneshot(request).await.expect("failed to make request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Updating the first listed recipe keeps its id and swaps its contents.
#[tokio::test]
async fn update_replaces_recipe_contents() {
    let app = test_app();
    let id = first_recipe_id(&app).await;
    let update = json!({ "id": id, "name": "foo", "ingredients": ["bizz", "bang"] });

    let (status, body) = send(&app, Method::PUT, &format!("/recipes/{}", id), Some(update)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!(id));
    assert_eq!(body["name"], "foo");
    let ingredients = body["ingredients"].as_array().unwrap();
    assert!(ingredients.contains(&json!("bizz")));
    assert!(ingredients.contains(&json!("bang")));

    let (_, fetched) = send(&app, Method::GET, &format!("/recipes/{}", id), None).await;
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn update_unknown_recipe_is_not_found() {
    let app = test_app();
    let id = "123e4567-e89b-12d3-a456-426614174000";

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/recipes/{}", id),
        Some(json!({ "name": "foo", "ingredients": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn update_with_mismatched_body_id_is_rejected() {
    let app = test_app();
    let id = first_recipe_id(&app).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/recipes/{}", id),
        Some(json!({
            "id": "123e4567-e89b-12d3-a456-426614174000",
            "name": "foo",
            "ingredients": ["bizz"]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    // Nothing changed
    let (_, fetched) = send(&app, Method::GET, &format!("/recipes/{}", id), None).await;
    assert_eq!(fetched["name"], "boiled white rice");
}

/// Deleting the first listed recipe removes it from the list.
#[tokio::test]
async fn delete_removes_recipe() {
    let app = test_app();
    let id = first_recipe_id(&app).await;

    let (status, body) = send(&app, Method::DELETE, &format!("/recipes/{}", id), None).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, list) = send(&app, Method::GET, "/recipes", None).await;
    assert!(list.as_array().unwrap().iter().all(|r| r["id"] != json!(id)));

    let (status, _) = send(&app, Method::GET, &format!("/recipes/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_recipe_succeeds() {
    let app = test_app();

    let (status, _) = send(
        &app,
        Method::DELETE,
        "/recipes/123e4567-e89b-12d3-a456-426614174000",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, list) = send(&app, Method::GET, "/recipes", None).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn invalid_recipe_id_is_rejected() {
    let app = test_app();

    let (status, body) = send(&app, Method::DELETE, "/recipes/not-a-uuid", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Invalid recipe ID format");
}

#[tokio::test]
async fn health_check_returns_ok() {
    let app = test_app();
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.expect("failed to make request");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = test_app();
    let request = Request::builder()
        .uri("/recipes")
        .header("origin", "http://example.com")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.expect("failed to make request");

    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}
