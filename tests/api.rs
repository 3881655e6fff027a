//! End-to-end route tests against a freshly seeded router.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use liftlog::{AppState, create_router, seed};
use serde_json::Value;
use tower::ServiceExt; // for oneshot

fn test_app() -> Router {
    let catalog = seed::sample_catalog().expect("seed data is valid");
    create_router(AppState::new(catalog))
}

async fn json_response(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&body).expect("Failed to parse JSON")
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_json(app: Router, uri: &str, body: &str) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn health_reports_status_and_timestamp() {
    let response = get(test_app(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn lists_all_blog_posts() {
    let response = get(test_app(), "/api/blog-posts").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    let posts = body.as_array().expect("array body");
    assert_eq!(posts.len(), 3);

    let slugs: Vec<&str> = posts.iter().map(|p| p["slug"].as_str().unwrap()).collect();
    assert!(slugs.contains(&"mastering-deadlift-form-guide"));
    assert!(slugs.contains(&"perfect-squat-depth-form-variations"));
    assert!(slugs.contains(&"bench-press-mastery-build-chest-power"));
}

#[tokio::test]
async fn blog_post_detail_uses_original_wire_names() {
    let response = get(test_app(), "/api/blog-posts/mastering-deadlift-form-guide").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["title"], "Mastering the Deadlift: Complete Form Guide");
    assert_eq!(body["category"], "Strength");
    assert_eq!(body["publishDate"], "Mar 15, 2024");
    assert!(body["imageUrl"].as_str().unwrap().starts_with("https://"));
    assert!(body["id"].is_string());
    assert!(body["content"].as_str().unwrap().contains("## Proper Form"));
}

#[tokio::test]
async fn missing_blog_post_is_404_with_fixed_message() {
    let response = get(test_app(), "/api/blog-posts/no-such-article").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_response(response).await;
    assert_eq!(body["message"], "Blog post not found");
}

#[tokio::test]
async fn exercise_listing_matches_all_sentinel() {
    // Same app for both requests; ids are generated per seeding run.
    let app = test_app();
    let unfiltered = json_response(get(app.clone(), "/api/exercises").await).await;
    let all = json_response(get(app, "/api/exercises?category=all").await).await;
    assert_eq!(unfiltered.as_array().unwrap().len(), 8);
    assert_eq!(unfiltered, all);
}

#[tokio::test]
async fn exercise_category_filter_is_exact() {
    let response = get(test_app(), "/api/exercises?category=upper").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    let exercises = body.as_array().unwrap();
    assert!(!exercises.is_empty());
    assert!(exercises.iter().all(|e| e["category"] == "upper"));
}

#[tokio::test]
async fn unknown_exercise_category_yields_empty_list() {
    let response = get(test_app(), "/api/exercises?category=cardio").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn exercise_detail_and_miss() {
    let response = get(test_app(), "/api/exercises/pull-ups").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_response(response).await;
    assert_eq!(body["name"], "Pull-ups");
    assert_eq!(body["difficulty"], "Intermediate");
    assert_eq!(body["targetMuscles"], "Lats, Biceps, Upper Back");
    assert_eq!(body["tips"].as_array().unwrap().len(), 4);

    let response = get(test_app(), "/api/exercises/no-such-exercise").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_response(response).await;
    assert_eq!(body["message"], "Exercise not found");
}

#[tokio::test]
async fn equipment_listing_has_price_ranges() {
    let response = get(test_app(), "/api/equipment").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert!(items.iter().all(|i| i["priceRange"].is_string()));
    assert!(items.iter().all(|i| i.get("slug").is_none()));
}

#[tokio::test]
async fn newsletter_rejects_invalid_email() {
    let response = post_json(test_app(), "/api/newsletter", r#"{"email":"not-an-email"}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_response(response).await;
    assert_eq!(body["message"], "Valid email address is required");

    let response = post_json(test_app(), "/api/newsletter", r#"{}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn newsletter_accepts_valid_email() {
    let response = post_json(
        test_app(),
        "/api/newsletter",
        r#"{"email":"user@example.com"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["message"], "Successfully subscribed to newsletter");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let response = get(test_app(), "/api/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_response(response).await;
    assert_eq!(body["message"], "Route not found");
}
