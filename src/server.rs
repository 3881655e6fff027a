//! HTTP transport over the catalog: JSON in, JSON out, one error boundary.

use std::{io, sync::Arc};

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{article::BlogPost, equipment::Equipment, exercise::Exercise, query::Catalog};

/// Shared handler state; the catalog is read-only after seeding, so plain
/// `Arc` sharing is all the coordination the server needs.
#[derive(Debug, Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

/// Everything a request can fail with, mapped to a status code and a
/// `{"message": ...}` body in one place instead of per route.
#[derive(Debug)]
pub enum ApiError {
    NotFound(&'static str),
    Validation(&'static str),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message.to_string()),
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message.to_string()),
            Self::Internal(message) => {
                tracing::error!("internal error: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}

#[must_use]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/blog-posts", get(list_blog_posts))
        .route("/api/blog-posts/:slug", get(get_blog_post))
        .route("/api/exercises", get(list_exercises))
        .route("/api/exercises/:slug", get(get_exercise))
        .route("/api/equipment", get(list_equipment))
        .route("/api/newsletter", post(subscribe))
        .fallback(route_not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds and serves until shutdown. Seeding happened before this is called,
/// so no request can observe a partially filled catalog.
pub async fn serve(catalog: Catalog, host: &str, port: u16, allow_fallback: bool) -> io::Result<()> {
    let port = select_port(host, port, allow_fallback)?;
    let router = create_router(AppState::new(catalog));
    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    info!("Serving at http://{host}:{port}");
    axum::serve(listener, router).await
}

async fn health() -> Result<Json<Value>, ApiError> {
    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|err| ApiError::Internal(err.to_string()))?;
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": timestamp,
    })))
}

async fn list_blog_posts(State(state): State<AppState>) -> Json<Vec<BlogPost>> {
    Json(state.catalog.blog_posts().to_vec())
}

async fn get_blog_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, ApiError> {
    state
        .catalog
        .blog_post_by_slug(&slug)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound("Blog post not found"))
}

#[derive(Debug, Deserialize)]
struct ExerciseQuery {
    category: Option<String>,
}

async fn list_exercises(
    State(state): State<AppState>,
    Query(query): Query<ExerciseQuery>,
) -> Json<Vec<Exercise>> {
    // An empty category parameter counts as absent, like the original API.
    let exercises = match query.category.as_deref().filter(|c| !c.is_empty()) {
        Some(category) => state
            .catalog
            .exercises_by_category(category)
            .into_iter()
            .cloned()
            .collect(),
        None => state.catalog.exercises().to_vec(),
    };
    Json(exercises)
}

async fn get_exercise(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Exercise>, ApiError> {
    state
        .catalog
        .exercise_by_slug(&slug)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound("Exercise not found"))
}

async fn list_equipment(State(state): State<AppState>) -> Json<Vec<Equipment>> {
    Json(state.catalog.equipment().to_vec())
}

#[derive(Debug, Deserialize)]
struct NewsletterSignup {
    #[serde(default)]
    email: String,
}

/// Subscription is log-only; there is deliberately no mail integration
/// behind this endpoint.
async fn subscribe(Json(signup): Json<NewsletterSignup>) -> Result<Json<Value>, ApiError> {
    if signup.email.is_empty() || !signup.email.contains('@') {
        return Err(ApiError::Validation("Valid email address is required"));
    }
    info!("Newsletter signup: {}", signup.email);
    Ok(Json(json!({ "message": "Successfully subscribed to newsletter" })))
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found")
}

fn select_port(host: &str, start: u16, allow_fallback: bool) -> io::Result<u16> {
    if !allow_fallback {
        return Ok(start);
    }

    for port in start..(start + 50) {
        if std::net::TcpListener::bind((host, port)).is_ok() {
            info!("Selected available port {}", port);
            return Ok(port);
        }
    }

    Err(io::Error::new(
        io::ErrorKind::AddrInUse,
        format!("no available port found starting at {start}"),
    ))
}
