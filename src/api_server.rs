// Axum server for the landing page
//
// Every rendition is produced once in AppState::new and served read-only.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::config::RenderOptions;
use crate::content::{lint, SiteContent};
use crate::page::view_models::{CategoryCard, PracticeCard};
use crate::page::RenderedPage;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub page: Arc<RenderedPage>,
}

impl AppState {
    pub fn new(site: &SiteContent, options: &RenderOptions) -> anyhow::Result<Self> {
        tracing::info!("Checking page content...");
        lint::check(site)?;

        tracing::info!("Rendering page...");
        let page = RenderedPage::render(site, options)?;
        tracing::info!(
            "Rendered {} practice types, {} categories",
            page.view.practice_types.len(),
            page.view.categories.cards.len()
        );

        Ok(Self {
            page: Arc::new(page),
        })
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Page renditions
        .route("/", get(home_page))
        .route("/page.md", get(page_markdown))
        .route("/reader", get(reader_page))
        // JSON API
        .route("/api/page", get(get_page))
        .route("/api/practices", get(list_practices))
        .route("/api/practices/:id", get(get_practice))
        .route("/api/categories", get(list_categories))
        .route("/api/categories/:id", get(get_category))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn home_page(State(state): State<AppState>) -> Html<String> {
    Html(state.page.html.clone())
}

async fn reader_page(State(state): State<AppState>) -> Html<String> {
    Html(state.page.reader_html.clone())
}

async fn page_markdown(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        state.page.markdown.clone(),
    )
}

async fn get_page(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.page.view.clone())
}

async fn list_practices(State(state): State<AppState>) -> Json<Vec<PracticeCard>> {
    Json(state.page.view.practice_types.clone())
}

async fn get_practice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PracticeCard>, AppError> {
    state
        .page
        .view
        .practice_types
        .iter()
        .find(|card| card.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Practice type not found: {}", id)))
}

async fn list_categories(State(state): State<AppState>) -> Json<Vec<CategoryCard>> {
    Json(state.page.view.categories.cards.clone())
}

async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CategoryCard>, AppError> {
    state
        .page
        .view
        .categories
        .cards
        .iter()
        .find(|card| card.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Category not found: {}", id)))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
