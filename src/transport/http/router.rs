use crate::domain::ContactForm;
use crate::transport::http::handlers::{contacts, health};
use crate::transport::http::types::{ApiResponse, AppState};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        contacts::index_handler,
        contacts::submit_handler,
        health::healthcheck_handler
    ),
    components(schemas(ApiResponse, ContactForm))
)]
pub struct ApiDoc;

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(contacts::index_handler).post(contacts::submit_handler),
        )
        .route("/health", get(health::healthcheck_handler))
        .route("/api-docs/openapi.json", get(openapi_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
