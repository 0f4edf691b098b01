use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod audit;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod slug;
pub mod store;

use crate::config::Settings;
use crate::error::{AppError, ErrorBody};
use crate::models::{
    CompanyDetail, CompanyJobsResponse, CompanyListItem, CompanyListResponse, HealthResponse,
    JobItem,
};
use crate::store::CompanyStore;

/// Shared by every request. Cheap to clone: the connection is a pool handle.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: CompanyStore,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, settings: Settings) -> Self {
        Self {
            store: CompanyStore::new(db, settings.pagination.clone()),
            settings: Arc::new(settings),
        }
    }
}

/// Liveness probe; does not touch the database
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            app_name: state.settings.app_name.clone(),
            version: state.settings.version.clone(),
        }),
    )
}

async fn route_not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}

/// Turns a handler panic into the generic 500 body.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = panic.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::InternalError(format!("handler panicked: {}", message)).into_response()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lead Generation API",
        description = "API for managing lead generation data and company profiles"
    ),
    paths(
        health_check,
        routes::companies::list_companies,
        routes::companies::get_company_by_slug,
        routes::companies::list_company_jobs
    ),
    components(schemas(
        HealthResponse,
        CompanyListItem,
        CompanyListResponse,
        CompanyDetail,
        JobItem,
        CompanyJobsResponse,
        ErrorBody
    )),
    tags(
        (name = "Companies", description = "Company profiles and their job posts")
    )
)]
struct ApiDoc;

/// Create the application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let api_doc = ApiDoc::openapi();

    let api_routes = Router::new()
        .route("/health", get(health_check))
        .nest("/companies", routes::companies::router());

    let docs_router = SwaggerUi::new("/docs").url("/api-doc/openapi.json", api_doc);

    Router::new()
        .merge(api_routes)
        .merge(docs_router)
        .fallback(route_not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            CorsLayer::new()
                .allow_origin(AnyOrigin)
                .allow_methods(AnyOrigin)
                .allow_headers(AnyOrigin),
        )
}
