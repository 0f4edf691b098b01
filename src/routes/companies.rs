use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::{AppError, ErrorBody};
use crate::models::{CompanyDetail, CompanyJobsResponse, CompanyListResponse};
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CompanyListParams {
    /// Page number, starting at 1 (default: 1)
    #[param(minimum = 1)]
    page: Option<u64>,
    /// Items per page (default: 10, values above 100 are clamped)
    per_page: Option<u64>,
    /// Case-insensitive substring of the company name
    search: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CompanyJobsParams {
    /// Page number, starting at 1 (default: 1)
    #[param(minimum = 1)]
    page: Option<u64>,
    /// Items per page (default: 4, values above 100 are clamped)
    page_size: Option<u64>,
}

/// Routes mounted under `/companies`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list", get(list_companies))
        .route("/company/{slug}", get(get_company_by_slug))
        .route("/{company_id}/jobs", get(list_company_jobs))
}

/// Paginated list of companies with derived slugs and descriptions
#[utoipa::path(
    get,
    path = "/companies/list",
    tag = "Companies",
    params(CompanyListParams),
    responses(
        (status = 200, description = "One page of companies", body = CompanyListResponse),
        (status = 400, description = "Page past the last page or malformed parameters", body = ErrorBody),
        (status = 500, description = "Database error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_companies(
    State(state): State<AppState>,
    params: Result<Query<CompanyListParams>, QueryRejection>,
) -> Result<Json<CompanyListResponse>, AppError> {
    let Query(params) = params?;
    let page = state
        .store
        .list_companies(params.page, params.per_page, params.search)
        .await?;
    tracing::info!(
        total = page.total,
        page = page.page,
        rows = page.items.len(),
        "listed companies"
    );
    Ok(Json(CompanyListResponse::from(page)))
}

/// Company details looked up by slug
#[utoipa::path(
    get,
    path = "/companies/company/{slug}",
    tag = "Companies",
    params(
        ("slug" = String, Path, description = "Company slug, e.g. `cedar-financial`")
    ),
    responses(
        (status = 200, description = "Company found", body = CompanyDetail),
        (status = 404, description = "No company derives this slug", body = ErrorBody),
        (status = 500, description = "Database error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_company_by_slug(
    State(state): State<AppState>,
    slug: Result<Path<String>, PathRejection>,
) -> Result<Json<CompanyDetail>, AppError> {
    let Path(slug) = slug?;
    let company = state.store.company_by_slug(&slug).await?;
    Ok(Json(CompanyDetail::from(company)))
}

/// Paginated job posts of one company, newest first
#[utoipa::path(
    get,
    path = "/companies/{company_id}/jobs",
    tag = "Companies",
    params(
        ("company_id" = i64, Path, description = "Company row id"),
        CompanyJobsParams
    ),
    responses(
        (status = 200, description = "One page of job posts", body = CompanyJobsResponse),
        (status = 400, description = "Page past the last page or malformed parameters", body = ErrorBody),
        (status = 404, description = "Company does not exist", body = ErrorBody),
        (status = 500, description = "Database error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_company_jobs(
    State(state): State<AppState>,
    company_id: Result<Path<i64>, PathRejection>,
    params: Result<Query<CompanyJobsParams>, QueryRejection>,
) -> Result<Json<CompanyJobsResponse>, AppError> {
    let Path(company_id) = company_id?;
    let Query(params) = params?;
    let page = state
        .store
        .company_jobs(company_id, params.page, params.page_size)
        .await?;
    Ok(Json(CompanyJobsResponse::from(page)))
}
