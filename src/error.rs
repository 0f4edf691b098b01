use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, TransactionError};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Message returned for store failures; the underlying error is only logged.
pub const DATABASE_ERROR_DETAIL: &str = "Database error occurred while processing the request";
/// Message returned for anything unexpected, panics included.
pub const INTERNAL_ERROR_DETAIL: &str = "An internal server error occurred";

/// Outcome kinds of the query layer. Carries no HTTP knowledge.
#[derive(Debug)]
pub enum QueryError {
    /// Page 0 was requested; pages are 1-indexed.
    PageOutOfRange(u64),
    /// The requested page lies past the last page.
    InvalidPage { page: u64, total_pages: u64 },
    CompanyNotFound(i64),
    SlugNotFound(String),
    Store(DbErr),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::PageOutOfRange(page) => write!(f, "Page {} is invalid. Pages start at 1", page),
            QueryError::InvalidPage { page, total_pages } => {
                write!(f, "Page {} does not exist. Total pages: {}", page, total_pages)
            }
            QueryError::CompanyNotFound(id) => write!(f, "Company with id {} not found", id),
            QueryError::SlugNotFound(slug) => write!(f, "Company with slug '{}' not found", slug),
            QueryError::Store(err) => write!(f, "Store error: {}", err),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbErr> for QueryError {
    fn from(err: DbErr) -> Self {
        QueryError::Store(err)
    }
}

impl From<TransactionError<QueryError>> for QueryError {
    fn from(err: TransactionError<QueryError>) -> Self {
        match err {
            TransactionError::Connection(err) => QueryError::Store(err),
            TransactionError::Transaction(err) => err,
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human readable reason
    pub detail: String,
}

#[derive(Debug)]
pub enum AppError {
    InvalidRequest(String),
    NotFound(String),
    Database(DbErr),
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Database(err) => write!(f, "Database error: {}", err),
            AppError::InternalError(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::Store(err) => AppError::Database(err),
            missing @ (QueryError::CompanyNotFound(_) | QueryError::SlugNotFound(_)) => {
                AppError::NotFound(missing.to_string())
            }
            invalid @ (QueryError::PageOutOfRange(_) | QueryError::InvalidPage { .. }) => {
                AppError::InvalidRequest(invalid.to_string())
            }
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Database(err) => {
                tracing::error!(error = %err, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, DATABASE_ERROR_DETAIL.to_string())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "unexpected error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_DETAIL.to_string())
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}
