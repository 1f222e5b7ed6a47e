//! Error handling module for the Samehadaku API
//!
//! Each route reports failures differently, so every observed outcome has its
//! own variant carrying its status code and response body.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::{ErrorResponse, MessageResponse};
use crate::scraper::ScraperError;

/// Application-wide error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Upstream scraping failure surfaced with its message (source route)
    #[error("Scraping error: {0}")]
    Scraping(#[from] ScraperError),

    /// Resource not found, reported as `{ "message": ... }` (anime route)
    #[error("Not found: {0}")]
    NotFound(String),

    /// No hosting page yielded a playable URL (source route)
    #[error("No video source found")]
    NoVideoSource,

    /// Opaque server failure, reported as plain text (search route)
    #[error("Server Error")]
    Server,
}

impl AppError {
    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) | AppError::NoVideoSource => StatusCode::NOT_FOUND,
            AppError::Scraping(_) | AppError::Server => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());

        match self {
            AppError::NotFound(msg) => response.json(MessageResponse::new(msg.clone())),
            AppError::NoVideoSource | AppError::Scraping(_) => {
                response.json(ErrorResponse::new(self.to_string()))
            }
            AppError::Server => response
                .content_type("text/plain; charset=utf-8")
                .body(self.to_string()),
        }
    }
}

/// Result type alias for operations that can fail with AppError
pub type AppResult<T> = Result<T, AppError>;
