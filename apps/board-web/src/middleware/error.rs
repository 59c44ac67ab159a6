//! Error handling - failures that escape a page become an HTML error page.

use std::sync::LazyLock;

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;

use board_core::view::Route;

use crate::views::Views;

/// Registry for pages rendered outside a handler, where `AppState` is out of reach.
static VIEWS: LazyLock<Option<Views>> = LazyLock::new(|| {
    Views::new()
        .inspect_err(|e| tracing::error!(error = %e, "Failed to build error page templates"))
        .ok()
});

#[derive(Serialize)]
struct StatusPage {
    heading: &'static str,
    error: &'static str,
    list_href: String,
}

/// Application-level error type rendered as a standalone HTML page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

impl AppError {
    fn heading(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "Page not found",
            AppError::Template(_) => "Something went wrong",
        }
    }

    fn message(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "The page you are looking for does not exist.",
            AppError::Template(_) => "The page could not be displayed. Please try again.",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Template(e) = self {
            tracing::error!("Template error: {}", e);
        }

        // The requested path is never echoed back.
        let page = StatusPage {
            heading: self.heading(),
            error: self.message(),
            list_href: Route::List.path(),
        };
        let rendered = VIEWS
            .as_ref()
            .map(|views| views.page(page.heading, "status.html", &page));
        let body = match rendered {
            Some(Ok(html)) => html,
            Some(Err(e)) => {
                tracing::error!(error = %e, "Failed to render error page");
                self.message().to_string()
            }
            None => self.message().to_string(),
        };

        HttpResponse::build(self.status_code())
            .content_type(ContentType::html())
            .body(body)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
