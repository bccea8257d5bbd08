//! Error handling - every failure becomes a redirect to a page that can render.

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_core::DomainError;
use std::fmt;

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    /// A lifecycle operation failed; the caller is sent to `location`.
    Redirect {
        location: String,
        cause: DomainError,
    },
    /// A view template failed to render.
    Render(tera::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Redirect { location, cause } => {
                write!(f, "{} (redirecting to {})", cause, location)
            }
            AppError::Render(e) => write!(f, "Render error: {}", e),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Redirect { .. } => StatusCode::SEE_OTHER,
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Redirect { location, cause } => match cause {
                DomainError::NotFound { entity_type, id } => {
                    tracing::warn!(entity_type, %id, "Lookup found nothing, redirecting to {}", location);
                    see_other(location)
                }
                DomainError::Validation(msg) => {
                    tracing::info!(reason = %msg, "Rejected submission, redirecting to {}", location);
                    see_other(&format!("{}?error={}", location, urlencoding::encode(msg)))
                }
                DomainError::Store(e) => {
                    tracing::error!(error = %e, "Store operation failed, redirecting to {}", location);
                    see_other(location)
                }
            },
            AppError::Render(e) => {
                // Log the full chain; the caller only gets a generic message.
                tracing::error!(error = ?e, "Failed to render view");
                HttpResponse::InternalServerError()
                    .content_type(ContentType::plaintext())
                    .body("Something went wrong.")
            }
        }
    }
}

impl From<tera::Error> for AppError {
    fn from(err: tera::Error) -> Self {
        AppError::Render(err)
    }
}

/// Turn a failed operation into a redirect to `location`.
pub trait OrRedirect<T> {
    fn or_redirect(self, location: impl Into<String>) -> AppResult<T>;
}

impl<T, E> OrRedirect<T> for Result<T, E>
where
    E: Into<DomainError>,
{
    fn or_redirect(self, location: impl Into<String>) -> AppResult<T> {
        self.map_err(|e| AppError::Redirect {
            location: location.into(),
            cause: e.into(),
        })
    }
}

/// `303 See Other` pointing at `location`, so the browser follows up with a GET.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::error::RepoError;

    fn location(err: AppError) -> String {
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_store_error_redirects_without_detail() {
        let err = Err::<(), _>(RepoError::Query("relation \"blogs\" does not exist".into()))
            .or_redirect("/blogs")
            .unwrap_err();
        assert_eq!(location(err), "/blogs");
    }

    #[test]
    fn test_validation_error_carries_message() {
        let err = Err::<(), _>(DomainError::Validation("Title must not be blank".into()))
            .or_redirect("/blogs/new")
            .unwrap_err();
        assert_eq!(location(err), "/blogs/new?error=Title%20must%20not%20be%20blank");
    }

    #[test]
    fn test_render_error_is_generic() {
        let err = AppError::from(tera::Error::msg("template 'show.html' not found"));
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
