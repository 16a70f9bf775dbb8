use actix_web::HttpResponse;
use thiserror::Error;

use crate::models::invoice::ValidationError;

#[derive(Debug, Error)]
pub enum AppError {
    /// The multipart upload could not be read.
    #[error("Invalid upload: {0}")]
    Upload(String),

    /// A value object failed schema validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Upload(_) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": self.to_string()
            })),
            AppError::Validation(e) => HttpResponse::UnprocessableEntity().json(serde_json::json!({
                "error": e.to_string(),
                "field": e.field(),
            })),
            AppError::Internal(_) => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal server error"
            })),
        }
    }
}
