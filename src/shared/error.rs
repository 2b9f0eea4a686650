use std::error::Error as StdError;
use std::fmt;

use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::Request;
use validator::ValidationErrors;

use super::response::{ApiResponse, ValidationResponse};

// Error dari lapisan repository
#[derive(Debug)]
pub enum RepositoryError {
    NotFound,
    DatabaseError(sqlx::Error),
    ValidationError(String),
    Other(String),
}

impl RepositoryError {
    /// True kalau database menolak karena constraint UNIQUE.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            RepositoryError::DatabaseError(sqlx::Error::Database(db_err)) => {
                db_err.is_unique_violation()
            }
            _ => false,
        }
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RepositoryError::NotFound => write!(f, "Record not found"),
            RepositoryError::DatabaseError(e) => write!(f, "Database error: {}", e),
            RepositoryError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            RepositoryError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl StdError for RepositoryError {}

impl From<sqlx::Error> for RepositoryError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => RepositoryError::NotFound,
            other => RepositoryError::DatabaseError(other),
        }
    }
}

/// Semua kegagalan yang bisa dikembalikan handler.
///
/// Setiap varian dipetakan ke satu status HTTP dan dirender sebagai
/// envelope JSON `{ "message": ... }`. Validasi punya bentuk sendiri
/// dengan peta `errors` per field.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Conflict(String),
    Validation(ValidationErrors),
    Forbidden(String),
    Internal(String),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn status(&self) -> Status {
        match self {
            ApiError::NotFound(_) => Status::NotFound,
            ApiError::Conflict(_) => Status::BadRequest,
            ApiError::Validation(_) => Status::UnprocessableEntity,
            ApiError::Forbidden(_) => Status::Forbidden,
            ApiError::Internal(_) => Status::InternalServerError,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) | ApiError::Conflict(msg) | ApiError::Forbidden(msg) => {
                write!(f, "{}", msg)
            }
            ApiError::Validation(errors) => write!(f, "Validasi gagal: {}", errors),
            ApiError::Internal(_) => write!(f, "Terjadi kesalahan pada server"),
        }
    }
}

impl StdError for ApiError {}

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        log::error!("Repository error: {}", error);
        match error {
            RepositoryError::NotFound => ApiError::not_found("Resource tidak ditemukan"),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        match self {
            ApiError::Validation(errors) => {
                (status, Json(ValidationResponse::from(&errors))).respond_to(req)
            }
            other => (status, Json(ApiResponse::<()>::message_only(other.to_string()))).respond_to(req),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::not_found("x").status(), Status::NotFound);
        assert_eq!(ApiError::conflict("x").status(), Status::BadRequest);
        assert_eq!(ApiError::Forbidden("x".to_string()).status(), Status::Forbidden);
        assert_eq!(ApiError::Internal("x".to_string()).status(), Status::InternalServerError);

        let mut errors = ValidationErrors::new();
        errors.add("nama", ValidationError::new("required"));
        assert_eq!(ApiError::from(errors).status(), Status::UnprocessableEntity);
    }

    #[test]
    fn test_internal_error_does_not_leak_detail() {
        let err = ApiError::from(RepositoryError::Other("koneksi putus ke 10.0.0.1".to_string()));
        assert_eq!(err.to_string(), "Terjadi kesalahan pada server");
    }

    #[test]
    fn test_row_not_found_becomes_not_found() {
        let err = RepositoryError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, RepositoryError::NotFound));
        assert!(!err.is_unique_violation());
    }
}
