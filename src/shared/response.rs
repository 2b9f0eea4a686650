use std::collections::BTreeMap;

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use rocket::{catch, catchers, Catcher, Request};
use validator::ValidationErrors;

use super::error::ApiError;
use super::masukan::PESAN_BODY_RUSAK;
use super::validation::tambah_error;

#[derive(Debug, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ApiResponse<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }
}

pub type ApiResult<T> = Result<(Status, Json<ApiResponse<T>>), ApiError>;

pub fn ok<T>(message: &str, data: T) -> ApiResult<T> {
    Ok((Status::Ok, Json(ApiResponse::with_data(message, data))))
}

pub fn created<T>(message: &str, data: T) -> ApiResult<T> {
    Ok((Status::Created, Json(ApiResponse::with_data(message, data))))
}

// Body 422: pesan ringkas + daftar pesan per field
#[derive(Debug, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ValidationResponse {
    pub message: String,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl From<&ValidationErrors> for ValidationResponse {
    fn from(errors: &ValidationErrors) -> Self {
        let mut per_field: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (field, field_errors) in errors.field_errors() {
            let messages = field_errors
                .iter()
                .map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("Kolom {} tidak valid.", field),
                })
                .collect();
            per_field.insert(field.to_string(), messages);
        }

        let total: usize = per_field.values().map(Vec::len).sum();
        let first = per_field
            .values()
            .flat_map(|msgs| msgs.iter())
            .next()
            .cloned()
            .unwrap_or_else(|| "Data yang diberikan tidak valid.".to_string());
        let message = if total > 1 {
            format!("{} (dan {} kesalahan lainnya)", first, total - 1)
        } else {
            first
        };

        Self {
            message,
            errors: per_field,
        }
    }
}

/// Pesan penolakan yang disimpan role gate di cache request, dibaca catcher 403.
#[derive(Debug, Clone, Default)]
pub struct PenolakanAkses(pub Option<String>);

#[catch(403)]
fn akses_ditolak(req: &Request) -> (Status, Json<ApiResponse<()>>) {
    let pesan = req
        .local_cache(PenolakanAkses::default)
        .0
        .clone()
        .unwrap_or_else(|| "Akses ditolak.".to_string());
    (Status::Forbidden, Json(ApiResponse::message_only(pesan)))
}

#[catch(404)]
fn tidak_ditemukan() -> (Status, Json<ApiResponse<()>>) {
    (Status::NotFound, Json(ApiResponse::message_only("Resource tidak ditemukan")))
}

/// Body yang tidak bisa dibaca selalu dijawab 422 dengan error pada `body`.
fn body_tidak_valid() -> (Status, Json<ValidationResponse>) {
    let mut errors = ValidationErrors::new();
    tambah_error(&mut errors, "body", "json", PESAN_BODY_RUSAK.to_string());
    (Status::UnprocessableEntity, Json(ValidationResponse::from(&errors)))
}

#[catch(400)]
fn permintaan_tidak_valid() -> (Status, Json<ValidationResponse>) {
    body_tidak_valid()
}

#[catch(422)]
fn tidak_dapat_diproses() -> (Status, Json<ValidationResponse>) {
    body_tidak_valid()
}

#[catch(default)]
fn default_catcher(status: Status, _req: &Request) -> (Status, Json<ApiResponse<()>>) {
    let pesan = if status.code >= 500 {
        "Terjadi kesalahan pada server".to_string()
    } else {
        status.reason_lossy().to_string()
    };
    (status, Json(ApiResponse::message_only(pesan)))
}

pub fn catchers() -> Vec<Catcher> {
    catchers![
        akses_ditolak,
        permintaan_tidak_valid,
        tidak_ditemukan,
        tidak_dapat_diproses,
        default_catcher
    ]
}
