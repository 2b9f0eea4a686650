use rocket::serde::json::Json;
use rocket::http::Status;
use rocket::{delete, State};
use autometrics::autometrics;
use sqlx::AnyPool;

use crate::auth::SuperAdmin;
use crate::manajemen_pengguna::repository;
use crate::shared::response::{ApiResponse, ApiResult};
use crate::shared::ApiError;

#[autometrics]
#[delete("/user/<id>")]
pub async fn hapus_pengguna(admin: SuperAdmin, db: &State<AnyPool>, id: i64) -> ApiResult<()> {
    if admin.0.id == id {
        return Err(ApiError::conflict("Tidak dapat menghapus akun sendiri"));
    }

    if !repository::delete::hapus_akun(db.inner(), id).await? {
        return Err(ApiError::not_found("Pengguna tidak ditemukan"));
    }

    log::info!("Pengguna {} dihapus oleh pengguna {}", id, admin.0.id);
    Ok((Status::Ok, Json(ApiResponse::message_only("Pengguna berhasil dihapus"))))
}
