use rocket::serde::json::Json;
use rocket::http::Status;
use rocket::{delete, State};
use autometrics::autometrics;
use sqlx::AnyPool;

use crate::auth::SuperAdmin;
use crate::manajemen_pertandingan::repository;
use crate::shared::response::{ApiResponse, ApiResult};
use crate::shared::ApiError;

#[autometrics]
#[delete("/pertandingan/<id>")]
pub async fn hapus_pertandingan(admin: SuperAdmin, db: &State<AnyPool>, id: i64) -> ApiResult<()> {
    if !repository::delete::hapus_pertandingan(db.inner(), id).await? {
        return Err(ApiError::not_found("Pertandingan tidak ditemukan"));
    }

    log::info!("Pertandingan {} dihapus oleh pengguna {}", id, admin.0.id);
    Ok((Status::Ok, Json(ApiResponse::message_only("Pertandingan berhasil dihapus"))))
}
