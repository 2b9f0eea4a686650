use rocket::serde::json::Json;
use rocket::http::Status;
use rocket::{delete, State};
use autometrics::autometrics;
use sqlx::AnyPool;

use crate::auth::SuperAdmin;
use crate::manajemen_venue::repository;
use crate::shared::response::{ApiResponse, ApiResult};
use crate::shared::ApiError;

#[autometrics]
#[delete("/venue/<id>")]
pub async fn hapus_venue(admin: SuperAdmin, db: &State<AnyPool>, id: i64) -> ApiResult<()> {
    if !repository::delete::hapus_venue(db.inner(), id).await? {
        return Err(ApiError::not_found("Venue tidak ditemukan"));
    }

    log::info!("Venue {} dihapus oleh pengguna {}", id, admin.0.id);
    Ok((Status::Ok, Json(ApiResponse::message_only("Venue berhasil dihapus"))))
}
