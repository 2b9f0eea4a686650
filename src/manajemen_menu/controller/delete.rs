use rocket::serde::json::Json;
use rocket::http::Status;
use rocket::{delete, State};
use autometrics::autometrics;
use sqlx::AnyPool;

use crate::auth::AdminVenue;
use crate::manajemen_menu::repository;
use crate::manajemen_venue::controller::venue_atau_404;
use crate::shared::response::{ApiResponse, ApiResult};
use crate::shared::ApiError;

#[autometrics]
#[delete("/menu/venue/<venue_id>/<menu_id>")]
pub async fn hapus_menu(admin: AdminVenue, db: &State<AnyPool>, venue_id: i64, menu_id: i64) -> ApiResult<()> {
    let venue = venue_atau_404(db.inner(), venue_id).await?;

    if !repository::delete::hapus_menu(db.inner(), venue.id, menu_id).await? {
        return Err(ApiError::not_found("Menu tidak ditemukan untuk venue ini"));
    }

    log::info!("Menu {} milik venue {} dihapus oleh pengguna {}", menu_id, venue.id, admin.0.id);
    Ok((Status::Ok, Json(ApiResponse::message_only("Menu berhasil dihapus"))))
}
