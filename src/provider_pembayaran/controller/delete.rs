use rocket::serde::json::Json;
use rocket::http::Status;
use rocket::{delete, State};
use autometrics::autometrics;
use sqlx::AnyPool;

use crate::auth::AdminVenue;
use crate::manajemen_venue::controller::venue_atau_404;
use crate::provider_pembayaran::repository;
use crate::shared::response::{ApiResponse, ApiResult};
use crate::shared::ApiError;

#[autometrics]
#[delete("/venue/<venue_id>/provider/<id>")]
pub async fn hapus_provider_pembayaran(
    admin: AdminVenue,
    db: &State<AnyPool>,
    venue_id: i64,
    id: i64,
) -> ApiResult<()> {
    let venue = venue_atau_404(db.inner(), venue_id).await?;

    if !repository::delete::hapus_provider(db.inner(), venue.id, id).await? {
        return Err(ApiError::not_found("Provider tidak ditemukan untuk venue ini"));
    }

    log::info!("Provider {} milik venue {} dihapus oleh pengguna {}", id, venue.id, admin.0.id);
    Ok((Status::Ok, Json(ApiResponse::message_only("Provider pembayaran berhasil dihapus"))))
}
