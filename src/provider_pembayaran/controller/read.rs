use rocket::{get, State};
use autometrics::autometrics;
use sqlx::AnyPool;

use crate::auth::AdminVenue;
use crate::manajemen_venue::controller::venue_atau_404;
use crate::provider_pembayaran::repository;
use crate::shared::response::{ok, ApiResult};
use crate::shared::ApiError;
use super::dto::ProviderPembayaranResponse;
use super::presenter::{tampilkan, tampilkan_semua};

#[autometrics]
#[get("/venue/<venue_id>/provider")]
pub async fn ambil_provider_pembayaran(
    _admin: AdminVenue,
    db: &State<AnyPool>,
    venue_id: i64,
) -> ApiResult<Vec<ProviderPembayaranResponse>> {
    let venue = venue_atau_404(db.inner(), venue_id).await?;

    let providers = repository::read::ambil_provider_by_venue(db.inner(), venue.id).await?;
    if providers.is_empty() {
        return Err(ApiError::not_found("Provider tidak ditemukan untuk venue ini"));
    }

    ok("Data berhasil diambil", tampilkan_semua(db.inner(), providers).await?)
}

#[autometrics]
#[get("/venue/<venue_id>/provider/<id>")]
pub async fn detail_provider_pembayaran(
    _admin: AdminVenue,
    db: &State<AnyPool>,
    venue_id: i64,
    id: i64,
) -> ApiResult<ProviderPembayaranResponse> {
    let venue = venue_atau_404(db.inner(), venue_id).await?;

    let provider = repository::read::ambil_provider_by_id(db.inner(), venue.id, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Provider tidak ditemukan untuk venue ini"))?;

    ok("Data berhasil diambil", tampilkan(db.inner(), provider).await?)
}
