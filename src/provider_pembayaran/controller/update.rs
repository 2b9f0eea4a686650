use rocket::{put, State};
use autometrics::autometrics;
use sqlx::AnyPool;

use crate::auth::AdminVenue;
use crate::manajemen_venue::controller::venue_atau_404;
use crate::provider_pembayaran::repository;
use crate::shared::masukan::Masukan;
use crate::shared::response::{ok, ApiResult};
use crate::shared::validation::hasil;
use crate::shared::ApiError;
use super::aturan;
use super::dto::{validasi_update, ProviderPembayaranResponse};
use super::presenter::tampilkan;

#[autometrics]
#[put("/venue/<venue_id>/provider/<id>", format = "json", data = "<masukan>")]
pub async fn ubah_provider_pembayaran(
    admin: AdminVenue,
    db: &State<AnyPool>,
    venue_id: i64,
    id: i64,
    masukan: Masukan,
) -> ApiResult<ProviderPembayaranResponse> {
    let pool = db.inner();
    let venue = venue_atau_404(pool, venue_id).await?;

    let mut provider = repository::read::ambil_provider_by_id(pool, venue.id, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Provider tidak ditemukan untuk venue ini"))?;

    let (patch, mut errors) = validasi_update(masukan.isian()?);
    aturan::nama_unik(pool, &mut errors, patch.nama.as_deref(), Some(provider.id)).await?;
    aturan::metode_terdaftar(pool, &mut errors, patch.metode_pembayaran_id).await?;
    hasil(errors)?;

    provider.terapkan(patch);
    let provider = repository::update::update_provider(pool, &provider)
        .await
        .map_err(aturan::tangani_nama_bentrok)?;

    log::info!("Provider {} diperbarui oleh pengguna {}", provider.id, admin.0.id);
    ok("Provider pembayaran berhasil diperbarui", tampilkan(pool, provider).await?)
}

#[autometrics]
#[put("/venue/<venue_id>/provider/status/<id>")]
pub async fn ubah_status_provider_pembayaran(
    admin: AdminVenue,
    db: &State<AnyPool>,
    venue_id: i64,
    id: i64,
) -> ApiResult<ProviderPembayaranResponse> {
    let pool = db.inner();
    let venue = venue_atau_404(pool, venue_id).await?;

    let mut provider = repository::read::ambil_provider_by_id(pool, venue.id, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Provider tidak ditemukan untuk venue ini"))?;

    provider.toggle_aktif();
    let provider = repository::update::update_provider(pool, &provider).await?;

    log::info!("Provider {} aktif={} oleh pengguna {}", provider.id, provider.aktif, admin.0.id);
    ok("Status provider pembayaran berhasil diperbarui", tampilkan(pool, provider).await?)
}
