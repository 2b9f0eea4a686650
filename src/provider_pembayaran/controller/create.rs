use rocket::{post, State};
use autometrics::autometrics;
use sqlx::AnyPool;

use crate::auth::AdminVenue;
use crate::manajemen_venue::controller::venue_atau_404;
use crate::provider_pembayaran::repository;
use crate::shared::masukan::Masukan;
use crate::shared::response::{created, ApiResult};
use crate::shared::validation::hasil;
use crate::shared::ApiError;
use super::aturan;
use super::dto::{ProviderPembayaranRequest, ProviderPembayaranResponse};
use super::presenter::tampilkan;

#[autometrics]
#[post("/venue/<venue_id>/provider", format = "json", data = "<masukan>")]
pub async fn buat_provider_pembayaran(
    admin: AdminVenue,
    db: &State<AnyPool>,
    venue_id: i64,
    masukan: Masukan,
) -> ApiResult<ProviderPembayaranResponse> {
    let pool = db.inner();
    let venue = venue_atau_404(pool, venue_id).await?;

    // Cek lalu insert tanpa transaksi; dua request bersamaan bisa sama-sama lolos
    if repository::read::venue_punya_provider(pool, venue.id).await? {
        return Err(ApiError::conflict("Venue sudah memiliki provider pembayaran"));
    }

    let (request, mut errors) = ProviderPembayaranRequest::validasi(masukan.isian()?);
    aturan::nama_unik(pool, &mut errors, request.nama.as_deref(), None).await?;
    aturan::metode_terdaftar(pool, &mut errors, request.metode_pembayaran_id).await?;
    hasil(errors)?;

    let baru = request
        .into_provider_baru(venue.id)
        .ok_or_else(|| ApiError::Internal("Field wajib provider kosong setelah validasi".to_string()))?;

    let provider = repository::create::tambah_provider(pool, &baru)
        .await
        .map_err(aturan::tangani_nama_bentrok)?;

    log::info!("Provider {} dibuat untuk venue {} oleh pengguna {}", provider.id, venue.id, admin.0.id);
    created("Provider pembayaran berhasil dibuat", tampilkan(pool, provider).await?)
}
