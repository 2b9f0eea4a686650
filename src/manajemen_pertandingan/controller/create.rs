use rocket::{post, State};
use autometrics::autometrics;
use sqlx::AnyPool;

use crate::auth::SuperAdmin;
use crate::manajemen_pertandingan::repository;
use crate::shared::masukan::Masukan;
use crate::shared::response::{created, ApiResult};
use crate::shared::validation::hasil;
use crate::shared::ApiError;
use super::aturan;
use super::dto::{PertandinganRequest, PertandinganResponse};
use super::presenter::tampilkan;

#[autometrics]
#[post("/pertandingan", format = "json", data = "<masukan>")]
pub async fn buat_pertandingan(
    admin: SuperAdmin,
    db: &State<AnyPool>,
    masukan: Masukan,
) -> ApiResult<PertandinganResponse> {
    let pool = db.inner();

    let (request, mut errors) = PertandinganRequest::validasi(masukan.isian()?);
    aturan::kategori_terdaftar(pool, &mut errors, request.kategori_id).await?;
    aturan::venue_terdaftar(pool, &mut errors, Some(request.venue_ids.as_slice())).await?;
    hasil(errors)?;

    let (baru, venue_ids) = request
        .into_pertandingan_baru()
        .ok_or_else(|| ApiError::Internal("Field wajib pertandingan kosong setelah validasi".to_string()))?;

    let pertandingan = repository::create::tambah_pertandingan(pool, &baru, &venue_ids).await?;

    log::info!("Pertandingan {} dibuat oleh pengguna {}", pertandingan.id, admin.0.id);
    created("Pertandingan berhasil dibuat", tampilkan(pool, pertandingan).await?)
}
