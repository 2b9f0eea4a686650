use rocket::{put, State};
use autometrics::autometrics;
use sqlx::AnyPool;

use crate::auth::SuperAdmin;
use crate::manajemen_pertandingan::repository;
use crate::shared::masukan::Masukan;
use crate::shared::response::{ok, ApiResult};
use crate::shared::validation::hasil;
use super::aturan;
use super::dto::{validasi_update, PertandinganResponse};
use super::pertandingan_atau_404;
use super::presenter::tampilkan;

#[autometrics]
#[put("/pertandingan/<id>", format = "json", data = "<masukan>")]
pub async fn ubah_pertandingan(
    admin: SuperAdmin,
    db: &State<AnyPool>,
    id: i64,
    masukan: Masukan,
) -> ApiResult<PertandinganResponse> {
    let pool = db.inner();
    let mut pertandingan = pertandingan_atau_404(pool, id).await?;

    let (perubahan, mut errors) = validasi_update(masukan.isian()?);
    aturan::kategori_terdaftar(pool, &mut errors, perubahan.patch.kategori_id).await?;
    aturan::venue_terdaftar(pool, &mut errors, perubahan.venue_ids.as_deref()).await?;
    hasil(errors)?;

    pertandingan.terapkan(perubahan.patch);
    let pertandingan =
        repository::update::update_pertandingan(pool, &pertandingan, perubahan.venue_ids.as_deref()).await?;

    log::info!("Pertandingan {} diperbarui oleh pengguna {}", pertandingan.id, admin.0.id);
    ok("Pertandingan berhasil diperbarui", tampilkan(pool, pertandingan).await?)
}

#[autometrics]
#[put("/pertandingan/status/<id>")]
pub async fn ubah_status_pertandingan(
    admin: SuperAdmin,
    db: &State<AnyPool>,
    id: i64,
) -> ApiResult<PertandinganResponse> {
    let pool = db.inner();
    let mut pertandingan = pertandingan_atau_404(pool, id).await?;

    pertandingan.toggle_status();
    let pertandingan = repository::update::update_pertandingan(pool, &pertandingan, None).await?;

    log::info!(
        "Status pertandingan {} menjadi {} oleh pengguna {}",
        pertandingan.id,
        pertandingan.status,
        admin.0.id
    );
    ok("Status pertandingan berhasil diperbarui", tampilkan(pool, pertandingan).await?)
}
