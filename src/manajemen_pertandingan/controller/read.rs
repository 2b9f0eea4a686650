use rocket::{get, State};
use autometrics::autometrics;
use sqlx::AnyPool;

use crate::auth::SuperAdmin;
use crate::manajemen_pertandingan::repository;
use crate::shared::response::{ok, ApiResult};
use super::dto::PertandinganResponse;
use super::pertandingan_atau_404;
use super::presenter::{tampilkan, tampilkan_semua};

#[autometrics]
#[get("/pertandingan")]
pub async fn ambil_semua_pertandingan(_admin: SuperAdmin, db: &State<AnyPool>) -> ApiResult<Vec<PertandinganResponse>> {
    let pool = db.inner();
    let daftar = repository::read::ambil_semua_pertandingan(pool).await?;
    ok("Data berhasil diambil", tampilkan_semua(pool, daftar).await?)
}

#[autometrics]
#[get("/pertandingan/aktif")]
pub async fn ambil_semua_pertandingan_aktif(db: &State<AnyPool>) -> ApiResult<Vec<PertandinganResponse>> {
    let pool = db.inner();
    let daftar = repository::read::ambil_pertandingan_aktif(pool).await?;
    ok("Data berhasil diambil", tampilkan_semua(pool, daftar).await?)
}

#[autometrics]
#[get("/pertandingan/<id>")]
pub async fn detail_pertandingan(db: &State<AnyPool>, id: i64) -> ApiResult<PertandinganResponse> {
    let pool = db.inner();
    let pertandingan = pertandingan_atau_404(pool, id).await?;

    ok("Data berhasil diambil", tampilkan(pool, pertandingan).await?)
}
