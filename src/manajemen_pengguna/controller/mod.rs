use rocket::{fairing::AdHoc, routes};
use sqlx::AnyPool;

use crate::manajemen_pengguna::model::Akun;
use crate::manajemen_pengguna::repository;
use crate::shared::ApiError;

pub mod delete;
pub mod dto;
pub mod read;
pub mod update;

pub fn route_stage() -> AdHoc {
    AdHoc::on_ignite("Initializing Pengguna routes...", |rocket| async {
        rocket.mount(
            "/api",
            routes![
                read::ambil_semua_pengguna,
                read::ambil_pengguna_berdasarkan_id,
                update::ubah_pengguna,
                delete::hapus_pengguna,
            ],
        )
    })
}

pub async fn akun_atau_404(pool: &AnyPool, id: i64) -> Result<Akun, ApiError> {
    repository::read::ambil_akun_by_id(pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Pengguna tidak ditemukan"))
}
