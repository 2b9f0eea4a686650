use rocket::{fairing::AdHoc, routes};
use sqlx::AnyPool;

use crate::manajemen_pertandingan::model::Pertandingan;
use crate::manajemen_pertandingan::repository;
use crate::shared::ApiError;

pub mod aturan;
pub mod create;
pub mod delete;
pub mod dto;
pub mod presenter;
pub mod read;
pub mod update;

pub fn route_stage() -> AdHoc {
    AdHoc::on_ignite("Initializing Pertandingan routes...", |rocket| async {
        rocket.mount(
            "/api",
            routes![
                // Super admin
                create::buat_pertandingan,
                read::ambil_semua_pertandingan,
                update::ubah_pertandingan,
                update::ubah_status_pertandingan,
                delete::hapus_pertandingan,

                // Publik
                read::ambil_semua_pertandingan_aktif,
                read::detail_pertandingan,
            ],
        )
    })
}

/// Dipakai juga oleh route venue berdasarkan pertandingan.
pub async fn pertandingan_atau_404(pool: &AnyPool, id: i64) -> Result<Pertandingan, ApiError> {
    repository::read::ambil_pertandingan_by_id(pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Pertandingan tidak ditemukan"))
}
