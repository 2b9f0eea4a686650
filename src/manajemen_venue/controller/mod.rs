use rocket::{fairing::AdHoc, routes};
use sqlx::AnyPool;

use crate::manajemen_venue::model::Venue;
use crate::manajemen_venue::repository;
use crate::shared::ApiError;

pub mod create;
pub mod delete;
pub mod dto;
pub mod read;
pub mod update;

pub fn route_stage() -> AdHoc {
    AdHoc::on_ignite("Initializing Venue routes...", |rocket| async {
        rocket.mount(
            "/api",
            routes![
                // Super admin
                create::buat_venue,
                read::ambil_semua_venue,
                update::ubah_venue,
                update::ubah_status_venue,
                delete::hapus_venue,

                // Publik
                read::ambil_semua_venue_aktif,
                read::ambil_venue_berdasarkan_kota,
                read::ambil_venue_berdasarkan_pertandingan,
                read::detail_venue,
            ],
        )
    })
}

/// Resolusi venue dari path, dipakai juga oleh route provider dan menu.
pub async fn venue_atau_404(pool: &AnyPool, id: i64) -> Result<Venue, ApiError> {
    repository::read::ambil_venue_by_id(pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Venue tidak ditemukan"))
}
