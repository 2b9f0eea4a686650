use rocket::{fairing::AdHoc, routes};

pub mod aturan;
pub mod create;
pub mod delete;
pub mod dto;
pub mod presenter;
pub mod read;
pub mod update;

pub fn route_stage() -> AdHoc {
    AdHoc::on_ignite("Initializing Provider Pembayaran routes...", |rocket| async {
        rocket.mount(
            "/api",
            routes![
                read::ambil_provider_pembayaran,
                create::buat_provider_pembayaran,
                read::detail_provider_pembayaran,
                update::ubah_provider_pembayaran,
                update::ubah_status_provider_pembayaran,
                delete::hapus_provider_pembayaran,
            ],
        )
    })
}
