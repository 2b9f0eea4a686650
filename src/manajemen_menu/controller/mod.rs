use rocket::{fairing::AdHoc, routes};

pub mod create;
pub mod delete;
pub mod dto;
pub mod read;
pub mod update;

pub fn route_stage() -> AdHoc {
    AdHoc::on_ignite("Initializing Menu routes...", |rocket| async {
        rocket.mount(
            "/api",
            routes![
                read::ambil_menu_berdasarkan_venue,
                read::menu_aktif_berdasarkan_venue,
                read::detail_menu,
                create::tambah_menu,
                update::ubah_menu,
                delete::hapus_menu,
            ],
        )
    })
}
