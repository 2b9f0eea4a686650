use rocket::{fairing::AdHoc, get, routes, State};
use autometrics::autometrics;
use sqlx::AnyPool;

use crate::metode_pembayaran::model::MetodePembayaran;
use crate::metode_pembayaran::repository;
use crate::shared::response::{ok, ApiResult};

#[autometrics]
#[get("/metode-pembayaran")]
pub async fn ambil_metode_pembayaran(db: &State<AnyPool>) -> ApiResult<Vec<MetodePembayaran>> {
    let metode = repository::ambil_semua_metode(db.inner()).await?;
    ok("Data berhasil diambil", metode)
}

pub fn route_stage() -> AdHoc {
    AdHoc::on_ignite("Initializing Metode Pembayaran routes...", |rocket| async {
        rocket.mount("/api", routes![ambil_metode_pembayaran])
    })
}
