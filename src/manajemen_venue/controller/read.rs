use rocket::{get, State};
use autometrics::autometrics;
use sqlx::AnyPool;

use crate::auth::SuperAdmin;
use crate::manajemen_pertandingan::controller::pertandingan_atau_404;
use crate::manajemen_venue::repository;
use crate::shared::response::{ok, ApiResult};
use super::venue_atau_404;
use super::dto::VenueResponse;

fn ke_response(venues: Vec<crate::manajemen_venue::model::Venue>) -> Vec<VenueResponse> {
    venues.into_iter().map(VenueResponse::from).collect()
}

#[autometrics]
#[get("/venue")]
pub async fn ambil_semua_venue(_admin: SuperAdmin, db: &State<AnyPool>) -> ApiResult<Vec<VenueResponse>> {
    let venues = repository::read::ambil_semua_venue(db.inner()).await?;
    ok("Data berhasil diambil", ke_response(venues))
}

#[autometrics]
#[get("/venue/aktif")]
pub async fn ambil_semua_venue_aktif(db: &State<AnyPool>) -> ApiResult<Vec<VenueResponse>> {
    let venues = repository::read::ambil_venue_aktif(db.inner()).await?;
    ok("Data berhasil diambil", ke_response(venues))
}

#[autometrics]
#[get("/venue/kota/<kota>", rank = 2)]
pub async fn ambil_venue_berdasarkan_kota(db: &State<AnyPool>, kota: String) -> ApiResult<Vec<VenueResponse>> {
    let venues = repository::read::ambil_venue_by_kota(db.inner(), &kota).await?;
    ok("Data berhasil diambil", ke_response(venues))
}

#[autometrics]
#[get("/venue/pertandingan/<pertandingan_id>", rank = 2)]
pub async fn ambil_venue_berdasarkan_pertandingan(
    db: &State<AnyPool>,
    pertandingan_id: i64,
) -> ApiResult<Vec<VenueResponse>> {
    let pertandingan = pertandingan_atau_404(db.inner(), pertandingan_id).await?;

    let venues = repository::read::ambil_venue_by_pertandingan(db.inner(), pertandingan.id).await?;
    ok("Data berhasil diambil", ke_response(venues))
}

#[autometrics]
#[get("/venue/<id>")]
pub async fn detail_venue(db: &State<AnyPool>, id: i64) -> ApiResult<VenueResponse> {
    let venue = venue_atau_404(db.inner(), id).await?;

    ok("Data berhasil diambil", VenueResponse::from(venue))
}
