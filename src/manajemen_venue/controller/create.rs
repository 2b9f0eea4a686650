use rocket::{post, State};
use autometrics::autometrics;
use sqlx::AnyPool;

use crate::auth::SuperAdmin;
use crate::manajemen_venue::repository;
use crate::shared::masukan::Masukan;
use crate::shared::response::{created, ApiResult};
use super::dto::{VenueRequest, VenueResponse};

#[autometrics]
#[post("/venue", format = "json", data = "<masukan>")]
pub async fn buat_venue(
    admin: SuperAdmin,
    db: &State<AnyPool>,
    masukan: Masukan,
) -> ApiResult<VenueResponse> {
    let venue_baru = VenueRequest::into_venue_baru(masukan.isian()?)?;
    let venue = repository::create::tambah_venue(db.inner(), &venue_baru).await?;

    log::info!("Venue {} dibuat oleh pengguna {}", venue.id, admin.0.id);
    created("Venue berhasil dibuat", VenueResponse::from(venue))
}
