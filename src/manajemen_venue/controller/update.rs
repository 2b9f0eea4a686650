use rocket::{put, State};
use autometrics::autometrics;
use sqlx::AnyPool;

use crate::auth::SuperAdmin;
use crate::manajemen_venue::repository;
use crate::shared::masukan::Masukan;
use crate::shared::response::{ok, ApiResult};
use super::venue_atau_404;
use super::dto::{into_patch, VenueResponse};

#[autometrics]
#[put("/venue/<id>", format = "json", data = "<masukan>")]
pub async fn ubah_venue(
    admin: SuperAdmin,
    db: &State<AnyPool>,
    id: i64,
    masukan: Masukan,
) -> ApiResult<VenueResponse> {
    let mut venue = venue_atau_404(db.inner(), id).await?;

    let patch = into_patch(masukan.isian()?)?;
    venue.terapkan(patch);
    let venue = repository::update::update_venue(db.inner(), &venue).await?;

    log::info!("Venue {} diperbarui oleh pengguna {}", venue.id, admin.0.id);
    ok("Venue berhasil diperbarui", VenueResponse::from(venue))
}

#[autometrics]
#[put("/venue/status/<id>")]
pub async fn ubah_status_venue(admin: SuperAdmin, db: &State<AnyPool>, id: i64) -> ApiResult<VenueResponse> {
    let mut venue = venue_atau_404(db.inner(), id).await?;

    venue.toggle_status();
    let venue = repository::update::update_venue(db.inner(), &venue).await?;

    log::info!("Status venue {} menjadi {} oleh pengguna {}", venue.id, venue.status, admin.0.id);
    ok("Status venue berhasil diperbarui", VenueResponse::from(venue))
}
