use rocket::{post, State};
use autometrics::autometrics;
use sqlx::AnyPool;

use crate::auth::AdminVenue;
use crate::manajemen_menu::repository;
use crate::manajemen_venue::controller::venue_atau_404;
use crate::shared::masukan::Masukan;
use crate::shared::response::{created, ApiResult};
use super::dto::{MenuRequest, MenuResponse};

#[autometrics]
#[post("/menu/venue/<venue_id>", format = "json", data = "<masukan>")]
pub async fn tambah_menu(
    admin: AdminVenue,
    db: &State<AnyPool>,
    venue_id: i64,
    masukan: Masukan,
) -> ApiResult<MenuResponse> {
    let venue = venue_atau_404(db.inner(), venue_id).await?;

    let menu_baru = MenuRequest::into_menu_baru(masukan.isian()?, venue.id)?;
    let menu = repository::create::tambah_menu(db.inner(), &menu_baru).await?;

    log::info!("Menu {} dibuat untuk venue {} oleh pengguna {}", menu.id, venue.id, admin.0.id);
    created("Menu berhasil dibuat", MenuResponse::from(menu))
}
