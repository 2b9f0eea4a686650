use rocket::{get, State};
use autometrics::autometrics;
use sqlx::AnyPool;

use crate::auth::AdminVenue;
use crate::manajemen_menu::model::Menu;
use crate::manajemen_menu::repository;
use crate::manajemen_venue::controller::venue_atau_404;
use crate::shared::response::{ok, ApiResult};
use crate::shared::ApiError;
use super::dto::MenuResponse;

fn ke_response(menus: Vec<Menu>) -> Vec<MenuResponse> {
    menus.into_iter().map(MenuResponse::from).collect()
}

#[autometrics]
#[get("/menu/venue/<venue_id>")]
pub async fn ambil_menu_berdasarkan_venue(
    _admin: AdminVenue,
    db: &State<AnyPool>,
    venue_id: i64,
) -> ApiResult<Vec<MenuResponse>> {
    let venue = venue_atau_404(db.inner(), venue_id).await?;
    let menus = repository::read::ambil_menu_by_venue(db.inner(), venue.id).await?;
    ok("Data berhasil diambil", ke_response(menus))
}

#[autometrics]
#[get("/menu/venue/<venue_id>/aktif")]
pub async fn menu_aktif_berdasarkan_venue(
    _admin: AdminVenue,
    db: &State<AnyPool>,
    venue_id: i64,
) -> ApiResult<Vec<MenuResponse>> {
    let venue = venue_atau_404(db.inner(), venue_id).await?;
    let menus = repository::read::ambil_menu_aktif_by_venue(db.inner(), venue.id).await?;
    ok("Data berhasil diambil", ke_response(menus))
}

#[autometrics]
#[get("/menu/venue/<venue_id>/<menu_id>", rank = 2)]
pub async fn detail_menu(
    _admin: AdminVenue,
    db: &State<AnyPool>,
    venue_id: i64,
    menu_id: i64,
) -> ApiResult<MenuResponse> {
    let venue = venue_atau_404(db.inner(), venue_id).await?;
    let menu = repository::read::ambil_menu_by_id(db.inner(), venue.id, menu_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Menu tidak ditemukan untuk venue ini"))?;

    ok("Data berhasil diambil", MenuResponse::from(menu))
}
