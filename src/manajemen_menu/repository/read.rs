use sqlx::AnyPool;

use crate::manajemen_menu::model::Menu;
use crate::manajemen_menu::repository::dto::{row_to_menu, KOLOM_MENU};
use crate::shared::RepositoryError;

pub async fn ambil_menu_by_venue(pool: &AnyPool, venue_id: i64) -> Result<Vec<Menu>, RepositoryError> {
    let sql = format!("SELECT {} FROM menus WHERE venue_id = $1 ORDER BY id", KOLOM_MENU);
    let rows = sqlx::query(&sql).bind(venue_id).fetch_all(pool).await?;

    rows.iter().map(row_to_menu).collect()
}

pub async fn ambil_menu_aktif_by_venue(pool: &AnyPool, venue_id: i64) -> Result<Vec<Menu>, RepositoryError> {
    let sql = format!("SELECT {} FROM menus WHERE venue_id = $1 AND aktif = $2 ORDER BY id", KOLOM_MENU);
    let rows = sqlx::query(&sql)
        .bind(venue_id)
        .bind(true)
        .fetch_all(pool)
        .await?;

    rows.iter().map(row_to_menu).collect()
}

pub async fn ambil_menu_by_id(pool: &AnyPool, venue_id: i64, id: i64) -> Result<Option<Menu>, RepositoryError> {
    let sql = format!("SELECT {} FROM menus WHERE id = $1 AND venue_id = $2", KOLOM_MENU);
    let row = sqlx::query(&sql)
        .bind(id)
        .bind(venue_id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(row_to_menu).transpose()
}
