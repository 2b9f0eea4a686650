use sqlx::any::AnyRow;
use sqlx::Row;

use crate::manajemen_menu::model::Menu;
use crate::shared::RepositoryError;

pub const KOLOM_MENU: &str =
    "id, venue_id, nama, harga, deskripsi, foto, CASE WHEN aktif THEN 1 ELSE 0 END AS aktif, created_at, updated_at";

pub fn row_to_menu(row: &AnyRow) -> Result<Menu, RepositoryError> {
    Ok(Menu {
        id: row.try_get("id")?,
        venue_id: row.try_get("venue_id")?,
        nama: row.try_get("nama")?,
        harga: row.try_get("harga")?,
        deskripsi: row.try_get("deskripsi")?,
        foto: row.try_get("foto")?,
        aktif: row.try_get::<i64, _>("aktif")? != 0,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{seed_menu, seed_venue, setup_test_db};

    #[tokio::test]
    async fn test_row_to_menu_membaca_aktif() {
        let pool = setup_test_db().await;
        let venue_id = seed_venue(&pool, "Kafe Bola", "Depok").await;
        let kopi = seed_menu(&pool, venue_id, "Kopi", 15000.0, true).await;
        let teh = seed_menu(&pool, venue_id, "Teh", 8000.0, false).await;

        let sql = format!("SELECT {} FROM menus WHERE id = $1", KOLOM_MENU);
        let row = sqlx::query(&sql).bind(kopi).fetch_one(&pool).await.unwrap();
        assert!(row_to_menu(&row).unwrap().aktif);
        let row = sqlx::query(&sql).bind(teh).fetch_one(&pool).await.unwrap();
        let menu = row_to_menu(&row).unwrap();
        assert!(!menu.aktif);
        assert_eq!(menu.harga, 8000.0);
    }
}
