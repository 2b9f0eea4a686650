use sqlx::AnyPool;

use crate::manajemen_menu::model::Menu;
use crate::manajemen_menu::repository::read::ambil_menu_by_id;
use crate::shared::database::sekarang;
use crate::shared::RepositoryError;

pub async fn update_menu(pool: &AnyPool, menu: &Menu) -> Result<Menu, RepositoryError> {
    let result = sqlx::query(
        r#"
        UPDATE menus
        SET nama = $1, harga = $2, deskripsi = $3, foto = $4, aktif = $5, updated_at = $6
        WHERE id = $7 AND venue_id = $8
        "#
    )
    .bind(&menu.nama)
    .bind(menu.harga)
    .bind(&menu.deskripsi)
    .bind(&menu.foto)
    .bind(menu.aktif)
    .bind(sekarang())
    .bind(menu.id)
    .bind(menu.venue_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    ambil_menu_by_id(pool, menu.venue_id, menu.id)
        .await?
        .ok_or(RepositoryError::NotFound)
}
