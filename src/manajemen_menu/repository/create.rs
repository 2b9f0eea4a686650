use sqlx::{AnyPool, Row};

use crate::manajemen_menu::model::{Menu, MenuBaru};
use crate::manajemen_menu::repository::read::ambil_menu_by_id;
use crate::shared::database::sekarang;
use crate::shared::RepositoryError;

pub async fn tambah_menu(pool: &AnyPool, menu: &MenuBaru) -> Result<Menu, RepositoryError> {
    let now = sekarang();

    let result = sqlx::query(
        r#"
        INSERT INTO menus (venue_id, nama, harga, deskripsi, foto, aktif, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id
        "#
    )
    .bind(menu.venue_id)
    .bind(&menu.nama)
    .bind(menu.harga)
    .bind(&menu.deskripsi)
    .bind(&menu.foto)
    .bind(menu.aktif)
    .bind(&now)
    .bind(&now)
    .fetch_one(pool)
    .await?;

    let id: i64 = result.try_get("id")?;
    ambil_menu_by_id(pool, menu.venue_id, id)
        .await?
        .ok_or(RepositoryError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{seed_venue, setup_test_db};

    #[tokio::test]
    async fn test_tambah_menu() {
        let pool = setup_test_db().await;
        let venue_id = seed_venue(&pool, "Kafe Bola", "Depok").await;

        let menu = tambah_menu(&pool, &MenuBaru {
            venue_id,
            nama: "Nasi Goreng".to_string(),
            harga: 25000.5,
            deskripsi: None,
            foto: Some("nasgor.png".to_string()),
            aktif: true,
        })
        .await
        .expect("Menu harus tersimpan");

        assert!(menu.id > 0);
        assert_eq!(menu.venue_id, venue_id);
        assert_eq!(menu.harga, 25000.5);
        assert!(menu.aktif);
    }

    #[tokio::test]
    async fn test_tambah_menu_venue_tidak_ada() {
        let pool = setup_test_db().await;

        let result = tambah_menu(&pool, &MenuBaru {
            venue_id: 99,
            nama: "Es Teh".to_string(),
            harga: 5000.0,
            deskripsi: None,
            foto: None,
            aktif: true,
        })
        .await;

        assert!(matches!(result, Err(RepositoryError::DatabaseError(_))));
    }
}
