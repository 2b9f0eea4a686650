use sqlx::AnyPool;

use crate::shared::RepositoryError;

// Hapus venue beserta provider pembayaran, menu, dan relasi pertandingannya
pub async fn hapus_venue(pool: &AnyPool, id: i64) -> Result<bool, RepositoryError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM provider_pembayarans WHERE venue_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM menus WHERE venue_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM venue_pertandingan WHERE venue_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM venues WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(result.rows_affected() > 0)
}
