use sqlx::AnyPool;

use crate::shared::RepositoryError;

pub async fn hapus_pertandingan(pool: &AnyPool, id: i64) -> Result<bool, RepositoryError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM venue_pertandingan WHERE pertandingan_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM pertandingans WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(result.rows_affected() > 0)
}
