use sqlx::AnyPool;

use crate::shared::RepositoryError;

pub async fn hapus_menu(pool: &AnyPool, venue_id: i64, id: i64) -> Result<bool, RepositoryError> {
    let result = sqlx::query("DELETE FROM menus WHERE id = $1 AND venue_id = $2")
        .bind(id)
        .bind(venue_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
