use sqlx::AnyPool;

use crate::shared::RepositoryError;

// Hapus pengguna beserta seluruh token aksesnya
pub async fn hapus_akun(pool: &AnyPool, id: i64) -> Result<bool, RepositoryError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM personal_access_tokens WHERE user_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{buat_token, seed_pengguna, setup_test_db};

    #[tokio::test]
    async fn test_hapus_akun_beserta_token() {
        let pool = setup_test_db().await;
        let budi = seed_pengguna(&pool, "Budi", "budi@venue.id", "infobar").await;
        let sari = seed_pengguna(&pool, "Sari", "sari@venue.id", "infobar").await;
        buat_token(&pool, budi, "rahasia-budi").await;
        buat_token(&pool, sari, "rahasia-sari").await;

        assert!(hapus_akun(&pool, budi).await.unwrap());
        assert!(!hapus_akun(&pool, budi).await.unwrap());

        let token: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM personal_access_tokens")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(token, 1);
    }
}
