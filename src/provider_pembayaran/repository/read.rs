use sqlx::AnyPool;

use crate::provider_pembayaran::model::ProviderPembayaran;
use crate::provider_pembayaran::repository::dto::{row_to_provider, KOLOM_PROVIDER};
use crate::shared::RepositoryError;

pub async fn ambil_provider_by_venue(pool: &AnyPool, venue_id: i64) -> Result<Vec<ProviderPembayaran>, RepositoryError> {
    let sql = format!("SELECT {} FROM provider_pembayarans WHERE venue_id = $1 ORDER BY id", KOLOM_PROVIDER);
    let rows = sqlx::query(&sql).bind(venue_id).fetch_all(pool).await?;

    rows.iter().map(row_to_provider).collect()
}

/// Provider hanya ditemukan lewat venue pemiliknya.
pub async fn ambil_provider_by_id(pool: &AnyPool, venue_id: i64, id: i64) -> Result<Option<ProviderPembayaran>, RepositoryError> {
    let sql = format!("SELECT {} FROM provider_pembayarans WHERE id = $1 AND venue_id = $2", KOLOM_PROVIDER);
    let row = sqlx::query(&sql)
        .bind(id)
        .bind(venue_id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(row_to_provider).transpose()
}

pub async fn venue_punya_provider(pool: &AnyPool, venue_id: i64) -> Result<bool, RepositoryError> {
    let jumlah: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM provider_pembayarans WHERE venue_id = $1")
        .bind(venue_id)
        .fetch_one(pool)
        .await?;

    Ok(jumlah > 0)
}

/// Aturan `unique` untuk nama; `kecuali_id` dipakai saat update.
pub async fn nama_sudah_dipakai(pool: &AnyPool, nama: &str, kecuali_id: Option<i64>) -> Result<bool, RepositoryError> {
    let jumlah: i64 = match kecuali_id {
        Some(id) => {
            sqlx::query_scalar("SELECT COUNT(*) FROM provider_pembayarans WHERE nama = $1 AND id <> $2")
                .bind(nama)
                .bind(id)
                .fetch_one(pool)
                .await?
        }
        None => {
            sqlx::query_scalar("SELECT COUNT(*) FROM provider_pembayarans WHERE nama = $1")
                .bind(nama)
                .fetch_one(pool)
                .await?
        }
    };

    Ok(jumlah > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{seed_metode, seed_provider, seed_venue, setup_test_db};

    #[tokio::test]
    async fn test_provider_terisolasi_per_venue() {
        let pool = setup_test_db().await;
        let venue_a = seed_venue(&pool, "Kafe A", "Depok").await;
        let venue_b = seed_venue(&pool, "Kafe B", "Depok").await;
        let metode_id = seed_metode(&pool, "Transfer Bank").await;
        let provider_a = seed_provider(&pool, venue_a, metode_id, "BCA-A").await;

        assert_eq!(ambil_provider_by_venue(&pool, venue_a).await.unwrap().len(), 1);
        assert!(ambil_provider_by_venue(&pool, venue_b).await.unwrap().is_empty());

        assert!(ambil_provider_by_id(&pool, venue_a, provider_a).await.unwrap().is_some());
        assert!(ambil_provider_by_id(&pool, venue_b, provider_a).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_venue_punya_provider() {
        let pool = setup_test_db().await;
        let venue_id = seed_venue(&pool, "Kafe A", "Depok").await;
        let metode_id = seed_metode(&pool, "Transfer Bank").await;

        assert!(!venue_punya_provider(&pool, venue_id).await.unwrap());
        seed_provider(&pool, venue_id, metode_id, "BCA").await;
        assert!(venue_punya_provider(&pool, venue_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_nama_sudah_dipakai_mengecualikan_diri_sendiri() {
        let pool = setup_test_db().await;
        let venue_id = seed_venue(&pool, "Kafe A", "Depok").await;
        let metode_id = seed_metode(&pool, "Transfer Bank").await;
        let id = seed_provider(&pool, venue_id, metode_id, "BCA").await;

        assert!(nama_sudah_dipakai(&pool, "BCA", None).await.unwrap());
        assert!(!nama_sudah_dipakai(&pool, "BCA", Some(id)).await.unwrap());
        assert!(nama_sudah_dipakai(&pool, "BCA", Some(id + 1)).await.unwrap());
        assert!(!nama_sudah_dipakai(&pool, "Mandiri", None).await.unwrap());
    }
}
