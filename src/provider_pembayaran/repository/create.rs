use sqlx::{AnyPool, Row};

use crate::provider_pembayaran::model::{ProviderPembayaran, ProviderPembayaranBaru};
use crate::provider_pembayaran::repository::read::ambil_provider_by_id;
use crate::shared::database::sekarang;
use crate::shared::RepositoryError;

pub async fn tambah_provider(pool: &AnyPool, provider: &ProviderPembayaranBaru) -> Result<ProviderPembayaran, RepositoryError> {
    let now = sekarang();

    let result = sqlx::query(
        r#"
        INSERT INTO provider_pembayarans
            (nama, no_rek, penerima, deskripsi, foto, aktif, venue_id, metode_pembayaran_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id
        "#
    )
    .bind(&provider.nama)
    .bind(&provider.no_rek)
    .bind(&provider.penerima)
    .bind(&provider.deskripsi)
    .bind(&provider.foto)
    .bind(provider.aktif)
    .bind(provider.venue_id)
    .bind(provider.metode_pembayaran_id)
    .bind(&now)
    .bind(&now)
    .fetch_one(pool)
    .await?;

    let id: i64 = result.try_get("id")?;
    ambil_provider_by_id(pool, provider.venue_id, id)
        .await?
        .ok_or(RepositoryError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider_pembayaran::model::ProviderPembayaranBuilder;
    use crate::testing::{seed_metode, seed_venue, setup_test_db};

    #[tokio::test]
    async fn test_tambah_provider() {
        let pool = setup_test_db().await;
        let venue_id = seed_venue(&pool, "Kafe Bola", "Depok").await;
        let metode_id = seed_metode(&pool, "Transfer Bank").await;

        let baru = ProviderPembayaranBuilder::new("BCA-5".to_string(), "123".to_string(), "Toko A".to_string(), venue_id, metode_id)
            .deskripsi(Some("Rekening utama".to_string()))
            .build();
        let provider = tambah_provider(&pool, &baru).await.expect("Provider harus tersimpan");

        assert!(provider.id > 0);
        assert_eq!(provider.nama, "BCA-5");
        assert_eq!(provider.venue_id, venue_id);
        assert_eq!(provider.metode_pembayaran_id, metode_id);
        assert!(provider.aktif);
        assert_eq!(provider.foto, None);
    }

    #[tokio::test]
    async fn test_nama_duplikat_ditolak_database() {
        let pool = setup_test_db().await;
        let venue_a = seed_venue(&pool, "Kafe A", "Depok").await;
        let venue_b = seed_venue(&pool, "Kafe B", "Depok").await;
        let metode_id = seed_metode(&pool, "Transfer Bank").await;

        let pertama = ProviderPembayaranBuilder::new("BCA".to_string(), "1".to_string(), "A".to_string(), venue_a, metode_id).build();
        tambah_provider(&pool, &pertama).await.unwrap();

        let kedua = ProviderPembayaranBuilder::new("BCA".to_string(), "2".to_string(), "B".to_string(), venue_b, metode_id).build();
        let err = tambah_provider(&pool, &kedua).await.unwrap_err();

        assert!(err.is_unique_violation());
    }
}
