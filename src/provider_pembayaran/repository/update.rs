use sqlx::AnyPool;

use crate::provider_pembayaran::model::ProviderPembayaran;
use crate::provider_pembayaran::repository::read::ambil_provider_by_id;
use crate::shared::database::sekarang;
use crate::shared::RepositoryError;

// Simpan seluruh field provider; venue pemilik tidak pernah berubah
pub async fn update_provider(pool: &AnyPool, provider: &ProviderPembayaran) -> Result<ProviderPembayaran, RepositoryError> {
    let result = sqlx::query(
        r#"
        UPDATE provider_pembayarans
        SET nama = $1, no_rek = $2, penerima = $3, deskripsi = $4, foto = $5,
            aktif = $6, metode_pembayaran_id = $7, updated_at = $8
        WHERE id = $9 AND venue_id = $10
        "#
    )
    .bind(&provider.nama)
    .bind(&provider.no_rek)
    .bind(&provider.penerima)
    .bind(&provider.deskripsi)
    .bind(&provider.foto)
    .bind(provider.aktif)
    .bind(provider.metode_pembayaran_id)
    .bind(sekarang())
    .bind(provider.id)
    .bind(provider.venue_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    ambil_provider_by_id(pool, provider.venue_id, provider.id)
        .await?
        .ok_or(RepositoryError::NotFound)
}
