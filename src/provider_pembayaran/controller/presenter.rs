// Menyusun respons provider beserta metode pembayarannya.
//
// Metode diambil dalam satu query terpisah untuk seluruh provider, lalu
// digabung lewat id. Provider yang metodenya sudah tidak ada tetap tampil
// dengan `metode_pembayaran: null`.

use sqlx::AnyPool;

use crate::metode_pembayaran::repository::ambil_metode_by_ids;
use crate::provider_pembayaran::model::ProviderPembayaran;
use crate::shared::RepositoryError;
use super::dto::ProviderPembayaranResponse;

pub async fn tampilkan_semua(
    pool: &AnyPool,
    providers: Vec<ProviderPembayaran>,
) -> Result<Vec<ProviderPembayaranResponse>, RepositoryError> {
    let ids: Vec<i64> = providers.iter().map(|p| p.metode_pembayaran_id).collect();
    let metode = ambil_metode_by_ids(pool, &ids).await?;

    Ok(providers
        .into_iter()
        .map(|provider| {
            let m = metode.get(&provider.metode_pembayaran_id).cloned();
            ProviderPembayaranResponse::dari(provider, m)
        })
        .collect())
}

pub async fn tampilkan(
    pool: &AnyPool,
    provider: ProviderPembayaran,
) -> Result<ProviderPembayaranResponse, RepositoryError> {
    let metode = ambil_metode_by_ids(pool, &[provider.metode_pembayaran_id]).await?;
    let m = metode.get(&provider.metode_pembayaran_id).cloned();
    Ok(ProviderPembayaranResponse::dari(provider, m))
}
