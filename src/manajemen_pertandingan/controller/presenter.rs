// Menyusun respons pertandingan beserta kategori dan daftar id venue.
//
// Kategori dan relasi venue diambil masing-masing dengan satu query untuk
// seluruh pertandingan lalu digabung lewat id.

use sqlx::AnyPool;

use crate::kategori::repository::ambil_kategori_by_ids;
use crate::manajemen_pertandingan::model::Pertandingan;
use crate::manajemen_pertandingan::repository::read::ambil_venue_ids_by_pertandingan;
use crate::shared::RepositoryError;
use super::dto::PertandinganResponse;

pub async fn tampilkan_semua(
    pool: &AnyPool,
    daftar: Vec<Pertandingan>,
) -> Result<Vec<PertandinganResponse>, RepositoryError> {
    let kategori_ids: Vec<i64> = daftar.iter().map(|p| p.kategori_id).collect();
    let ids: Vec<i64> = daftar.iter().map(|p| p.id).collect();
    let kategori = ambil_kategori_by_ids(pool, &kategori_ids).await?;
    let mut venue_ids = ambil_venue_ids_by_pertandingan(pool, &ids).await?;

    Ok(daftar
        .into_iter()
        .map(|pertandingan| {
            let k = kategori.get(&pertandingan.kategori_id).cloned();
            let v = venue_ids.remove(&pertandingan.id).unwrap_or_default();
            PertandinganResponse::dari(pertandingan, k, v)
        })
        .collect())
}

pub async fn tampilkan(pool: &AnyPool, pertandingan: Pertandingan) -> Result<PertandinganResponse, RepositoryError> {
    let mut hasil = tampilkan_semua(pool, vec![pertandingan]).await?;
    hasil.pop().ok_or(RepositoryError::NotFound)
}
