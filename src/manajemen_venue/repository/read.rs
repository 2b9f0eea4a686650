use sqlx::AnyPool;

use crate::manajemen_venue::model::{StatusVenue, Venue};
use crate::manajemen_venue::repository::dto::{row_to_venue, KOLOM_VENUE};
use crate::shared::RepositoryError;

pub async fn ambil_semua_venue(pool: &AnyPool) -> Result<Vec<Venue>, RepositoryError> {
    let sql = format!("SELECT {} FROM venues ORDER BY id", KOLOM_VENUE);
    let rows = sqlx::query(&sql).fetch_all(pool).await?;

    rows.iter().map(row_to_venue).collect()
}

pub async fn ambil_venue_by_id(pool: &AnyPool, id: i64) -> Result<Option<Venue>, RepositoryError> {
    let sql = format!("SELECT {} FROM venues WHERE id = $1", KOLOM_VENUE);
    let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;

    row.as_ref().map(row_to_venue).transpose()
}

pub async fn ambil_venue_aktif(pool: &AnyPool) -> Result<Vec<Venue>, RepositoryError> {
    let sql = format!("SELECT {} FROM venues WHERE status = $1 ORDER BY id", KOLOM_VENUE);
    let rows = sqlx::query(&sql)
        .bind(StatusVenue::Tersedia.as_str())
        .fetch_all(pool)
        .await?;

    rows.iter().map(row_to_venue).collect()
}

pub async fn ambil_venue_by_kota(pool: &AnyPool, kota: &str) -> Result<Vec<Venue>, RepositoryError> {
    let sql = format!("SELECT {} FROM venues WHERE LOWER(kota) = LOWER($1) ORDER BY id", KOLOM_VENUE);
    let rows = sqlx::query(&sql).bind(kota.trim()).fetch_all(pool).await?;

    rows.iter().map(row_to_venue).collect()
}

pub async fn ambil_venue_by_pertandingan(pool: &AnyPool, pertandingan_id: i64) -> Result<Vec<Venue>, RepositoryError> {
    let sql = format!(
        "SELECT {} FROM venues WHERE id IN (SELECT venue_id FROM venue_pertandingan WHERE pertandingan_id = $1) ORDER BY id",
        KOLOM_VENUE
    );
    let rows = sqlx::query(&sql).bind(pertandingan_id).fetch_all(pool).await?;

    rows.iter().map(row_to_venue).collect()
}

/// True kalau setiap id di `ids` punya baris venue. Daftar kosong selalu lolos.
pub async fn semua_venue_ada(pool: &AnyPool, ids: &[i64]) -> Result<bool, RepositoryError> {
    let mut unik: Vec<i64> = ids.to_vec();
    unik.sort_unstable();
    unik.dedup();

    if unik.is_empty() {
        return Ok(true);
    }

    let placeholders: Vec<String> = (1..=unik.len()).map(|i| format!("${}", i)).collect();
    let sql = format!("SELECT COUNT(*) FROM venues WHERE id IN ({})", placeholders.join(", "));

    let mut query = sqlx::query_scalar::<_, i64>(&sql);
    for id in &unik {
        query = query.bind(*id);
    }
    let jumlah = query.fetch_one(pool).await?;

    Ok(jumlah == unik.len() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        hubungkan_venue, seed_kategori, seed_pertandingan, seed_venue, seed_venue_dengan_status, setup_test_db,
    };

    #[tokio::test]
    async fn test_ambil_venue_by_id() {
        let pool = setup_test_db().await;
        let id = seed_venue(&pool, "Kafe Bola", "Depok").await;

        let venue = ambil_venue_by_id(&pool, id).await.unwrap();
        assert_eq!(venue.map(|v| v.nama), Some("Kafe Bola".to_string()));

        assert!(ambil_venue_by_id(&pool, id + 100).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ambil_venue_aktif_hanya_tersedia() {
        let pool = setup_test_db().await;
        seed_venue(&pool, "Kafe Bola", "Depok").await;
        seed_venue_dengan_status(&pool, "Gudang Tutup", "Depok", "tidak_tersedia").await;
        seed_venue(&pool, "Warung Nobar", "Jakarta").await;

        let aktif = ambil_venue_aktif(&pool).await.unwrap();

        assert_eq!(aktif.len(), 2);
        assert!(aktif.iter().all(|v| v.status == StatusVenue::Tersedia));
    }

    #[tokio::test]
    async fn test_ambil_venue_by_kota_tidak_case_sensitive() {
        let pool = setup_test_db().await;
        seed_venue(&pool, "Kafe Bola", "Depok").await;
        seed_venue(&pool, "Warung Nobar", "Jakarta").await;

        let venues = ambil_venue_by_kota(&pool, "depok").await.unwrap();

        assert_eq!(venues.len(), 1);
        assert_eq!(venues[0].nama, "Kafe Bola");
        assert!(ambil_venue_by_kota(&pool, "Bandung").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ambil_semua_venue_urut_id() {
        let pool = setup_test_db().await;
        let a = seed_venue(&pool, "A", "Depok").await;
        let b = seed_venue(&pool, "B", "Depok").await;

        let ids: Vec<i64> = ambil_semua_venue(&pool).await.unwrap().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[tokio::test]
    async fn test_ambil_venue_by_pertandingan() {
        let pool = setup_test_db().await;
        let kategori_id = seed_kategori(&pool, "Sepak Bola").await;
        let derby = seed_pertandingan(&pool, kategori_id, "Derby", "aktif").await;
        let final_id = seed_pertandingan(&pool, kategori_id, "Final", "aktif").await;
        let a = seed_venue(&pool, "Kafe A", "Depok").await;
        let b = seed_venue(&pool, "Kafe B", "Depok").await;
        hubungkan_venue(&pool, b, derby).await;
        hubungkan_venue(&pool, a, derby).await;
        hubungkan_venue(&pool, b, final_id).await;

        let ids: Vec<i64> = ambil_venue_by_pertandingan(&pool, derby).await.unwrap().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![a, b]);
        assert!(ambil_venue_by_pertandingan(&pool, derby + final_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_semua_venue_ada() {
        let pool = setup_test_db().await;
        let a = seed_venue(&pool, "Kafe A", "Depok").await;
        let b = seed_venue(&pool, "Kafe B", "Depok").await;

        assert!(semua_venue_ada(&pool, &[a, b, a]).await.unwrap());
        assert!(semua_venue_ada(&pool, &[]).await.unwrap());
        assert!(!semua_venue_ada(&pool, &[a, b + 100]).await.unwrap());
    }
}
