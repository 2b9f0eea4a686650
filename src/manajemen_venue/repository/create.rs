use sqlx::{AnyPool, Row};

use crate::manajemen_venue::model::{Venue, VenueBaru};
use crate::manajemen_venue::repository::read::ambil_venue_by_id;
use crate::shared::database::sekarang;
use crate::shared::RepositoryError;

pub async fn tambah_venue(pool: &AnyPool, venue: &VenueBaru) -> Result<Venue, RepositoryError> {
    let now = sekarang();

    let result = sqlx::query(
        r#"
        INSERT INTO venues (nama, alamat, kota, foto, video, kontak, kapasitas, fasilitas, status, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING id
        "#
    )
    .bind(&venue.nama)
    .bind(&venue.alamat)
    .bind(&venue.kota)
    .bind(&venue.foto)
    .bind(&venue.video)
    .bind(&venue.kontak)
    .bind(venue.kapasitas)
    .bind(&venue.fasilitas)
    .bind(venue.status.as_str())
    .bind(&now)
    .bind(&now)
    .fetch_one(pool)
    .await?;

    let id: i64 = result.try_get("id")?;
    ambil_venue_by_id(pool, id).await?.ok_or(RepositoryError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manajemen_venue::model::StatusVenue;
    use crate::testing::setup_test_db;

    #[tokio::test]
    async fn test_tambah_venue() {
        let pool = setup_test_db().await;

        let venue = tambah_venue(&pool, &VenueBaru {
            nama: "Kafe Bola".to_string(),
            alamat: "Jl. Margonda Raya 100".to_string(),
            kota: "Depok".to_string(),
            foto: None,
            video: Some("promo.mp4".to_string()),
            kontak: "081234567890".to_string(),
            kapasitas: 75,
            fasilitas: Some("Layar lebar, Wi-Fi".to_string()),
            status: StatusVenue::Tersedia,
        })
        .await
        .expect("Venue harus tersimpan");

        assert!(venue.id > 0);
        assert_eq!(venue.nama, "Kafe Bola");
        assert_eq!(venue.kapasitas, 75);
        assert_eq!(venue.foto, None);
        assert_eq!(venue.video, Some("promo.mp4".to_string()));
        assert_eq!(venue.status, StatusVenue::Tersedia);
        assert_eq!(venue.created_at, venue.updated_at);
    }
}
