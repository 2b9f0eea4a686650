use sqlx::AnyPool;

use crate::manajemen_venue::model::Venue;
use crate::manajemen_venue::repository::read::ambil_venue_by_id;
use crate::shared::database::sekarang;
use crate::shared::RepositoryError;

pub async fn update_venue(pool: &AnyPool, venue: &Venue) -> Result<Venue, RepositoryError> {
    let result = sqlx::query(
        r#"
        UPDATE venues
        SET nama = $1, alamat = $2, kota = $3, foto = $4, video = $5, kontak = $6,
            kapasitas = $7, fasilitas = $8, status = $9, updated_at = $10
        WHERE id = $11
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
    .bind(sekarang())
    .bind(venue.id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    ambil_venue_by_id(pool, venue.id).await?.ok_or(RepositoryError::NotFound)
}
