use sqlx::any::AnyRow;
use sqlx::Row;

use crate::manajemen_venue::model::{StatusVenue, Venue};
use crate::shared::RepositoryError;

pub const KOLOM_VENUE: &str =
    "id, nama, alamat, kota, foto, video, kontak, kapasitas, fasilitas, status, created_at, updated_at";

// Convert database row to Venue
pub fn row_to_venue(row: &AnyRow) -> Result<Venue, RepositoryError> {
    let status: String = row.try_get("status")?;
    let status = status
        .parse::<StatusVenue>()
        .map_err(RepositoryError::Other)?;

    Ok(Venue {
        id: row.try_get("id")?,
        nama: row.try_get("nama")?,
        alamat: row.try_get("alamat")?,
        kota: row.try_get("kota")?,
        foto: row.try_get("foto")?,
        video: row.try_get("video")?,
        kontak: row.try_get("kontak")?,
        kapasitas: row.try_get("kapasitas")?,
        fasilitas: row.try_get("fasilitas")?,
        status,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
