use sqlx::any::AnyRow;
use sqlx::Row;

use crate::provider_pembayaran::model::ProviderPembayaran;
use crate::shared::RepositoryError;

// `aktif` selalu dibaca sebagai integer 0/1
pub const KOLOM_PROVIDER: &str = "id, nama, no_rek, penerima, deskripsi, foto, \
    CASE WHEN aktif THEN 1 ELSE 0 END AS aktif, venue_id, metode_pembayaran_id, created_at, updated_at";

// Convert database row to ProviderPembayaran
pub fn row_to_provider(row: &AnyRow) -> Result<ProviderPembayaran, RepositoryError> {
    Ok(ProviderPembayaran {
        id: row.try_get("id")?,
        nama: row.try_get("nama")?,
        no_rek: row.try_get("no_rek")?,
        penerima: row.try_get("penerima")?,
        deskripsi: row.try_get("deskripsi")?,
        foto: row.try_get("foto")?,
        aktif: row.try_get::<i64, _>("aktif")? != 0,
        venue_id: row.try_get("venue_id")?,
        metode_pembayaran_id: row.try_get("metode_pembayaran_id")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
