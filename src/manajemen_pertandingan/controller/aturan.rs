// Aturan `exists` untuk kategori dan venue yang dipilih.

use sqlx::AnyPool;
use validator::ValidationErrors;

use crate::kategori::repository::kategori_ada;
use crate::manajemen_venue::repository::read::semua_venue_ada;
use crate::shared::validation::tambah_error;
use crate::shared::RepositoryError;

pub async fn kategori_terdaftar(
    pool: &AnyPool,
    errors: &mut ValidationErrors,
    kategori_id: Option<i64>,
) -> Result<(), RepositoryError> {
    if let Some(id) = kategori_id {
        if !kategori_ada(pool, id).await? {
            tambah_error(errors, "kategori_id", "exists", "Kategori yang dipilih tidak valid.".to_string());
        }
    }
    Ok(())
}

pub async fn venue_terdaftar(
    pool: &AnyPool,
    errors: &mut ValidationErrors,
    venue_ids: Option<&[i64]>,
) -> Result<(), RepositoryError> {
    if let Some(ids) = venue_ids {
        if !semua_venue_ada(pool, ids).await? {
            tambah_error(errors, "venue_ids", "exists", "Venue yang dipilih tidak valid.".to_string());
        }
    }
    Ok(())
}
