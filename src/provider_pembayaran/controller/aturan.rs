// Aturan validasi yang butuh database: `unique` untuk nama provider dan
// `exists` untuk metode pembayaran.

use sqlx::AnyPool;
use validator::ValidationErrors;

use crate::metode_pembayaran::repository::metode_ada;
use crate::provider_pembayaran::repository::read::nama_sudah_dipakai;
use crate::shared::validation::tambah_error;
use crate::shared::{ApiError, RepositoryError};

const PESAN_NAMA_DIPAKAI: &str = "Kolom nama sudah digunakan.";

pub async fn nama_unik(
    pool: &AnyPool,
    errors: &mut ValidationErrors,
    nama: Option<&str>,
    kecuali_id: Option<i64>,
) -> Result<(), RepositoryError> {
    if let Some(nama) = nama {
        if nama_sudah_dipakai(pool, nama, kecuali_id).await? {
            tambah_error(errors, "nama", "unique", PESAN_NAMA_DIPAKAI.to_string());
        }
    }
    Ok(())
}

pub async fn metode_terdaftar(
    pool: &AnyPool,
    errors: &mut ValidationErrors,
    metode_pembayaran_id: Option<i64>,
) -> Result<(), RepositoryError> {
    if let Some(id) = metode_pembayaran_id {
        if !metode_ada(pool, id).await? {
            tambah_error(
                errors,
                "metode_pembayaran_id",
                "exists",
                "Metode pembayaran yang dipilih tidak valid.".to_string(),
            );
        }
    }
    Ok(())
}

/// Dua request dengan nama sama bisa lolos cek `nama_unik` bersamaan;
/// constraint UNIQUE di database menolak yang kedua.
pub fn tangani_nama_bentrok(error: RepositoryError) -> ApiError {
    if error.is_unique_violation() {
        let mut errors = ValidationErrors::new();
        tambah_error(&mut errors, "nama", "unique", PESAN_NAMA_DIPAKAI.to_string());
        ApiError::Validation(errors)
    } else {
        error.into()
    }
}
