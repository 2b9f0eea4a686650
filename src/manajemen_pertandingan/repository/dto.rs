use sqlx::any::AnyRow;
use sqlx::Row;

use crate::manajemen_pertandingan::model::{Pertandingan, StatusPertandingan};
use crate::shared::RepositoryError;

pub const KOLOM_PERTANDINGAN: &str = "id, nama, kategori_id, tim_tuan_rumah, tim_tamu, liga, waktu_mulai, \
    deskripsi, status, created_at, updated_at";

pub fn row_to_pertandingan(row: &AnyRow) -> Result<Pertandingan, RepositoryError> {
    let status: String = row.try_get("status")?;
    let status = status
        .parse::<StatusPertandingan>()
        .map_err(RepositoryError::Other)?;

    Ok(Pertandingan {
        id: row.try_get("id")?,
        nama: row.try_get("nama")?,
        kategori_id: row.try_get("kategori_id")?,
        tim_tuan_rumah: row.try_get("tim_tuan_rumah")?,
        tim_tamu: row.try_get("tim_tamu")?,
        liga: row.try_get("liga")?,
        waktu_mulai: row.try_get("waktu_mulai")?,
        deskripsi: row.try_get("deskripsi")?,
        status,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
