use std::collections::HashMap;

use sqlx::any::AnyRow;
use sqlx::{AnyPool, Row};

use crate::metode_pembayaran::model::MetodePembayaran;
use crate::shared::RepositoryError;

fn row_to_metode(row: &AnyRow) -> Result<MetodePembayaran, RepositoryError> {
    Ok(MetodePembayaran {
        id: row.try_get("id")?,
        nama: row.try_get("nama")?,
    })
}

pub async fn ambil_semua_metode(pool: &AnyPool) -> Result<Vec<MetodePembayaran>, RepositoryError> {
    let rows = sqlx::query("SELECT id, nama FROM metode_pembayarans ORDER BY id")
        .fetch_all(pool)
        .await?;

    rows.iter().map(row_to_metode).collect()
}

/// Dipakai aturan validasi `exists`.
pub async fn metode_ada(pool: &AnyPool, id: i64) -> Result<bool, RepositoryError> {
    let jumlah: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM metode_pembayarans WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await?;

    Ok(jumlah > 0)
}

/// Ambil metode untuk sekumpulan id sekaligus, dikunci dengan id.
/// Id yang tidak punya baris cukup tidak muncul di map.
pub async fn ambil_metode_by_ids(pool: &AnyPool, ids: &[i64]) -> Result<HashMap<i64, MetodePembayaran>, RepositoryError> {
    let mut unik: Vec<i64> = ids.to_vec();
    unik.sort_unstable();
    unik.dedup();

    if unik.is_empty() {
        return Ok(HashMap::new());
    }

    let placeholders: Vec<String> = (1..=unik.len()).map(|i| format!("${}", i)).collect();
    let sql = format!(
        "SELECT id, nama FROM metode_pembayarans WHERE id IN ({})",
        placeholders.join(", ")
    );

    let mut query = sqlx::query(&sql);
    for id in &unik {
        query = query.bind(*id);
    }
    let rows = query.fetch_all(pool).await?;

    let mut hasil = HashMap::with_capacity(rows.len());
    for row in rows {
        let metode = row_to_metode(&row)?;
        hasil.insert(metode.id, metode);
    }
    Ok(hasil)
}
