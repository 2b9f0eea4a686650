use std::collections::HashMap;

use sqlx::{AnyPool, Row};

use crate::manajemen_pertandingan::model::{Pertandingan, StatusPertandingan};
use crate::manajemen_pertandingan::repository::dto::{row_to_pertandingan, KOLOM_PERTANDINGAN};
use crate::shared::RepositoryError;

pub async fn ambil_semua_pertandingan(pool: &AnyPool) -> Result<Vec<Pertandingan>, RepositoryError> {
    let sql = format!("SELECT {} FROM pertandingans ORDER BY waktu_mulai, id", KOLOM_PERTANDINGAN);
    let rows = sqlx::query(&sql).fetch_all(pool).await?;

    rows.iter().map(row_to_pertandingan).collect()
}

pub async fn ambil_pertandingan_aktif(pool: &AnyPool) -> Result<Vec<Pertandingan>, RepositoryError> {
    let sql = format!(
        "SELECT {} FROM pertandingans WHERE status = $1 ORDER BY waktu_mulai, id",
        KOLOM_PERTANDINGAN
    );
    let rows = sqlx::query(&sql)
        .bind(StatusPertandingan::Aktif.as_str())
        .fetch_all(pool)
        .await?;

    rows.iter().map(row_to_pertandingan).collect()
}

pub async fn ambil_pertandingan_by_id(pool: &AnyPool, id: i64) -> Result<Option<Pertandingan>, RepositoryError> {
    let sql = format!("SELECT {} FROM pertandingans WHERE id = $1", KOLOM_PERTANDINGAN);
    let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;

    row.as_ref().map(row_to_pertandingan).transpose()
}

pub async fn ambil_venue_ids(pool: &AnyPool, pertandingan_id: i64) -> Result<Vec<i64>, RepositoryError> {
    let ids = sqlx::query_scalar(
        "SELECT venue_id FROM venue_pertandingan WHERE pertandingan_id = $1 ORDER BY venue_id",
    )
    .bind(pertandingan_id)
    .fetch_all(pool)
    .await?;

    Ok(ids)
}

/// Relasi venue untuk banyak pertandingan sekaligus, dikunci dengan id pertandingan.
pub async fn ambil_venue_ids_by_pertandingan(
    pool: &AnyPool,
    pertandingan_ids: &[i64],
) -> Result<HashMap<i64, Vec<i64>>, RepositoryError> {
    if pertandingan_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let placeholders: Vec<String> = (1..=pertandingan_ids.len()).map(|i| format!("${}", i)).collect();
    let sql = format!(
        "SELECT pertandingan_id, venue_id FROM venue_pertandingan WHERE pertandingan_id IN ({}) \
         ORDER BY pertandingan_id, venue_id",
        placeholders.join(", ")
    );

    let mut query = sqlx::query(&sql);
    for id in pertandingan_ids {
        query = query.bind(*id);
    }
    let rows = query.fetch_all(pool).await?;

    let mut hasil: HashMap<i64, Vec<i64>> = HashMap::new();
    for row in rows {
        let pertandingan_id: i64 = row.try_get("pertandingan_id")?;
        let venue_id: i64 = row.try_get("venue_id")?;
        hasil.entry(pertandingan_id).or_default().push(venue_id);
    }
    Ok(hasil)
}
