use std::collections::HashMap;

use sqlx::any::AnyRow;
use sqlx::{AnyPool, Row};

use crate::kategori::model::Kategori;
use crate::shared::database::sekarang;
use crate::shared::RepositoryError;

const KOLOM_KATEGORI: &str = "id, nama, slug, deskripsi";

fn row_to_kategori(row: &AnyRow) -> Result<Kategori, RepositoryError> {
    Ok(Kategori {
        id: row.try_get("id")?,
        nama: row.try_get("nama")?,
        slug: row.try_get("slug")?,
        deskripsi: row.try_get("deskripsi")?,
    })
}

pub async fn ambil_semua_kategori(pool: &AnyPool) -> Result<Vec<Kategori>, RepositoryError> {
    let sql = format!("SELECT {} FROM kategori ORDER BY nama, id", KOLOM_KATEGORI);
    let rows = sqlx::query(&sql).fetch_all(pool).await?;

    rows.iter().map(row_to_kategori).collect()
}

pub async fn ambil_kategori_by_id(pool: &AnyPool, id: i64) -> Result<Option<Kategori>, RepositoryError> {
    let sql = format!("SELECT {} FROM kategori WHERE id = $1", KOLOM_KATEGORI);
    let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;

    row.as_ref().map(row_to_kategori).transpose()
}

pub async fn tambah_kategori(
    pool: &AnyPool,
    nama: &str,
    slug: &str,
    deskripsi: Option<&str>,
) -> Result<Kategori, RepositoryError> {
    let now = sekarang();
    let row = sqlx::query(
        "INSERT INTO kategori (nama, slug, deskripsi, created_at, updated_at) VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(nama)
    .bind(slug)
    .bind(deskripsi)
    .bind(&now)
    .bind(&now)
    .fetch_one(pool)
    .await?;

    let id: i64 = row.try_get("id")?;
    ambil_kategori_by_id(pool, id).await?.ok_or(RepositoryError::NotFound)
}

pub async fn slug_sudah_dipakai(pool: &AnyPool, slug: &str) -> Result<bool, RepositoryError> {
    let jumlah: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM kategori WHERE slug = $1")
        .bind(slug)
        .fetch_one(pool)
        .await?;

    Ok(jumlah > 0)
}

/// Dipakai aturan validasi `exists`.
pub async fn kategori_ada(pool: &AnyPool, id: i64) -> Result<bool, RepositoryError> {
    let jumlah: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM kategori WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await?;

    Ok(jumlah > 0)
}

pub async fn ambil_kategori_by_ids(pool: &AnyPool, ids: &[i64]) -> Result<HashMap<i64, Kategori>, RepositoryError> {
    let mut unik: Vec<i64> = ids.to_vec();
    unik.sort_unstable();
    unik.dedup();

    if unik.is_empty() {
        return Ok(HashMap::new());
    }

    let placeholders: Vec<String> = (1..=unik.len()).map(|i| format!("${}", i)).collect();
    let sql = format!(
        "SELECT {} FROM kategori WHERE id IN ({})",
        KOLOM_KATEGORI,
        placeholders.join(", ")
    );

    let mut query = sqlx::query(&sql);
    for id in &unik {
        query = query.bind(*id);
    }
    let rows = query.fetch_all(pool).await?;

    let mut hasil = HashMap::with_capacity(rows.len());
    for row in rows {
        let kategori = row_to_kategori(&row)?;
        hasil.insert(kategori.id, kategori);
    }
    Ok(hasil)
}
