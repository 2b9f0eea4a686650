use sqlx::AnyConnection;
use sqlx::{AnyPool, Row};

use crate::manajemen_pertandingan::model::{Pertandingan, PertandinganBaru};
use crate::manajemen_pertandingan::repository::read::ambil_pertandingan_by_id;
use crate::shared::database::sekarang;
use crate::shared::RepositoryError;

/// Isi ulang relasi venue milik satu pertandingan di dalam transaksi pemanggil.
pub(crate) async fn simpan_venue_ids(
    conn: &mut AnyConnection,
    pertandingan_id: i64,
    venue_ids: &[i64],
) -> Result<(), RepositoryError> {
    sqlx::query("DELETE FROM venue_pertandingan WHERE pertandingan_id = $1")
        .bind(pertandingan_id)
        .execute(&mut *conn)
        .await?;

    let mut unik = venue_ids.to_vec();
    unik.sort_unstable();
    unik.dedup();

    for venue_id in unik {
        sqlx::query("INSERT INTO venue_pertandingan (venue_id, pertandingan_id) VALUES ($1, $2)")
            .bind(venue_id)
            .bind(pertandingan_id)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

pub async fn tambah_pertandingan(
    pool: &AnyPool,
    pertandingan: &PertandinganBaru,
    venue_ids: &[i64],
) -> Result<Pertandingan, RepositoryError> {
    let now = sekarang();
    let mut tx = pool.begin().await?;

    let row = sqlx::query(
        r#"
        INSERT INTO pertandingans
            (nama, kategori_id, tim_tuan_rumah, tim_tamu, liga, waktu_mulai, deskripsi, status, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id
        "#
    )
    .bind(&pertandingan.nama)
    .bind(pertandingan.kategori_id)
    .bind(&pertandingan.tim_tuan_rumah)
    .bind(&pertandingan.tim_tamu)
    .bind(&pertandingan.liga)
    .bind(&pertandingan.waktu_mulai)
    .bind(&pertandingan.deskripsi)
    .bind(pertandingan.status.as_str())
    .bind(&now)
    .bind(&now)
    .fetch_one(&mut *tx)
    .await?;

    let id: i64 = row.try_get("id")?;
    simpan_venue_ids(&mut *tx, id, venue_ids).await?;
    tx.commit().await?;

    ambil_pertandingan_by_id(pool, id).await?.ok_or(RepositoryError::NotFound)
}
