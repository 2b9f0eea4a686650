use sqlx::AnyPool;

use crate::manajemen_pertandingan::model::Pertandingan;
use crate::manajemen_pertandingan::repository::create::simpan_venue_ids;
use crate::manajemen_pertandingan::repository::read::ambil_pertandingan_by_id;
use crate::shared::database::sekarang;
use crate::shared::RepositoryError;

/// `venue_ids` `None` berarti relasi venue tidak diubah.
pub async fn update_pertandingan(
    pool: &AnyPool,
    pertandingan: &Pertandingan,
    venue_ids: Option<&[i64]>,
) -> Result<Pertandingan, RepositoryError> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE pertandingans
        SET nama = $1, kategori_id = $2, tim_tuan_rumah = $3, tim_tamu = $4, liga = $5,
            waktu_mulai = $6, deskripsi = $7, status = $8, updated_at = $9
        WHERE id = $10
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
    .bind(sekarang())
    .bind(pertandingan.id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    if let Some(venue_ids) = venue_ids {
        simpan_venue_ids(&mut *tx, pertandingan.id, venue_ids).await?;
    }
    tx.commit().await?;

    ambil_pertandingan_by_id(pool, pertandingan.id).await?.ok_or(RepositoryError::NotFound)
}
