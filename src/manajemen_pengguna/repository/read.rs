use sqlx::AnyPool;

use crate::manajemen_pengguna::model::Akun;
use crate::manajemen_pengguna::repository::dto::{row_to_akun, KOLOM_AKUN};
use crate::shared::RepositoryError;

pub async fn ambil_semua_akun(pool: &AnyPool) -> Result<Vec<Akun>, RepositoryError> {
    let sql = format!("SELECT {} FROM users ORDER BY id", KOLOM_AKUN);
    let rows = sqlx::query(&sql).fetch_all(pool).await?;

    rows.iter().map(row_to_akun).collect()
}

pub async fn ambil_akun_by_id(pool: &AnyPool, id: i64) -> Result<Option<Akun>, RepositoryError> {
    let sql = format!("SELECT {} FROM users WHERE id = $1", KOLOM_AKUN);
    let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;

    row.as_ref().map(row_to_akun).transpose()
}

/// Email dibandingkan tanpa membedakan huruf besar kecil.
pub async fn email_sudah_dipakai(pool: &AnyPool, email: &str, kecuali_id: Option<i64>) -> Result<bool, RepositoryError> {
    let jumlah: i64 = match kecuali_id {
        Some(id) => {
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE LOWER(email) = LOWER($1) AND id <> $2")
                .bind(email)
                .bind(id)
                .fetch_one(pool)
                .await?
        }
        None => {
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE LOWER(email) = LOWER($1)")
                .bind(email)
                .fetch_one(pool)
                .await?
        }
    };

    Ok(jumlah > 0)
}
