use sqlx::AnyPool;

use crate::manajemen_pengguna::model::Akun;
use crate::manajemen_pengguna::repository::read::ambil_akun_by_id;
use crate::shared::database::sekarang;
use crate::shared::RepositoryError;

pub async fn update_akun(pool: &AnyPool, akun: &Akun) -> Result<Akun, RepositoryError> {
    let result = sqlx::query("UPDATE users SET nama = $1, email = $2, role = $3, updated_at = $4 WHERE id = $5")
        .bind(&akun.nama)
        .bind(&akun.email)
        .bind(akun.role.as_str())
        .bind(sekarang())
        .bind(akun.id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    ambil_akun_by_id(pool, akun.id).await?.ok_or(RepositoryError::NotFound)
}
