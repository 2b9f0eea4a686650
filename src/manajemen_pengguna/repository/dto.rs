use sqlx::any::AnyRow;
use sqlx::Row;

use crate::auth::Role;
use crate::manajemen_pengguna::model::Akun;
use crate::shared::RepositoryError;

pub const KOLOM_AKUN: &str = "id, nama, email, role, created_at, updated_at";

pub fn row_to_akun(row: &AnyRow) -> Result<Akun, RepositoryError> {
    let role: String = row.try_get("role")?;
    let role = role.parse::<Role>().map_err(RepositoryError::Other)?;

    Ok(Akun {
        id: row.try_get("id")?,
        nama: row.try_get("nama")?,
        email: row.try_get("email")?,
        role,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
