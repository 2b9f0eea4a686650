use rocket::{put, State};
use autometrics::autometrics;
use sqlx::AnyPool;
use validator::ValidationErrors;

use crate::auth::SuperAdmin;
use crate::manajemen_pengguna::repository;
use crate::shared::masukan::Masukan;
use crate::shared::response::{ok, ApiResult};
use crate::shared::validation::{hasil, tambah_error};
use crate::shared::{ApiError, RepositoryError};
use super::akun_atau_404;
use super::dto::{validasi_update, AkunResponse};

const PESAN_EMAIL_DIPAKAI: &str = "Kolom email sudah digunakan.";

fn tangani_email_bentrok(error: RepositoryError) -> ApiError {
    if error.is_unique_violation() {
        let mut errors = ValidationErrors::new();
        tambah_error(&mut errors, "email", "unique", PESAN_EMAIL_DIPAKAI.to_string());
        ApiError::Validation(errors)
    } else {
        error.into()
    }
}

#[autometrics]
#[put("/user/<id>", format = "json", data = "<masukan>")]
pub async fn ubah_pengguna(
    admin: SuperAdmin,
    db: &State<AnyPool>,
    id: i64,
    masukan: Masukan,
) -> ApiResult<AkunResponse> {
    let pool = db.inner();
    let mut akun = akun_atau_404(pool, id).await?;

    let (patch, mut errors) = validasi_update(masukan.isian()?);
    if let Some(email) = patch.email.as_deref() {
        if repository::read::email_sudah_dipakai(pool, email, Some(akun.id)).await? {
            tambah_error(&mut errors, "email", "unique", PESAN_EMAIL_DIPAKAI.to_string());
        }
    }
    hasil(errors)?;

    akun.terapkan(patch);
    let akun = repository::update::update_akun(pool, &akun)
        .await
        .map_err(tangani_email_bentrok)?;

    log::info!("Pengguna {} diperbarui oleh pengguna {}", akun.id, admin.0.id);
    ok("Pengguna berhasil diperbarui", AkunResponse::from(akun))
}
