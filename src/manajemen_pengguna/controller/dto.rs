use rocket::serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::auth::Role;
use crate::manajemen_pengguna::model::{Akun, AkunPatch};
use crate::shared::masukan::Isian;
use crate::shared::validation::{tambah_error, validasi_bukan_null};

const PESAN_ROLE: &str = "Kolom role harus salah satu dari: super_admin, admin_venue, infobar.";

#[derive(Debug, Default, Validate)]
pub struct AkunUpdateRequest {
    #[validate(length(max = 255, message = "Kolom nama maksimal 255 karakter."))]
    pub nama: Option<String>,
    #[validate(
        email(message = "Kolom email harus berupa alamat email yang valid."),
        length(max = 255, message = "Kolom email maksimal 255 karakter.")
    )]
    pub email: Option<String>,
    pub role: Option<String>,
}

/// Semua field `sometimes`; `null` ditolak karena kolomnya wajib.
pub fn validasi_update(mut isian: Isian) -> (AkunPatch, ValidationErrors) {
    let nama = isian.teks_patch("nama");
    let email = isian.teks_patch("email");
    let role = isian.teks_patch("role");

    let request = AkunUpdateRequest {
        nama: nama.clone().flatten(),
        email: email.clone().flatten(),
        role: role.clone().flatten(),
    };
    let mut errors = request.validate().err().unwrap_or_default();

    validasi_bukan_null(&mut errors, "nama", &nama, usize::MAX);
    validasi_bukan_null(&mut errors, "email", &email, usize::MAX);
    validasi_bukan_null(&mut errors, "role", &role, usize::MAX);

    let role = match request.role.as_deref().map(str::parse::<Role>) {
        None => None,
        Some(Ok(role)) => Some(role),
        Some(Err(_)) => {
            tambah_error(&mut errors, "role", "in", PESAN_ROLE.to_string());
            None
        }
    };

    isian.laporkan(&mut errors);

    let patch = AkunPatch {
        nama: request.nama,
        email: request.email,
        role,
    };
    (patch, errors)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct AkunResponse {
    pub id: i64,
    pub nama: String,
    pub email: String,
    pub role: Role,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Akun> for AkunResponse {
    fn from(akun: Akun) -> Self {
        Self {
            id: akun.id,
            nama: akun.nama,
            email: akun.email,
            role: akun.role,
            created_at: akun.created_at,
            updated_at: akun.updated_at,
        }
    }
}
