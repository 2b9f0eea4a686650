// Akun pengguna seperti yang dikelola super admin. Token akses tidak pernah
// ikut dibaca ke struct ini.

use crate::auth::Role;

#[derive(Debug, Clone, PartialEq)]
pub struct Akun {
    pub id: i64,
    pub nama: String,
    pub email: String,
    pub role: Role,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default)]
pub struct AkunPatch {
    pub nama: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

impl Akun {
    pub fn terapkan(&mut self, patch: AkunPatch) {
        if let Some(nama) = patch.nama {
            self.nama = nama;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
    }
}
