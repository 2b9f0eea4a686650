use super::Role;

// Principal hasil autentikasi token
#[derive(Debug, Clone, PartialEq)]
pub struct Pengguna {
    pub id: i64,
    pub nama: String,
    pub email: String,
    pub role: Role,
}

impl Pengguna {
    pub fn new(id: i64, nama: String, email: String, role: Role) -> Self {
        Self { id, nama, email, role }
    }
}
