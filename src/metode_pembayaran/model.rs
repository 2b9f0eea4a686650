use rocket::serde::{Deserialize, Serialize};

// Kategori kanal pembayaran, misalnya transfer bank atau e-wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct MetodePembayaran {
    pub id: i64,
    pub nama: String,
}
