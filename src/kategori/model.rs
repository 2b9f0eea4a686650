use rocket::serde::{Deserialize, Serialize};

// Kategori olahraga untuk pertandingan, misalnya sepak bola atau bulu tangkis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct Kategori {
    pub id: i64,
    pub nama: String,
    pub slug: String,
    pub deskripsi: Option<String>,
}

/// Slug huruf kecil: karakter selain huruf dan angka menjadi satu `-`.
pub fn slug_dari(nama: &str) -> String {
    let mut slug = String::with_capacity(nama.len());
    for c in nama.trim().chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
