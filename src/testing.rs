// Helper bersama untuk test: database SQLite in-memory dengan migrasi yang
// sama seperti produksi, seed data, dan client Rocket dengan authenticator
// tiruan.

use std::sync::Arc;

use rocket::http::Header;
use rocket::local::asynchronous::Client;
use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::{AnyPool, Row};

use crate::app;
use crate::auth::authenticator::MockTokenAuthenticator;
use crate::auth::{Pengguna, Role, TokenAuthenticator};
use crate::kategori::model::slug_dari;
use crate::shared::database::sekarang;

const TOKEN_ADMIN_VENUE: &str = "admin-venue";
const TOKEN_SUPER_ADMIN: &str = "super-admin";

pub async fn setup_test_db() -> AnyPool {
    install_default_drivers();

    // Satu koneksi supaya semua query melihat database in-memory yang sama
    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test DB");

    sqlx::migrate!("migrations/test")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub async fn seed_pengguna(pool: &AnyPool, nama: &str, email: &str, role: &str) -> i64 {
    let now = sekarang();
    let row = sqlx::query(
        "INSERT INTO users (nama, email, role, created_at, updated_at) VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(nama)
    .bind(email)
    .bind(role)
    .bind(&now)
    .bind(&now)
    .fetch_one(pool)
    .await
    .expect("Failed to seed user");

    row.get("id")
}

/// Terbitkan token untuk pengguna, hasilnya berformat `<id>|<secret>`.
pub async fn buat_token(pool: &AnyPool, user_id: i64, secret: &str) -> String {
    let hash = bcrypt::hash(secret, 4).expect("Failed to hash token");
    let row = sqlx::query(
        "INSERT INTO personal_access_tokens (user_id, nama, token_hash, created_at) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(user_id)
    .bind("test")
    .bind(hash)
    .bind(sekarang())
    .fetch_one(pool)
    .await
    .expect("Failed to seed token");

    let id: i64 = row.get("id");
    format!("{}|{}", id, secret)
}

pub async fn seed_venue(pool: &AnyPool, nama: &str, kota: &str) -> i64 {
    seed_venue_dengan_status(pool, nama, kota, "tersedia").await
}

pub async fn seed_venue_dengan_status(pool: &AnyPool, nama: &str, kota: &str, status: &str) -> i64 {
    let now = sekarang();
    let row = sqlx::query(
        r#"
        INSERT INTO venues (nama, alamat, kota, kontak, kapasitas, status, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id
        "#,
    )
    .bind(nama)
    .bind("Jl. Contoh No. 1")
    .bind(kota)
    .bind("081200000000")
    .bind(50_i64)
    .bind(status)
    .bind(&now)
    .bind(&now)
    .fetch_one(pool)
    .await
    .expect("Failed to seed venue");

    row.get("id")
}

pub async fn seed_metode(pool: &AnyPool, nama: &str) -> i64 {
    let now = sekarang();
    let row = sqlx::query("INSERT INTO metode_pembayarans (nama, created_at, updated_at) VALUES ($1, $2, $3) RETURNING id")
        .bind(nama)
        .bind(&now)
        .bind(&now)
        .fetch_one(pool)
        .await
        .expect("Failed to seed metode pembayaran");

    row.get("id")
}

/// Provider aktif dengan no_rek `1234567890` dan penerima `Toko Test`.
pub async fn seed_provider(pool: &AnyPool, venue_id: i64, metode_pembayaran_id: i64, nama: &str) -> i64 {
    let now = sekarang();
    let row = sqlx::query(
        r#"
        INSERT INTO provider_pembayarans
            (nama, no_rek, penerima, aktif, venue_id, metode_pembayaran_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id
        "#,
    )
    .bind(nama)
    .bind("1234567890")
    .bind("Toko Test")
    .bind(true)
    .bind(venue_id)
    .bind(metode_pembayaran_id)
    .bind(&now)
    .bind(&now)
    .fetch_one(pool)
    .await
    .expect("Failed to seed provider");

    row.get("id")
}

pub async fn seed_menu(pool: &AnyPool, venue_id: i64, nama: &str, harga: f64, aktif: bool) -> i64 {
    let now = sekarang();
    let row = sqlx::query(
        r#"
        INSERT INTO menus (venue_id, nama, harga, aktif, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(venue_id)
    .bind(nama)
    .bind(harga)
    .bind(aktif)
    .bind(&now)
    .bind(&now)
    .fetch_one(pool)
    .await
    .expect("Failed to seed menu");

    row.get("id")
}

pub async fn seed_kategori(pool: &AnyPool, nama: &str) -> i64 {
    let now = sekarang();
    let row = sqlx::query(
        "INSERT INTO kategori (nama, slug, created_at, updated_at) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(nama)
    .bind(slug_dari(nama))
    .bind(&now)
    .bind(&now)
    .fetch_one(pool)
    .await
    .expect("Failed to seed kategori");

    row.get("id")
}

/// Pertandingan Persija vs Persib pada `2024-12-01 19:00:00`.
pub async fn seed_pertandingan(pool: &AnyPool, kategori_id: i64, nama: &str, status: &str) -> i64 {
    let now = sekarang();
    let row = sqlx::query(
        r#"
        INSERT INTO pertandingans
            (nama, kategori_id, tim_tuan_rumah, tim_tamu, liga, waktu_mulai, status, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id
        "#,
    )
    .bind(nama)
    .bind(kategori_id)
    .bind("Persija")
    .bind("Persib")
    .bind("Liga 1")
    .bind("2024-12-01 19:00:00")
    .bind(status)
    .bind(&now)
    .bind(&now)
    .fetch_one(pool)
    .await
    .expect("Failed to seed pertandingan");

    row.get("id")
}

pub async fn hubungkan_venue(pool: &AnyPool, venue_id: i64, pertandingan_id: i64) {
    sqlx::query("INSERT INTO venue_pertandingan (venue_id, pertandingan_id) VALUES ($1, $2)")
        .bind(venue_id)
        .bind(pertandingan_id)
        .execute(pool)
        .await
        .expect("Failed to link venue");
}

fn authenticator_tiruan() -> MockTokenAuthenticator {
    let mut mock = MockTokenAuthenticator::new();
    mock.expect_authenticate().returning(|token| {
        let pengguna = match token {
            TOKEN_ADMIN_VENUE => Some(Pengguna::new(1, "Admin Venue".to_string(), "admin@venue.id".to_string(), Role::AdminVenue)),
            TOKEN_SUPER_ADMIN => Some(Pengguna::new(2, "Super Admin".to_string(), "super@venue.id".to_string(), Role::SuperAdmin)),
            _ => None,
        };
        Ok(pengguna)
    });
    mock
}

pub async fn client_uji(pool: AnyPool) -> Client {
    let authenticator: Arc<dyn TokenAuthenticator> = Arc::new(authenticator_tiruan());
    Client::tracked(app::bangun(pool, authenticator))
        .await
        .expect("Valid rocket instance")
}

pub fn sebagai_admin_venue() -> Header<'static> {
    Header::new("Authorization", format!("Bearer {}", TOKEN_ADMIN_VENUE))
}

pub fn sebagai_super_admin() -> Header<'static> {
    Header::new("Authorization", format!("Bearer {}", TOKEN_SUPER_ADMIN))
}
