use chrono::Utc;
use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;

use crate::config::{sqlite_in_memory, AppConfig};

pub async fn connect(config: &AppConfig) -> Result<AnyPool, sqlx::Error> {
    install_default_drivers();

    let mut options = AnyPoolOptions::new().max_connections(*config.max_connections());
    if sqlite_in_memory(config.database_url()) {
        // Database hilang begitu koneksi terakhir ditutup
        options = options.idle_timeout(None).max_lifetime(None);
    }
    let pool = options.connect(config.database_url()).await?;

    if *config.run_migrations() {
        migrate(&pool, config.database_url()).await?;
    }

    Ok(pool)
}

// Skema SQLite dan PostgreSQL dipisah karena tipe kolom id/boolean berbeda
pub async fn migrate(pool: &AnyPool, database_url: &str) -> Result<(), sqlx::Error> {
    if database_url.starts_with("sqlite:") {
        sqlx::migrate!("migrations/test").run(pool).await?;
    } else {
        sqlx::migrate!("migrations/postgres").run(pool).await?;
    }
    log::info!("Migrasi database selesai");
    Ok(())
}

/// Format timestamp yang disimpan di kolom `created_at` / `updated_at`.
pub fn sekarang() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
