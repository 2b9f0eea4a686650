use std::env;

use getset::Getters;

// Konfigurasi aplikasi dari environment (.env dibaca lewat dotenvy).
// Alamat dan port server tetap diatur Rocket (Rocket.toml / ROCKET_*).
#[derive(Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct AppConfig {
    database_url: String,
    max_connections: u32,
    run_migrations: bool,
    cors_allowed_origins: Option<Vec<String>>,
}

const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::dari(|key| env::var(key).ok())
    }

    pub fn dari(baca: impl Fn(&str) -> Option<String>) -> Self {
        let database_url = baca("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        // Tiap koneksi ke SQLite in-memory membuka database kosong sendiri
        let max_connections = if sqlite_in_memory(&database_url) {
            1
        } else {
            baca("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5)
        };

        let run_migrations = baca("RUN_MIGRATIONS")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);

        let cors_allowed_origins = baca("CORS_ALLOWED_ORIGINS")
            .map(|v| parse_origins(&v))
            .filter(|origins| !origins.is_empty());

        Self {
            database_url,
            max_connections,
            run_migrations,
            cors_allowed_origins,
        }
    }
}

pub fn sqlite_in_memory(database_url: &str) -> bool {
    database_url.starts_with("sqlite:") && (database_url.contains(":memory:") || database_url.contains("mode=memory"))
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty() && *origin != "*")
        .map(str::to_string)
        .collect()
}
