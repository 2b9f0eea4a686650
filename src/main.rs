use std::error::Error;
use std::sync::Arc;

use autometrics::prometheus_exporter;
use rocket_cors::{AllowedOrigins, CorsOptions};

use crate::auth::{DbTokenAuthenticator, TokenAuthenticator};
use crate::config::AppConfig;
use crate::shared::database;

mod app;
mod auth;
mod config;
mod kategori;
mod manajemen_menu;
mod manajemen_pengguna;
mod manajemen_pertandingan;
mod manajemen_venue;
mod metode_pembayaran;
mod provider_pembayaran;
mod shared;
#[cfg(test)]
mod testing;

#[rocket::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    prometheus_exporter::init();

    let config = AppConfig::from_env();
    let pool = database::connect(&config).await?;
    log::info!("Terhubung ke database, maks {} koneksi", config.max_connections());

    let allowed_origins = match config.cors_allowed_origins() {
        Some(origins) => AllowedOrigins::some_exact(origins.as_slice()),
        None => AllowedOrigins::all(),
    };
    let cors = CorsOptions {
        allowed_origins,
        ..Default::default()
    }
    .to_cors()?;

    let authenticator: Arc<dyn TokenAuthenticator> = Arc::new(DbTokenAuthenticator::new(pool.clone()));

    app::bangun(pool, authenticator).attach(cors).launch().await?;
    Ok(())
}
