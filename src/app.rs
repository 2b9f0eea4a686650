use std::sync::Arc;

use rocket::{routes, Build, Rocket};
use sqlx::AnyPool;

use crate::auth::TokenAuthenticator;
use crate::shared::metrics;
use crate::shared::response::catchers;
use crate::{
    kategori, manajemen_menu, manajemen_pengguna, manajemen_pertandingan, manajemen_venue, metode_pembayaran,
    provider_pembayaran,
};

/// Susun instance Rocket tanpa fairing lingkungan (CORS), dipakai `main` dan test.
pub fn bangun(pool: AnyPool, authenticator: Arc<dyn TokenAuthenticator>) -> Rocket<Build> {
    rocket::build()
        .manage(pool)
        .manage(authenticator)
        .attach(manajemen_venue::controller::route_stage())
        .attach(provider_pembayaran::controller::route_stage())
        .attach(manajemen_menu::controller::route_stage())
        .attach(metode_pembayaran::controller::route_stage())
        .attach(manajemen_pertandingan::controller::route_stage())
        .attach(kategori::controller::route_stage())
        .attach(manajemen_pengguna::controller::route_stage())
        .mount("/", routes![metrics::metrics])
        .register("/", catchers())
}
