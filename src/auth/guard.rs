// Role gate sebagai request guard Rocket.
//
// Principal di-resolve sekali per request (disimpan di local cache), lalu
// setiap guard hanya membandingkan role lewat `Role::is_allowed`. Penolakan
// selalu 403 dan pesannya dirender oleh catcher 403.

use std::sync::Arc;

use rocket::http::Status;
use rocket::request::{FromRequest, Outcome, Request};

use crate::auth::authenticator::TokenAuthenticator;
use crate::auth::model::{Pengguna, Role};
use crate::shared::response::PenolakanAkses;

struct PrincipalTercache(Option<Pengguna>);

fn bearer_token(header: &str) -> Option<&str> {
    let token = header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))?
        .trim();
    if token.is_empty() { None } else { Some(token) }
}

async fn resolve_principal(req: &Request<'_>) -> Option<Pengguna> {
    let token = req.headers().get_one("Authorization").and_then(bearer_token)?;
    let authenticator = req.rocket().state::<Arc<dyn TokenAuthenticator>>()?;

    match authenticator.authenticate(token).await {
        Ok(pengguna) => pengguna,
        Err(e) => {
            log::error!("Gagal memeriksa token: {}", e);
            None
        }
    }
}

pub async fn principal<'r>(req: &'r Request<'_>) -> Option<&'r Pengguna> {
    req.local_cache_async(async { PrincipalTercache(resolve_principal(req).await) })
        .await
        .0
        .as_ref()
}

async fn gerbang(req: &Request<'_>, required: Role) -> Outcome<Pengguna, ()> {
    match principal(req).await {
        Some(pengguna) if pengguna.role.is_allowed(required) => Outcome::Success(pengguna.clone()),
        pengguna => {
            log::warn!(
                "Akses ditolak: {} {} butuh role {}, principal {:?}",
                req.method(),
                req.uri(),
                required,
                pengguna.map(|p| p.id)
            );
            let pesan = format!("Akses ditolak. Hanya {} yang dapat melakukan aksi ini.", required);
            req.local_cache(|| PenolakanAkses(Some(pesan)));
            Outcome::Error((Status::Forbidden, ()))
        }
    }
}

/// Guard untuk route yang hanya boleh diakses `admin_venue`.
pub struct AdminVenue(pub Pengguna);

/// Guard untuk route yang hanya boleh diakses `super_admin`.
pub struct SuperAdmin(pub Pengguna);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AdminVenue {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        gerbang(req, Role::AdminVenue).await.map(AdminVenue)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for SuperAdmin {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        gerbang(req, Role::SuperAdmin).await.map(SuperAdmin)
    }
}
