use rocket::{get, State};
use autometrics::autometrics;
use sqlx::AnyPool;

use crate::auth::SuperAdmin;
use crate::manajemen_pengguna::repository;
use crate::shared::response::{ok, ApiResult};
use super::akun_atau_404;
use super::dto::AkunResponse;

#[autometrics]
#[get("/user")]
pub async fn ambil_semua_pengguna(_admin: SuperAdmin, db: &State<AnyPool>) -> ApiResult<Vec<AkunResponse>> {
    let akun = repository::read::ambil_semua_akun(db.inner()).await?;
    ok("Data berhasil diambil", akun.into_iter().map(AkunResponse::from).collect())
}

#[autometrics]
#[get("/user/<id>")]
pub async fn ambil_pengguna_berdasarkan_id(_admin: SuperAdmin, db: &State<AnyPool>, id: i64) -> ApiResult<AkunResponse> {
    let akun = akun_atau_404(db.inner(), id).await?;
    ok("Data berhasil diambil", AkunResponse::from(akun))
}

#[cfg(test)]
mod tests {
    use crate::auth::Role;
    use crate::manajemen_pengguna::controller::dto::AkunResponse;
    use crate::shared::response::ApiResponse;
    use crate::testing::{client_uji, sebagai_admin_venue, sebagai_super_admin, seed_pengguna, setup_test_db};
    use rocket::http::Status;

    #[tokio::test]
    async fn test_ambil_semua_pengguna() {
        let pool = setup_test_db().await;
        seed_pengguna(&pool, "Budi", "budi@venue.id", "admin_venue").await;
        seed_pengguna(&pool, "Sari", "sari@venue.id", "infobar").await;
        let client = client_uji(pool).await;

        let response = client.get("/api/user").header(sebagai_admin_venue()).dispatch().await;
        assert_eq!(response.status(), Status::Forbidden);

        let response = client.get("/api/user").header(sebagai_super_admin()).dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        let body: ApiResponse<Vec<AkunResponse>> = response.into_json().await.expect("Valid JSON response");
        let akun = body.data.unwrap();
        assert_eq!(akun.len(), 2);
        assert_eq!(akun[1].role, Role::Infobar);
    }

    #[tokio::test]
    async fn test_ambil_pengguna_berdasarkan_id() {
        let pool = setup_test_db().await;
        let id = seed_pengguna(&pool, "Budi", "budi@venue.id", "admin_venue").await;
        let client = client_uji(pool).await;

        let response = client.get(format!("/api/user/{}", id)).header(sebagai_super_admin()).dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        let body: ApiResponse<AkunResponse> = response.into_json().await.expect("Valid JSON response");
        assert_eq!(body.data.unwrap().email, "budi@venue.id");

        let response = client.get(format!("/api/user/{}", id + 1)).header(sebagai_super_admin()).dispatch().await;
        assert_eq!(response.status(), Status::NotFound);
        let body: ApiResponse<()> = response.into_json().await.expect("Valid JSON response");
        assert_eq!(body.message, "Pengguna tidak ditemukan");
    }
}
