use rocket::{fairing::AdHoc, get, post, routes, State};
use autometrics::autometrics;
use sqlx::AnyPool;
use validator::{Validate, ValidationErrors};

use crate::auth::SuperAdmin;
use crate::kategori::model::{slug_dari, Kategori};
use crate::kategori::repository;
use crate::shared::masukan::{Isian, Masukan};
use crate::shared::response::{created, ok, ApiResult};
use crate::shared::validation::{hasil, tambah_error};
use crate::shared::{ApiError, RepositoryError};

const PESAN_NAMA_DIPAKAI: &str = "Kolom nama sudah digunakan.";

#[derive(Debug, Default, Validate)]
pub struct KategoriRequest {
    #[validate(length(max = 255, message = "Kolom nama maksimal 255 karakter."))]
    pub nama: Option<String>,
    #[validate(length(max = 3000, message = "Kolom deskripsi maksimal 3000 karakter."))]
    pub deskripsi: Option<String>,
}

impl KategoriRequest {
    pub fn validasi(mut isian: Isian) -> (Self, ValidationErrors) {
        let request = Self {
            nama: isian.teks_wajib("nama"),
            deskripsi: isian.teks("deskripsi"),
        };

        let mut errors = request.validate().err().unwrap_or_default();
        isian.laporkan(&mut errors);
        (request, errors)
    }
}

fn nama_bentrok() -> ApiError {
    let mut errors = ValidationErrors::new();
    tambah_error(&mut errors, "nama", "unique", PESAN_NAMA_DIPAKAI.to_string());
    ApiError::Validation(errors)
}

fn tangani_slug_bentrok(error: RepositoryError) -> ApiError {
    if error.is_unique_violation() {
        nama_bentrok()
    } else {
        error.into()
    }
}

#[autometrics]
#[get("/kategori")]
pub async fn ambil_semua_kategori(db: &State<AnyPool>) -> ApiResult<Vec<Kategori>> {
    let kategori = repository::ambil_semua_kategori(db.inner()).await?;
    ok("Data berhasil diambil", kategori)
}

#[autometrics]
#[post("/kategori", format = "json", data = "<masukan>")]
pub async fn buat_kategori(admin: SuperAdmin, db: &State<AnyPool>, masukan: Masukan) -> ApiResult<Kategori> {
    let pool = db.inner();
    let (request, mut errors) = KategoriRequest::validasi(masukan.isian()?);

    let slug = request.nama.as_deref().map(slug_dari);
    if let Some(slug) = slug.as_deref() {
        if slug.is_empty() {
            tambah_error(&mut errors, "nama", "slug", "Kolom nama harus mengandung huruf atau angka.".to_string());
        } else if repository::slug_sudah_dipakai(pool, slug).await? {
            tambah_error(&mut errors, "nama", "unique", PESAN_NAMA_DIPAKAI.to_string());
        }
    }
    hasil(errors)?;

    let (nama, slug) = match (request.nama, slug) {
        (Some(nama), Some(slug)) => (nama, slug),
        _ => return Err(ApiError::Internal("Nama kategori kosong setelah validasi".to_string())),
    };
    let kategori = repository::tambah_kategori(pool, &nama, &slug, request.deskripsi.as_deref())
        .await
        .map_err(tangani_slug_bentrok)?;

    log::info!("Kategori {} dibuat oleh pengguna {}", kategori.id, admin.0.id);
    created("Kategori berhasil dibuat", kategori)
}

pub fn route_stage() -> AdHoc {
    AdHoc::on_ignite("Initializing Kategori routes...", |rocket| async {
        rocket.mount("/api", routes![ambil_semua_kategori, buat_kategori])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::response::{ApiResponse, ValidationResponse};
    use crate::testing::{client_uji, sebagai_admin_venue, sebagai_super_admin, seed_kategori, setup_test_db};
    use rocket::http::Status;
    use serde_json::json;

    #[tokio::test]
    async fn test_ambil_semua_kategori_publik() {
        let pool = setup_test_db().await;
        seed_kategori(&pool, "Sepak Bola").await;
        let client = client_uji(pool).await;

        let response = client.get("/api/kategori").dispatch().await;

        assert_eq!(response.status(), Status::Ok);
        let body: ApiResponse<Vec<Kategori>> = response.into_json().await.expect("Valid JSON response");
        let kategori = body.data.unwrap();
        assert_eq!(kategori.len(), 1);
        assert_eq!(kategori[0].slug, "sepak-bola");
    }

    #[tokio::test]
    async fn test_buat_kategori_membuat_slug() {
        let pool = setup_test_db().await;
        let client = client_uji(pool).await;

        let response = client
            .post("/api/kategori")
            .header(sebagai_super_admin())
            .json(&json!({ "nama": " Bulu Tangkis ", "deskripsi": "Badminton" }))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Created);
        let body: ApiResponse<Kategori> = response.into_json().await.expect("Valid JSON response");
        let kategori = body.data.unwrap();
        assert_eq!(kategori.nama, "Bulu Tangkis");
        assert_eq!(kategori.slug, "bulu-tangkis");
        assert_eq!(kategori.deskripsi, Some("Badminton".to_string()));
    }

    #[tokio::test]
    async fn test_buat_kategori_slug_bentrok_422() {
        let pool = setup_test_db().await;
        seed_kategori(&pool, "Sepak Bola").await;
        let client = client_uji(pool).await;

        let response = client
            .post("/api/kategori")
            .header(sebagai_super_admin())
            .json(&json!({ "nama": "sepak  bola" }))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::UnprocessableEntity);
        let body: ValidationResponse = response.into_json().await.expect("Valid JSON response");
        assert_eq!(body.errors["nama"], vec![PESAN_NAMA_DIPAKAI.to_string()]);
    }

    #[tokio::test]
    async fn test_buat_kategori_tanpa_huruf_atau_bukan_super_admin() {
        let pool = setup_test_db().await;
        let client = client_uji(pool).await;

        let response = client
            .post("/api/kategori")
            .header(sebagai_super_admin())
            .json(&json!({ "nama": "!!!" }))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::UnprocessableEntity);

        let response = client
            .post("/api/kategori")
            .header(sebagai_admin_venue())
            .json(&json!({ "nama": "Tenis" }))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Forbidden);
    }
}
