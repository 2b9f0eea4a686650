use rocket::{put, State};
use autometrics::autometrics;
use sqlx::AnyPool;

use crate::auth::AdminVenue;
use crate::manajemen_menu::repository;
use crate::manajemen_venue::controller::venue_atau_404;
use crate::shared::masukan::Masukan;
use crate::shared::response::{ok, ApiResult};
use crate::shared::ApiError;
use super::dto::{into_patch, MenuResponse};

#[autometrics]
#[put("/menu/venue/<venue_id>/<menu_id>", format = "json", data = "<masukan>")]
pub async fn ubah_menu(
    admin: AdminVenue,
    db: &State<AnyPool>,
    venue_id: i64,
    menu_id: i64,
    masukan: Masukan,
) -> ApiResult<MenuResponse> {
    let venue = venue_atau_404(db.inner(), venue_id).await?;
    let mut menu = repository::read::ambil_menu_by_id(db.inner(), venue.id, menu_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Menu tidak ditemukan untuk venue ini"))?;

    let patch = into_patch(masukan.isian()?)?;
    menu.terapkan(patch);
    let menu = repository::update::update_menu(db.inner(), &menu).await?;

    log::info!("Menu {} diperbarui oleh pengguna {}", menu.id, admin.0.id);
    ok("Menu berhasil diperbarui", MenuResponse::from(menu))
}

#[cfg(test)]
mod tests {
    use crate::manajemen_menu::controller::dto::MenuResponse;
    use crate::shared::response::{ApiResponse, ValidationResponse};
    use crate::testing::{client_uji, sebagai_admin_venue, seed_menu, seed_venue, setup_test_db};
    use rocket::http::{ContentType, Status};
    use serde_json::json;

    #[tokio::test]
    async fn test_ubah_menu_parsial() {
        let pool = setup_test_db().await;
        let venue_id = seed_venue(&pool, "Kafe Bola", "Depok").await;
        let id = seed_menu(&pool, venue_id, "Kopi", 15000.0, true).await;
        let client = client_uji(pool).await;

        let response = client
            .put(format!("/api/menu/venue/{}/{}", venue_id, id))
            .header(sebagai_admin_venue())
            .json(&json!({ "aktif": false, "harga": 16000 }))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);
        let body: ApiResponse<MenuResponse> = response.into_json().await.expect("Valid JSON response");
        assert_eq!(body.message, "Menu berhasil diperbarui");
        let menu = body.data.unwrap();
        assert_eq!(menu.nama, "Kopi");
        assert_eq!(menu.harga, 16000.0);
        assert!(!menu.aktif);
    }

    #[tokio::test]
    async fn test_ubah_menu_tidak_ada() {
        let pool = setup_test_db().await;
        let venue_id = seed_venue(&pool, "Kafe Bola", "Depok").await;
        let client = client_uji(pool).await;

        let response = client
            .put(format!("/api/menu/venue/{}/12", venue_id))
            .header(sebagai_admin_venue())
            .json(&json!({ "nama": "Teh" }))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::NotFound);
    }

    #[tokio::test]
    async fn test_ubah_menu_body_rusak() {
        let pool = setup_test_db().await;
        let venue_id = seed_venue(&pool, "Kafe Bola", "Depok").await;
        let id = seed_menu(&pool, venue_id, "Kopi", 15000.0, true).await;
        let client = client_uji(pool).await;

        let response = client
            .put("/api/menu/venue/99/1")
            .header(sebagai_admin_venue())
            .header(ContentType::JSON)
            .body("not json")
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::NotFound);

        let response = client
            .put(format!("/api/menu/venue/{}/{}", venue_id, id))
            .header(sebagai_admin_venue())
            .header(ContentType::JSON)
            .body("not json")
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::UnprocessableEntity);
        let body: ValidationResponse = response.into_json().await.expect("Valid JSON response");
        assert!(body.errors.contains_key("body"));
    }
}
