use rocket::serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::manajemen_menu::model::{Menu, MenuBaru, MenuPatch};
use crate::shared::masukan::Isian;
use crate::shared::validation::{tambah_error, validasi_bukan_null, validasi_nullable};

#[derive(Debug, Default, Validate)]
pub struct MenuRequest {
    #[validate(length(max = 255, message = "Kolom nama maksimal 255 karakter."))]
    pub nama: Option<String>,
    #[validate(range(min = 0.0, message = "Kolom harga minimal 0."))]
    pub harga: Option<f64>,
    #[validate(length(max = 3000, message = "Kolom deskripsi maksimal 3000 karakter."))]
    pub deskripsi: Option<String>,
    #[validate(length(max = 255, message = "Kolom foto maksimal 255 karakter."))]
    pub foto: Option<String>,
    pub aktif: Option<bool>,
}

impl MenuRequest {
    pub fn into_menu_baru(mut isian: Isian, venue_id: i64) -> Result<MenuBaru, ValidationErrors> {
        let request = Self {
            nama: isian.teks_wajib("nama"),
            harga: isian.angka_wajib("harga"),
            deskripsi: isian.teks("deskripsi"),
            foto: isian.teks("foto"),
            aktif: isian.boolean("aktif"),
        };

        let mut errors = request.validate().err().unwrap_or_default();
        isian.laporkan(&mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }

        match (request.nama, request.harga) {
            (Some(nama), Some(harga)) => Ok(MenuBaru {
                venue_id,
                nama,
                harga,
                deskripsi: request.deskripsi,
                foto: request.foto,
                aktif: request.aktif.unwrap_or(true),
            }),
            _ => Err(errors),
        }
    }
}

pub fn into_patch(mut isian: Isian) -> Result<MenuPatch, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let nama = validasi_bukan_null(&mut errors, "nama", &isian.teks_patch("nama"), 255);

    let deskripsi = isian.teks_patch("deskripsi");
    let foto = isian.teks_patch("foto");
    validasi_nullable(&mut errors, "deskripsi", &deskripsi, 3000);
    validasi_nullable(&mut errors, "foto", &foto, 255);

    let harga = match isian.angka_patch("harga") {
        None => None,
        Some(Some(h)) if h >= 0.0 => Some(h),
        Some(Some(_)) => {
            tambah_error(&mut errors, "harga", "range", "Kolom harga minimal 0.".to_string());
            None
        }
        Some(None) => {
            tambah_error(&mut errors, "harga", "numeric", "Kolom harga harus berupa angka.".to_string());
            None
        }
    };

    let aktif = isian.boolean("aktif");
    isian.laporkan(&mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(MenuPatch {
        nama,
        harga,
        deskripsi,
        foto,
        aktif,
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct MenuResponse {
    pub id: i64,
    pub venue_id: i64,
    pub nama: String,
    pub harga: f64,
    pub deskripsi: Option<String>,
    pub foto: Option<String>,
    pub aktif: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Menu> for MenuResponse {
    fn from(menu: Menu) -> Self {
        Self {
            id: menu.id,
            venue_id: menu.venue_id,
            nama: menu.nama,
            harga: menu.harga,
            deskripsi: menu.deskripsi,
            foto: menu.foto,
            aktif: menu.aktif,
            created_at: menu.created_at,
            updated_at: menu.updated_at,
        }
    }
}
