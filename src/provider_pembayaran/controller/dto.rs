use rocket::serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::metode_pembayaran::model::MetodePembayaran;
use crate::provider_pembayaran::model::{
    ProviderPembayaran, ProviderPembayaranBaru, ProviderPembayaranBuilder, ProviderPembayaranPatch,
};
use crate::shared::masukan::Isian;
use crate::shared::validation::{validasi_bukan_null, validasi_nullable};

#[derive(Debug, Default, Validate)]
pub struct ProviderPembayaranRequest {
    #[validate(length(max = 255, message = "Kolom nama maksimal 255 karakter."))]
    pub nama: Option<String>,
    #[validate(length(max = 50, message = "Kolom no rek maksimal 50 karakter."))]
    pub no_rek: Option<String>,
    #[validate(length(max = 255, message = "Kolom penerima maksimal 255 karakter."))]
    pub penerima: Option<String>,
    #[validate(length(max = 3000, message = "Kolom deskripsi maksimal 3000 karakter."))]
    pub deskripsi: Option<String>,
    #[validate(length(max = 255, message = "Kolom foto maksimal 255 karakter."))]
    pub foto: Option<String>,
    pub aktif: Option<bool>,
    pub metode_pembayaran_id: Option<i64>,
}

impl ProviderPembayaranRequest {
    /// Error dikumpulkan, tidak langsung dikembalikan, supaya aturan
    /// database bisa menambah ke respons 422 yang sama.
    pub fn validasi(mut isian: Isian) -> (Self, ValidationErrors) {
        let request = Self {
            nama: isian.teks_wajib("nama"),
            no_rek: isian.teks_wajib("no_rek"),
            penerima: isian.teks_wajib("penerima"),
            deskripsi: isian.teks("deskripsi"),
            foto: isian.teks("foto"),
            aktif: isian.boolean("aktif"),
            metode_pembayaran_id: isian.bilangan_bulat_wajib("metode_pembayaran_id"),
        };

        let mut errors = request.validate().err().unwrap_or_default();
        isian.laporkan(&mut errors);
        (request, errors)
    }

    /// `None` hanya kalau field wajib kosong, yang sudah ditolak validasi.
    pub fn into_provider_baru(self, venue_id: i64) -> Option<ProviderPembayaranBaru> {
        let builder = ProviderPembayaranBuilder::new(
            self.nama?,
            self.no_rek?,
            self.penerima?,
            venue_id,
            self.metode_pembayaran_id?,
        )
        .deskripsi(self.deskripsi)
        .foto(self.foto);

        Some(match self.aktif {
            Some(aktif) => builder.aktif(aktif).build(),
            None => builder.build(),
        })
    }
}

/// Semua field `sometimes`, kecuali metode_pembayaran_id yang selalu wajib.
pub fn validasi_update(mut isian: Isian) -> (ProviderPembayaranPatch, ValidationErrors) {
    let mut errors = ValidationErrors::new();

    let nama = validasi_bukan_null(&mut errors, "nama", &isian.teks_patch("nama"), 255);
    let no_rek = validasi_bukan_null(&mut errors, "no_rek", &isian.teks_patch("no_rek"), 50);
    let penerima = validasi_bukan_null(&mut errors, "penerima", &isian.teks_patch("penerima"), 255);

    let deskripsi = isian.teks_patch("deskripsi");
    let foto = isian.teks_patch("foto");
    validasi_nullable(&mut errors, "deskripsi", &deskripsi, 3000);
    validasi_nullable(&mut errors, "foto", &foto, 255);

    let aktif = isian.boolean("aktif");
    let metode_pembayaran_id = isian.bilangan_bulat_wajib("metode_pembayaran_id");
    isian.laporkan(&mut errors);

    let patch = ProviderPembayaranPatch {
        nama,
        no_rek,
        penerima,
        deskripsi,
        foto,
        aktif,
        metode_pembayaran_id,
    };
    (patch, errors)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ProviderPembayaranResponse {
    pub id: i64,
    pub nama: String,
    pub no_rek: String,
    pub penerima: String,
    pub deskripsi: Option<String>,
    pub foto: Option<String>,
    pub aktif: bool,
    pub venue_id: i64,
    pub metode_pembayaran_id: i64,
    pub metode_pembayaran: Option<MetodePembayaran>,
    pub created_at: String,
    pub updated_at: String,
}

impl ProviderPembayaranResponse {
    pub fn dari(provider: ProviderPembayaran, metode_pembayaran: Option<MetodePembayaran>) -> Self {
        Self {
            id: provider.id,
            nama: provider.nama,
            no_rek: provider.no_rek,
            penerima: provider.penerima,
            deskripsi: provider.deskripsi,
            foto: provider.foto,
            aktif: provider.aktif,
            venue_id: provider.venue_id,
            metode_pembayaran_id: provider.metode_pembayaran_id,
            metode_pembayaran,
            created_at: provider.created_at,
            updated_at: provider.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn request(value: Value) -> (ProviderPembayaranRequest, ValidationErrors) {
        ProviderPembayaranRequest::validasi(Isian::dari_json(value).unwrap())
    }

    fn update(value: Value) -> (ProviderPembayaranPatch, ValidationErrors) {
        validasi_update(Isian::dari_json(value).unwrap())
    }

    #[test]
    fn test_request_valid_default_aktif() {
        let (request, errors) = request(json!({
            "nama": "BCA-5",
            "no_rek": "123",
            "penerima": "Toko A",
            "metode_pembayaran_id": 1
        }));
        assert!(errors.is_empty());

        let baru = request.into_provider_baru(5).unwrap();
        assert!(baru.aktif);
        assert_eq!(baru.venue_id, 5);
        assert_eq!(baru.deskripsi, None);
    }

    #[test]
    fn test_request_kosong_melaporkan_field_wajib() {
        let (_, errors) = request(json!({}));
        let fields = errors.field_errors();

        for field in ["nama", "no_rek", "penerima", "metode_pembayaran_id"] {
            assert!(fields.contains_key(field), "field {} harus error", field);
        }
        assert!(!fields.contains_key("deskripsi"));
    }

    #[test]
    fn test_request_panjang_dan_boolean() {
        let (_, errors) = request(json!({
            "nama": "BCA",
            "no_rek": "1".repeat(51),
            "penerima": "Toko A",
            "deskripsi": "x".repeat(3001),
            "aktif": "mungkin",
            "metode_pembayaran_id": 1
        }));

        let fields = errors.field_errors();
        assert!(fields.contains_key("no_rek"));
        assert!(fields.contains_key("deskripsi"));
        assert!(fields.contains_key("aktif"));
        assert!(!fields.contains_key("nama"));
    }

    #[test]
    fn test_request_aktif_angka_dan_spasi() {
        let (request, errors) = request(json!({
            "nama": "  OVO  ",
            "no_rek": "0812",
            "penerima": "Toko B",
            "foto": "   ",
            "aktif": 0,
            "metode_pembayaran_id": 2
        }));
        assert!(errors.is_empty());

        let baru = request.into_provider_baru(1).unwrap();
        assert_eq!(baru.nama, "OVO");
        assert_eq!(baru.foto, None);
        assert!(!baru.aktif);
    }

    #[test]
    fn test_request_metode_string_angka_diterima_nama_angka_ditolak() {
        let (request, errors) = request(json!({
            "nama": 123,
            "no_rek": "0812",
            "penerima": "Toko B",
            "metode_pembayaran_id": "2"
        }));

        assert_eq!(request.metode_pembayaran_id, Some(2));
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["nama"][0].message.as_deref(), Some("Kolom nama harus berupa teks."));
    }

    #[test]
    fn test_update_request_tanpa_metode_ditolak() {
        let (_, errors) = update(json!({ "no_rek": "999" }));
        assert!(errors.field_errors().contains_key("metode_pembayaran_id"));
    }

    #[test]
    fn test_update_request_menjadi_patch() {
        let (patch, errors) = update(json!({
            "no_rek": "999",
            "deskripsi": null,
            "aktif": "false",
            "metode_pembayaran_id": 2
        }));

        assert!(errors.is_empty());
        assert_eq!(patch.no_rek.as_deref(), Some("999"));
        assert_eq!(patch.deskripsi, Some(None));
        assert_eq!(patch.aktif, Some(false));
        assert_eq!(patch.nama, None);
        assert_eq!(patch.metode_pembayaran_id, Some(2));
    }

    #[test]
    fn test_update_request_nama_null_ditolak() {
        let (_, errors) = update(json!({ "nama": null, "metode_pembayaran_id": 2 }));
        assert!(errors.field_errors().contains_key("nama"));
    }
}
