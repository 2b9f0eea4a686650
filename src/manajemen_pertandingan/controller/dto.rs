use chrono::NaiveDateTime;
use rocket::serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::kategori::model::Kategori;
use crate::manajemen_pertandingan::model::{Pertandingan, PertandinganBaru, PertandinganPatch, StatusPertandingan};
use crate::shared::masukan::Isian;
use crate::shared::validation::{tambah_error, validasi_bukan_null, validasi_nullable};

const FORMAT_WAKTU: [&str; 4] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"];
const PESAN_STATUS: &str = "Kolom status harus salah satu dari: aktif, tidak_aktif.";
const PESAN_WAKTU: &str = "Kolom waktu mulai bukan tanggal dan waktu yang valid.";

/// Normalisasi ke `YYYY-MM-DD HH:MM:SS`, format yang disimpan di database.
pub fn normalisasi_waktu(value: &str) -> Option<String> {
    let value = value.trim();
    FORMAT_WAKTU
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|waktu| waktu.format("%Y-%m-%d %H:%M:%S").to_string())
}

fn parse_waktu(errors: &mut ValidationErrors, waktu: Option<String>) -> Option<String> {
    let waktu = waktu?;
    let hasil = normalisasi_waktu(&waktu);
    if hasil.is_none() {
        tambah_error(errors, "waktu_mulai", "date", PESAN_WAKTU.to_string());
    }
    hasil
}

fn parse_status(errors: &mut ValidationErrors, status: Option<&str>) -> Option<StatusPertandingan> {
    match status?.parse::<StatusPertandingan>() {
        Ok(status) => Some(status),
        Err(_) => {
            tambah_error(errors, "status", "in", PESAN_STATUS.to_string());
            None
        }
    }
}

#[derive(Debug, Default, Validate)]
pub struct PertandinganRequest {
    #[validate(length(max = 255, message = "Kolom nama maksimal 255 karakter."))]
    pub nama: Option<String>,
    pub kategori_id: Option<i64>,
    #[validate(length(max = 255, message = "Kolom tim tuan rumah maksimal 255 karakter."))]
    pub tim_tuan_rumah: Option<String>,
    #[validate(length(max = 255, message = "Kolom tim tamu maksimal 255 karakter."))]
    pub tim_tamu: Option<String>,
    #[validate(length(max = 255, message = "Kolom liga maksimal 255 karakter."))]
    pub liga: Option<String>,
    pub waktu_mulai: Option<String>,
    #[validate(length(max = 3000, message = "Kolom deskripsi maksimal 3000 karakter."))]
    pub deskripsi: Option<String>,
    pub status: Option<StatusPertandingan>,
    pub venue_ids: Vec<i64>,
}

impl PertandinganRequest {
    /// Aturan yang tidak butuh database. `waktu_mulai` sudah dinormalisasi
    /// dan `status` kosong menjadi `aktif`.
    pub fn validasi(mut isian: Isian) -> (Self, ValidationErrors) {
        let mut request = Self {
            nama: isian.teks_wajib("nama"),
            kategori_id: isian.bilangan_bulat_wajib("kategori_id"),
            tim_tuan_rumah: isian.teks_wajib("tim_tuan_rumah"),
            tim_tamu: isian.teks_wajib("tim_tamu"),
            liga: isian.teks("liga"),
            waktu_mulai: isian.teks_wajib("waktu_mulai"),
            deskripsi: isian.teks("deskripsi"),
            status: None,
            venue_ids: isian.daftar_bilangan_bulat("venue_ids").unwrap_or_default(),
        };
        let status = isian.teks("status");

        let mut errors = request.validate().err().unwrap_or_default();
        isian.laporkan(&mut errors);

        request.waktu_mulai = parse_waktu(&mut errors, request.waktu_mulai.take());
        request.status = match status {
            Some(s) => parse_status(&mut errors, Some(&s)),
            None => Some(StatusPertandingan::default()),
        };
        (request, errors)
    }

    /// `None` kalau field wajib kosong; panggil hanya setelah validasi lolos.
    pub fn into_pertandingan_baru(self) -> Option<(PertandinganBaru, Vec<i64>)> {
        let baru = PertandinganBaru {
            nama: self.nama?,
            kategori_id: self.kategori_id?,
            tim_tuan_rumah: self.tim_tuan_rumah?,
            tim_tamu: self.tim_tamu?,
            liga: self.liga,
            waktu_mulai: self.waktu_mulai?,
            deskripsi: self.deskripsi,
            status: self.status?,
        };
        Some((baru, self.venue_ids))
    }
}

/// Perubahan pertandingan; `venue_ids` `None` berarti relasi venue tidak diubah.
#[derive(Debug, Default)]
pub struct PerubahanPertandingan {
    pub patch: PertandinganPatch,
    pub venue_ids: Option<Vec<i64>>,
}

/// Semua field `sometimes`. `venue_ids: null` mengosongkan relasi venue.
pub fn validasi_update(mut isian: Isian) -> (PerubahanPertandingan, ValidationErrors) {
    let mut errors = ValidationErrors::new();

    let nama = validasi_bukan_null(&mut errors, "nama", &isian.teks_patch("nama"), 255);
    let tim_tuan_rumah = validasi_bukan_null(&mut errors, "tim_tuan_rumah", &isian.teks_patch("tim_tuan_rumah"), 255);
    let tim_tamu = validasi_bukan_null(&mut errors, "tim_tamu", &isian.teks_patch("tim_tamu"), 255);

    let liga = isian.teks_patch("liga");
    let deskripsi = isian.teks_patch("deskripsi");
    validasi_nullable(&mut errors, "liga", &liga, 255);
    validasi_nullable(&mut errors, "deskripsi", &deskripsi, 3000);

    let kategori_id = match isian.bilangan_bulat_patch("kategori_id") {
        Some(None) => {
            tambah_error(&mut errors, "kategori_id", "integer", "Kolom kategori id harus berupa bilangan bulat.".to_string());
            None
        }
        other => other.flatten(),
    };

    let waktu_mulai = match validasi_bukan_null(&mut errors, "waktu_mulai", &isian.teks_patch("waktu_mulai"), 255) {
        Some(waktu) => parse_waktu(&mut errors, Some(waktu)),
        None => None,
    };

    let status = match isian.teks_patch("status") {
        None => None,
        Some(None) => {
            tambah_error(&mut errors, "status", "in", PESAN_STATUS.to_string());
            None
        }
        Some(Some(s)) => parse_status(&mut errors, Some(&s)),
    };

    let venue_ids = isian
        .daftar_bilangan_bulat_patch("venue_ids")
        .map(Option::unwrap_or_default);

    isian.laporkan(&mut errors);

    let perubahan = PerubahanPertandingan {
        patch: PertandinganPatch {
            nama,
            kategori_id,
            tim_tuan_rumah,
            tim_tamu,
            liga,
            waktu_mulai,
            deskripsi,
            status,
        },
        venue_ids,
    };
    (perubahan, errors)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct PertandinganResponse {
    pub id: i64,
    pub nama: String,
    pub kategori_id: i64,
    pub kategori: Option<Kategori>,
    pub tim_tuan_rumah: String,
    pub tim_tamu: String,
    pub liga: Option<String>,
    pub waktu_mulai: String,
    pub deskripsi: Option<String>,
    pub status: StatusPertandingan,
    pub venue_ids: Vec<i64>,
    pub created_at: String,
    pub updated_at: String,
}

impl PertandinganResponse {
    pub fn dari(pertandingan: Pertandingan, kategori: Option<Kategori>, venue_ids: Vec<i64>) -> Self {
        Self {
            id: pertandingan.id,
            nama: pertandingan.nama,
            kategori_id: pertandingan.kategori_id,
            kategori,
            tim_tuan_rumah: pertandingan.tim_tuan_rumah,
            tim_tamu: pertandingan.tim_tamu,
            liga: pertandingan.liga,
            waktu_mulai: pertandingan.waktu_mulai,
            deskripsi: pertandingan.deskripsi,
            status: pertandingan.status,
            venue_ids,
            created_at: pertandingan.created_at,
            updated_at: pertandingan.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn isian(value: Value) -> Isian {
        Isian::dari_json(value).unwrap()
    }

    #[test]
    fn test_normalisasi_waktu() {
        assert_eq!(normalisasi_waktu("2024-12-01T19:00"), Some("2024-12-01 19:00:00".to_string()));
        assert_eq!(normalisasi_waktu(" 2024-12-01 19:30:15 "), Some("2024-12-01 19:30:15".to_string()));
        assert_eq!(normalisasi_waktu("2024-13-01 19:00:00"), None);
        assert_eq!(normalisasi_waktu("besok malam"), None);
    }

    #[test]
    fn test_request_lengkap_status_default_aktif() {
        let (request, errors) = PertandinganRequest::validasi(isian(json!({
            "nama": "Derby",
            "kategori_id": "1",
            "tim_tuan_rumah": "Persija",
            "tim_tamu": "Persib",
            "waktu_mulai": "2024-12-01T19:00",
            "venue_ids": [2, "3"]
        })));
        assert!(errors.is_empty());

        let (baru, venue_ids) = request.into_pertandingan_baru().expect("field wajib terisi");
        assert_eq!(baru.kategori_id, 1);
        assert_eq!(baru.waktu_mulai, "2024-12-01 19:00:00");
        assert_eq!(baru.status, StatusPertandingan::Aktif);
        assert_eq!(venue_ids, vec![2, 3]);
    }

    #[test]
    fn test_request_kosong_dan_tidak_valid() {
        let (_, errors) = PertandinganRequest::validasi(isian(json!({})));
        for field in ["nama", "kategori_id", "tim_tuan_rumah", "tim_tamu", "waktu_mulai"] {
            assert!(errors.field_errors().contains_key(field), "field {} harus error", field);
        }

        let (_, errors) = PertandinganRequest::validasi(isian(json!({
            "nama": "Derby",
            "kategori_id": 1,
            "tim_tuan_rumah": "Persija",
            "tim_tamu": "x".repeat(256),
            "waktu_mulai": "nanti",
            "status": "selesai",
            "venue_ids": "1,2"
        })));
        let fields = errors.field_errors();
        assert_eq!(fields["waktu_mulai"][0].message.as_deref(), Some(PESAN_WAKTU));
        assert_eq!(fields["status"][0].message.as_deref(), Some(PESAN_STATUS));
        assert!(fields.contains_key("tim_tamu"));
        assert!(fields.contains_key("venue_ids"));
    }

    #[test]
    fn test_validasi_update() {
        let (perubahan, errors) = validasi_update(isian(json!({
            "liga": null,
            "waktu_mulai": "2024-12-02 20:00",
            "status": "tidak_aktif",
            "venue_ids": null
        })));
        assert!(errors.is_empty());
        assert_eq!(perubahan.patch.liga, Some(None));
        assert_eq!(perubahan.patch.waktu_mulai, Some("2024-12-02 20:00:00".to_string()));
        assert_eq!(perubahan.patch.status, Some(StatusPertandingan::TidakAktif));
        assert_eq!(perubahan.patch.nama, None);
        assert_eq!(perubahan.venue_ids, Some(vec![]));

        let (perubahan, _) = validasi_update(isian(json!({ "nama": "Final" })));
        assert_eq!(perubahan.venue_ids, None);
    }

    #[test]
    fn test_validasi_update_null_pada_field_wajib() {
        let (_, errors) = validasi_update(isian(json!({ "nama": null, "kategori_id": null, "waktu_mulai": null })));
        let fields = errors.field_errors();
        assert!(fields.contains_key("nama"));
        assert!(fields.contains_key("kategori_id"));
        assert!(fields.contains_key("waktu_mulai"));
    }
}
