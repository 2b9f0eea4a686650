use rocket::serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::manajemen_venue::model::{StatusVenue, Venue, VenueBaru, VenuePatch};
use crate::shared::masukan::Isian;
use crate::shared::validation::{tambah_error, validasi_bukan_null, validasi_nullable};

#[derive(Debug, Default, Validate)]
pub struct VenueRequest {
    #[validate(length(max = 255, message = "Kolom nama maksimal 255 karakter."))]
    pub nama: Option<String>,
    pub alamat: Option<String>,
    #[validate(length(max = 255, message = "Kolom kota maksimal 255 karakter."))]
    pub kota: Option<String>,
    #[validate(length(max = 255, message = "Kolom foto maksimal 255 karakter."))]
    pub foto: Option<String>,
    #[validate(length(max = 255, message = "Kolom video maksimal 255 karakter."))]
    pub video: Option<String>,
    #[validate(length(max = 255, message = "Kolom kontak maksimal 255 karakter."))]
    pub kontak: Option<String>,
    #[validate(range(min = 1, message = "Kolom kapasitas minimal 1."))]
    pub kapasitas: Option<i64>,
    #[validate(length(max = 255, message = "Kolom fasilitas maksimal 255 karakter."))]
    pub fasilitas: Option<String>,
    pub status: Option<String>,
}

impl VenueRequest {
    /// Jalankan semua aturan lalu hasilkan data venue baru.
    pub fn into_venue_baru(mut isian: Isian) -> Result<VenueBaru, ValidationErrors> {
        let request = Self {
            nama: isian.teks_wajib("nama"),
            alamat: isian.teks_wajib("alamat"),
            kota: isian.teks_wajib("kota"),
            foto: isian.teks("foto"),
            video: isian.teks("video"),
            kontak: isian.teks_wajib("kontak"),
            kapasitas: isian.bilangan_bulat_wajib("kapasitas"),
            fasilitas: isian.teks("fasilitas"),
            status: isian.teks_wajib("status"),
        };

        let mut errors = request.validate().err().unwrap_or_default();
        isian.laporkan(&mut errors);
        let status = parse_status(&mut errors, request.status.as_deref());

        if !errors.is_empty() {
            return Err(errors);
        }

        match (request.nama, request.alamat, request.kota, request.kontak, request.kapasitas, status) {
            (Some(nama), Some(alamat), Some(kota), Some(kontak), Some(kapasitas), Some(status)) => Ok(VenueBaru {
                nama,
                alamat,
                kota,
                foto: request.foto,
                video: request.video,
                kontak,
                kapasitas,
                fasilitas: request.fasilitas,
                status,
            }),
            _ => Err(errors),
        }
    }
}

fn parse_status(errors: &mut ValidationErrors, status: Option<&str>) -> Option<StatusVenue> {
    let status = status?;
    match status.parse::<StatusVenue>() {
        Ok(status) => Some(status),
        Err(_) => {
            tambah_error(
                errors,
                "status",
                "in",
                "Kolom status harus salah satu dari: tersedia, tidak_tersedia.".to_string(),
            );
            None
        }
    }
}

/// Semua field `sometimes`.
pub fn into_patch(mut isian: Isian) -> Result<VenuePatch, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let nama = validasi_bukan_null(&mut errors, "nama", &isian.teks_patch("nama"), 255);
    let alamat = validasi_bukan_null(&mut errors, "alamat", &isian.teks_patch("alamat"), usize::MAX);
    let kota = validasi_bukan_null(&mut errors, "kota", &isian.teks_patch("kota"), 255);
    let kontak = validasi_bukan_null(&mut errors, "kontak", &isian.teks_patch("kontak"), 255);

    let foto = isian.teks_patch("foto");
    let video = isian.teks_patch("video");
    let fasilitas = isian.teks_patch("fasilitas");
    validasi_nullable(&mut errors, "foto", &foto, 255);
    validasi_nullable(&mut errors, "video", &video, 255);
    validasi_nullable(&mut errors, "fasilitas", &fasilitas, 255);

    let kapasitas = match isian.bilangan_bulat_patch("kapasitas") {
        None => None,
        Some(Some(k)) if k >= 1 => Some(k),
        Some(Some(_)) => {
            tambah_error(&mut errors, "kapasitas", "range", "Kolom kapasitas minimal 1.".to_string());
            None
        }
        Some(None) => {
            tambah_error(&mut errors, "kapasitas", "integer", "Kolom kapasitas harus berupa bilangan bulat.".to_string());
            None
        }
    };

    let status = match isian.teks_patch("status") {
        None => None,
        Some(None) => {
            tambah_error(&mut errors, "status", "in", "Kolom status harus salah satu dari: tersedia, tidak_tersedia.".to_string());
            None
        }
        Some(Some(s)) => parse_status(&mut errors, Some(&s)),
    };

    isian.laporkan(&mut errors);
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(VenuePatch {
        nama,
        alamat,
        kota,
        foto,
        video,
        kontak,
        kapasitas,
        fasilitas,
        status,
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct VenueResponse {
    pub id: i64,
    pub nama: String,
    pub alamat: String,
    pub kota: String,
    pub foto: Option<String>,
    pub video: Option<String>,
    pub kontak: String,
    pub kapasitas: i64,
    pub fasilitas: Option<String>,
    pub status: StatusVenue,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Venue> for VenueResponse {
    fn from(venue: Venue) -> Self {
        Self {
            id: venue.id,
            nama: venue.nama,
            alamat: venue.alamat,
            kota: venue.kota,
            foto: venue.foto,
            video: venue.video,
            kontak: venue.kontak,
            kapasitas: venue.kapasitas,
            fasilitas: venue.fasilitas,
            status: venue.status,
            created_at: venue.created_at,
            updated_at: venue.updated_at,
        }
    }
}
