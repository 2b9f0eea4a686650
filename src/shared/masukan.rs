// Body request JSON yang dibaca tanpa skema tetap.
//
// `Masukan` adalah data guard yang tidak pernah gagal karena isi body: JSON
// rusak baru dilaporkan saat handler memanggil `isian()`, yaitu setelah venue
// dan resource induk lain ditemukan. `Isian` membaca field satu per satu dan
// mencatat tipe yang salah sebagai error per field.

use std::io;

use rocket::data::{self, Data, FromData, Limits};
use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::Request;
use serde_json::{Map, Value};
use validator::ValidationErrors;

use super::error::ApiError;
use super::validation::{bersihkan, nilai_boolean, tambah_error};

pub const PESAN_BODY_RUSAK: &str = "Body harus berupa objek JSON yang valid.";

#[derive(Debug)]
pub struct Masukan {
    isi: Option<Map<String, Value>>,
}

impl Masukan {
    pub fn urai(body: &str) -> Self {
        if body.trim().is_empty() {
            return Self { isi: Some(Map::new()) };
        }
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(isi)) => Self { isi: Some(isi) },
            _ => Self { isi: None },
        }
    }

    /// JSON yang bukan objek menghasilkan 422 dengan error pada `body`.
    pub fn isian(self) -> Result<Isian, ApiError> {
        match self.isi {
            Some(isi) => Ok(Isian::baru(isi)),
            None => {
                let mut errors = ValidationErrors::new();
                tambah_error(&mut errors, "body", "json", PESAN_BODY_RUSAK.to_string());
                Err(ApiError::Validation(errors))
            }
        }
    }
}

#[rocket::async_trait]
impl<'r> FromData<'r> for Masukan {
    type Error = io::Error;

    async fn from_data(req: &'r Request<'_>, data: Data<'r>) -> data::Outcome<'r, Self> {
        let limit = req.limits().get("json").unwrap_or(Limits::JSON);
        match data.open(limit).into_string().await {
            Ok(body) if body.is_complete() => Outcome::Success(Masukan::urai(&body)),
            Ok(_) => Outcome::Error((
                Status::PayloadTooLarge,
                io::Error::new(io::ErrorKind::Other, "body melebihi batas"),
            )),
            // Bukan UTF-8: diperlakukan sama dengan JSON rusak
            Err(e) if e.kind() == io::ErrorKind::InvalidData => Outcome::Success(Masukan { isi: None }),
            Err(e) => Outcome::Error((Status::BadRequest, e)),
        }
    }
}

#[derive(Debug, Default)]
pub struct Isian {
    isi: Map<String, Value>,
    galat: Vec<(&'static str, &'static str, String)>,
}

fn label(field: &str) -> String {
    field.replace('_', " ")
}

fn ke_bilangan_bulat(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn ke_angka(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

fn ke_daftar_bilangan_bulat(value: &Value) -> Option<Vec<i64>> {
    value.as_array()?.iter().map(ke_bilangan_bulat).collect()
}

fn ke_teks(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

impl Isian {
    fn baru(isi: Map<String, Value>) -> Self {
        Self { isi, galat: Vec::new() }
    }

    /// Untuk test dan pemanggil yang sudah memegang `Value`.
    pub fn dari_json(value: Value) -> Result<Self, ApiError> {
        match value {
            Value::Object(isi) => Ok(Self::baru(isi)),
            _ => Masukan { isi: None }.isian(),
        }
    }

    fn catat(&mut self, field: &'static str, code: &'static str, pesan: String) {
        self.galat.push((field, code, pesan));
    }

    fn punya_galat(&self, field: &str) -> bool {
        self.galat.iter().any(|(f, _, _)| *f == field)
    }

    /// `None` = tidak dikirim, `Some(None)` = dikirim `null` atau tipenya salah.
    fn baca<T>(
        &mut self,
        field: &'static str,
        code: &'static str,
        jenis: &str,
        ubah: fn(&Value) -> Option<T>,
    ) -> Option<Option<T>> {
        let hasil = match self.isi.get(field)? {
            Value::Null => return Some(None),
            value => ubah(value),
        };
        if hasil.is_none() {
            self.catat(field, code, format!("Kolom {} harus berupa {}.", label(field), jenis));
        }
        Some(hasil)
    }

    fn wajib<T>(&mut self, field: &'static str, nilai: Option<T>) -> Option<T> {
        if nilai.is_none() && !self.punya_galat(field) {
            self.catat(field, "required", format!("Kolom {} wajib diisi.", label(field)));
        }
        nilai
    }

    fn patch<T>(&mut self, field: &'static str, nilai: Option<Option<T>>) -> Option<Option<T>> {
        // Tipe salah sudah tercatat; jangan sampai terbaca sebagai `null`
        if self.punya_galat(field) { None } else { nilai }
    }

    pub fn teks(&mut self, field: &'static str) -> Option<String> {
        bersihkan(self.baca(field, "string", "teks", ke_teks).flatten())
    }

    pub fn teks_wajib(&mut self, field: &'static str) -> Option<String> {
        let nilai = self.teks(field);
        self.wajib(field, nilai)
    }

    /// String kosong dianggap `null`.
    pub fn teks_patch(&mut self, field: &'static str) -> Option<Option<String>> {
        let nilai = self.baca(field, "string", "teks", ke_teks).map(bersihkan);
        self.patch(field, nilai)
    }

    pub fn bilangan_bulat(&mut self, field: &'static str) -> Option<i64> {
        self.baca(field, "integer", "bilangan bulat", ke_bilangan_bulat).flatten()
    }

    pub fn bilangan_bulat_wajib(&mut self, field: &'static str) -> Option<i64> {
        let nilai = self.bilangan_bulat(field);
        self.wajib(field, nilai)
    }

    pub fn bilangan_bulat_patch(&mut self, field: &'static str) -> Option<Option<i64>> {
        let nilai = self.baca(field, "integer", "bilangan bulat", ke_bilangan_bulat);
        self.patch(field, nilai)
    }

    pub fn angka_wajib(&mut self, field: &'static str) -> Option<f64> {
        let nilai = self.baca(field, "numeric", "angka", ke_angka).flatten();
        self.wajib(field, nilai)
    }

    pub fn angka_patch(&mut self, field: &'static str) -> Option<Option<f64>> {
        let nilai = self.baca(field, "numeric", "angka", ke_angka);
        self.patch(field, nilai)
    }

    /// Array id; `null` dianggap tidak dikirim.
    pub fn daftar_bilangan_bulat(&mut self, field: &'static str) -> Option<Vec<i64>> {
        self.baca(field, "array", "array bilangan bulat", ke_daftar_bilangan_bulat).flatten()
    }

    pub fn daftar_bilangan_bulat_patch(&mut self, field: &'static str) -> Option<Option<Vec<i64>>> {
        let nilai = self.baca(field, "array", "array bilangan bulat", ke_daftar_bilangan_bulat);
        self.patch(field, nilai)
    }

    /// Aturan `boolean`; `null` diperlakukan sama dengan tidak dikirim.
    pub fn boolean(&mut self, field: &'static str) -> Option<bool> {
        let value = self.isi.get(field).filter(|v| !v.is_null())?;
        let nilai = nilai_boolean(value);
        if nilai.is_none() {
            self.catat(field, "boolean", format!("Kolom {} harus bernilai true atau false.", label(field)));
        }
        nilai
    }

    /// Pindahkan error tipe dan wajib ke kumpulan error validasi.
    pub fn laporkan(self, errors: &mut ValidationErrors) {
        for (field, code, pesan) in self.galat {
            tambah_error(errors, field, code, pesan);
        }
    }
}
