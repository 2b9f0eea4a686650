// Helper validasi yang dipakai bersama oleh controller.
//
// Aturan panjang dan rentang ditulis sebagai atribut `validator` di DTO. Tipe
// dan field wajib dicek `masukan::Isian`. Aturan yang butuh database (unique,
// exists) dan aturan field nullable pada patch ditambahkan lewat fungsi di
// bawah ke `ValidationErrors` yang sama, sehingga klien menerima satu 422.

use std::borrow::Cow;

use serde_json::Value;
use validator::{ValidationError, ValidationErrors};

use super::error::ApiError;

pub fn tambah_error(errors: &mut ValidationErrors, field: &'static str, code: &'static str, pesan: String) {
    errors.add(field, ValidationError::new(code).with_message(Cow::Owned(pesan)));
}

pub fn hasil(errors: ValidationErrors) -> Result<(), ApiError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(errors))
    }
}

/// Trim string lalu ubah string kosong menjadi `None`.
pub fn bersihkan(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Aturan `boolean`: menerima true/false, 1/0, "1"/"0", "true"/"false".
pub fn nilai_boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        Value::String(s) => match s.as_str() {
            "1" | "true" => Some(true),
            "0" | "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

pub fn validasi_panjang(errors: &mut ValidationErrors, field: &'static str, value: Option<&str>, max: usize) {
    if let Some(v) = value {
        if v.chars().count() > max {
            tambah_error(errors, field, "length", format!("Kolom {} maksimal {} karakter.", field.replace('_', " "), max));
        }
    }
}

/// Field patch yang `sometimes` tapi tidak nullable: `null` ditolak.
pub fn validasi_bukan_null(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &Option<Option<String>>,
    max: usize,
) -> Option<String> {
    match value {
        None => None,
        Some(None) => {
            tambah_error(errors, field, "string", format!("Kolom {} harus berupa teks.", field.replace('_', " ")));
            None
        }
        Some(Some(v)) => {
            validasi_panjang(errors, field, Some(v), max);
            Some(v.clone())
        }
    }
}

/// Field patch nullable: `null` berarti kosongkan nilainya.
pub fn validasi_nullable(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &Option<Option<String>>,
    max: usize,
) {
    if let Some(Some(v)) = value {
        validasi_panjang(errors, field, Some(v), max);
    }
}
