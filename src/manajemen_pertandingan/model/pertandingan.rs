// Jadwal pertandingan yang bisa ditonton di satu atau lebih venue.
//
// `waktu_mulai` disimpan sebagai teks `YYYY-MM-DD HH:MM:SS` sehingga urutan
// string sama dengan urutan waktu. Relasi ke venue disimpan terpisah di tabel
// `venue_pertandingan`.

use super::StatusPertandingan;

#[derive(Debug, Clone, PartialEq)]
pub struct Pertandingan {
    pub id: i64,
    pub nama: String,
    pub kategori_id: i64,
    pub tim_tuan_rumah: String,
    pub tim_tamu: String,
    pub liga: Option<String>,
    pub waktu_mulai: String,
    pub deskripsi: Option<String>,
    pub status: StatusPertandingan,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone)]
pub struct PertandinganBaru {
    pub nama: String,
    pub kategori_id: i64,
    pub tim_tuan_rumah: String,
    pub tim_tamu: String,
    pub liga: Option<String>,
    pub waktu_mulai: String,
    pub deskripsi: Option<String>,
    pub status: StatusPertandingan,
}

#[derive(Debug, Clone, Default)]
pub struct PertandinganPatch {
    pub nama: Option<String>,
    pub kategori_id: Option<i64>,
    pub tim_tuan_rumah: Option<String>,
    pub tim_tamu: Option<String>,
    pub liga: Option<Option<String>>,
    pub waktu_mulai: Option<String>,
    pub deskripsi: Option<Option<String>>,
    pub status: Option<StatusPertandingan>,
}

impl Pertandingan {
    pub fn terapkan(&mut self, patch: PertandinganPatch) {
        if let Some(nama) = patch.nama {
            self.nama = nama;
        }
        if let Some(kategori_id) = patch.kategori_id {
            self.kategori_id = kategori_id;
        }
        if let Some(tim) = patch.tim_tuan_rumah {
            self.tim_tuan_rumah = tim;
        }
        if let Some(tim) = patch.tim_tamu {
            self.tim_tamu = tim;
        }
        if let Some(liga) = patch.liga {
            self.liga = liga;
        }
        if let Some(waktu_mulai) = patch.waktu_mulai {
            self.waktu_mulai = waktu_mulai;
        }
        if let Some(deskripsi) = patch.deskripsi {
            self.deskripsi = deskripsi;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    pub fn toggle_status(&mut self) {
        self.status = self.status.toggle();
    }
}
