// Struct yang merepresentasikan venue (tempat nonton / olahraga) dalam sistem.

// # Fields
// - `foto`, `video`: referensi file media, disimpan apa adanya
// - `kapasitas`: jumlah orang yang bisa ditampung (minimal 1)
// - `status`: `tersedia` atau `tidak_tersedia`

use super::StatusVenue;

#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
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

// Data venue yang belum punya id
#[derive(Debug, Clone)]
pub struct VenueBaru {
    pub nama: String,
    pub alamat: String,
    pub kota: String,
    pub foto: Option<String>,
    pub video: Option<String>,
    pub kontak: String,
    pub kapasitas: i64,
    pub fasilitas: Option<String>,
    pub status: StatusVenue,
}

/// Perubahan parsial. `None` = tidak diubah; untuk field nullable,
/// `Some(None)` = dikosongkan.
#[derive(Debug, Clone, Default)]
pub struct VenuePatch {
    pub nama: Option<String>,
    pub alamat: Option<String>,
    pub kota: Option<String>,
    pub foto: Option<Option<String>>,
    pub video: Option<Option<String>>,
    pub kontak: Option<String>,
    pub kapasitas: Option<i64>,
    pub fasilitas: Option<Option<String>>,
    pub status: Option<StatusVenue>,
}

impl Venue {
    pub fn terapkan(&mut self, patch: VenuePatch) {
        if let Some(nama) = patch.nama {
            self.nama = nama;
        }
        if let Some(alamat) = patch.alamat {
            self.alamat = alamat;
        }
        if let Some(kota) = patch.kota {
            self.kota = kota;
        }
        if let Some(foto) = patch.foto {
            self.foto = foto;
        }
        if let Some(video) = patch.video {
            self.video = video;
        }
        if let Some(kontak) = patch.kontak {
            self.kontak = kontak;
        }
        if let Some(kapasitas) = patch.kapasitas {
            self.kapasitas = kapasitas;
        }
        if let Some(fasilitas) = patch.fasilitas {
            self.fasilitas = fasilitas;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    pub fn toggle_status(&mut self) {
        self.status = self.status.toggle();
    }
}
