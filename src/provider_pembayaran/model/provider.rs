// Struct yang merepresentasikan provider pembayaran milik sebuah venue.

// # Fields
// - `nama`: nama provider, unik di seluruh venue
// - `no_rek`: nomor rekening / akun tujuan
// - `penerima`: nama pemilik rekening
// - `aktif`: provider bisa dinonaktifkan tanpa dihapus
// - `metode_pembayaran_id`: referensi ke metode pembayaran

// # Methods
// - `terapkan()`: menerapkan perubahan parsial dari `ProviderPembayaranPatch`
// - `toggle_aktif()`: membalik status aktif

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderPembayaran {
    pub id: i64,
    pub nama: String,
    pub no_rek: String,
    pub penerima: String,
    pub deskripsi: Option<String>,
    pub foto: Option<String>,
    pub aktif: bool,
    pub venue_id: i64,
    pub metode_pembayaran_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderPembayaranBaru {
    pub nama: String,
    pub no_rek: String,
    pub penerima: String,
    pub deskripsi: Option<String>,
    pub foto: Option<String>,
    pub aktif: bool,
    pub venue_id: i64,
    pub metode_pembayaran_id: i64,
}

/// `None` = field tidak dikirim. Untuk `deskripsi` dan `foto`,
/// `Some(None)` berarti nilainya dikosongkan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderPembayaranPatch {
    pub nama: Option<String>,
    pub no_rek: Option<String>,
    pub penerima: Option<String>,
    pub deskripsi: Option<Option<String>>,
    pub foto: Option<Option<String>>,
    pub aktif: Option<bool>,
    pub metode_pembayaran_id: Option<i64>,
}

impl ProviderPembayaran {
    pub fn terapkan(&mut self, patch: ProviderPembayaranPatch) {
        if let Some(nama) = patch.nama {
            self.nama = nama;
        }
        if let Some(no_rek) = patch.no_rek {
            self.no_rek = no_rek;
        }
        if let Some(penerima) = patch.penerima {
            self.penerima = penerima;
        }
        if let Some(deskripsi) = patch.deskripsi {
            self.deskripsi = deskripsi;
        }
        if let Some(foto) = patch.foto {
            self.foto = foto;
        }
        if let Some(aktif) = patch.aktif {
            self.aktif = aktif;
        }
        if let Some(metode_pembayaran_id) = patch.metode_pembayaran_id {
            self.metode_pembayaran_id = metode_pembayaran_id;
        }
    }

    pub fn toggle_aktif(&mut self) {
        self.aktif = !self.aktif;
    }
}
