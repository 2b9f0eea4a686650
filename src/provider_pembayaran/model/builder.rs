// Builder untuk membuat ProviderPembayaranBaru secara bertahap.

// # Methods
// - `new()`: field wajib (nama, no_rek, penerima, venue, metode)
// - `deskripsi()`, `foto()`: field opsional
// - `aktif()`: default `true` kalau tidak di-set
// - `build()`: menghasilkan ProviderPembayaranBaru

use crate::provider_pembayaran::model::ProviderPembayaranBaru;

pub struct ProviderPembayaranBuilder {
    nama: String,
    no_rek: String,
    penerima: String,
    deskripsi: Option<String>,
    foto: Option<String>,
    aktif: bool,
    venue_id: i64,
    metode_pembayaran_id: i64,
}

impl ProviderPembayaranBuilder {
    pub fn new(nama: String, no_rek: String, penerima: String, venue_id: i64, metode_pembayaran_id: i64) -> Self {
        Self {
            nama,
            no_rek,
            penerima,
            deskripsi: None,
            foto: None,
            aktif: true,
            venue_id,
            metode_pembayaran_id,
        }
    }

    pub fn deskripsi(mut self, deskripsi: Option<String>) -> Self {
        self.deskripsi = deskripsi;
        self
    }

    pub fn foto(mut self, foto: Option<String>) -> Self {
        self.foto = foto;
        self
    }

    pub fn aktif(mut self, aktif: bool) -> Self {
        self.aktif = aktif;
        self
    }

    pub fn build(self) -> ProviderPembayaranBaru {
        ProviderPembayaranBaru {
            nama: self.nama,
            no_rek: self.no_rek,
            penerima: self.penerima,
            deskripsi: self.deskripsi,
            foto: self.foto,
            aktif: self.aktif,
            venue_id: self.venue_id,
            metode_pembayaran_id: self.metode_pembayaran_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_aktif_true() {
        let baru = ProviderPembayaranBuilder::new("BCA-5".to_string(), "123".to_string(), "Toko A".to_string(), 5, 1).build();
        assert!(baru.aktif);
        assert_eq!(baru.deskripsi, None);
        assert_eq!(baru.venue_id, 5);
    }

    #[test]
    fn test_field_opsional() {
        let baru = ProviderPembayaranBuilder::new("OVO".to_string(), "0812".to_string(), "Toko B".to_string(), 2, 3)
            .deskripsi(Some("Scan QR di kasir".to_string()))
            .foto(Some("ovo.png".to_string()))
            .aktif(false)
            .build();

        assert!(!baru.aktif);
        assert_eq!(baru.foto.as_deref(), Some("ovo.png"));
        assert_eq!(baru.deskripsi.as_deref(), Some("Scan QR di kasir"));
    }
}
