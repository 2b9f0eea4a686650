// Menu makanan/minuman yang dijual sebuah venue. Satu venue bisa punya
// banyak menu; `aktif` menandai menu yang sedang tersedia.

#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
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

#[derive(Debug, Clone, PartialEq)]
pub struct MenuBaru {
    pub venue_id: i64,
    pub nama: String,
    pub harga: f64,
    pub deskripsi: Option<String>,
    pub foto: Option<String>,
    pub aktif: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuPatch {
    pub nama: Option<String>,
    pub harga: Option<f64>,
    pub deskripsi: Option<Option<String>>,
    pub foto: Option<Option<String>>,
    pub aktif: Option<bool>,
}

impl Menu {
    pub fn terapkan(&mut self, patch: MenuPatch) {
        if let Some(nama) = patch.nama {
            self.nama = nama;
        }
        if let Some(harga) = patch.harga {
            self.harga = harga;
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
    }
}
