pub mod pertandingan;
pub mod status_pertandingan;

pub use pertandingan::{Pertandingan, PertandinganBaru, PertandinganPatch};
pub use status_pertandingan::StatusPertandingan;
