use std::fmt;
use std::str::FromStr;

use rocket::serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "snake_case")]
pub enum StatusPertandingan {
    #[default]
    Aktif,
    TidakAktif,
}

impl StatusPertandingan {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusPertandingan::Aktif => "aktif",
            StatusPertandingan::TidakAktif => "tidak_aktif",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            StatusPertandingan::Aktif => StatusPertandingan::TidakAktif,
            StatusPertandingan::TidakAktif => StatusPertandingan::Aktif,
        }
    }
}

impl fmt::Display for StatusPertandingan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatusPertandingan {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aktif" => Ok(StatusPertandingan::Aktif),
            "tidak_aktif" => Ok(StatusPertandingan::TidakAktif),
            other => Err(format!("Status pertandingan tidak valid: {}", other)),
        }
    }
}
