use std::fmt;
use std::str::FromStr;

use rocket::serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "snake_case")]
pub enum StatusVenue {
    Tersedia,
    TidakTersedia,
}

impl StatusVenue {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusVenue::Tersedia => "tersedia",
            StatusVenue::TidakTersedia => "tidak_tersedia",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            StatusVenue::Tersedia => StatusVenue::TidakTersedia,
            StatusVenue::TidakTersedia => StatusVenue::Tersedia,
        }
    }
}

impl fmt::Display for StatusVenue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatusVenue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tersedia" => Ok(StatusVenue::Tersedia),
            "tidak_tersedia" => Ok(StatusVenue::TidakTersedia),
            other => Err(format!("Status venue tidak valid: {}", other)),
        }
    }
}
