use std::fmt;
use std::str::FromStr;

use rocket::serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    AdminVenue,
    Infobar,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::AdminVenue => "admin_venue",
            Role::Infobar => "infobar",
        }
    }

    /// Satu-satunya titik perbandingan role: tidak ada hierarki, role harus sama persis.
    pub fn is_allowed(&self, required: Role) -> bool {
        *self == required
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Role::SuperAdmin),
            "admin_venue" => Ok(Role::AdminVenue),
            "infobar" => Ok(Role::Infobar),
            other => Err(format!("Role tidak dikenal: {}", other)),
        }
    }
}
