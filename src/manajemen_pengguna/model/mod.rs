pub mod akun;

pub use akun::{Akun, AkunPatch};
