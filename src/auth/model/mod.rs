pub mod pengguna;
pub mod role;

pub use pengguna::Pengguna;
pub use role::Role;
