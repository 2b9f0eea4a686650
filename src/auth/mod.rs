pub mod authenticator;
pub mod guard;
pub mod model;

pub use authenticator::{DbTokenAuthenticator, TokenAuthenticator};
pub use guard::{AdminVenue, SuperAdmin};
pub use model::{Pengguna, Role};
