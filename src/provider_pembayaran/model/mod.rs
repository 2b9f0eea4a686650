pub mod builder;
pub mod provider;

pub use builder::ProviderPembayaranBuilder;
pub use provider::{ProviderPembayaran, ProviderPembayaranBaru, ProviderPembayaranPatch};
