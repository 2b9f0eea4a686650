pub mod database;
pub mod error;
pub mod masukan;
pub mod metrics;
pub mod response;
pub mod validation;

pub use error::{ApiError, RepositoryError};
pub use response::{ApiResponse, ApiResult};
