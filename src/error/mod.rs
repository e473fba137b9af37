mod app;
mod fetch;
mod registry;
mod serve;

pub use app::{AppError, AppResult};
pub use fetch::FetchError;
pub use registry::RegistryError;
pub use serve::ServeError;
