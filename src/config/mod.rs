//! Configuration loading, validation and credential handling.

mod credentials;
mod loader;
mod types;

pub use credentials::SecureString;
pub use loader::{ConfigError, TOKEN_ENV_VAR};
pub use types::{ApiConfig, CacheConfig, Config, FilterConfig};
