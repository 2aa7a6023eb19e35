//! Movie data service and its supporting pieces.
//!
//! - `service.rs` - Cache-checked access to the upstream list and detail endpoints
//! - `source.rs` - Trait the state store depends on
//! - `images.rs` - Poster/backdrop URL resolution
//! - `error.rs` - Failure taxonomy

pub mod error;
pub mod images;
pub mod service;
pub mod source;

pub use error::ApiError;
pub use images::{ImageResolver, DEFAULT_IMAGE_SIZE, PLACEHOLDER_IMAGE};
pub use service::{MovieService, Operation};
pub use source::MovieSource;
