mod error;
pub use error::Error;

pub mod registry;
pub use registry::{MappingKey, Registry};

pub mod schema;

/// A Result type alias that uses colmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
