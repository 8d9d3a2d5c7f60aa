//! Database-level schema

mod ty;
pub use ty::Type;
