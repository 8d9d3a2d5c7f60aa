#[macro_use]
mod macros;

pub mod entities;
pub mod setup;

mod mappings_test;
pub use mappings_test::MappingsTest;

pub use setup::Setup;

pub use std_util::*;
