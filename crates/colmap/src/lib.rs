//! Column-type and primary-key mappings for entity types.
//!
//! Two registries are kept per [`Mappings`] context:
//!
//! - [`TypeMap`] binds whole types, and individual entity properties, to the
//!   [`db::Type`] their values are bound and read as.
//! - [`PrimaryKeys`] designates one primary property per entity type.
//!
//! Properties are identified by name, by [`Field`], or by a typed [`Path`],
//! and resolved against the entity's declared properties by a
//! [`PropertyResolver`] (by default a [`Catalog`]).
//!
//! ```
//! use colmap::{db, properties, Entity, Mappings, Property};
//!
//! struct Order;
//!
//! impl Entity for Order {
//!     fn properties() -> Vec<Property> {
//!         properties!(Order { Id: i64, CreatedAt: String })
//!     }
//! }
//!
//! # fn main() -> colmap::Result<()> {
//! let mappings = Mappings::new();
//! mappings.types().add::<i32>(db::Type::Integer(4), false)?;
//! mappings.types().add_field::<Order>("createdat", db::Type::DateTime(7), false)?;
//! mappings.primary_keys().add::<Order>("Id", false)?;
//!
//! assert_eq!(mappings.types().get::<i32>(), Some(db::Type::Integer(4)));
//! assert_eq!(mappings.primary_keys().get::<Order>().unwrap().name(), "Id");
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

mod catalog;
pub use catalog::Catalog;

mod ident;
pub use ident::{IntoProperty, Path};

mod mappings;
pub use mappings::{global, Mappings};

mod primary_keys;
pub use primary_keys::PrimaryKeys;

mod type_map;
pub use type_map::TypeMap;

pub use colmap_core::schema::app::{
    Entity, EntityType, Field, Property, PropertyIdent, PropertyResolver, TypeInfo,
};
pub use colmap_core::schema::db;
pub use colmap_core::{Error, MappingKey, Registry, Result};
