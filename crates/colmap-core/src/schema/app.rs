//! Application-level descriptors: type identities, entities and properties.

mod entity;
pub use entity::{Entity, EntityType};

mod field;
pub use field::Field;

mod property;
pub use property::Property;

mod resolver;
pub use resolver::{PropertyIdent, PropertyResolver};

mod type_info;
pub use type_info::TypeInfo;
