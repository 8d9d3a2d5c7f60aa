use super::{EntityType, Field, Property};
use std::fmt;

/// A caller-supplied property identifier, prior to resolution.
#[derive(Debug, Clone, Copy)]
pub enum PropertyIdent<'a> {
    /// Property name, matched ignoring case.
    Name(&'a str),

    /// Field-name object, matched ignoring case. A field carrying a declaring
    /// type only matches on that type.
    Field(&'a Field),

    /// Typed property reference, matched exactly.
    Path(&'a str),
}

impl PropertyIdent<'_> {
    /// The name carried by the identifier.
    pub fn name(&self) -> &str {
        match self {
            PropertyIdent::Name(name) => name,
            PropertyIdent::Field(field) => field.name(),
            PropertyIdent::Path(name) => name,
        }
    }
}

impl fmt::Display for PropertyIdent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves property identifiers to property descriptors.
///
/// Implementations are shared between facades and threads.
pub trait PropertyResolver: Send + Sync {
    /// Returns the property of `entity` the identifier refers to, or `None`
    /// if the entity has no such property.
    fn resolve(&self, entity: &EntityType, ident: &PropertyIdent<'_>) -> Option<Property>;
}

impl<R: PropertyResolver + ?Sized> PropertyResolver for std::sync::Arc<R> {
    fn resolve(&self, entity: &EntityType, ident: &PropertyIdent<'_>) -> Option<Property> {
        (**self).resolve(entity, ident)
    }
}

impl<R: PropertyResolver + ?Sized> PropertyResolver for &R {
    fn resolve(&self, entity: &EntityType, ident: &PropertyIdent<'_>) -> Option<Property> {
        (**self).resolve(entity, ident)
    }
}
