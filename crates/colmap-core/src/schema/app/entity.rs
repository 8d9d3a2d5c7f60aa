use super::{Property, TypeInfo};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A type whose properties can be mapped to database columns.
///
/// Implementations list the entity's properties in declaration order. The
/// list is read once per resolver and cached, so it should be cheap but does
/// not need to be `const`.
pub trait Entity: 'static {
    fn properties() -> Vec<Property>;
}

/// Identity of an entity type, together with the means to enumerate its
/// properties.
///
/// Property-level mappings and primary keys are always scoped to an entity,
/// never to an arbitrary type.
#[derive(Clone, Copy)]
pub struct EntityType {
    info: TypeInfo,
    properties: fn() -> Vec<Property>,
}

impl EntityType {
    pub fn of<E: Entity>() -> EntityType {
        EntityType {
            info: TypeInfo::of::<E>(),
            properties: E::properties,
        }
    }

    /// Builds an entity identity from an explicit property source. Used by
    /// callers that describe entities without implementing [`Entity`].
    pub fn new(info: TypeInfo, properties: fn() -> Vec<Property>) -> EntityType {
        EntityType { info, properties }
    }

    pub fn info(&self) -> TypeInfo {
        self.info
    }

    /// Enumerates the entity's properties.
    pub fn properties(&self) -> Vec<Property> {
        (self.properties)()
    }
}

impl From<EntityType> for TypeInfo {
    fn from(entity: EntityType) -> TypeInfo {
        entity.info
    }
}

impl From<&EntityType> for TypeInfo {
    fn from(entity: &EntityType) -> TypeInfo {
        entity.info
    }
}

impl PartialEq for EntityType {
    fn eq(&self, other: &Self) -> bool {
        self.info == other.info
    }
}

impl Eq for EntityType {}

impl Hash for EntityType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.info.hash(state);
    }
}

impl fmt::Debug for EntityType {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "EntityType({})", self.info.name())
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.info, fmt)
    }
}
