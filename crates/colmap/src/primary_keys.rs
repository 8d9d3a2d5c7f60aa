use crate::ident::{canonicalize, IntoProperty};
use crate::Catalog;
use colmap_core::schema::app::{Entity, EntityType, Property, PropertyResolver, TypeInfo};
use colmap_core::{err, MappingKey, Registry, Result};
use std::fmt;
use std::sync::Arc;

/// Designates the primary property of entity types.
///
/// Each entity has at most one primary property at a time.
pub struct PrimaryKeys {
    registry: Registry<Property>,
    resolver: Arc<dyn PropertyResolver>,
}

impl PrimaryKeys {
    pub fn new() -> PrimaryKeys {
        PrimaryKeys::with_resolver(Arc::new(Catalog::new()))
    }

    pub fn with_resolver(resolver: Arc<dyn PropertyResolver>) -> PrimaryKeys {
        PrimaryKeys {
            registry: Registry::new(),
            resolver,
        }
    }

    /// Designates a property of `E` as its primary.
    ///
    /// Fails with a mapping exists error if `E` already has a primary and
    /// `force` is not set.
    pub fn add<E: Entity>(&self, property: impl IntoProperty<E>, force: bool) -> Result<()> {
        let entity = EntityType::of::<E>();
        property
            .into_property(&*self.resolver)
            .and_then(|property| self.registry.add(MappingKey::for_type(entity), property, force))
            .map_err(|err| err.context(err!("designating primary of `{}`", entity)))
    }

    /// Designates a property of `entity`, given as a descriptor. The
    /// descriptor `entity` declares under that name is what gets stored.
    pub fn add_property(&self, entity: EntityType, property: &Property, force: bool) -> Result<()> {
        canonicalize(&*self.resolver, &entity, property)
            .and_then(|property| self.registry.add(MappingKey::for_type(entity), property, force))
            .map_err(|err| err.context(err!("designating primary of `{}`", entity)))
    }

    /// Returns the primary property of `E`, if designated.
    pub fn get<E: Entity>(&self) -> Option<Property> {
        self.get_type(EntityType::of::<E>())
    }

    pub fn get_type(&self, entity: impl Into<TypeInfo>) -> Option<Property> {
        self.registry.try_get(&MappingKey::for_type(entity))
    }

    /// Removes the primary designation of `E`, if any.
    pub fn remove<E: Entity>(&self) {
        self.remove_type(EntityType::of::<E>())
    }

    pub fn remove_type(&self, entity: impl Into<TypeInfo>) {
        self.registry.try_remove(&MappingKey::for_type(entity));
    }

    pub fn clear(&self) {
        self.registry.clear();
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

impl Default for PrimaryKeys {
    fn default() -> Self {
        PrimaryKeys::new()
    }
}

impl fmt::Debug for PrimaryKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimaryKeys")
            .field("registry", &self.registry)
            .finish()
    }
}
