use crate::ident::{canonicalize, IntoProperty};
use crate::Catalog;
use colmap_core::schema::app::{Entity, EntityType, Property, PropertyResolver, TypeInfo};
use colmap_core::schema::db;
use colmap_core::{err, Error, MappingKey, Registry, Result};
use std::fmt;
use std::sync::Arc;

/// Maps types, and properties of entity types, to database storage types.
///
/// Type-level entries apply to every value of a Rust type. Property-level
/// entries apply to one property of one entity. Both live in the same
/// registry; their keys never collide.
///
/// A type-level entry may hold `None`, recording that the type is explicitly
/// unmapped. Property-level entries always hold a type.
pub struct TypeMap {
    registry: Registry<Option<db::Type>>,
    resolver: Arc<dyn PropertyResolver>,
}

impl TypeMap {
    /// Creates an empty map resolving properties through a fresh [`Catalog`].
    pub fn new() -> TypeMap {
        TypeMap::with_resolver(Arc::new(Catalog::new()))
    }

    pub fn with_resolver(resolver: Arc<dyn PropertyResolver>) -> TypeMap {
        TypeMap {
            registry: Registry::new(),
            resolver,
        }
    }

    /// Maps the type `T`.
    pub fn add<T: ?Sized + 'static>(
        &self,
        db_ty: impl Into<Option<db::Type>>,
        force: bool,
    ) -> Result<()> {
        self.add_type(TypeInfo::of::<T>(), db_ty, force)
    }

    /// Maps `ty`. Passing `None` records the type as explicitly unmapped.
    ///
    /// Fails with a mapping exists error if `ty` is already mapped and
    /// `force` is not set.
    pub fn add_type(
        &self,
        ty: TypeInfo,
        db_ty: impl Into<Option<db::Type>>,
        force: bool,
    ) -> Result<()> {
        self.registry
            .add(MappingKey::for_type(ty), db_ty.into(), force)
    }

    /// Maps a property of `E`, identified by name, [`Field`](crate::Field),
    /// [`Path`](crate::Path) or descriptor.
    pub fn add_field<E: Entity>(
        &self,
        property: impl IntoProperty<E>,
        db_ty: impl Into<Option<db::Type>>,
        force: bool,
    ) -> Result<()> {
        let entity = EntityType::of::<E>();
        property
            .into_property(&*self.resolver)
            .and_then(|property| self.insert(entity, &property, db_ty.into(), force))
            .map_err(|err| err.context(err!("mapping property of `{}`", entity)))
    }

    /// Maps a property of `entity`, given as a descriptor.
    ///
    /// The descriptor is resolved by name to the one `entity` declares. Fails
    /// with a property not found error if it does not resolve, and with an
    /// invalid value error if `db_ty` is `None`.
    pub fn add_property(
        &self,
        entity: EntityType,
        property: &Property,
        db_ty: impl Into<Option<db::Type>>,
        force: bool,
    ) -> Result<()> {
        canonicalize(&*self.resolver, &entity, property)
            .and_then(|property| self.insert(entity, &property, db_ty.into(), force))
            .map_err(|err| err.context(err!("mapping property of `{}`", entity)))
    }

    fn insert(
        &self,
        entity: EntityType,
        property: &Property,
        db_ty: Option<db::Type>,
        force: bool,
    ) -> Result<()> {
        let Some(db_ty) = db_ty else {
            return Err(Error::invalid_value(format!(
                "database type for `{}` must be set",
                property
            )));
        };

        self.registry.add(
            MappingKey::for_property(entity, property),
            Some(db_ty),
            force,
        )
    }

    /// Returns the type-level mapping of `T`.
    pub fn get<T: ?Sized + 'static>(&self) -> Option<db::Type> {
        self.get_type(TypeInfo::of::<T>())
    }

    /// Returns the type-level mapping of `ty`, or `None` if it was never
    /// mapped or is explicitly unmapped.
    pub fn get_type(&self, ty: TypeInfo) -> Option<db::Type> {
        self.registry.try_get(&MappingKey::for_type(ty)).flatten()
    }

    /// Returns `true` if `ty` has a type-level entry, including an explicit
    /// "unmapped" one.
    pub fn contains_type(&self, ty: TypeInfo) -> bool {
        self.registry.contains_key(&MappingKey::for_type(ty))
    }

    /// Returns the property-level mapping of a property of `E`.
    pub fn get_field<E: Entity>(&self, property: impl IntoProperty<E>) -> Result<Option<db::Type>> {
        let property = property.into_property(&*self.resolver)?;
        Ok(self.lookup(EntityType::of::<E>(), &property))
    }

    pub fn get_property(&self, entity: EntityType, property: &Property) -> Result<Option<db::Type>> {
        let property = canonicalize(&*self.resolver, &entity, property)?;
        Ok(self.lookup(entity, &property))
    }

    fn lookup(&self, entity: EntityType, property: &Property) -> Option<db::Type> {
        self.registry
            .try_get(&MappingKey::for_property(entity, property))
            .flatten()
    }

    /// Returns the storage type a property of `E` should be bound as.
    ///
    /// Checks, in order: the property-level mapping, the type-level mapping
    /// of the property's value type, and the default storage type of the
    /// value type. An explicit "unmapped" type-level entry stops the search.
    pub fn resolve<E: Entity>(&self, property: impl IntoProperty<E>) -> Result<Option<db::Type>> {
        let property = property.into_property(&*self.resolver)?;

        if let Some(db_ty) = self.lookup(EntityType::of::<E>(), &property) {
            return Ok(Some(db_ty));
        }

        match self.registry.try_get(&MappingKey::for_type(property.ty)) {
            Some(db_ty) => Ok(db_ty),
            None => Ok(db::Type::from_rust(property.ty)),
        }
    }

    /// Removes the type-level mapping of `T`, if any.
    pub fn remove<T: ?Sized + 'static>(&self) {
        self.remove_type(TypeInfo::of::<T>())
    }

    pub fn remove_type(&self, ty: TypeInfo) {
        self.registry.try_remove(&MappingKey::for_type(ty));
    }

    /// Removes the property-level mapping of a property of `E`, if any.
    pub fn remove_field<E: Entity>(&self, property: impl IntoProperty<E>) -> Result<()> {
        let property = property.into_property(&*self.resolver)?;
        self.registry
            .try_remove(&MappingKey::for_property(EntityType::of::<E>(), &property));
        Ok(())
    }

    pub fn remove_property(&self, entity: EntityType, property: &Property) -> Result<()> {
        let property = canonicalize(&*self.resolver, &entity, property)?;
        self.registry
            .try_remove(&MappingKey::for_property(entity, &property));
        Ok(())
    }

    /// Removes every type-level and property-level mapping.
    pub fn clear(&self) {
        self.registry.clear();
    }

    /// Number of entries, counting both levels.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

impl Default for TypeMap {
    fn default() -> Self {
        TypeMap::new()
    }
}

impl fmt::Debug for TypeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMap")
            .field("registry", &self.registry)
            .finish()
    }
}
