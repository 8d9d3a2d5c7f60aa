use colmap_core::schema::app::{Entity, EntityType, Field, Property, PropertyIdent, PropertyResolver};
use colmap_core::{Error, Result};
use std::{fmt, marker::PhantomData};
use std_util::str::is_blank;

/// Typed reference to a property of entity `E`.
///
/// Paths are usually declared as associated constants on the entity and are
/// resolved by exact name:
///
/// ```
/// # use colmap::Path;
/// struct Order;
///
/// impl Order {
///     pub const CREATED_AT: Path<Order> = Path::new("CreatedAt");
/// }
/// ```
pub struct Path<E: ?Sized> {
    name: &'static str,
    _p: PhantomData<fn() -> E>,
}

impl<E: ?Sized> Path<E> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _p: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<E: ?Sized> Clone for Path<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ?Sized> Copy for Path<E> {}

impl<E: ?Sized> fmt::Debug for Path<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path({})", self.name)
    }
}

/// Anything that identifies a property of entity `E`.
///
/// Every facade operation taking a property identifier goes through this
/// trait, so identifier validation and resolution happen in one place.
pub trait IntoProperty<E: Entity> {
    /// Resolves the identifier to a descriptor of a property declared on `E`.
    fn into_property(self, resolver: &dyn PropertyResolver) -> Result<Property>;
}

fn resolve<E: Entity>(resolver: &dyn PropertyResolver, ident: PropertyIdent<'_>) -> Result<Property> {
    if is_blank(ident.name()) {
        return Err(Error::null_argument("property"));
    }

    let entity = EntityType::of::<E>();
    resolver
        .resolve(&entity, &ident)
        .ok_or_else(|| Error::property_not_found(entity.to_string(), ident.name()))
}

impl<E: Entity> IntoProperty<E> for &str {
    fn into_property(self, resolver: &dyn PropertyResolver) -> Result<Property> {
        resolve::<E>(resolver, PropertyIdent::Name(self))
    }
}

impl<E: Entity> IntoProperty<E> for &String {
    fn into_property(self, resolver: &dyn PropertyResolver) -> Result<Property> {
        resolve::<E>(resolver, PropertyIdent::Name(self))
    }
}

impl<E: Entity> IntoProperty<E> for String {
    fn into_property(self, resolver: &dyn PropertyResolver) -> Result<Property> {
        resolve::<E>(resolver, PropertyIdent::Name(&self))
    }
}

impl<E: Entity> IntoProperty<E> for &Field {
    fn into_property(self, resolver: &dyn PropertyResolver) -> Result<Property> {
        resolve::<E>(resolver, PropertyIdent::Field(self))
    }
}

impl<E: Entity> IntoProperty<E> for Field {
    fn into_property(self, resolver: &dyn PropertyResolver) -> Result<Property> {
        resolve::<E>(resolver, PropertyIdent::Field(&self))
    }
}

impl<E: Entity> IntoProperty<E> for Path<E> {
    fn into_property(self, resolver: &dyn PropertyResolver) -> Result<Property> {
        resolve::<E>(resolver, PropertyIdent::Path(self.name))
    }
}

/// A descriptor is resolved again by name, so the canonical descriptor
/// declared by `E` is what gets used.
impl<E: Entity> IntoProperty<E> for &Property {
    fn into_property(self, resolver: &dyn PropertyResolver) -> Result<Property> {
        canonicalize(resolver, &EntityType::of::<E>(), self)
    }
}

impl<E: Entity> IntoProperty<E> for Property {
    fn into_property(self, resolver: &dyn PropertyResolver) -> Result<Property> {
        canonicalize(resolver, &EntityType::of::<E>(), &self)
    }
}

/// Returns the canonical descriptor `entity` declares for `property`.
///
/// Fails unless `property` is declared on `entity` and its name resolves
/// through `resolver`.
pub(crate) fn canonicalize(
    resolver: &dyn PropertyResolver,
    entity: &EntityType,
    property: &Property,
) -> Result<Property> {
    if is_blank(property.name()) {
        return Err(Error::null_argument("property"));
    }

    let not_found = || Error::property_not_found(entity.to_string(), property.full_name());

    if property.declaring != entity.info() {
        return Err(not_found());
    }

    resolver
        .resolve(entity, &PropertyIdent::Name(property.name()))
        .ok_or_else(not_found)
}
