use crate::schema::app::{Property, TypeInfo};
use std::borrow::Cow;
use std::fmt;

/// Key of a mapping registry entry.
///
/// A key is built from a type alone (type-level entries) or from an entity
/// type and one of its properties (property-level entries). Both kinds share
/// one key space and are told apart by the presence of the property part.
///
/// Keys compare structurally, so two keys are equal exactly when they were
/// built from equal identities.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MappingKey {
    ty: TypeInfo,
    property: Option<PropertyKey>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PropertyKey {
    name: Cow<'static, str>,
    declaring: TypeInfo,
}

impl MappingKey {
    /// Key for a type-level entry.
    pub fn for_type(ty: impl Into<TypeInfo>) -> MappingKey {
        MappingKey {
            ty: ty.into(),
            property: None,
        }
    }

    /// Key for a property-level entry of `entity`.
    pub fn for_property(entity: impl Into<TypeInfo>, property: &Property) -> MappingKey {
        MappingKey {
            ty: entity.into(),
            property: Some(PropertyKey {
                name: property.name.clone(),
                declaring: property.declaring,
            }),
        }
    }

    pub fn ty(&self) -> TypeInfo {
        self.ty
    }

    /// Name of the property part, if this is a property-level key.
    pub fn property_name(&self) -> Option<&str> {
        self.property.as_ref().map(|property| &*property.name)
    }

    pub fn is_property(&self) -> bool {
        self.property.is_some()
    }
}

impl fmt::Display for MappingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.property {
            None => fmt::Display::fmt(&self.ty, f),
            Some(property) if property.declaring == self.ty => {
                write!(f, "{}.{}", self.ty, property.name)
            }
            Some(property) => write!(
                f,
                "{}.{} (declared on {})",
                self.ty, property.name, property.declaring
            ),
        }
    }
}
