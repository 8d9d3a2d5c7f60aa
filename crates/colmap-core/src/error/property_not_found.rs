use super::Error;

/// Error when a property identifier does not resolve to a property of the
/// entity type.
#[derive(Debug)]
pub(super) struct PropertyNotFoundError {
    entity: Box<str>,
    property: Box<str>,
}

impl std::error::Error for PropertyNotFoundError {}

impl core::fmt::Display for PropertyNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "property not found: `{}` is not a property of `{}`",
            self.property, self.entity
        )
    }
}

impl Error {
    /// Creates a property not found error.
    ///
    /// `entity` names the entity type that was searched and `property` is the
    /// identifier as supplied by the caller.
    pub fn property_not_found(entity: impl Into<String>, property: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::PropertyNotFound(PropertyNotFoundError {
            entity: entity.into().into(),
            property: property.into().into(),
        }))
    }

    /// Returns `true` if this error is a property not found error.
    pub fn is_property_not_found(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::PropertyNotFound(_)))
    }
}
