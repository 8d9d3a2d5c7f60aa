use super::Error;

/// Error when a mapping value is not acceptable for the targeted key.
///
/// Property-level type mappings must name a database type; only type-level
/// mappings may store "explicitly unmapped".
#[derive(Debug)]
pub(super) struct InvalidValueError {
    message: Box<str>,
}

impl std::error::Error for InvalidValueError {}

impl core::fmt::Display for InvalidValueError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid value: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid value error.
    pub fn invalid_value(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidValue(InvalidValueError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid value error.
    pub fn is_invalid_value(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidValue(_)))
    }
}
