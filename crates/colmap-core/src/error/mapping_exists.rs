use super::Error;

/// Error when a non-forced add targets a key that already has a mapping.
///
/// The existing mapping is left intact.
#[derive(Debug)]
pub(super) struct MappingExistsError {
    key: Box<str>,
}

impl std::error::Error for MappingExistsError {}

impl core::fmt::Display for MappingExistsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "mapping already exists: {}", self.key)
    }
}

impl Error {
    /// Creates a mapping exists error for the rendered mapping key.
    pub fn mapping_exists(key: impl core::fmt::Display) -> Error {
        Error::from(super::ErrorKind::MappingExists(MappingExistsError {
            key: key.to_string().into(),
        }))
    }

    /// Returns `true` if this error is a mapping exists error.
    pub fn is_mapping_exists(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::MappingExists(_)))
    }
}
