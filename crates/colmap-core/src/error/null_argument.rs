use super::Error;

/// Error when a required identifier argument was absent.
///
/// Type identities cannot be absent in Rust, so this is raised for textual
/// identifiers, such as a property name that is empty or only whitespace.
#[derive(Debug)]
pub(super) struct NullArgumentError {
    argument: Box<str>,
}

impl std::error::Error for NullArgumentError {}

impl core::fmt::Display for NullArgumentError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "argument `{}` must not be empty", self.argument)
    }
}

impl Error {
    /// Creates a null argument error for the named argument.
    pub fn null_argument(argument: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NullArgument(NullArgumentError {
            argument: argument.into().into(),
        }))
    }

    /// Returns `true` if this error is a null argument error.
    pub fn is_null_argument(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::NullArgument(_)))
    }
}
