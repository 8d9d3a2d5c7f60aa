use super::{Property, TypeInfo};
use std::borrow::Cow;
use std::fmt;

/// Identifies a property by name.
///
/// A field may optionally carry the type it was taken from. When it does,
/// resolution against a different entity fails instead of matching a
/// same-named property by accident.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    name: Cow<'static, str>,
    declaring: Option<TypeInfo>,
}

impl Field {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Field {
        Field {
            name: name.into(),
            declaring: None,
        }
    }

    /// Creates a field bound to the declaring type `D`.
    pub fn of<D: 'static>(name: impl Into<Cow<'static, str>>) -> Field {
        Field {
            name: name.into(),
            declaring: Some(TypeInfo::of::<D>()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declaring(&self) -> Option<TypeInfo> {
        self.declaring
    }

    /// Builds one field per name, all unbound.
    pub fn parse<I, S>(names: I) -> Vec<Field>
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        names.into_iter().map(Field::new).collect()
    }
}

impl From<&Property> for Field {
    fn from(property: &Property) -> Field {
        Field {
            name: property.name.clone(),
            declaring: Some(property.declaring),
        }
    }
}

impl From<&'static str> for Field {
    fn from(name: &'static str) -> Field {
        Field::new(name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
