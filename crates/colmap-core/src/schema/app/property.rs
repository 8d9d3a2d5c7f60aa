use super::TypeInfo;
use std::borrow::Cow;
use std::fmt;

/// A resolved property descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Property {
    /// Canonical property name, as declared by the entity.
    pub name: Cow<'static, str>,

    /// The entity type declaring the property.
    pub declaring: TypeInfo,

    /// The Rust type of the property's value.
    pub ty: TypeInfo,

    /// True if the property value can be read when binding parameters.
    pub readable: bool,

    /// True if the property value can be written when materializing rows.
    pub writable: bool,
}

impl Property {
    /// Creates a readable and writable property `name` of type `T` declared
    /// on `D`.
    pub fn new<D: 'static, T: ?Sized + 'static>(name: impl Into<Cow<'static, str>>) -> Property {
        Property {
            name: name.into(),
            declaring: TypeInfo::of::<D>(),
            ty: TypeInfo::of::<T>(),
            readable: true,
            writable: true,
        }
    }

    /// Marks the property as read-only (computed or otherwise not settable).
    pub fn read_only(mut self) -> Property {
        self.writable = false;
        self
    }

    /// Marks the property as write-only.
    pub fn write_only(mut self) -> Property {
        self.readable = false;
        self
    }

    /// Gets the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the declaring type.
    pub fn declaring(&self) -> TypeInfo {
        self.declaring
    }

    /// Gets the value type.
    pub fn ty(&self) -> TypeInfo {
        self.ty
    }

    pub fn can_read(&self) -> bool {
        self.readable
    }

    pub fn can_write(&self) -> bool {
        self.writable
    }

    /// Returns `Declaring.name`, used in diagnostics.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.declaring, self.name)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.declaring, self.name)
    }
}
