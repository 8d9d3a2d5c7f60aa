use crate::schema::app::TypeInfo;
use std::any::TypeId;
use std::fmt;

/// Database-level storage types representing how values are bound and read.
///
/// `db::Type` is the value stored by the type-mapping registry: it tells the
/// query builder which column type a parameter should be bound as, and tells
/// the row materializer how to read it back.
///
/// # Mapping from Rust types
///
/// A handful of Rust types have a natural storage type. [`Type::from_rust`]
/// returns it when no explicit mapping was registered:
///
/// ```text
/// bool    →  db::Type::Boolean
/// i32     →  db::Type::Integer(4)
/// u64     →  db::Type::UnsignedInteger(8)
/// String  →  db::Type::Text
/// Vec<u8> →  db::Type::Blob
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    /// A boolean value
    Boolean,

    /// A signed integer of `n` bytes
    Integer(u8),

    /// An unsigned integer of `n` bytes
    UnsignedInteger(u8),

    /// A floating point number of `n` bytes
    Float(u8),

    /// Unconstrained text type
    Text,

    /// Text type with an explicit maximum length
    VarChar(u64),

    /// Fixed-length text type
    Char(u64),

    /// 128-bit universally unique identifier (UUID)
    Uuid,

    /// Decimal number with optional precision and scale.
    /// - `None`: Arbitrary-precision decimal
    /// - `Some((precision, scale))`: Fixed precision and scale
    Numeric(Option<(u32, u32)>),

    /// Unconstrained binary type
    Blob,

    /// Fixed-size binary type of `n` bytes
    Binary(u8),

    /// An instant in time with fractional seconds precision (0-9 digits).
    Timestamp(u8),

    /// A representation of a civil date in the Gregorian calendar.
    Date,

    /// A representation of civil "wall clock" time with fractional seconds precision (0-9 digits).
    Time(u8),

    /// A representation of a civil datetime in the Gregorian calendar with fractional seconds precision (0-9 digits).
    DateTime(u8),

    /// A datetime with a time zone offset and fractional seconds precision (0-9 digits).
    DateTimeOffset(u8),

    /// Structured JSON document
    Json,

    /// User-specified unrecognized type
    Custom(String),
}

impl Type {
    /// Returns the default storage type for a Rust type, if it has one.
    ///
    /// `Option<T>` is not unwrapped here: nullability is a property of the
    /// column, not of its storage type, so callers resolve the inner type.
    pub fn from_rust(ty: TypeInfo) -> Option<Type> {
        let id = ty.id();

        macro_rules! table {
            ( $( $t:ty => $db:expr ,)* ) => {
                $(
                    if id == TypeId::of::<$t>() {
                        return Some($db);
                    }
                )*
            };
        }

        table! {
            bool => Type::Boolean,
            i8 => Type::Integer(1),
            i16 => Type::Integer(2),
            i32 => Type::Integer(4),
            i64 => Type::Integer(8),
            u8 => Type::UnsignedInteger(1),
            u16 => Type::UnsignedInteger(2),
            u32 => Type::UnsignedInteger(4),
            u64 => Type::UnsignedInteger(8),
            f32 => Type::Float(4),
            f64 => Type::Float(8),
            char => Type::Char(1),
            String => Type::Text,
            &'static str => Type::Text,
            Box<str> => Type::Text,
            Vec<u8> => Type::Blob,
            [u8; 16] => Type::Binary(16),
        }

        None
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Type::Integer(_) | Type::UnsignedInteger(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Type::Text | Type::VarChar(_) | Type::Char(_))
    }

    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            Type::Timestamp(_)
                | Type::Date
                | Type::Time(_)
                | Type::DateTime(_)
                | Type::DateTimeOffset(_)
        )
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Boolean => f.write_str("BOOLEAN"),
            Type::Integer(n) => write!(f, "INTEGER({n})"),
            Type::UnsignedInteger(n) => write!(f, "UNSIGNED INTEGER({n})"),
            Type::Float(n) => write!(f, "FLOAT({n})"),
            Type::Text => f.write_str("TEXT"),
            Type::VarChar(n) => write!(f, "VARCHAR({n})"),
            Type::Char(n) => write!(f, "CHAR({n})"),
            Type::Uuid => f.write_str("UUID"),
            Type::Numeric(None) => f.write_str("NUMERIC"),
            Type::Numeric(Some((precision, scale))) => write!(f, "NUMERIC({precision}, {scale})"),
            Type::Blob => f.write_str("BLOB"),
            Type::Binary(n) => write!(f, "BINARY({n})"),
            Type::Timestamp(p) => write!(f, "TIMESTAMP({p})"),
            Type::Date => f.write_str("DATE"),
            Type::Time(p) => write!(f, "TIME({p})"),
            Type::DateTime(p) => write!(f, "DATETIME({p})"),
            Type::DateTimeOffset(p) => write!(f, "DATETIMEOFFSET({p})"),
            Type::Json => f.write_str("JSON"),
            Type::Custom(name) => f.write_str(name),
        }
    }
}
