use crate::{hash, model::FieldValueObject};
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// FieldValue
///
/// The value a field carries: an opaque scalar, or — for radio/checkbox
/// fields only — a collection of selectable value objects. The emitted JSON
/// type always matches the constructed variant.
///
/// Equality and hashing treat `Number` by bit pattern so the kind is a lawful
/// `Eq`/`Hash`. Value-object collections compare as unordered multisets.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    ValueObjects(Vec<FieldValueObject>),
}

impl FieldValue {
    /// True for the scalar variants; false for a value-object collection.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::ValueObjects(_))
    }

    /// Label used by the incompatible-value-kind diagnostics.
    #[must_use]
    pub(crate) const fn kind_label(&self) -> &'static str {
        if self.is_scalar() {
            "scalar"
        } else {
            "value object collection"
        }
    }

    #[must_use]
    pub const fn as_value_objects(&self) -> Option<&Vec<FieldValueObject>> {
        if let Self::ValueObjects(objects) = self {
            Some(objects)
        } else {
            None
        }
    }

    pub(crate) fn value_hash(&self) -> u64 {
        match self {
            Self::String(s) => hash::fnv1a_64(s.as_bytes()),
            Self::Integer(i) => hash::fnv1a_64(&i.to_le_bytes()),
            Self::Number(n) => hash::fnv1a_64(&n.to_bits().to_le_bytes()),
            Self::Boolean(b) => hash::fnv1a_64(&[u8::from(*b)]),
            Self::ValueObjects(objects) => {
                hash::unordered(objects.iter().map(FieldValueObject::value_hash))
            }
        }
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a.to_bits() == b.to_bits(),
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::ValueObjects(a), Self::ValueObjects(b)) => crate::compare::multiset_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for FieldValue {}

impl std::hash::Hash for FieldValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.value_hash());
    }
}

// Diagnostics render the raw scalar, unquoted.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::ValueObjects(objects) => {
                f.write_str("[")?;
                for (i, object) in objects.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", object.value())?;
                }
                f.write_str("]")
            }
        }
    }
}

macro_rules! impl_value_from {
    ( $target:ident: $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for $target {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_value_from! {
    FieldValue:
    &str   => String,
    String => String,
    i32    => Integer,
    i64    => Integer,
    f64    => Number,
    bool   => Boolean,
    Vec<FieldValueObject> => ValueObjects,
}

///
/// ValueObjectValue
///
/// The value of a single selectable option: string or number, never null.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ValueObjectValue {
    String(String),
    Integer(i64),
    Number(f64),
}

impl ValueObjectValue {
    pub(crate) fn value_hash(&self) -> u64 {
        match self {
            Self::String(s) => hash::fnv1a_64(s.as_bytes()),
            Self::Integer(i) => hash::fnv1a_64(&i.to_le_bytes()),
            Self::Number(n) => hash::fnv1a_64(&n.to_bits().to_le_bytes()),
        }
    }
}

impl PartialEq for ValueObjectValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for ValueObjectValue {}

impl std::hash::Hash for ValueObjectValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.value_hash());
    }
}

impl fmt::Display for ValueObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl_value_from! {
    ValueObjectValue:
    &str   => String,
    String => String,
    i32    => Integer,
    i64    => Integer,
    f64    => Number,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::FieldValue;

    #[test]
    fn json_type_follows_the_constructed_variant() {
        assert_eq!(
            serde_json::to_string(&FieldValue::from("on")).unwrap(),
            "\"on\""
        );
        assert_eq!(serde_json::to_string(&FieldValue::from(4i64)).unwrap(), "4");
        assert_eq!(
            serde_json::to_string(&FieldValue::from(2.5)).unwrap(),
            "2.5"
        );
        assert_eq!(
            serde_json::to_string(&FieldValue::from(true)).unwrap(),
            "true"
        );
    }

    #[test]
    fn integers_and_floats_are_distinct_variants() {
        let int: FieldValue = serde_json::from_str("1").unwrap();
        let float: FieldValue = serde_json::from_str("1.0").unwrap();

        assert!(matches!(int, FieldValue::Integer(1)));
        assert!(matches!(float, FieldValue::Number(_)));
        assert_ne!(int, float);
    }

    #[test]
    fn display_renders_the_raw_scalar() {
        assert_eq!(FieldValue::from("foo").to_string(), "foo");
        assert_eq!(FieldValue::from(1i64).to_string(), "1");
        assert_eq!(FieldValue::from(false).to_string(), "false");
    }
}
