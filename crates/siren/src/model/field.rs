use crate::{
    compare::multiset_eq,
    error::SirenError,
    hash,
    model::{FieldType, FieldValue},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const SEED: u64 = hash::fnv1a_64(b"siren:field");

///
/// Field
///
/// One input control inside a form. `name` is the identity key and is always
/// present. The type token and the value shape are validated together at
/// construction: value-object collections belong to radio/checkbox fields
/// only, and those fields never carry a scalar value.
///
/// Member order below is the canonical emission order.
///

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawField")]
pub struct Field {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    class: Vec<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    field_type: Option<FieldType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<Decimal>,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            class: Vec::new(),
            field_type: None,
            title: None,
            name: name.into(),
            value: None,
            min: None,
            max: None,
        }
    }

    #[must_use]
    pub fn with_class<I, S>(mut self, class: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class = class.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub const fn with_min(mut self, min: Decimal) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub const fn with_max(mut self, max: Decimal) -> Self {
        self.max = Some(max);
        self
    }

    /// Attach a type, validating it against the current value shape.
    pub fn with_type(mut self, field_type: FieldType) -> Result<Self, SirenError> {
        check_value_kind(Some(field_type), self.value.as_ref())?;
        self.field_type = Some(field_type);
        Ok(self)
    }

    /// Attach a type given as a raw token (case-insensitive).
    pub fn with_type_token(self, token: &str) -> Result<Self, SirenError> {
        self.with_type(FieldType::parse(token)?)
    }

    /// Attach a value, validating it against the current type.
    pub fn with_value(mut self, value: impl Into<FieldValue>) -> Result<Self, SirenError> {
        let value = value.into();
        check_value_kind(self.field_type, Some(&value))?;
        self.value = Some(value);
        Ok(self)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn class(&self) -> &[String] {
        &self.class
    }

    #[must_use]
    pub const fn field_type(&self) -> Option<FieldType> {
        self.field_type
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub const fn value(&self) -> Option<&FieldValue> {
        self.value.as_ref()
    }

    #[must_use]
    pub const fn min(&self) -> Option<Decimal> {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> Option<Decimal> {
        self.max
    }

    pub(crate) fn value_hash(&self) -> u64 {
        SEED ^ hash::unordered_strs(&self.class)
            ^ hash::opt_str(self.field_type.map(FieldType::as_str))
            ^ hash::opt_str(self.title.as_deref())
            ^ hash::fnv1a_64(self.name.as_bytes())
            ^ self.value.as_ref().map_or(0, FieldValue::value_hash)
            ^ hash_decimal(self.min)
            ^ hash_decimal(self.max)
    }
}

// Decimal equality is scale-insensitive (1.5 == 1.50), so hash the
// normalized rendering.
fn hash_decimal(value: Option<Decimal>) -> u64 {
    value.map_or(0, |d| hash::fnv1a_64(d.normalize().to_string().as_bytes()))
}

/// The type/value coupling rule shared by the combinators and deserialization.
fn check_value_kind(
    field_type: Option<FieldType>,
    value: Option<&FieldValue>,
) -> Result<(), SirenError> {
    let Some(value) = value else {
        return Ok(());
    };

    match field_type {
        Some(ft) if ft.is_multi_valued() != value.is_scalar() => Ok(()),
        Some(ft) => Err(SirenError::incompatible_value_kind(
            ft.as_str(),
            value.kind_label(),
        )),
        // A value-object collection needs a radio/checkbox type to justify it.
        None if !value.is_scalar() => Err(SirenError::incompatible_value_kind(
            "none",
            value.kind_label(),
        )),
        None => Ok(()),
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && multiset_eq(&self.class, &other.class)
            && self.field_type == other.field_type
            && self.title == other.title
            && self.value == other.value
            && self.min == other.min
            && self.max == other.max
    }
}

impl Eq for Field {}

impl std::hash::Hash for Field {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.value_hash());
    }
}

///
/// RawField
///
/// Deserialization mirror; re-applies every constructor rule.
///

#[derive(Deserialize)]
struct RawField {
    #[serde(default)]
    class: Vec<String>,
    #[serde(rename = "type", default)]
    field_type: Option<FieldType>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    value: Option<FieldValue>,
    #[serde(default)]
    min: Option<Decimal>,
    #[serde(default)]
    max: Option<Decimal>,
}

impl TryFrom<RawField> for Field {
    type Error = SirenError;

    fn try_from(raw: RawField) -> Result<Self, Self::Error> {
        let name = raw
            .name
            .ok_or(SirenError::missing_attribute("field", "name"))?;
        check_value_kind(raw.field_type, raw.value.as_ref())?;

        Ok(Self {
            class: raw.class,
            field_type: raw.field_type,
            title: raw.title,
            name,
            value: raw.value,
            min: raw.min,
            max: raw.max,
        })
    }
}

///
/// TESTS
///
