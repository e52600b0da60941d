use crate::error::SirenError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

///
/// FieldType
///
/// Closed catalog of the input types a field may carry. Tokens parse
/// case-insensitively; emission is always the canonical lowercase token.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FieldType {
    Hidden,
    Text,
    Search,
    Tel,
    Url,
    Email,
    Password,
    Datetime,
    Date,
    Month,
    Week,
    Time,
    DatetimeLocal,
    Number,
    Range,
    Color,
    Checkbox,
    Radio,
    File,
}

impl FieldType {
    const ALL: [Self; 19] = [
        Self::Hidden,
        Self::Text,
        Self::Search,
        Self::Tel,
        Self::Url,
        Self::Email,
        Self::Password,
        Self::Datetime,
        Self::Date,
        Self::Month,
        Self::Week,
        Self::Time,
        Self::DatetimeLocal,
        Self::Number,
        Self::Range,
        Self::Color,
        Self::Checkbox,
        Self::Radio,
        Self::File,
    ];

    /// Canonical lowercase token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Text => "text",
            Self::Search => "search",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Email => "email",
            Self::Password => "password",
            Self::Datetime => "datetime",
            Self::Date => "date",
            Self::Month => "month",
            Self::Week => "week",
            Self::Time => "time",
            Self::DatetimeLocal => "datetime-local",
            Self::Number => "number",
            Self::Range => "range",
            Self::Color => "color",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::File => "file",
        }
    }

    /// Case-insensitive parse against the catalog.
    pub fn parse(token: &str) -> Result<Self, SirenError> {
        Self::ALL
            .into_iter()
            .find(|ft| token.eq_ignore_ascii_case(ft.as_str()))
            .ok_or_else(|| SirenError::invalid_field_type(token))
    }

    /// True for the types whose value is a collection of value objects.
    #[must_use]
    pub const fn is_multi_valued(self) -> bool {
        matches!(self, Self::Checkbox | Self::Radio)
    }
}

/// Whether `token` names a member of the catalog, case-insensitively.
#[must_use]
pub fn is_valid_type(token: &str) -> bool {
    FieldType::parse(token).is_ok()
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Self::parse(&token).map_err(serde::de::Error::custom)
    }
}

///
/// TESTS
///
