use thiserror::Error as ThisError;

///
/// SirenError
///
/// Construction-time failures. Every variant aborts the construction that
/// raised it; no partially-built value is ever observable.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SirenError {
    #[error("invalid field type: '{type_token}'")]
    InvalidFieldType { type_token: String },

    #[error("field value kind '{value_kind}' is incompatible with field type '{field_type}'")]
    IncompatibleFieldValueKind {
        field_type: String,
        value_kind: &'static str,
    },

    #[error("missing required attribute '{attribute}' on {kind}")]
    MissingRequiredAttribute {
        kind: &'static str,
        attribute: &'static str,
    },

    #[error("field value object requires a non-null value")]
    InvalidFieldValueObject,
}

impl SirenError {
    /// Construct an invalid-field-type error naming the offending token.
    pub(crate) fn invalid_field_type(token: impl Into<String>) -> Self {
        Self::InvalidFieldType {
            type_token: token.into(),
        }
    }

    /// Construct a type/value coupling violation.
    pub(crate) fn incompatible_value_kind(
        field_type: impl Into<String>,
        value_kind: &'static str,
    ) -> Self {
        Self::IncompatibleFieldValueKind {
            field_type: field_type.into(),
            value_kind,
        }
    }

    /// Construct a missing-required-attribute error for the given kind.
    pub(crate) const fn missing_attribute(kind: &'static str, attribute: &'static str) -> Self {
        Self::MissingRequiredAttribute { kind, attribute }
    }
}

#[cfg(test)]
mod tests {
    use super::SirenError;

    #[test]
    fn messages_name_the_violation() {
        let err = SirenError::invalid_field_type("bogus");
        assert_eq!(err.to_string(), "invalid field type: 'bogus'");

        let err = SirenError::missing_attribute("action", "href");
        assert_eq!(
            err.to_string(),
            "missing required attribute 'href' on action"
        );

        let err = SirenError::incompatible_value_kind("radio", "scalar");
        assert_eq!(
            err.to_string(),
            "field value kind 'scalar' is incompatible with field type 'radio'"
        );
    }
}
