use crate::{
    error::SirenError,
    hash,
    model::ValueObjectValue,
};
use serde::{Deserialize, Serialize};

const SEED: u64 = hash::fnv1a_64(b"siren:field-value-object");

///
/// FieldValueObject
///
/// One selectable option of a radio/checkbox field. The value is never
/// absent; `selected` defaults to false and is always emitted.
///

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawFieldValueObject")]
pub struct FieldValueObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    value: ValueObjectValue,
    selected: bool,
}

impl FieldValueObject {
    pub fn new(value: impl Into<ValueObjectValue>) -> Self {
        Self {
            title: None,
            value: value.into(),
            selected: false,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub const fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    #[must_use]
    pub const fn value(&self) -> &ValueObjectValue {
        &self.value
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub const fn selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn value_hash(&self) -> u64 {
        SEED ^ hash::opt_str(self.title()) ^ self.value.value_hash()
            ^ hash::fnv1a_64(&[u8::from(self.selected)])
    }
}

impl PartialEq for FieldValueObject {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.value == other.value && self.selected == other.selected
    }
}

impl Eq for FieldValueObject {}

impl std::hash::Hash for FieldValueObject {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.value_hash());
    }
}

///
/// RawFieldValueObject
///
/// Deserialization mirror; re-applies the non-null value rule.
///

#[derive(Deserialize)]
struct RawFieldValueObject {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    value: Option<ValueObjectValue>,
    #[serde(default)]
    selected: bool,
}

impl TryFrom<RawFieldValueObject> for FieldValueObject {
    type Error = SirenError;

    fn try_from(raw: RawFieldValueObject) -> Result<Self, Self::Error> {
        let value = raw.value.ok_or(SirenError::InvalidFieldValueObject)?;

        Ok(Self {
            title: raw.title,
            value,
            selected: raw.selected,
        })
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::FieldValueObject;

    #[test]
    fn selected_is_always_emitted_and_title_is_optional() {
        let object = FieldValueObject::new(2i64);
        assert_eq!(
            serde_json::to_string(&object).unwrap(),
            r#"{"value":2,"selected":false}"#
        );

        let object = FieldValueObject::new("b").with_title("B").with_selected(true);
        assert_eq!(
            serde_json::to_string(&object).unwrap(),
            r#"{"title":"B","value":"b","selected":true}"#
        );
    }

    #[test]
    fn missing_value_is_rejected() {
        let err = serde_json::from_str::<FieldValueObject>(r#"{"title":"B"}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("non-null value"), "{err}");

        let err = serde_json::from_str::<FieldValueObject>(r#"{"value":null}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("non-null value"), "{err}");
    }

    #[test]
    fn equality_covers_every_attribute() {
        let base = FieldValueObject::new(1i64).with_title("one");
        assert_eq!(base, FieldValueObject::new(1i64).with_title("one"));
        assert_ne!(base, FieldValueObject::new(1i64));
        assert_ne!(base, base.clone().with_selected(true));
    }
}
