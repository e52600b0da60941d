use crate::{
    compare::multiset_eq,
    error::SirenError,
    hash,
    model::Field,
};
use serde::{Deserialize, Serialize};
use url::Url;

const SEED: u64 = hash::fnv1a_64(b"siren:action");

///
/// Action
///
/// An available state transition. `name` identifies the action within its
/// entity; `href` is the target URI. Fields are owned exclusively and are
/// unordered for equality purposes.
///
/// Member order below is the canonical emission order.
///

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawAction")]
pub struct Action {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    class: Vec<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    action_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    href: Url,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    method: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<Field>,
}

impl Action {
    pub fn new(name: impl Into<String>, href: Url) -> Self {
        Self {
            class: Vec::new(),
            action_type: None,
            title: None,
            href,
            name: name.into(),
            method: None,
            fields: Vec::new(),
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
    pub fn with_type(mut self, action_type: impl Into<String>) -> Self {
        self.action_type = Some(action_type.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    #[must_use]
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields = fields.into_iter().collect();
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn href(&self) -> &Url {
        &self.href
    }

    #[must_use]
    pub fn class(&self) -> &[String] {
        &self.class
    }

    #[must_use]
    pub fn action_type(&self) -> Option<&str> {
        self.action_type.as_deref()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub(crate) fn value_hash(&self) -> u64 {
        SEED ^ hash::unordered_strs(&self.class)
            ^ hash::opt_str(self.action_type.as_deref())
            ^ hash::opt_str(self.title.as_deref())
            ^ hash::fnv1a_64(self.href.as_str().as_bytes())
            ^ hash::fnv1a_64(self.name.as_bytes())
            ^ hash::opt_str(self.method.as_deref())
            ^ hash::unordered(self.fields.iter().map(Field::value_hash))
    }
}

impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.href == other.href
            && multiset_eq(&self.class, &other.class)
            && self.action_type == other.action_type
            && self.title == other.title
            && self.method == other.method
            && multiset_eq(&self.fields, &other.fields)
    }
}

impl Eq for Action {}

impl std::hash::Hash for Action {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.value_hash());
    }
}

///
/// RawAction
///

#[derive(Deserialize)]
struct RawAction {
    #[serde(default)]
    class: Vec<String>,
    #[serde(rename = "type", default)]
    action_type: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    href: Option<Url>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    method: Option<String>,
    #[serde(default)]
    fields: Vec<Field>,
}

impl TryFrom<RawAction> for Action {
    type Error = SirenError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        let name = raw
            .name
            .ok_or(SirenError::missing_attribute("action", "name"))?;
        let href = raw
            .href
            .ok_or(SirenError::missing_attribute("action", "href"))?;

        Ok(Self {
            class: raw.class,
            action_type: raw.action_type,
            title: raw.title,
            href,
            name,
            method: raw.method,
            fields: raw.fields,
        })
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::Action;
    use crate::model::Field;
    use url::Url;

    fn href() -> Url {
        Url::parse("http://example.com/actions/1").unwrap()
    }

    #[test]
    fn field_order_does_not_affect_equality() {
        let f1 = Field::new("a");
        let f2 = Field::new("b");
        let f3 = Field::new("c");

        let forward = Action::new("act", href()).with_fields([f1.clone(), f2.clone(), f3.clone()]);
        let rotated = Action::new("act", href()).with_fields([f2, f3, f1]);

        assert_eq!(forward, rotated);
        assert_eq!(rotated, forward);
    }

    #[test]
    fn missing_required_attributes_fail_deserialization() {
        let err = serde_json::from_str::<Action>(r#"{"name":"act"}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("missing required attribute 'href'"), "{err}");

        let err = serde_json::from_str::<Action>(r#"{"href":"http://example.com/"}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("missing required attribute 'name'"), "{err}");
    }
}
