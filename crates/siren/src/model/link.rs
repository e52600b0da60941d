use crate::{compare::multiset_eq, error::SirenError, hash};
use serde::{Deserialize, Serialize};
use url::Url;

const SEED: u64 = hash::fnv1a_64(b"siren:link");

///
/// Link
///
/// A navigational relation. `rel` is required at the type level but may be
/// empty, and an empty rel is still omitted on emission like every other
/// empty collection — that asymmetry is intentional and preserved.
///
/// Member order below is the canonical emission order.
///

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawLink")]
pub struct Link {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    class: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    rel: Vec<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    link_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    href: Url,
}

impl Link {
    pub const fn new(href: Url) -> Self {
        Self {
            class: Vec::new(),
            rel: Vec::new(),
            link_type: None,
            title: None,
            href,
        }
    }

    #[must_use]
    pub fn with_rel<I, S>(mut self, rel: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rel = rel.into_iter().map(Into::into).collect();
        self
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
    pub fn with_type(mut self, link_type: impl Into<String>) -> Self {
        self.link_type = Some(link_type.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn rel(&self) -> &[String] {
        &self.rel
    }

    #[must_use]
    pub fn class(&self) -> &[String] {
        &self.class
    }

    #[must_use]
    pub const fn href(&self) -> &Url {
        &self.href
    }

    #[must_use]
    pub fn link_type(&self) -> Option<&str> {
        self.link_type.as_deref()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub(crate) fn value_hash(&self) -> u64 {
        SEED ^ hash::unordered_strs(&self.class)
            ^ hash::unordered_strs(&self.rel)
            ^ hash::opt_str(self.link_type.as_deref())
            ^ hash::opt_str(self.title.as_deref())
            ^ hash::fnv1a_64(self.href.as_str().as_bytes())
    }
}

impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        self.href == other.href
            && multiset_eq(&self.rel, &other.rel)
            && multiset_eq(&self.class, &other.class)
            && self.link_type == other.link_type
            && self.title == other.title
    }
}

impl Eq for Link {}

impl std::hash::Hash for Link {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.value_hash());
    }
}

///
/// RawLink
///

#[derive(Deserialize)]
struct RawLink {
    #[serde(default)]
    class: Vec<String>,
    #[serde(default)]
    rel: Vec<String>,
    #[serde(rename = "type", default)]
    link_type: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    href: Option<Url>,
}

impl TryFrom<RawLink> for Link {
    type Error = SirenError;

    fn try_from(raw: RawLink) -> Result<Self, Self::Error> {
        let href = raw
            .href
            .ok_or(SirenError::missing_attribute("link", "href"))?;

        Ok(Self {
            class: raw.class,
            rel: raw.rel,
            link_type: raw.link_type,
            title: raw.title,
            href,
        })
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::Link;
    use url::Url;

    fn href() -> Url {
        Url::parse("http://example.com/next").unwrap()
    }

    #[test]
    fn empty_rel_is_omitted_on_emission() {
        let link = Link::new(href());
        assert_eq!(
            serde_json::to_string(&link).unwrap(),
            r#"{"href":"http://example.com/next"}"#
        );
    }

    #[test]
    fn rel_order_does_not_affect_equality() {
        let a = Link::new(href()).with_rel(["next", "last"]);
        let b = Link::new(href()).with_rel(["last", "next"]);
        assert_eq!(a, b);
        assert_ne!(a, Link::new(href()).with_rel(["next"]));
    }

    #[test]
    fn missing_href_fails_deserialization() {
        let err = serde_json::from_str::<Link>(r#"{"rel":["self"]}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("missing required attribute 'href' on link"), "{err}");
    }
}
