use crate::hash;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

///
/// Properties
///
/// The opaque property bag of an entity. Keys keep their insertion order and
/// values are untyped JSON, emitted pass-through with no re-shaping.
///
/// Equality is defined only over the canonical JSON rendering — two bags are
/// equal iff their canonical texts are identical. Callers must not rely on
/// canonicalization beyond that; member-wise comparison is deliberately not
/// offered.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Properties(Map<String, Value>);

impl Properties {
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Canonical JSON rendering, the sole basis of equality and hashing.
    ///
    /// Serializing a string-keyed JSON map cannot fail; the empty-string
    /// fallback keeps equality total without a panic path.
    #[must_use]
    pub fn canonical_text(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_default()
    }
}

impl PartialEq for Properties {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_text() == other.canonical_text()
    }
}

impl Eq for Properties {}

impl std::hash::Hash for Properties {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(hash::fnv1a_64(self.canonical_text().as_bytes()));
    }
}

impl From<Map<String, Value>> for Properties {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::Properties;

    #[test]
    fn equality_is_the_canonical_text() {
        let a = Properties::new().with("count", 3).with("name", "entity");
        let b = Properties::new().with("count", 3).with("name", "entity");
        assert_eq!(a, b);
        assert_eq!(a.canonical_text(), r#"{"count":3,"name":"entity"}"#);

        // Same members, different insertion order: different canonical text.
        let c = Properties::new().with("name", "entity").with("count", 3);
        assert_ne!(a, c);
    }

    #[test]
    fn empty_bag_is_distinct_from_absent() {
        let empty = Properties::new();
        assert!(empty.is_empty());
        assert_eq!(empty.canonical_text(), "{}");
    }
}
