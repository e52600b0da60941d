use crate::{
    compare::multiset_eq,
    hash,
    model::{Action, Link, Properties},
};
use serde::{Deserialize, Serialize};
use url::Url;

const SEED: u64 = hash::fnv1a_64(b"siren:entity");

///
/// Entity
///
/// A (sub)document node. Every attribute is optional; collections default to
/// empty. `properties` is optional and its absence is meaningful — an absent
/// bag is distinct from an empty one.
///
/// Member order below is the canonical emission order.
///

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    class: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    rel: Vec<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    entity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    href: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    properties: Option<Properties>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    entities: Vec<Entity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    actions: Vec<Action>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    links: Vec<Link>,
}

impl Entity {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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
    pub fn with_rel<I, S>(mut self, rel: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rel = rel.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_href(mut self, href: Url) -> Self {
        self.href = Some(href);
        self
    }

    #[must_use]
    pub fn with_properties(mut self, properties: impl Into<Properties>) -> Self {
        self.properties = Some(properties.into());
        self
    }

    #[must_use]
    pub fn with_entities(mut self, entities: impl IntoIterator<Item = Self>) -> Self {
        self.entities = entities.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.actions = actions.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_links(mut self, links: impl IntoIterator<Item = Link>) -> Self {
        self.links = links.into_iter().collect();
        self
    }

    #[must_use]
    pub fn class(&self) -> &[String] {
        &self.class
    }

    #[must_use]
    pub fn rel(&self) -> &[String] {
        &self.rel
    }

    #[must_use]
    pub fn entity_type(&self) -> Option<&str> {
        self.entity_type.as_deref()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub const fn href(&self) -> Option<&Url> {
        self.href.as_ref()
    }

    #[must_use]
    pub const fn properties(&self) -> Option<&Properties> {
        self.properties.as_ref()
    }

    #[must_use]
    pub fn entities(&self) -> &[Self] {
        &self.entities
    }

    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub(crate) fn value_hash(&self) -> u64 {
        SEED ^ hash::unordered_strs(&self.class)
            ^ hash::unordered_strs(&self.rel)
            ^ hash::opt_str(self.entity_type.as_deref())
            ^ hash::opt_str(self.title.as_deref())
            ^ hash::opt_str(self.href.as_ref().map(Url::as_str))
            ^ self
                .properties
                .as_ref()
                .map_or(0, |p| hash::fnv1a_64(p.canonical_text().as_bytes()))
            ^ hash::unordered(self.entities.iter().map(Self::value_hash))
            ^ hash::unordered(self.actions.iter().map(Action::value_hash))
            ^ hash::unordered(self.links.iter().map(Link::value_hash))
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        multiset_eq(&self.class, &other.class)
            && multiset_eq(&self.rel, &other.rel)
            && self.entity_type == other.entity_type
            && self.title == other.title
            && self.href == other.href
            && self.properties == other.properties
            && multiset_eq(&self.entities, &other.entities)
            && multiset_eq(&self.actions, &other.actions)
            && multiset_eq(&self.links, &other.links)
    }
}

impl Eq for Entity {}

impl std::hash::Hash for Entity {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.value_hash());
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::Entity;
    use crate::model::Properties;

    #[test]
    fn absent_properties_differ_from_an_empty_bag() {
        let absent = Entity::new();
        let empty = Entity::new().with_properties(Properties::new());
        assert_ne!(absent, empty);
    }

    #[test]
    fn sub_entity_order_does_not_affect_equality() {
        let a = Entity::new().with_title("a");
        let b = Entity::new().with_title("b");

        let forward = Entity::new().with_entities([a.clone(), b.clone()]);
        let reversed = Entity::new().with_entities([b, a]);
        assert_eq!(forward, reversed);
    }
}
