use crate::model::{Action, Entity, Link, Properties};
use serde_json::Value;
use url::Url;

///
/// EntityBuilder
///
/// Incremental accumulation of an entity's collections; `build` assembles the
/// immutable `Entity` exactly once. Adding the first property materializes
/// the bag, so a builder that never touched properties produces an entity
/// with an absent (not empty) bag.
///

#[derive(Clone, Debug, Default)]
pub struct EntityBuilder {
    rel: Vec<String>,
    class: Vec<String>,
    properties: Option<Properties>,
    entities: Vec<Entity>,
    links: Vec<Link>,
    actions: Vec<Action>,
    title: Option<String>,
    href: Option<Url>,
    entity_type: Option<String>,
}

impl EntityBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rel(mut self, rel: impl Into<String>) -> Self {
        self.rel.push(rel.into());
        self
    }

    #[must_use]
    pub fn rels<I, S>(mut self, rels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rel.extend(rels.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class.push(class.into());
        self
    }

    #[must_use]
    pub fn classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class.extend(classes.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties = Some(self.properties.take().unwrap_or_default().with(key, value));
        self
    }

    #[must_use]
    pub fn entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    #[must_use]
    pub fn entities(mut self, entities: impl IntoIterator<Item = Entity>) -> Self {
        self.entities.extend(entities);
        self
    }

    #[must_use]
    pub fn link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    #[must_use]
    pub fn links(mut self, links: impl IntoIterator<Item = Link>) -> Self {
        self.links.extend(links);
        self
    }

    #[must_use]
    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    #[must_use]
    pub fn actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.actions.extend(actions);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn href(mut self, href: Url) -> Self {
        self.href = Some(href);
        self
    }

    #[must_use]
    pub fn entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Entity {
        let mut entity = Entity::new()
            .with_class(self.class)
            .with_rel(self.rel)
            .with_entities(self.entities)
            .with_actions(self.actions)
            .with_links(self.links);

        if let Some(properties) = self.properties {
            entity = entity.with_properties(properties);
        }
        if let Some(title) = self.title {
            entity = entity.with_title(title);
        }
        if let Some(href) = self.href {
            entity = entity.with_href(href);
        }
        if let Some(entity_type) = self.entity_type {
            entity = entity.with_type(entity_type);
        }

        entity
    }
}

///
/// TESTS
///
