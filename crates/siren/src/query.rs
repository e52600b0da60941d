//! First-match lookups and filtering iterators over a node's immediate
//! children. None of these recurse; absence is `None`, never an error.

use crate::model::{Action, Entity, Field, Link};

impl Entity {
    #[must_use]
    pub fn action_by_name(&self, name: &str) -> Option<&Action> {
        self.actions().iter().find(|a| a.name() == name)
    }

    #[must_use]
    pub fn action_by_class(&self, class: &str) -> Option<&Action> {
        self.actions_by_class(class).next()
    }

    pub fn actions_by_class<'a>(&'a self, class: &str) -> impl Iterator<Item = &'a Action> {
        self.actions()
            .iter()
            .filter(move |a| a.class().iter().any(|c| c == class))
    }

    #[must_use]
    pub fn link_by_rel(&self, rel: &str) -> Option<&Link> {
        self.links_by_rel(rel).next()
    }

    #[must_use]
    pub fn link_by_class(&self, class: &str) -> Option<&Link> {
        self.links_by_class(class).next()
    }

    #[must_use]
    pub fn link_by_type(&self, link_type: &str) -> Option<&Link> {
        self.links_by_type(link_type).next()
    }

    pub fn links_by_rel<'a>(&'a self, rel: &str) -> impl Iterator<Item = &'a Link> {
        self.links()
            .iter()
            .filter(move |l| l.rel().iter().any(|r| r == rel))
    }

    pub fn links_by_class<'a>(&'a self, class: &str) -> impl Iterator<Item = &'a Link> {
        self.links()
            .iter()
            .filter(move |l| l.class().iter().any(|c| c == class))
    }

    pub fn links_by_type<'a>(&'a self, link_type: &str) -> impl Iterator<Item = &'a Link> {
        self.links()
            .iter()
            .filter(move |l| l.link_type() == Some(link_type))
    }

    #[must_use]
    pub fn entity_by_rel(&self, rel: &str) -> Option<&Self> {
        self.entities_by_rel(rel).next()
    }

    #[must_use]
    pub fn entity_by_class(&self, class: &str) -> Option<&Self> {
        self.entities_by_class(class).next()
    }

    #[must_use]
    pub fn entity_by_type(&self, entity_type: &str) -> Option<&Self> {
        self.entities_by_type(entity_type).next()
    }

    pub fn entities_by_rel<'a>(&'a self, rel: &str) -> impl Iterator<Item = &'a Self> {
        self.entities()
            .iter()
            .filter(move |e| e.rel().iter().any(|r| r == rel))
    }

    pub fn entities_by_class<'a>(&'a self, class: &str) -> impl Iterator<Item = &'a Self> {
        self.entities()
            .iter()
            .filter(move |e| e.class().iter().any(|c| c == class))
    }

    pub fn entities_by_type<'a>(&'a self, entity_type: &str) -> impl Iterator<Item = &'a Self> {
        self.entities()
            .iter()
            .filter(move |e| e.entity_type() == Some(entity_type))
    }
}

impl Action {
    #[must_use]
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields().iter().find(|f| f.name() == name)
    }

    #[must_use]
    pub fn field_by_class(&self, class: &str) -> Option<&Field> {
        self.fields_by_class(class).next()
    }

    #[must_use]
    pub fn field_by_type(&self, token: &str) -> Option<&Field> {
        self.fields_by_type(token).next()
    }

    pub fn fields_by_class<'a>(&'a self, class: &str) -> impl Iterator<Item = &'a Field> {
        self.fields()
            .iter()
            .filter(move |f| f.class().iter().any(|c| c == class))
    }

    /// Filter by the canonical type token, e.g. `"datetime-local"`.
    pub fn fields_by_type<'a>(&'a self, token: &str) -> impl Iterator<Item = &'a Field> {
        self.fields()
            .iter()
            .filter(move |f| f.field_type().is_some_and(|ft| ft.as_str() == token))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use crate::model::{Action, Entity, Field, FieldType, Link};
    use url::Url;

    fn href(path: &str) -> Url {
        Url::parse(&format!("http://example.com{path}")).unwrap()
    }

    fn entity() -> Entity {
        Entity::new()
            .with_actions([
                Action::new("add", href("/add")).with_class(["editable"]),
                Action::new("remove", href("/remove")).with_class(["editable"]),
            ])
            .with_links([
                Link::new(href("/")).with_rel(["self"]).with_class(["nav"]),
                Link::new(href("/next"))
                    .with_rel(["next"])
                    .with_type("application/json"),
            ])
            .with_entities([
                Entity::new().with_rel(["item"]).with_class(["order"]),
                Entity::new().with_rel(["item"]).with_type("text/html"),
            ])
    }

    #[test]
    fn lookups_return_the_first_match_only() {
        let entity = entity();

        assert_eq!(entity.action_by_name("remove").unwrap().name(), "remove");
        assert_eq!(entity.action_by_class("editable").unwrap().name(), "add");
        assert_eq!(entity.actions_by_class("editable").count(), 2);

        assert_eq!(entity.link_by_rel("next").unwrap().href().path(), "/next");
        assert_eq!(entity.link_by_class("nav").unwrap().href().path(), "/");
        assert_eq!(
            entity.link_by_type("application/json").unwrap().href().path(),
            "/next"
        );

        assert!(entity.entity_by_rel("item").unwrap().class().contains(&"order".to_string()));
        assert!(entity.entity_by_class("order").is_some());
        assert!(entity.entity_by_type("text/html").is_some());
    }

    #[test]
    fn absence_is_none() {
        let entity = entity();
        assert!(entity.action_by_name("missing").is_none());
        assert!(entity.link_by_rel("prev").is_none());
        assert!(entity.entity_by_class("unknown").is_none());
    }

    #[test]
    fn action_field_lookups() {
        let action = Action::new("add", href("/add")).with_fields([
            Field::new("quantity")
                .with_type(FieldType::Number)
                .unwrap()
                .with_class(["numeric"]),
            Field::new("when").with_type(FieldType::DatetimeLocal).unwrap(),
        ]);

        assert_eq!(action.field_by_name("when").unwrap().name(), "when");
        assert_eq!(action.field_by_class("numeric").unwrap().name(), "quantity");
        assert_eq!(action.field_by_type("datetime-local").unwrap().name(), "when");
        assert!(action.field_by_type("radio").is_none());
    }
}
