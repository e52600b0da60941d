//! Property tests for the equality/ordering engine and the serializer:
//! permutation invariance, hash/equality consistency, and round-trip
//! structural equality.

use crate::model::{Action, Entity, Field, FieldValue, Link};
use proptest::prelude::*;
use url::Url;

static HOSTS: [&str; 2] = ["http://example.com", "https://api.example.org"];

fn arb_token() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,7}"
}

fn arb_tokens() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_token(), 0..4)
}

fn arb_href() -> impl Strategy<Value = Url> {
    (prop::sample::select(&HOSTS[..]), "[a-z]{1,8}").prop_map(|(host, path)| {
        Url::parse(&format!("{host}/{path}")).expect("generated URL is valid")
    })
}

fn arb_scalar() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        any::<i64>().prop_map(FieldValue::Integer),
        any::<bool>().prop_map(FieldValue::Boolean),
        "[a-zA-Z0-9 ]{0,12}".prop_map(FieldValue::String),
    ]
}

fn arb_field() -> impl Strategy<Value = Field> {
    (
        arb_token(),
        arb_tokens(),
        prop::option::of(arb_token()),
        prop::option::of(arb_scalar()),
    )
        .prop_map(|(name, class, title, value)| {
            let mut field = Field::new(name).with_class(class);
            if let Some(title) = title {
                field = field.with_title(title);
            }
            if let Some(value) = value {
                // Untyped scalar values are always compatible.
                field = field.with_value(value).expect("scalar value on untyped field");
            }
            field
        })
}

fn arb_action() -> impl Strategy<Value = Action> {
    (
        arb_token(),
        arb_href(),
        arb_tokens(),
        prop::option::of(prop::sample::select(&["GET", "POST", "PUT", "DELETE"][..])),
        prop::collection::vec(arb_field(), 0..4),
    )
        .prop_map(|(name, href, class, method, fields)| {
            let mut action = Action::new(name, href).with_class(class).with_fields(fields);
            if let Some(method) = method {
                action = action.with_method(method);
            }
            action
        })
}

fn arb_link() -> impl Strategy<Value = Link> {
    (arb_href(), arb_tokens(), arb_tokens()).prop_map(|(href, rel, class)| {
        Link::new(href).with_rel(rel).with_class(class)
    })
}

fn arb_entity() -> impl Strategy<Value = Entity> {
    (
        arb_tokens(),
        arb_tokens(),
        prop::option::of(arb_token()),
        prop::collection::vec(arb_action(), 0..3),
        prop::collection::vec(arb_link(), 0..3),
    )
        .prop_map(|(class, rel, title, actions, links)| {
            let mut entity = Entity::new()
                .with_class(class)
                .with_rel(rel)
                .with_actions(actions)
                .with_links(links);
            if let Some(title) = title {
                entity = entity.with_title(title);
            }
            entity
        })
}

proptest! {
    #[test]
    fn action_equality_is_invariant_under_field_permutation(
        (fields, shuffled) in prop::collection::vec(arb_field(), 0..5)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let href = Url::parse("http://example.com/a").unwrap();
        let forward = Action::new("act", href.clone()).with_fields(fields);
        let permuted = Action::new("act", href).with_fields(shuffled);

        prop_assert_eq!(&forward, &permuted);
        prop_assert_eq!(forward.value_hash(), permuted.value_hash());
    }

    #[test]
    fn entity_equality_is_invariant_under_collection_permutation(
        (links, shuffled) in prop::collection::vec(arb_link(), 0..5)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
        (class, class_shuffled) in arb_tokens()
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
    ) {
        let forward = Entity::new().with_class(class).with_links(links);
        let permuted = Entity::new().with_class(class_shuffled).with_links(shuffled);

        prop_assert_eq!(&forward, &permuted);
        prop_assert_eq!(forward.value_hash(), permuted.value_hash());
    }

    #[test]
    fn equality_is_mirrored(a in arb_entity(), b in arb_entity()) {
        prop_assert_eq!(a == b, b == a);
        if a == b {
            prop_assert_eq!(a.value_hash(), b.value_hash());
        }
    }

    #[test]
    fn documents_round_trip_structurally(entity in arb_entity()) {
        let json = serde_json::to_string(&entity).expect("serialization succeeds");
        let parsed: Entity = serde_json::from_str(&json).expect("canonical emission parses");
        prop_assert_eq!(entity, parsed);
    }
}
