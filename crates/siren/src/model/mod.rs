//! The five Siren document kinds.
//!
//! Every kind is an immutable value record: constructed fully-formed via
//! `new(required…)` plus `with_*` combinators, validated at construction,
//! and never mutated afterwards. Parents exclusively own their children, so
//! sharing and cycles are unrepresentable.

mod action;
mod builder;
mod entity;
mod field;
mod field_type;
mod field_value_object;
mod link;
mod properties;
mod value;


// Diagnostics and array-form match messages render nodes as their canonical
// JSON emission.
macro_rules! impl_json_display {
    ( $( $kind:ty ),* $(,)? ) => {
        $(
            impl std::fmt::Display for $kind {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
                    f.write_str(&json)
                }
            }
        )*
    };
}

impl_json_display!(Action, Entity, Field, FieldValueObject, Link);

pub use action::Action;
pub use builder::EntityBuilder;
pub use entity::Entity;
pub use field::Field;
pub use field_type::{FieldType, is_valid_type};
pub use field_value_object::FieldValueObject;
pub use link::Link;
pub use properties::Properties;
pub use value::{FieldValue, ValueObjectValue};
