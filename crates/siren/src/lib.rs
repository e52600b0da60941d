//! Siren hypermedia documents as immutable Rust values: typed construction,
//! order-independent structural equality, canonical JSON emission, and a
//! partial-document matcher for contract tests.

pub mod compare;
pub mod error;
pub mod matches;
pub mod model;

pub(crate) mod hash;

// accessor helpers are inherent methods on the model kinds
mod query;

#[cfg(test)]
mod proptests;

///
/// Prelude
///
/// Domain vocabulary only. No raw serde types or internal helpers are
/// re-exported here.
///

pub mod prelude {
    pub use crate::{
        compare::CanonicalOrd,
        error::SirenError,
        matches::{MatchError, Matches, matches_all},
        model::{
            Action, Entity, EntityBuilder, Field, FieldType, FieldValue, FieldValueObject, Link,
            Properties, ValueObjectValue, is_valid_type,
        },
    };
}
