//! Semantic satisfaction check between an expected (possibly partial)
//! document and an actual one.
//!
//! Matching is not equality: any attribute left at its default on the
//! expected side is unconstrained. Sets match by subset, child collections
//! by existential witness search, and evaluation stops at the first failing
//! member — the diagnostic of that member is the result.

use crate::model::{Action, Entity, Field, Link};
use std::fmt::Display;
use thiserror::Error as ThisError;

///
/// MatchError
///
/// The matcher's diagnostic: a single human-readable description of the
/// first point of disagreement, or the fail-fast configuration error.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum MatchError {
    #[error("Expected {expected}, but was {actual}")]
    Mismatch { expected: String, actual: String },

    #[error("cannot match against expected properties; remove them from the expected entity")]
    UnsupportedConfiguration,
}

impl MatchError {
    fn mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::Mismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

///
/// Matches
///
/// `expected.matches(actual)` succeeds iff `actual` satisfies every
/// constraint explicitly present in `expected`.
///

pub trait Matches {
    fn matches(&self, actual: &Self) -> Result<(), MatchError>;
}

impl Matches for Field {
    fn matches(&self, actual: &Self) -> Result<(), MatchError> {
        match_subset(self.class(), actual.class())?;
        match_scalar(self.field_type(), actual.field_type())?;
        match_scalar(self.title(), actual.title())?;
        match_scalar(Some(self.name()), Some(actual.name()))?;
        match_scalar(self.value(), actual.value())?;
        match_scalar(self.min(), actual.min())?;
        match_scalar(self.max(), actual.max())
    }
}

impl Matches for Action {
    fn matches(&self, actual: &Self) -> Result<(), MatchError> {
        match_subset(self.class(), actual.class())?;
        match_scalar(self.action_type(), actual.action_type())?;
        match_scalar(self.title(), actual.title())?;
        match_scalar(Some(self.href()), Some(actual.href()))?;
        match_scalar(Some(self.name()), Some(actual.name()))?;
        match_scalar(self.method(), actual.method())?;
        match_children(self.fields(), actual.fields())
    }
}

impl Matches for Link {
    fn matches(&self, actual: &Self) -> Result<(), MatchError> {
        match_subset(self.class(), actual.class())?;
        match_subset(self.rel(), actual.rel())?;
        match_scalar(self.link_type(), actual.link_type())?;
        match_scalar(self.title(), actual.title())?;
        match_scalar(Some(self.href()), Some(actual.href()))
    }
}

impl Matches for Entity {
    fn matches(&self, actual: &Self) -> Result<(), MatchError> {
        // Opaque-bag partial matching is undefined; refuse before comparing
        // anything rather than silently ignoring the constraint.
        if self.properties().is_some() {
            return Err(MatchError::UnsupportedConfiguration);
        }

        match_subset(self.class(), actual.class())?;
        match_subset(self.rel(), actual.rel())?;
        match_scalar(self.entity_type(), actual.entity_type())?;
        match_scalar(self.title(), actual.title())?;
        match_scalar(self.href(), actual.href())?;
        match_children(self.entities(), actual.entities())?;
        match_children(self.actions(), actual.actions())?;
        match_children(self.links(), actual.links())
    }
}

/// Match two top-level collections by existential witness search.
///
/// Every expected element must match some actual element; extras on the
/// actual side are permitted and several expected elements may share one
/// witness. Failure carries the array-form diagnostic.
pub fn matches_all<T: Matches + Display>(expected: &[T], actual: &[T]) -> Result<(), MatchError> {
    let all_witnessed = expected
        .iter()
        .all(|e| actual.iter().any(|a| e.matches(a).is_ok()));

    if all_witnessed {
        Ok(())
    } else {
        Err(array_mismatch(expected, actual))
    }
}

/// Unconstrained when expected is absent; exact equality otherwise.
/// An absent actual renders as the empty string in the diagnostic.
fn match_scalar<T>(expected: Option<T>, actual: Option<T>) -> Result<(), MatchError>
where
    T: PartialEq + Display,
{
    let Some(e) = expected else {
        return Ok(());
    };

    match actual {
        Some(ref a) if *a == e => Ok(()),
        Some(a) => Err(MatchError::mismatch(e.to_string(), a.to_string())),
        None => Err(MatchError::mismatch(e.to_string(), "")),
    }
}

/// Subset containment for class/rel token sets; extras in actual are fine.
fn match_subset(expected: &[String], actual: &[String]) -> Result<(), MatchError> {
    if expected.iter().all(|e| actual.contains(e)) {
        Ok(())
    } else {
        Err(MatchError::mismatch(
            bracket_list(expected),
            bracket_list(actual),
        ))
    }
}

/// Witness search for child collections. On failure the diagnostic of the
/// last candidate tried is surfaced; with no candidates at all, the
/// array-form message stands in so no failure is ever silent.
fn match_children<T: Matches + Display>(expected: &[T], actual: &[T]) -> Result<(), MatchError> {
    for e in expected {
        let mut last_failure = None;

        let witnessed = actual.iter().any(|a| match e.matches(a) {
            Ok(()) => true,
            Err(err) => {
                last_failure = Some(err);
                false
            }
        });

        if !witnessed {
            return Err(last_failure.unwrap_or_else(|| array_mismatch(expected, actual)));
        }
    }

    Ok(())
}

fn array_mismatch<T: Display>(expected: &[T], actual: &[T]) -> MatchError {
    MatchError::mismatch(bracket_list(expected), bracket_list(actual))
}

fn bracket_list<T: Display>(items: &[T]) -> String {
    let joined = items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");

    format!("[{joined}]")
}

///
/// TESTS
///
