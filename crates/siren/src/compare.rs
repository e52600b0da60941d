use crate::model::{Action, Entity, Field, Link};
use std::cmp::Ordering;

///
/// Order-independent collection equality.
///
/// Siren treats class/rel sets and child collections as unordered, so the
/// kinds compare them as multisets: same length, and every left element pairs
/// with a distinct equal right element. Duplicates are counted.
///

#[must_use]
pub(crate) fn multiset_eq<T: PartialEq>(left: &[T], right: &[T]) -> bool {
    if left.len() != right.len() {
        return false;
    }

    let mut claimed = vec![false; right.len()];
    'next_left: for item in left {
        for (i, candidate) in right.iter().enumerate() {
            if !claimed[i] && item == candidate {
                claimed[i] = true;
                continue 'next_left;
            }
        }
        return false;
    }

    true
}

///
/// CanonicalOrd
///
/// Deterministic sort order keyed on a single identity attribute per kind.
///
/// NOTE:
/// This is NOT the equality relation. Two nodes with equal sort keys are not
/// necessarily equal, which is why the kinds do not implement `Ord`. Use this
/// only to produce a stable ordering.
///

pub trait CanonicalOrd {
    fn canonical_cmp(&self, other: &Self) -> Ordering;
}

/// Sort a slice into canonical order.
pub fn sort_canonical<T: CanonicalOrd>(items: &mut [T]) {
    items.sort_by(|a, b| a.canonical_cmp(b));
}

impl CanonicalOrd for Action {
    /// Actions order by `name`, ordinal.
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.name().cmp(other.name())
    }
}

impl CanonicalOrd for Field {
    /// Fields order by `name`, ordinal.
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.name().cmp(other.name())
    }
}

impl CanonicalOrd for Entity {
    /// Entities order by `title`; an absent title sorts before any present one.
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.title().cmp(&other.title())
    }
}

impl CanonicalOrd for Link {
    /// Links order by the joined `rel` tokens followed by the href string.
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl Link {
    fn sort_key(&self) -> String {
        format!("{}{}", self.rel().join(","), self.href())
    }
}

///
/// TESTS
///
