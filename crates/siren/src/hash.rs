///
/// FNV-1a 64-bit hash.
///
/// Backs the order-independent value hashes of the document kinds. The model
/// combines member hashes by XOR, so every leaf hash must be deterministic
/// across platforms; FNV-1a is, and it is `const fn`-compatible so the
/// per-kind seeds can live in constants.
///
/// Not cryptographic. Collisions are acceptable; instability is not.
///

#[must_use]
#[allow(clippy::unreadable_literal)]
pub(crate) const fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash = 0xcbf29ce484222325u64;
    let mut i = 0;

    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(0x100000001b3);
        i += 1;
    }

    hash
}

/// Hash of an optional string member; absent contributes 0.
#[must_use]
pub(crate) fn opt_str(value: Option<&str>) -> u64 {
    value.map_or(0, |s| fnv1a_64(s.as_bytes()))
}

/// XOR-combination of element hashes.
///
/// XOR is commutative, so the result is invariant under permutation of the
/// collection. That keeps the hashes consistent with the multiset equality
/// the model kinds use for their collections.
#[must_use]
pub(crate) fn unordered(hashes: impl Iterator<Item = u64>) -> u64 {
    hashes.fold(0, |acc, h| acc ^ h)
}

/// XOR-combination of string elements.
#[must_use]
pub(crate) fn unordered_strs<S: AsRef<str>>(items: &[S]) -> u64 {
    unordered(items.iter().map(|s| fnv1a_64(s.as_ref().as_bytes())))
}

///
/// TESTS
///
