// src/lookup.rs
// Map-probe primitive shared by every resolution step. Deliberately tiny:
// an absent needle or an absent haystack is an ordinary miss, never an error.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Look up `needle` in `haystack`.
///
/// Returns `None` when the needle is absent, the haystack is absent, or the
/// key is not present. A present key returns the stored value verbatim; with
/// `V = Option<T>` a stored `None` comes back as `Some(&None)`, which keeps
/// "stored nothing" distinguishable from "key missing".
#[inline]
pub fn find<'h, Q, K, V>(needle: Option<&Q>, haystack: Option<&'h HashMap<K, V>>) -> Option<&'h V>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
{
    haystack?.get(needle?)
}

/// Existence predicate for callers that must tell a stored `None` apart from
/// a missing key.
#[inline]
pub fn contains<Q, K, V>(needle: Option<&Q>, haystack: Option<&HashMap<K, V>>) -> bool
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
{
    match (needle, haystack) {
        (Some(needle), Some(haystack)) => haystack.contains_key(needle),
        _ => false,
    }
}
