use strum_macros::Display;

use super::emptiness::{is_absent_or_empty, Absence};

/// How [`are_equal`] compares two sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum Comparison {
    /// Elements must match pairwise at the same positions.
    InOrder,
    /// After the element counts have been checked, every element of the
    /// first sequence must occur somewhere in the second.
    #[default]
    NoOrder,
}

/// Compares two sequences for equality.
///
/// Two absent sequences are equal; an absent sequence is otherwise
/// treated as empty. A sequence is always equal to itself (same slice
/// identity), even when its elements do not compare equal to themselves.
///
/// Under [`Comparison::NoOrder`] the check is one-directional containment
/// after the count gate, not multiset equality: `[1, 1, 2]` and
/// `[1, 2, 2]` compare equal. Callers rely on this behavior.
pub fn are_equal<T: PartialEq>(a: Option<&[T]>, b: Option<&[T]>, comparison: Comparison) -> bool {
    if a.is_none() && b.is_none() {
        return true;
    }
    let a = a.unwrap_or_default();
    let b = b.unwrap_or_default();
    if std::ptr::eq(a, b) {
        return true;
    }
    if a.len() != b.len() {
        return false;
    }
    match comparison {
        Comparison::InOrder => a.iter().zip(b.iter()).all(|(left, right)| left == right),
        Comparison::NoOrder => a.iter().all(|item| b.contains(item)),
    }
}

/// Returns true iff the sequence consists of exactly the candidate
/// values: same element count, and every candidate occurs in the
/// sequence.
///
/// False when either side is absent or empty (including a candidate list
/// whose elements are all absent). Duplicate candidates are not
/// separately validated.
pub fn contains_only<T: Absence + PartialEq>(
    sequence: Option<&[T]>,
    candidates: Option<&[T]>,
) -> bool {
    if is_absent_or_empty(candidates) || is_absent_or_empty(sequence) {
        return false;
    }
    let sequence = sequence.unwrap_or_default();
    let candidates = candidates.unwrap_or_default();
    if sequence.len() != candidates.len() {
        return false;
    }
    candidates
        .iter()
        .all(|candidate| sequence.contains(candidate))
}
