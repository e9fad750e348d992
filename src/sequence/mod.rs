/// Sequence predicates and transforms.
///
/// A sequence is an `Option<&[T]>`: `None` models the absent sequence,
/// `Some(&[])` the present but empty one. None of the operations mutate
/// their input; transforms return new sequences.
mod compare;
mod emptiness;
mod fold;

pub use compare::{are_equal, contains_only, Comparison};
pub use emptiness::{clean_absent_or_empty, is_absent_or_empty, Absence};
pub use fold::{for_each, reduce, reduce_indexed, reduce_with};
