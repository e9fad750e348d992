//! Convenience predicates and transforms for sequences and scalar values.
//!
//! Sequences are modelled as `Option<&[T]>`: `None` is the absent
//! sequence (no sequence at all), `Some(&[])` the present but empty one.
//! Element-level absence is modelled by the element type being an
//! `Option` itself; the [`Absence`] trait lets the predicates look inside
//! elements without collapsing the three states into one.
//!
//! Every operation is a pure, synchronous, single-pass function. Absent
//! or empty inputs are never errors; only text-to-scalar conversion and
//! JSON serialization can fail.

pub mod error;
pub mod json;
pub mod parse;
pub mod scalar;
pub mod sequence;
pub mod text;

pub use error::{Error, Result};
pub use json::to_json_text;
pub use parse::parse_nullable;
pub use scalar::{is_member, is_within_range, RangeComparison};
pub use sequence::{
    are_equal, clean_absent_or_empty, contains_only, for_each, is_absent_or_empty, reduce,
    reduce_indexed, reduce_with, Absence, Comparison,
};
pub use text::is_text_absent_or_empty;
