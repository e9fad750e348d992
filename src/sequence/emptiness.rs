use rust_decimal::Decimal;

use crate::text::is_text_absent_or_empty;

/// Element-level absence.
///
/// Sequence-level absence is already expressed by `Option<&[T]>`; this
/// trait additionally lets the sequence predicates look inside elements,
/// so a sequence whose elements are all `None` still counts as empty,
/// and blank textual elements can be cleaned out.
pub trait Absence {
    /// Whether this element is an absent value.
    fn is_absent(&self) -> bool {
        false
    }

    /// Whether this element is empty or all-whitespace text.
    ///
    /// Non-textual elements are never blank.
    fn is_blank(&self) -> bool {
        false
    }
}

impl<T: Absence> Absence for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }

    fn is_blank(&self) -> bool {
        self.as_ref().is_some_and(|value| value.is_blank())
    }
}

impl Absence for String {
    fn is_blank(&self) -> bool {
        is_text_absent_or_empty(Some(self), true)
    }
}

impl Absence for &str {
    fn is_blank(&self) -> bool {
        is_text_absent_or_empty(Some(self), true)
    }
}

macro_rules! plain_absence {
    ($($t:ty)*) => {
        $(impl Absence for $t {})*
    };
}

plain_absence!(bool char i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64 Decimal);

/// Returns true if the sequence is absent, has zero elements, or every
/// element it contains is itself absent.
pub fn is_absent_or_empty<T: Absence>(sequence: Option<&[T]>) -> bool {
    match sequence {
        None => true,
        Some(items) => items.is_empty() || items.iter().all(|item| item.is_absent()),
    }
}

/// Removes absent elements from the sequence; for textual element types
/// blank elements are removed as well. Input order is preserved.
///
/// An absent or zero-length input yields an absent result. A sequence
/// whose every element gets dropped yields a present, empty result.
pub fn clean_absent_or_empty<T: Absence + Clone>(sequence: Option<&[T]>) -> Option<Vec<T>> {
    let items = sequence?;
    if items.is_empty() {
        return None;
    }
    Some(
        items
            .iter()
            .filter(|item| !item.is_absent() && !item.is_blank())
            .cloned()
            .collect(),
    )
}
