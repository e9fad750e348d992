/// Applies `action` to every element in input order, for side effect.
///
/// Returns the original sequence reference so calls can be chained. An
/// absent sequence is a no-op. A panic raised by `action` propagates
/// untouched.
pub fn for_each<'a, T>(sequence: Option<&'a [T]>, mut action: impl FnMut(&T)) -> Option<&'a [T]> {
    for item in sequence.unwrap_or_default() {
        action(item);
    }
    sequence
}

/// Folds the sequence left to right, starting from `U::default()`.
///
/// `combine` receives the element first and the accumulator second.
pub fn reduce<T, U: Default>(sequence: Option<&[T]>, combine: impl FnMut(&T, U) -> U) -> U {
    reduce_with(sequence, combine, U::default())
}

/// Folds the sequence left to right, starting from `initial`.
///
/// `combine` receives the element first and the accumulator second. An
/// absent or empty sequence yields `U::default()`, not `initial`: the
/// initial value only participates once there is at least one element.
pub fn reduce_with<T, U: Default>(
    sequence: Option<&[T]>,
    mut combine: impl FnMut(&T, U) -> U,
    initial: U,
) -> U {
    let items = sequence.unwrap_or_default();
    if items.is_empty() {
        return U::default();
    }
    let mut accumulator = initial;
    for item in items {
        accumulator = combine(item, accumulator);
    }
    accumulator
}

/// Like [`reduce_with`], additionally passing the zero-based position of
/// the current element to `combine`.
pub fn reduce_indexed<T, U: Default>(
    sequence: Option<&[T]>,
    mut combine: impl FnMut(&T, usize, U) -> U,
    initial: U,
) -> U {
    let items = sequence.unwrap_or_default();
    if items.is_empty() {
        return U::default();
    }
    let mut accumulator = initial;
    for (index, item) in items.iter().enumerate() {
        accumulator = combine(item, index, accumulator);
    }
    accumulator
}
