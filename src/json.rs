use serde::Serialize;

use crate::error;

/// Serializes `value` to JSON text.
///
/// An absent value yields an absent result, not an error. `indented`
/// selects pretty-printed over compact output. Serialization failures
/// surface as [`error::Error::Serialization`].
pub fn to_json_text<T: Serialize>(
    value: Option<&T>,
    indented: bool,
) -> error::Result<Option<String>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let text = if indented {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(Some(text))
}
