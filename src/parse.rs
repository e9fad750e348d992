use std::fmt::Display;
use std::str::FromStr;

use crate::error;
use crate::text::is_text_absent_or_empty;

/// Parses `text` into an optional scalar value.
///
/// Absent, empty or all-whitespace text parses to `None`. Anything else
/// must be a valid representation of `T`; a failed conversion is logged
/// and returned as [`error::Error::Conversion`], never silently
/// swallowed.
pub fn parse_nullable<T>(text: Option<&str>) -> error::Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    if is_text_absent_or_empty(text, true) {
        return Ok(None);
    }
    let text = text.unwrap_or_default();
    match text.parse::<T>() {
        Ok(value) => Ok(Some(value)),
        Err(parse_error) => {
            let target = std::any::type_name::<T>();
            tracing::error!(%parse_error, text, target_type = target, "conversion failed");
            Err(error::Error::Conversion {
                text: text.to_string(),
                target,
            })
        }
    }
}
