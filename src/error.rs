use thiserror::Error;

/// Errors raised by the fallible operations in this crate.
///
/// Absent or empty inputs are never errors; only conversion and
/// serialization can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// The text is not a valid representation of the target type.
    #[error("cannot convert {text:?} into {target}")]
    Conversion {
        /// The offending input text.
        text: String,
        /// Name of the target type.
        target: &'static str,
    },
    /// The value could not be serialized to JSON.
    #[error("cannot serialize value to JSON")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
