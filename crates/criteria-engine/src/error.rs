use thiserror::Error;

/// Error raised by a field accessor when a criteria field cannot be read.
/// Never fatal: extraction drops the field and continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The field's value could not be read at all.
    #[error("Field unreadable: {0}")]
    Unreadable(String),

    /// The field's value exists but could not be converted to a filter value.
    #[error("Value conversion failed: {0}")]
    Conversion(String),
}
