use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant tag of a [`Value`](crate::core::value::Value), exposed for
/// diagnostics and downstream consumers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    String,
    Date,
    Timestamp,
    Boolean,
    Int,
    Float,
    Uuid,
    Json,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::Date => "date",
            ValueKind::Timestamp => "timestamp",
            ValueKind::Boolean => "boolean",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Uuid => "uuid",
            ValueKind::Json => "json",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", ValueKind::String), "string");
        assert_eq!(format!("{}", ValueKind::Timestamp), "timestamp");
        assert_eq!(format!("{}", ValueKind::Json), "json");
    }
}
