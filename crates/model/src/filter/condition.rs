use crate::core::value::Value;
use crate::filter::comparison::Comparison;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single field filter condition: comparison operator, target field name
/// and resolved value. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub operator: Comparison,
    pub field: String,
    pub value: Value,
}

impl Condition {
    pub fn new(operator: Comparison, field: impl Into<String>, value: Value) -> Self {
        Condition {
            operator,
            field: field.into(),
            value,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.operator, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_display() {
        let cond = Condition::new(Comparison::Like, "name", Value::from("%ann%"));
        assert_eq!(format!("{cond}"), "name LIKE %ann%");

        let cond = Condition::new(Comparison::Gte, "age", Value::Int(18));
        assert_eq!(format!("{cond}"), "age >= 18");
    }
}
