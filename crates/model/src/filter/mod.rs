use condition::Condition;
use serde::{Deserialize, Serialize};

pub mod comparison;
pub mod condition;
pub mod pattern;
pub mod spec;

/// An ordered collection of filter conditions representing one logical
/// filter request. Insertion order follows the declaration order of the
/// criteria fields the conditions were extracted from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub conditions: Vec<Condition>,
}

impl Filter {
    pub fn new() -> Self {
        Filter { conditions: Vec::new() }
    }

    pub fn with_conditions(conditions: Vec<Condition>) -> Self {
        Filter { conditions }
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Return a deduplicated list of all field names referenced in this filter.
    pub fn fields(&self) -> Vec<String> {
        let mut fields: Vec<String> = self.conditions.iter().map(|c| c.field.clone()).collect();
        fields.sort_unstable();
        fields.dedup();
        fields
    }
}
