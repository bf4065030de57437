use serde::{Deserialize, Serialize};

/// Wildcard template applied to string values before they are attached to a
/// condition. Each template has exactly one value placeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPattern {
    /// `%value%`, wildcard on both sides.
    #[default]
    Contains,
    /// `value%`
    StartsWith,
    /// `%value`
    EndsWith,
    /// `value`, no wildcards.
    Exact,
}

impl SearchPattern {
    /// Render `value` into this pattern's template.
    pub fn apply(&self, value: &str) -> String {
        match self {
            SearchPattern::Contains => format!("%{value}%"),
            SearchPattern::StartsWith => format!("{value}%"),
            SearchPattern::EndsWith => format!("%{value}"),
            SearchPattern::Exact => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_templates() {
        assert_eq!(SearchPattern::Contains.apply("abc"), "%abc%");
        assert_eq!(SearchPattern::StartsWith.apply("abc"), "abc%");
        assert_eq!(SearchPattern::EndsWith.apply("abc"), "%abc");
        assert_eq!(SearchPattern::Exact.apply("abc"), "abc");
    }

    #[test]
    fn test_default_is_both_sides() {
        assert_eq!(SearchPattern::default(), SearchPattern::Contains);
    }
}
