use crate::filter::comparison::Comparison;
use crate::filter::pattern::SearchPattern;
use serde::{Deserialize, Serialize};

/// Per-field declarative metadata controlling how a criteria field turns
/// into a condition: operator override, output-name override, string search
/// pattern and date-to-timestamp widening. All parts optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub operator: Option<Comparison>,
    pub rename: Option<String>,
    pub pattern: Option<SearchPattern>,
    pub widen_date: bool,
}

impl FieldSpec {
    pub fn new() -> Self {
        FieldSpec::default()
    }

    pub fn operator(mut self, operator: Comparison) -> Self {
        self.operator = Some(operator);
        self
    }

    pub fn rename(mut self, name: impl Into<String>) -> Self {
        self.rename = Some(name.into());
        self
    }

    pub fn pattern(mut self, pattern: SearchPattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn widen_date(mut self) -> Self {
        self.widen_date = true;
        self
    }

    /// Effective output name for a field declared as `declared`. An empty
    /// override is ignored.
    pub fn resolve_name<'a>(&'a self, declared: &'a str) -> &'a str {
        match self.rename.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => declared,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_name_override() {
        let spec = FieldSpec::new().rename("person_name");
        assert_eq!(spec.resolve_name("name"), "person_name");
    }

    #[test]
    fn test_resolve_name_empty_override_ignored() {
        let spec = FieldSpec::new().rename("");
        assert_eq!(spec.resolve_name("name"), "name");

        let spec = FieldSpec::new();
        assert_eq!(spec.resolve_name("name"), "name");
    }

    #[test]
    fn test_builder_chain() {
        let spec = FieldSpec::new()
            .operator(Comparison::Eq)
            .pattern(SearchPattern::StartsWith)
            .widen_date();
        assert_eq!(spec.operator, Some(Comparison::Eq));
        assert_eq!(spec.pattern, Some(SearchPattern::StartsWith));
        assert!(spec.widen_date);
        assert_eq!(spec.rename, None);
    }
}
