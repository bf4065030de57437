use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operator attached to a condition. Interpreted by the
/// downstream query layer; this crate only carries the enumeration and its
/// canonical symbolic rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    NotEq,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Gte,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Lte,
    #[serde(rename = "LIKE")]
    Like,
}

impl Comparison {
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::Eq => "=",
            Comparison::NotEq => "!=",
            Comparison::Gt => ">",
            Comparison::Gte => ">=",
            Comparison::Lt => "<",
            Comparison::Lte => "<=",
            Comparison::Like => "LIKE",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_symbols() {
        assert_eq!(Comparison::Eq.symbol(), "=");
        assert_eq!(Comparison::NotEq.symbol(), "!=");
        assert_eq!(Comparison::Gte.symbol(), ">=");
        assert_eq!(Comparison::Like.symbol(), "LIKE");
    }

    #[test]
    fn test_comparison_serde_symbol() {
        assert_eq!(serde_json::to_string(&Comparison::Lte).unwrap(), r#""<=""#);
        let op: Comparison = serde_json::from_str(r#""LIKE""#).unwrap();
        assert_eq!(op, Comparison::Like);
    }
}
