//! 规则操作符定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 比较操作符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparator {
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">=")]
    Gte,
    #[serde(rename = "<=")]
    Lte,
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    Neq,
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Gte => ">=",
            Self::Lte => "<=",
            Self::Eq => "=",
            Self::Neq => "!=",
        };
        write!(f, "{}", s)
    }
}

/// 逻辑操作符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalOperator {
    And,
    Or,
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "AND"),
            Self::Or => write!(f, "OR"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparator_serde_roundtrip() {
        for (op, text) in [
            (Comparator::Gt, "\">\""),
            (Comparator::Lt, "\"<\""),
            (Comparator::Gte, "\">=\""),
            (Comparator::Lte, "\"<=\""),
            (Comparator::Eq, "\"=\""),
            (Comparator::Neq, "\"!=\""),
        ] {
            assert_eq!(serde_json::to_string(&op).unwrap(), text);
            let parsed: Comparator = serde_json::from_str(text).unwrap();
            assert_eq!(parsed, op);
        }
    }

    #[test]
    fn test_logical_operator_serde() {
        assert_eq!(
            serde_json::to_string(&LogicalOperator::And).unwrap(),
            "\"AND\""
        );
        let parsed: LogicalOperator = serde_json::from_str("\"OR\"").unwrap();
        assert_eq!(parsed, LogicalOperator::Or);
    }
}
