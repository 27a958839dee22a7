//! 规则引擎领域模型
//!
//! AST 节点是不可变的二叉树：内部节点为逻辑操作符（AND/OR），
//! 叶子节点为一次属性比较。子节点通过 `Arc` 共享，
//! 组合多条规则时新树可以直接引用原树的子树而无需拷贝。

use crate::error::{Result, RuleError};
use crate::operators::{Comparator, LogicalOperator};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// 规则 AST 节点
///
/// 线上 JSON 形态通过字段判别节点类型：
/// 含 `operator`/`left`/`right` 为逻辑节点，
/// 含 `attribute`/`comparator`/`value` 为比较叶子。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AstNode {
    Operator {
        operator: LogicalOperator,
        left: Arc<AstNode>,
        right: Arc<AstNode>,
    },
    Operand {
        attribute: String,
        comparator: Comparator,
        value: Value,
    },
}

impl AstNode {
    /// 构造比较叶子节点
    pub fn operand(
        attribute: impl Into<String>,
        comparator: Comparator,
        value: impl Into<Value>,
    ) -> Self {
        Self::Operand {
            attribute: attribute.into(),
            comparator,
            value: value.into(),
        }
    }

    /// 用逻辑操作符连接两棵子树
    pub fn join(operator: LogicalOperator, left: Arc<AstNode>, right: Arc<AstNode>) -> Self {
        Self::Operator {
            operator,
            left,
            right,
        }
    }

    pub fn is_operand(&self) -> bool {
        matches!(self, Self::Operand { .. })
    }
}

/// 评估记录 - 提供给规则引擎的属性/值数据
#[derive(Debug, Clone, Default)]
pub struct Record {
    data: Map<String, Value>,
}

impl Record {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    /// 从 JSON 值创建，非对象视为无效数据
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(data) => Ok(Self { data }),
            _ => Err(RuleError::InvalidRecord),
        }
    }

    /// 从 JSON 字符串创建
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// 获取属性值
    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.data.get(attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operand_wire_shape() {
        let node = AstNode::operand("age", Comparator::Gte, 30);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            json!({"attribute": "age", "comparator": ">=", "value": 30})
        );
    }

    #[test]
    fn test_operator_wire_shape() {
        let node = AstNode::join(
            LogicalOperator::And,
            Arc::new(AstNode::operand("age", Comparator::Gt, 30)),
            Arc::new(AstNode::operand("department", Comparator::Eq, "Sales")),
        );
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["operator"], "AND");
        assert_eq!(json["left"]["attribute"], "age");
        assert_eq!(json["right"]["value"], "Sales");
    }

    #[test]
    fn test_deserialize_discriminates_by_fields() {
        let json = r#"
        {
            "operator": "OR",
            "left": {"attribute": "salary", "comparator": ">", "value": 50000},
            "right": {"attribute": "experience", "comparator": ">", "value": 5}
        }
        "#;

        let node: AstNode = serde_json::from_str(json).unwrap();
        match node {
            AstNode::Operator {
                operator,
                left,
                right,
            } => {
                assert_eq!(operator, LogicalOperator::Or);
                assert!(left.is_operand());
                assert!(right.is_operand());
            }
            AstNode::Operand { .. } => panic!("expected operator node"),
        }
    }

    #[test]
    fn test_ast_roundtrip() {
        let node = AstNode::join(
            LogicalOperator::Or,
            Arc::new(AstNode::operand("a", Comparator::Neq, 1)),
            Arc::new(AstNode::operand("b", Comparator::Lte, "x")),
        );
        let json = serde_json::to_string(&node).unwrap();
        let parsed: AstNode = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, node);
    }

    #[test]
    fn test_record_from_value() {
        let record = Record::from_value(json!({"age": 35, "is_vip": true})).unwrap();
        assert_eq!(record.get("age"), Some(&json!(35)));
        assert_eq!(record.get("is_vip"), Some(&json!(true)));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn test_record_rejects_non_object() {
        assert!(matches!(
            Record::from_value(json!([1, 2, 3])),
            Err(RuleError::InvalidRecord)
        ));
        assert!(matches!(
            Record::from_json("42"),
            Err(RuleError::InvalidRecord)
        ));
    }
}
