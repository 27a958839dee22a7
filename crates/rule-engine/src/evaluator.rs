//! 规则评估器
//!
//! 对 AST 做纯函数式的递归求值，逻辑节点短路求值，
//! 比较叶子按类型强制规则比较记录值与字面量。

use crate::error::{Result, RuleError};
use crate::models::{AstNode, Record};
use crate::operators::{Comparator, LogicalOperator};
use serde_json::Value;

/// 规则评估器
pub struct RuleEvaluator;

impl RuleEvaluator {
    /// 评估 AST 节点
    ///
    /// AND 左侧为 false 时不再评估右侧（OR 同理）：
    /// 未到达的分支即使引用缺失属性也不会报错。
    pub fn evaluate(node: &AstNode, record: &Record) -> Result<bool> {
        match node {
            AstNode::Operator {
                operator,
                left,
                right,
            } => match operator {
                LogicalOperator::And => {
                    if !Self::evaluate(left, record)? {
                        return Ok(false);
                    }
                    Self::evaluate(right, record)
                }
                LogicalOperator::Or => {
                    if Self::evaluate(left, record)? {
                        return Ok(true);
                    }
                    Self::evaluate(right, record)
                }
            },
            AstNode::Operand {
                attribute,
                comparator,
                value,
            } => {
                let field = record
                    .get(attribute)
                    .ok_or_else(|| RuleError::AttributeNotFound(attribute.clone()))?;
                Self::compare(field, *comparator, value)
            }
        }
    }

    /// 应用单个比较操作符
    fn compare(field: &Value, comparator: Comparator, expected: &Value) -> Result<bool> {
        match comparator {
            Comparator::Eq => Ok(Self::eq(field, expected)),
            Comparator::Neq => Ok(!Self::eq(field, expected)),
            Comparator::Gt => Self::ordered(field, expected, |a, b| a > b),
            Comparator::Gte => Self::ordered(field, expected, |a, b| a >= b),
            Comparator::Lt => Self::ordered(field, expected, |a, b| a < b),
            Comparator::Lte => Self::ordered(field, expected, |a, b| a <= b),
        }
    }

    /// 相等比较
    ///
    /// 两侧都能数值化（含数字字符串）时按数值比较，
    /// 否则要求类型和值都一致；跨类型不可转换的值视为不相等，不报错。
    fn eq(field: &Value, expected: &Value) -> bool {
        if let (Some(a), Some(b)) = (Self::as_f64(field), Self::as_f64(expected)) {
            return (a - b).abs() < f64::EPSILON;
        }

        field == expected
    }

    /// 有序比较，两侧都必须可数值化
    fn ordered<F>(field: &Value, expected: &Value, cmp: F) -> Result<bool>
    where
        F: Fn(f64, f64) -> bool,
    {
        let field_num = Self::as_f64(field).ok_or_else(|| RuleError::TypeMismatch {
            expected: "number".to_string(),
            actual: Self::type_name(field).to_string(),
        })?;

        let expected_num = Self::as_f64(expected).ok_or_else(|| RuleError::TypeMismatch {
            expected: "number".to_string(),
            actual: Self::type_name(expected).to_string(),
        })?;

        Ok(cmp(field_num, expected_num))
    }

    /// 尝试将值数值化，数字字符串参与强制转换
    fn as_f64(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn type_name(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}
