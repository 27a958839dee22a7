//! 规则组合器
//!
//! 将多条独立解析的规则折叠为一棵组合树。
//! 连接操作符由全部输入树中 AND/OR 出现频次决定，平局取 AND；
//! 根节点按输入顺序从左到右折叠为左倾链。

use crate::error::{Result, RuleError};
use crate::models::AstNode;
use crate::operators::LogicalOperator;
use crate::parser::parse_rule;
use std::sync::Arc;
use tracing::debug;

/// 规则组合器
pub struct RuleCombiner;

impl RuleCombiner {
    /// 组合多条规则字符串为一棵 AST
    ///
    /// 任一条规则解析失败则整体失败，并标记出错的下标。
    /// 输入树不会被修改，组合树通过 `Arc` 直接共享其子树。
    pub fn combine<S: AsRef<str>>(rule_strings: &[S]) -> Result<Arc<AstNode>> {
        if rule_strings.is_empty() {
            return Err(RuleError::EmptyRuleList);
        }

        let mut roots = Vec::with_capacity(rule_strings.len());
        for (index, rule) in rule_strings.iter().enumerate() {
            let root = parse_rule(rule.as_ref()).map_err(|e| RuleError::CombineParse {
                index,
                source: Box::new(e),
            })?;
            roots.push(root);
        }

        let join = Self::dominant_operator(&roots);
        debug!(rules = roots.len(), operator = %join, "Combining rules");

        let mut combined = roots.remove(0);
        for root in roots {
            combined = Arc::new(AstNode::join(join, combined, root));
        }

        Ok(combined)
    }

    /// 统计全部输入树的逻辑节点，选出现次数较多的操作符，平局取 AND
    fn dominant_operator(roots: &[Arc<AstNode>]) -> LogicalOperator {
        let mut and_count = 0usize;
        let mut or_count = 0usize;

        for root in roots {
            Self::count_operators(root, &mut and_count, &mut or_count);
        }

        if or_count > and_count {
            LogicalOperator::Or
        } else {
            LogicalOperator::And
        }
    }

    fn count_operators(node: &AstNode, and_count: &mut usize, or_count: &mut usize) {
        if let AstNode::Operator {
            operator,
            left,
            right,
        } = node
        {
            match operator {
                LogicalOperator::And => *and_count += 1,
                LogicalOperator::Or => *or_count += 1,
            }
            Self::count_operators(left, and_count, or_count);
            Self::count_operators(right, and_count, or_count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_operator(node: &AstNode) -> (LogicalOperator, &AstNode, &AstNode) {
        match node {
            AstNode::Operator {
                operator,
                left,
                right,
            } => (*operator, left, right),
            AstNode::Operand { .. } => panic!("expected operator node"),
        }
    }

    #[test]
    fn test_single_rule_returned_unchanged() {
        let combined = RuleCombiner::combine(&["age > 30"]).unwrap();
        assert!(combined.is_operand());
    }

    #[test]
    fn test_empty_input_rejected() {
        let rules: Vec<String> = Vec::new();
        assert!(matches!(
            RuleCombiner::combine(&rules),
            Err(RuleError::EmptyRuleList)
        ));
    }

    #[test]
    fn test_majority_or_wins() {
        let combined =
            RuleCombiner::combine(&["a > 1 OR b > 1", "c > 1 OR d > 1", "e > 1 AND f > 1"])
                .unwrap();
        let (operator, _, _) = as_operator(&combined);
        assert_eq!(operator, LogicalOperator::Or);
    }

    #[test]
    fn test_tie_breaks_to_and() {
        // AND 与 OR 各出现一次，平局取 AND
        let combined =
            RuleCombiner::combine(&["a>1", "a>1 OR b>1", "a>1 AND c>1"]).unwrap();
        let (operator, _, _) = as_operator(&combined);
        assert_eq!(operator, LogicalOperator::And);
    }

    #[test]
    fn test_fold_is_left_leaning() {
        // join(join(r0, r1), r2)
        let combined = RuleCombiner::combine(&["a>1", "b>1", "c>1"]).unwrap();
        let (_, left, right) = as_operator(&combined);
        assert!(right.is_operand());
        let (_, inner_left, inner_right) = as_operator(left);
        assert!(inner_left.is_operand());
        assert!(inner_right.is_operand());
    }

    #[test]
    fn test_combine_is_deterministic() {
        let rules = ["a>1", "a>1 OR b>1", "a>1 AND c>1"];
        let first = RuleCombiner::combine(&rules).unwrap();
        for _ in 0..5 {
            assert_eq!(*RuleCombiner::combine(&rules).unwrap(), *first);
        }
    }

    #[test]
    fn test_parse_failure_tagged_with_index() {
        let err = RuleCombiner::combine(&["a > 1", "b > ", "c > 1"]).unwrap_err();
        match err {
            RuleError::CombineParse { index, source } => {
                assert_eq!(index, 1);
                assert!(matches!(*source, RuleError::Syntax { .. }));
            }
            other => panic!("expected combine error, got {:?}", other),
        }
    }

    #[test]
    fn test_inputs_shared_not_copied() {
        // 组合树通过 Arc 共享输入子树，组合前后可独立使用
        let combined = RuleCombiner::combine(&["a>1 AND b>1", "c>1"]).unwrap();
        let (_, left, _) = as_operator(&combined);
        let (operator, _, _) = as_operator(left);
        assert_eq!(operator, LogicalOperator::And);
    }
}
