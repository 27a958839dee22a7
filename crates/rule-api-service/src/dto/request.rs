//! 请求 DTO 定义

use rule_engine::AstNode;
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

/// 创建规则请求
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRuleRequest {
    #[validate(length(min = 1, message = "规则字符串不能为空"))]
    pub rule_string: String,
}

/// 评估规则请求
///
/// `ast` 为客户端持有（可能经过编辑回传）的规则树，
/// `data` 为待评估的属性记录。
#[derive(Debug, Deserialize)]
pub struct EvaluateRuleRequest {
    pub ast: AstNode,
    pub data: Value,
}

/// 组合规则请求
#[derive(Debug, Deserialize, Validate)]
pub struct CombineRulesRequest {
    #[validate(length(min = 1, message = "规则列表不能为空"))]
    pub rule_strings: Vec<String>,
}
