//! 响应 DTO 定义
//!
//! 成功响应统一携带 `status: "success"` 与各自的数据字段，
//! 失败响应由 [`crate::error::ApiError`] 统一生成。

use rule_engine::AstNode;
use serde::Serialize;
use std::sync::Arc;

/// 创建规则响应
#[derive(Debug, Serialize)]
pub struct CreateRuleResponse {
    pub status: &'static str,
    pub ast: Arc<AstNode>,
}

impl CreateRuleResponse {
    pub fn success(ast: Arc<AstNode>) -> Self {
        Self {
            status: "success",
            ast,
        }
    }
}

/// 评估规则响应
#[derive(Debug, Serialize)]
pub struct EvaluateRuleResponse {
    pub status: &'static str,
    pub result: bool,
}

impl EvaluateRuleResponse {
    pub fn success(result: bool) -> Self {
        Self {
            status: "success",
            result,
        }
    }
}

/// 组合规则响应
#[derive(Debug, Serialize)]
pub struct CombineRulesResponse {
    pub status: &'static str,
    pub combined_ast: Arc<AstNode>,
}

impl CombineRulesResponse {
    pub fn success(combined_ast: Arc<AstNode>) -> Self {
        Self {
            status: "success",
            combined_ast,
        }
    }
}

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            service: "rule-api-service",
        }
    }
}
