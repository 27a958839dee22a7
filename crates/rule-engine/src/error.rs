//! 规则引擎错误类型

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("词法错误 (位置 {position}): {message}")]
    Lex { position: usize, message: String },

    #[error("语法错误 (位置 {position}): 期望 {expected}, 实际 {found}")]
    Syntax {
        position: usize,
        expected: String,
        found: String,
    },

    #[error("属性不存在: {0}")]
    AttributeNotFound(String),

    #[error("类型不匹配: 期望 {expected}, 实际 {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("评估数据必须是 JSON 对象")]
    InvalidRecord,

    #[error("规则列表不能为空")]
    EmptyRuleList,

    #[error("第 {index} 条规则解析失败: {source}")]
    CombineParse {
        index: usize,
        source: Box<RuleError>,
    },

    #[error("JSON 序列化错误: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RuleError>;
