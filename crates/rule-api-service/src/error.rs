//! 服务错误类型定义
//!
//! 核心引擎的全部错误在边界处转换为结构化失败响应
//! `{"status": "error", "message": ...}`，不会使进程崩溃。

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rule_engine::RuleError;
use serde_json::json;

/// 规则 API 错误类型
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("参数验证失败: {0}")]
    Validation(String),

    #[error("请求体无效: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Rule(#[from] RuleError),
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl ApiError {
    /// 返回对应的 HTTP 状态码
    ///
    /// 输入本身不合法（词法/语法/空列表）为 400；
    /// 输入合法但无法对给定数据评估为 422。
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Rule(e) => match e {
                RuleError::Lex { .. }
                | RuleError::Syntax { .. }
                | RuleError::EmptyRuleList
                | RuleError::CombineParse { .. }
                | RuleError::Json(_) => StatusCode::BAD_REQUEST,
                RuleError::AttributeNotFound(_)
                | RuleError::TypeMismatch { .. }
                | RuleError::InvalidRecord => StatusCode::UNPROCESSABLE_ENTITY,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = json!({
            "status": "error",
            "message": self.to_string(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_is_bad_request() {
        let err = ApiError::Rule(RuleError::Syntax {
            position: 4,
            expected: "比较操作符".to_string(),
            found: "输入结束".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_body_is_bad_request() {
        let err = ApiError::InvalidBody("bad json".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_eval_error_is_unprocessable() {
        let err = ApiError::Rule(RuleError::AttributeNotFound("x".to_string()));
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
