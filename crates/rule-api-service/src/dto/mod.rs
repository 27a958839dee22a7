//! 请求/响应 DTO 定义

pub mod request;
pub mod response;

pub use request::{CombineRulesRequest, CreateRuleRequest, EvaluateRuleRequest};
pub use response::{
    CombineRulesResponse, CreateRuleResponse, EvaluateRuleResponse, HealthResponse,
};
