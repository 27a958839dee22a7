//! 规则引擎 HTTP 服务
//!
//! 核心引擎之上的薄适配层：将 `/create_rule`、`/evaluate_rule`、
//! `/combine_rules` 三个 REST 端点翻译为核心纯函数调用，
//! 并把全部错误映射为结构化失败响应。

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod observability;
pub mod routes;
