//! 规则 API 处理器
//!
//! 将三个边界操作映射到核心引擎的纯函数：
//! `create_rule` → 解析，`evaluate_rule` → 评估，`combine_rules` → 组合。
//! 引擎不持有任何跨请求状态，处理器之间无共享数据。

use axum::Json;
use axum::extract::rejection::JsonRejection;
use rule_engine::{Record, RuleCombiner, RuleEvaluator, parse_rule};
use tracing::info;
use validator::Validate;

use crate::dto::{
    CombineRulesRequest, CombineRulesResponse, CreateRuleRequest, CreateRuleResponse,
    EvaluateRuleRequest, EvaluateRuleResponse,
};
use crate::error::ApiError;

/// 创建规则
///
/// POST /create_rule
pub async fn create_rule(
    payload: Result<Json<CreateRuleRequest>, JsonRejection>,
) -> Result<Json<CreateRuleResponse>, ApiError> {
    let Json(req) = payload?;
    req.validate()?;

    let ast = parse_rule(&req.rule_string)?;
    info!(rule = %req.rule_string, "Rule parsed");

    Ok(Json(CreateRuleResponse::success(ast)))
}

/// 评估规则
///
/// POST /evaluate_rule
pub async fn evaluate_rule(
    payload: Result<Json<EvaluateRuleRequest>, JsonRejection>,
) -> Result<Json<EvaluateRuleResponse>, ApiError> {
    let Json(req) = payload?;
    let record = Record::from_value(req.data)?;
    let result = RuleEvaluator::evaluate(&req.ast, &record)?;
    info!(result, "Rule evaluated");

    Ok(Json(EvaluateRuleResponse::success(result)))
}

/// 组合规则
///
/// POST /combine_rules
pub async fn combine_rules(
    payload: Result<Json<CombineRulesRequest>, JsonRejection>,
) -> Result<Json<CombineRulesResponse>, ApiError> {
    let Json(req) = payload?;
    req.validate()?;

    let combined = RuleCombiner::combine(&req.rule_strings)?;
    info!(rules = req.rule_strings.len(), "Rules combined");

    Ok(Json(CombineRulesResponse::success(combined)))
}
