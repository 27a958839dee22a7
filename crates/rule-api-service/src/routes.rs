//! 路由配置模块
//!
//! 定义规则 API 端点的路由映射与中间件层。

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;

/// 构建完整的应用路由
pub fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/create_rule", post(handlers::rules::create_rule))
        .route("/evaluate_rule", post(handlers::rules::evaluate_rule))
        .route("/combine_rules", post(handlers::rules::combine_rules))
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
