//! 健康检查处理器

use axum::Json;

use crate::dto::HealthResponse;

/// 存活探针
///
/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
