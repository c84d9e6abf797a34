use crate::models::{AnalysisSummary, ReportRow};
use crate::service::SalesAnalyzer;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// 响应体
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub message: String,
    pub summary: Option<AnalysisSummary>,
    pub rows: Option<Vec<ReportRow>>,
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 销售分析接口: 请求体为 {sellers, products, purchase_records}
pub async fn analyze_sales(
    State(analyzer): State<Arc<SalesAnalyzer>>,
    Json(payload): Json<Value>,
) -> Response {
    match analyzer.analyze_value(&payload) {
        Ok(outcome) => {
            let response = AnalyzeResponse {
                success: true,
                message: format!(
                    "Analyzed {} sellers, {} purchase records",
                    outcome.summary.seller_count, outcome.summary.processed_records
                ),
                summary: Some(outcome.summary),
                rows: Some(outcome.rows),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::warn!("Sales analysis rejected: {}", e);
            let response = AnalyzeResponse {
                success: false,
                message: format!("Error: {}", e),
                summary: None,
                rows: None,
            };
            (StatusCode::BAD_REQUEST, Json(response)).into_response()
        }
    }
}
