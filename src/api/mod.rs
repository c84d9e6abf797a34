pub mod handlers;

pub use handlers::*;

use crate::service::SalesAnalyzer;
use axum::{routing::{get, post}, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// 构建路由，每个请求由 TraceLayer 记录日志
pub fn router(analyzer: Arc<SalesAnalyzer>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/sales/analyze", post(analyze_sales))
        .with_state(analyzer)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
