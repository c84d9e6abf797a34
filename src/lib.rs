pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod service;

pub use config::AppConfig;
pub use error::{AnalysisError, AnalysisResult};
pub use models::{Item, Product, PurchaseRecord, ReportRow, SalesData, Seller, TopProduct};
pub use service::{analyze_sales_data, AnalysisOptions, SalesAnalyzer};
