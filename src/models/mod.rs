pub mod dataset;
pub mod money;
pub mod product;
pub mod purchase;
pub mod report;
pub mod seller;
pub mod stats;

pub use dataset::SalesData;
pub use product::Product;
pub use purchase::{Item, PurchaseRecord};
pub use money::round_money;
pub use report::{AnalysisSummary, ReportRow, TopProduct};
pub use seller::Seller;
pub use stats::SellerStat;
