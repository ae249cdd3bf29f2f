pub mod budget_service;
pub mod category_service;
pub mod chunk_service;
pub mod dashboard_service;
pub mod period_service;

pub use budget_service::BudgetService;
pub use category_service::CategoryService;
pub use chunk_service::{ChunkService, TransactionPager, DEFAULT_CHUNK_DAYS};
pub use dashboard_service::{DashboardService, DashboardView};
pub use period_service::PeriodResolver;
