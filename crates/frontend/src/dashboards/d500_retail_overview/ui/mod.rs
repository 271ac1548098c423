pub mod dashboard;
pub mod store_table;

pub use dashboard::RetailOverviewDashboard;
pub use store_table::StoreTable;
