pub mod d500_retail_overview;

pub use d500_retail_overview::ui::RetailOverviewDashboard;
