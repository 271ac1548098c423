//! D500 RetailMart overview: KPI cards, four charts and the store table,
//! each filled by its own loader from a pre-computed JSON resource.

pub mod api;
pub mod charts;
pub mod error;
pub mod loaders;
pub mod ui;
pub mod view_model;
