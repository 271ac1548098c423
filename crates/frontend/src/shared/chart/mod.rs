//! Chart.js integration: typed configuration plus the wasm binding that
//! turns it into a live chart on a `<canvas>`.

pub mod binding;
pub mod config;

pub use binding::{render_chart, Chart};
pub use config::*;
