//! Chart configurations for the four chart panels

use crate::shared::chart::{
    Axis, ChartConfig, ChartKind, Dataset, Fill, LegendPosition, Scale,
};
use contracts::dashboards::d500_retail_overview::{
    CategorySlice, MonthlyPoint, ProductRevenue, SegmentCount,
};

pub const PRIMARY: &str = "#1E3A5F";
pub const SECONDARY: &str = "#2E7D32";
pub const ACCENT: &str = "#E65100";
const PRIMARY_FILL: &str = "rgba(30, 58, 95, 0.1)";

pub const PALETTE: [&str; 8] = [
    PRIMARY, SECONDARY, ACCENT, "#7B1FA2", "#00838F", "#C62828", "#F57C00", "#1565C0",
];

const LABEL_CHARS: usize = 20;

fn palette() -> Fill {
    Fill::Palette(PALETTE.iter().map(|c| c.to_string()).collect())
}

/// Product names are cut to 20 characters and always get "..."
pub fn truncate_label(name: &str) -> String {
    let head: String = name.chars().take(LABEL_CHARS).collect();
    format!("{}...", head)
}

/// Revenue by month, line with filled area
pub fn monthly_trend(points: &[MonthlyPoint]) -> ChartConfig {
    let dataset = Dataset {
        label: Some("Revenue".into()),
        data: points.iter().map(|p| p.revenue).collect(),
        border_color: Some(PRIMARY.into()),
        background_color: Some(Fill::Solid(PRIMARY_FILL.into())),
        fill: Some(true),
        tension: Some(0.4),
    };

    ChartConfig::new(
        ChartKind::Line,
        points.iter().map(|p| p.month.clone()).collect(),
        vec![dataset],
    )
    .hide_legend()
    .scale(
        Axis::Y,
        Scale {
            begin_at_zero: Some(true),
            currency_ticks: true,
        },
    )
}

/// Revenue share per category
pub fn category_sales(slices: &[CategorySlice]) -> ChartConfig {
    let dataset = Dataset {
        data: slices.iter().map(|s| s.revenue).collect(),
        background_color: Some(palette()),
        ..Default::default()
    };

    ChartConfig::new(
        ChartKind::Doughnut,
        slices.iter().map(|s| s.category.clone()).collect(),
        vec![dataset],
    )
    .legend_at(LegendPosition::Right)
}

pub fn customer_segments(segments: &[SegmentCount]) -> ChartConfig {
    let dataset = Dataset {
        label: Some("Customers".into()),
        data: segments.iter().map(|s| s.customer_count as f64).collect(),
        background_color: Some(palette()),
        ..Default::default()
    };

    ChartConfig::new(
        ChartKind::Bar,
        segments.iter().map(|s| s.segment.clone()).collect(),
        vec![dataset],
    )
    .hide_legend()
    .scale(
        Axis::Y,
        Scale {
            begin_at_zero: Some(true),
            ..Default::default()
        },
    )
}

/// Horizontal bars, product on y, revenue on x
pub fn top_products(products: &[ProductRevenue]) -> ChartConfig {
    let dataset = Dataset {
        label: Some("Revenue".into()),
        data: products.iter().map(|p| p.revenue).collect(),
        background_color: Some(Fill::Solid(SECONDARY.into())),
        ..Default::default()
    };

    ChartConfig::new(
        ChartKind::Bar,
        products.iter().map(|p| truncate_label(&p.product_name)).collect(),
        vec![dataset],
    )
    .horizontal()
    .hide_legend()
    .scale(
        Axis::X,
        Scale {
            currency_ticks: true,
            ..Default::default()
        },
    )
}
