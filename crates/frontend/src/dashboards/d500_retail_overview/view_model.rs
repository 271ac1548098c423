use crate::shared::date_utils::format_timestamp;
use crate::shared::number_format::{format_currency, format_number};
use contracts::dashboards::d500_retail_overview::{
    PerformanceTier, Payload, SalesSummary, StoreRecord,
};

const STAR_GLYPH: &str = "⭐";

/// Display strings for the KPI cards and the "last updated" line
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewCards {
    pub total_revenue: String,
    pub total_orders: String,
    pub total_customers: String,
    pub avg_order_value: String,
    pub last_updated: Option<String>,
}

impl OverviewCards {
    pub fn from_payload(payload: &Payload<SalesSummary>) -> Self {
        let summary = &payload.data;
        Self {
            total_revenue: format_currency(summary.total_revenue),
            total_orders: format_number(summary.total_orders as f64),
            total_customers: format_number(summary.total_customers as f64),
            avg_order_value: format_currency(summary.avg_order_value),
            last_updated: payload.generated_at.as_deref().map(format_timestamp),
        }
    }
}

/// One rendered line of the store performance table
#[derive(Debug, Clone, PartialEq)]
pub struct StoreRow {
    pub store_name: String,
    pub city: String,
    pub region: String,
    pub revenue: String,
    pub orders: String,
    pub tier_class: String,
    pub tier_text: String,
}

impl From<&StoreRecord> for StoreRow {
    fn from(store: &StoreRecord) -> Self {
        Self {
            store_name: store.store_name.clone(),
            city: store.city.clone(),
            region: store.region.clone(),
            revenue: format_currency(store.revenue),
            orders: format_number(store.orders as f64),
            tier_class: tier_css_class(&store.performance_tier),
            tier_text: tier_text(&store.performance_tier),
        }
    }
}

/// "Top Performer" -> "status-top-performer"
pub fn tier_css_class(tier: &PerformanceTier) -> String {
    format!("status-{}", tier.label().to_lowercase().replace(' ', "-"))
}

pub fn tier_text(tier: &PerformanceTier) -> String {
    if tier.is_star() {
        format!("{} {}", STAR_GLYPH, tier)
    } else {
        tier.to_string()
    }
}
