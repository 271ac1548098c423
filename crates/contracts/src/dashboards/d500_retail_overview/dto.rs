use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Counters may be exported as `48210` or `48210.0`; anything fractional
/// or negative is rejected.
fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Int(u64),
        Float(f64),
    }

    match Count::deserialize(deserializer)? {
        Count::Int(n) => Ok(n),
        Count::Float(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => Ok(f as u64),
        Count::Float(f) => Err(D::Error::custom(format!(
            "expected a non-negative whole number, got {}",
            f
        ))),
    }
}

/// Envelope shared by every pre-computed dashboard resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payload<T> {
    pub data: T,
    /// ISO timestamp of the export run; only the overview resource sets it
    #[serde(default)]
    pub generated_at: Option<String>,
}

/// Headline figures for the KPI cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub total_revenue: f64,
    #[serde(deserialize_with = "deserialize_count")]
    pub total_orders: u64,
    #[serde(deserialize_with = "deserialize_count")]
    pub total_customers: u64,
    pub avg_order_value: f64,
}

/// One point of the monthly revenue series, in source order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    /// Label as exported, e.g. "2024-03"
    pub month: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub category: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentCount {
    pub segment: String,
    #[serde(deserialize_with = "deserialize_count")]
    pub customer_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRevenue {
    pub product_name: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRecord {
    pub store_name: String,
    pub city: String,
    pub region: String,
    pub revenue: f64,
    #[serde(deserialize_with = "deserialize_count")]
    pub orders: u64,
    pub performance_tier: PerformanceTier,
}

/// Store classification by relative sales performance.
///
/// Travels as its display label ("Top Performer"); labels outside the
/// known set are kept as `Other` so the table can still show them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PerformanceTier {
    Star,
    TopPerformer,
    Average,
    NeedsImprovement,
    Other(String),
}

impl PerformanceTier {
    pub fn label(&self) -> &str {
        match self {
            PerformanceTier::Star => "Star",
            PerformanceTier::TopPerformer => "Top Performer",
            PerformanceTier::Average => "Average",
            PerformanceTier::NeedsImprovement => "Needs Improvement",
            PerformanceTier::Other(label) => label,
        }
    }

    pub fn is_star(&self) -> bool {
        matches!(self, PerformanceTier::Star)
    }
}

impl From<String> for PerformanceTier {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Star" => PerformanceTier::Star,
            "Top Performer" => PerformanceTier::TopPerformer,
            "Average" => PerformanceTier::Average,
            "Needs Improvement" => PerformanceTier::NeedsImprovement,
            _ => PerformanceTier::Other(label),
        }
    }
}

impl From<PerformanceTier> for String {
    fn from(tier: PerformanceTier) -> Self {
        match tier {
            PerformanceTier::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_payload_with_timestamp() {
        let json = r#"{
            "generated_at": "2024-06-01T10:15:00",
            "data": {
                "total_revenue": 125000000.5,
                "total_orders": 48210,
                "total_customers": 12034,
                "avg_order_value": 2592.77
            }
        }"#;
        let payload: Payload<SalesSummary> = serde_json::from_str(json).unwrap();
        assert_eq!(payload.generated_at.as_deref(), Some("2024-06-01T10:15:00"));
        assert_eq!(payload.data.total_orders, 48210);
        assert_eq!(payload.data.avg_order_value, 2592.77);
    }

    #[test]
    fn list_payload_without_timestamp_ignores_extra_fields() {
        let json = r#"{
            "report": "monthly",
            "data": [
                {"month": "2024-01", "revenue": 1200.0, "orders": 3},
                {"month": "2024-02", "revenue": 900}
            ]
        }"#;
        let payload: Payload<Vec<MonthlyPoint>> = serde_json::from_str(json).unwrap();
        assert!(payload.generated_at.is_none());
        assert_eq!(payload.data.len(), 2);
        assert_eq!(payload.data[1].month, "2024-02");
        assert_eq!(payload.data[1].revenue, 900.0);
    }

    #[test]
    fn counters_accept_whole_floats() {
        let json = r#"{
            "generated_at": "2024-06-01T10:15:00",
            "data": {
                "total_revenue": 125000000.5,
                "total_orders": 48210.0,
                "total_customers": 12034.0,
                "avg_order_value": 2592.77
            }
        }"#;
        let payload: Payload<SalesSummary> = serde_json::from_str(json).unwrap();
        assert_eq!(payload.data.total_orders, 48210);
        assert_eq!(payload.data.total_customers, 12034);

        let segments: Payload<Vec<SegmentCount>> =
            serde_json::from_str(r#"{"data": [{"segment": "Loyal", "customer_count": 11875.0}]}"#)
                .unwrap();
        assert_eq!(segments.data[0].customer_count, 11875);
    }

    #[test]
    fn counters_reject_fractions_and_negatives() {
        let fractional = r#"{"data": [{"segment": "Loyal", "customer_count": 10.5}]}"#;
        assert!(serde_json::from_str::<Payload<Vec<SegmentCount>>>(fractional).is_err());

        let negative = r#"{"data": [{"segment": "Loyal", "customer_count": -3}]}"#;
        assert!(serde_json::from_str::<Payload<Vec<SegmentCount>>>(negative).is_err());
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let json = r#"{"data": [{"segment": "Loyal"}]}"#;
        assert!(serde_json::from_str::<Payload<Vec<SegmentCount>>>(json).is_err());
    }

    #[test]
    fn tier_labels() {
        let json = r#"{
            "store_name": "RetailMart Andheri",
            "city": "Mumbai",
            "region": "West",
            "revenue": 4500000,
            "orders": 1520,
            "performance_tier": "Top Performer"
        }"#;
        let store: StoreRecord = serde_json::from_str(json).unwrap();
        assert_eq!(store.performance_tier, PerformanceTier::TopPerformer);
        assert_eq!(store.performance_tier.to_string(), "Top Performer");

        let star = PerformanceTier::from("Star".to_string());
        assert!(star.is_star());

        let custom = PerformanceTier::from("Rising Star".to_string());
        assert_eq!(custom, PerformanceTier::Other("Rising Star".to_string()));
        assert!(!custom.is_star());
        assert_eq!(
            serde_json::to_value(&custom).unwrap(),
            serde_json::json!("Rising Star")
        );
    }
}
