use super::error::LoadError;
use contracts::dashboards::d500_retail_overview::{
    CategorySlice, MonthlyPoint, Payload, ProductRevenue, SalesSummary, SegmentCount, StoreRecord,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Directory of the exported JSON files, relative to the page
const DATA_BASE: &str = "data";

pub const SALES_OVERVIEW: &str = "sales_overview.json";
pub const MONTHLY_TRENDS: &str = "monthly_trends.json";
pub const CATEGORY_SALES: &str = "category_sales.json";
pub const CUSTOMER_SEGMENTS: &str = "customer_segments.json";
pub const TOP_PRODUCTS: &str = "top_products.json";
pub const STORE_PERFORMANCE: &str = "store_performance.json";

pub fn resource_url(file: &str) -> String {
    format!("{}/{}", DATA_BASE, file)
}

async fn fetch_payload<T: DeserializeOwned>(file: &str) -> Result<Payload<T>, LoadError> {
    let url = resource_url(file);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| LoadError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| LoadError::Parse(e.to_string()))
}

/// Headline totals; the only resource that carries `generated_at`
pub async fn get_sales_overview() -> Result<Payload<SalesSummary>, LoadError> {
    fetch_payload(SALES_OVERVIEW).await
}

pub async fn get_monthly_trends() -> Result<Vec<MonthlyPoint>, LoadError> {
    Ok(fetch_payload(MONTHLY_TRENDS).await?.data)
}

pub async fn get_category_sales() -> Result<Vec<CategorySlice>, LoadError> {
    Ok(fetch_payload(CATEGORY_SALES).await?.data)
}

pub async fn get_customer_segments() -> Result<Vec<SegmentCount>, LoadError> {
    Ok(fetch_payload(CUSTOMER_SEGMENTS).await?.data)
}

pub async fn get_top_products() -> Result<Vec<ProductRevenue>, LoadError> {
    Ok(fetch_payload(TOP_PRODUCTS).await?.data)
}

pub async fn get_store_performance() -> Result<Vec<StoreRecord>, LoadError> {
    Ok(fetch_payload(STORE_PERFORMANCE).await?.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_urls_are_relative() {
        assert_eq!(resource_url(SALES_OVERVIEW), "data/sales_overview.json");
        assert_eq!(resource_url(STORE_PERFORMANCE), "data/store_performance.json");
    }

    fn parse<T: DeserializeOwned>(json: &str) -> Payload<T> {
        serde_json::from_str(json).expect("sample resource should parse")
    }

    #[test]
    fn test_bundled_sample_resources_parse() {
        let overview: Payload<SalesSummary> = parse(include_str!("../../../data/sales_overview.json"));
        assert!(overview.generated_at.is_some());

        let months: Payload<Vec<MonthlyPoint>> = parse(include_str!("../../../data/monthly_trends.json"));
        assert!(!months.data.is_empty());

        let categories: Payload<Vec<CategorySlice>> =
            parse(include_str!("../../../data/category_sales.json"));
        assert!(!categories.data.is_empty());

        let segments: Payload<Vec<SegmentCount>> =
            parse(include_str!("../../../data/customer_segments.json"));
        assert!(!segments.data.is_empty());

        let products: Payload<Vec<ProductRevenue>> =
            parse(include_str!("../../../data/top_products.json"));
        assert!(!products.data.is_empty());

        let stores: Payload<Vec<StoreRecord>> =
            parse(include_str!("../../../data/store_performance.json"));
        assert!(stores.data.iter().any(|s| s.performance_tier.is_star()));
    }
}
