use super::StoreTable;
use crate::dashboards::d500_retail_overview::loaders::{
    bootstrap, dashboard_loaders, DashboardTargets, CATEGORY_CHART_ID, PRODUCTS_CHART_ID,
    REVENUE_CHART_ID, SEGMENT_CHART_ID,
};
use crate::dashboards::d500_retail_overview::view_model::{OverviewCards, StoreRow};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::panel::Panel;
use crate::shared::components::stat_card::{StatCard, PLACEHOLDER};
use crate::shared::page_frame::PageFrame;
use leptos::html::Canvas;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Flex, FlexGap};

/// RetailMart overview dashboard
#[component]
pub fn RetailOverviewDashboard() -> impl IntoView {
    let (overview, set_overview) = signal(None::<OverviewCards>);
    let (stores, set_stores) = signal(None::<Vec<StoreRow>>);

    let revenue_chart = NodeRef::<Canvas>::new();
    let category_chart = NodeRef::<Canvas>::new();
    let segment_chart = NodeRef::<Canvas>::new();
    let products_chart = NodeRef::<Canvas>::new();

    let targets = DashboardTargets {
        overview: set_overview,
        stores: set_stores,
        revenue_chart,
        category_chart,
        segment_chart,
        products_chart,
    };

    // Runs once, after the view is mounted and the canvases exist
    Effect::new(move |_| {
        bootstrap(dashboard_loaders(targets), |task| spawn_local(task));
    });

    let last_updated = move || {
        overview
            .with(|cards| cards.as_ref().and_then(|c| c.last_updated.clone()))
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    };

    view! {
        <PageFrame page_id="d500_retail_overview--dashboard">
            <PageHeader title="RetailMart Sales Dashboard" subtitle="Pre-computed sales analytics">
                <div class="last-updated">
                    "Last updated: "
                    <span id="last-updated">{last_updated}</span>
                </div>
            </PageHeader>

            <div class="page__content">
                <Flex class="kpi-row" gap=FlexGap::Large>
                    <StatCard
                        value_id="total-revenue"
                        label="Total Revenue"
                        value=card(overview, |c| c.total_revenue.clone())
                    />
                    <StatCard
                        value_id="total-orders"
                        label="Total Orders"
                        value=card(overview, |c| c.total_orders.clone())
                    />
                    <StatCard
                        value_id="total-customers"
                        label="Total Customers"
                        value=card(overview, |c| c.total_customers.clone())
                    />
                    <StatCard
                        value_id="avg-order-value"
                        label="Avg Order Value"
                        value=card(overview, |c| c.avg_order_value.clone())
                    />
                </Flex>

                <div class="dashboard-grid">
                    <Panel title="Monthly Revenue Trend" delay_ms=0 wide=true>
                        <canvas id=REVENUE_CHART_ID node_ref=revenue_chart></canvas>
                    </Panel>
                    <Panel title="Sales by Category" delay_ms=80>
                        <canvas id=CATEGORY_CHART_ID node_ref=category_chart></canvas>
                    </Panel>
                    <Panel title="Customer Segments" delay_ms=160>
                        <canvas id=SEGMENT_CHART_ID node_ref=segment_chart></canvas>
                    </Panel>
                    <Panel title="Top Products" delay_ms=240 wide=true>
                        <canvas id=PRODUCTS_CHART_ID node_ref=products_chart></canvas>
                    </Panel>
                    <Panel title="Store Performance" delay_ms=320 wide=true>
                        <StoreTable rows=stores />
                    </Panel>
                </div>
            </div>
        </PageFrame>
    }
}

fn card(
    overview: ReadSignal<Option<OverviewCards>>,
    pick: fn(&OverviewCards) -> String,
) -> Signal<Option<String>> {
    Signal::derive(move || overview.with(|cards| cards.as_ref().map(pick)))
}
