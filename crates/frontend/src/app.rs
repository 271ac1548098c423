use crate::dashboards::RetailOverviewDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <RetailOverviewDashboard />
    }
}
