//! PageFrame — standard root wrapper for a dashboard page.
//!
//! Sets `id` (`"{dashboard}--dashboard"`) and `data-page-category` on the
//! root element so pages can be located in the DOM.

use leptos::prelude::*;

const PAGE_CAT_DASHBOARD: &str = "dashboard";

#[component]
pub fn PageFrame(
    /// HTML id in format `{dashboard}--dashboard`, e.g. `"d500_retail_overview--dashboard"`.
    page_id: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=page_id
            class="page page--dashboard"
            data-page-category=PAGE_CAT_DASHBOARD
        >
            {children()}
        </div>
    }
}
