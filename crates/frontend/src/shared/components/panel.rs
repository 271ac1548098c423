//! Titled dashboard panel on top of Thaw [`Card`] with the `card-appear`
//! animation from `dashboard.css`.
//!
//! ```text
//! <Panel title="Sales by Category" delay_ms=80>
//!     <canvas id="categoryChart"></canvas>
//! </Panel>
//! ```

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn Panel(
    /// Heading shown above the content
    title: &'static str,
    /// Animation delay in ms, for the staggered appearance of the grid
    #[prop(optional)]
    delay_ms: u32,
    /// Span both grid columns
    #[prop(optional)]
    wide: bool,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    let class = if wide { "panel panel--wide" } else { "panel" };

    view! {
        <div class=class>
            <Card attr:style=style>
                <h3 class="panel__title">{title}</h3>
                <div class="panel__body">{children()}</div>
            </Card>
        </div>
    }
}
