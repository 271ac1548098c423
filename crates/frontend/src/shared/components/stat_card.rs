use leptos::prelude::*;

/// Text shown until the value is loaded
pub const PLACEHOLDER: &str = "--";

#[component]
pub fn StatCard(
    /// DOM id of the value node, e.g. "total-revenue"
    value_id: &'static str,
    /// Label displayed above the value
    label: &'static str,
    /// Already formatted value (None = not loaded)
    #[prop(into)]
    value: Signal<Option<String>>,
) -> impl IntoView {
    let status_class = move || {
        if value.with(Option::is_some) {
            "stat-card"
        } else {
            "stat-card stat-card--pending"
        }
    };

    let formatted = move || value.get().unwrap_or_else(|| PLACEHOLDER.to_string());

    view! {
        <div class=status_class>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value" id=value_id>
                    {formatted}
                </div>
            </div>
        </div>
    }
}
