use crate::dashboards::d500_retail_overview::view_model::StoreRow;
use leptos::prelude::*;

/// Store performance table; the body stays empty until the loader fills it
#[component]
pub fn StoreTable(#[prop(into)] rows: Signal<Option<Vec<StoreRow>>>) -> impl IntoView {
    view! {
        <table id="store-table" class="store-table">
            <thead>
                <tr>
                    <th>"Store"</th>
                    <th>"City"</th>
                    <th>"Region"</th>
                    <th class="store-table__num">"Revenue"</th>
                    <th class="store-table__num">"Orders"</th>
                    <th>"Performance"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    rows.get()
                        .unwrap_or_default()
                        .into_iter()
                        .map(|row| view! {
                            <tr>
                                <td>{row.store_name}</td>
                                <td>{row.city}</td>
                                <td>{row.region}</td>
                                <td class="store-table__num">{row.revenue}</td>
                                <td class="store-table__num">{row.orders}</td>
                                <td class=row.tier_class>{row.tier_text}</td>
                            </tr>
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}
