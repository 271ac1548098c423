use leptos::prelude::*;

/// Page title block with an actions slot on the right
#[component]
pub fn PageHeader(
    title: &'static str,
    #[prop(optional)]
    subtitle: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {subtitle.map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
