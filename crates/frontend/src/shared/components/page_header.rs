use leptos::prelude::*;

/// Title bar of a form page; optional children are rendered as header actions
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    /// Shows a spinner next to the title
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">
                    {title}
                    <Show when=move || busy.get().unwrap_or(false)>
                        <thaw::Spinner />
                    </Show>
                </h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page-header__subtitle">{s}</div>
                })}
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_without_actions() {
        let owner = Owner::new();
        owner.set();
        let _header = view! { <PageHeader title="Edit service" /> };
        let _with_actions = view! {
            <PageHeader title="Create service" busy=true>
                <span>"action"</span>
            </PageHeader>
        };
    }
}
