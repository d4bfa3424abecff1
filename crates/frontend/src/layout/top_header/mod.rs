//! TopHeader component - application top navigation bar.

use crate::shared::icons::icon;
use crate::system::auth::Credentials;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn TopHeader() -> impl IntoView {
    let signed_in = leptos::context::use_context::<Credentials>()
        .map(|c| c.is_authenticated())
        .unwrap_or(false);

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Service Catalog Admin"</span>
            </div>

            <nav class="top-header__nav">
                <A href="/service-management">{icon("plus")}" Create service"</A>
                <A href="/service-form">{icon("edit")}" Edit service"</A>
            </nav>

            <div class="top-header__actions">
                {(!signed_in).then(|| view! {
                    <span class="top-header__hint" title="No token in localStorage, requests are sent without Authorization">
                        "Not signed in"
                    </span>
                })}
            </div>
        </div>
    }
}
