use crate::domain::a001_service::ui::create::ServiceCreatePage;
use crate::domain::a001_service::ui::details::ServiceEditPage;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="page page--home">
            <h1>"Service catalog"</h1>
            <p>"Manage spa services for every branch and language."</p>
            <ul class="home-links">
                <li><A href="/service-management">"Create a service"</A></li>
                <li><A href="/service-form">"Edit service translations"</A></li>
            </ul>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! { <div class="page"><h1>"Page not found"</h1></div> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/service-form") view=ServiceEditPage />
                    <Route path=path!("/service-management") view=ServiceCreatePage />
                </Routes>
            </Shell>
        </Router>
    }
}
