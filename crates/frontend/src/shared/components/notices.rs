use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

/// Error and success messages of a form view-model
#[component]
pub fn FormNotices(error: RwSignal<Option<String>>, success: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || error.get().map(|e| view! {
            <div class="form-notice">
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            </div>
        })}
        {move || success.get().map(|s| view! {
            <div class="form-notice">
                <MessageBar intent=MessageBarIntent::Success>{s}</MessageBar>
            </div>
        })}
    }
}
