use crate::routes::routes::AppRoutes;
use crate::shared::api_client::ApiClient;
use crate::shared::api_utils::api_base;
use crate::system::auth::Credentials;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Токен читается из localStorage один раз при старте
    let credentials = Credentials::from_storage();
    provide_context(credentials.clone());
    provide_context(ApiClient::new(api_base(), credentials));

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
