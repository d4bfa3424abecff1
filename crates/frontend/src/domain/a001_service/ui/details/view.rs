use super::model;
use super::translation_card::TranslationCard;
use super::view_model::ServiceEditVm;
use crate::shared::api_client::ApiClient;
use crate::shared::components::ui::{Input, Select};
use crate::shared::components::{FormNotices, PageHeader};
use leptos::prelude::*;

/// Edit the translations of an existing service
#[component]
pub fn ServiceEditPage() -> impl IntoView {
    let vm = ServiceEditVm::new(ApiClient::use_client());
    vm.load_reference_data();

    // Перезагрузка списка услуг при смене языка или филиала
    {
        let vm = vm.clone();
        let lang_id = vm.lang_id;
        let branch_id = vm.branch_id;
        Effect::new(move |_| {
            lang_id.track();
            branch_id.track();
            vm.load_services();
        });
    }

    let languages = vm.languages;
    let branches = vm.branches;
    let loading = vm.loading;
    let translation_ids = vm.translation_ids();
    let has_selection = {
        let selected = vm.selected_service;
        move || selected.with(Option::is_some)
    };

    let on_language = {
        let vm = vm.clone();
        Callback::new(move |id: String| vm.set_language(id))
    };
    let on_branch = {
        let vm = vm.clone();
        Callback::new(move |id: String| vm.set_branch(id))
    };
    let on_search = {
        let vm = vm.clone();
        Callback::new(move |q: String| vm.set_search(q))
    };
    let on_service = {
        let vm = vm.clone();
        Callback::new(move |id: String| vm.select_service(id))
    };

    view! {
        <div class="page page--form">
            <PageHeader title="Edit service" subtitle="Translations, description blocks and options" busy=loading />

            <FormNotices error=vm.error success=vm.success />

            <div class="service-form__root">
                <Select
                    label="Language"
                    value=vm.lang_id
                    options=Signal::derive(move || model::language_options(&languages.get()))
                    placeholder="-- Select language --"
                    on_change=on_language
                />
                <Select
                    label="Branch"
                    value=vm.branch_id
                    options=Signal::derive(move || model::branch_options(&branches.get()))
                    placeholder="-- Select branch --"
                    on_change=on_branch
                />
                <Input
                    label="Search service"
                    input_type="search"
                    placeholder="Service name"
                    value=vm.search
                    on_input=on_search
                />
                <Select
                    label="Service"
                    value=vm.selected_service_id()
                    options=vm.service_options()
                    placeholder="-- Select service --"
                    on_change=on_service
                />
            </div>

            <Show
                when=has_selection
                fallback=|| view! { <p class="form-hint">"Choose a language, a branch and a service to edit."</p> }
            >
                <For
                    each=move || translation_ids.get()
                    key=|id| id.clone()
                    children={
                        let vm = vm.clone();
                        move |translation_id| view! {
                            <TranslationCard vm=vm.clone() translation_id=translation_id />
                        }
                    }
                />
            </Show>
        </div>
    }
}
