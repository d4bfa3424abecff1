use super::detail_card::DetailCard;
use super::model;
use super::view_model::ServiceCreateVm;
use crate::shared::api_client::ApiClient;
use crate::shared::components::ui::{Button, Select};
use crate::shared::components::{FormNotices, PageHeader};
use crate::shared::icons::icon;
use contracts::domain::a001_service::DraftField;
use leptos::prelude::*;
use thaw::Spinner;

/// Create a service with one detail per language
#[component]
pub fn ServiceCreatePage() -> impl IntoView {
    let vm = ServiceCreateVm::new(ApiClient::use_client());
    vm.load_reference_data();

    let busy = vm.is_submitting();
    let branches = vm.branches;
    let service_types = vm.service_types;
    let post_create_mode = vm.post_create_mode;
    let detail_keys = vm.detail_keys();

    let on_branch = {
        let vm = vm.clone();
        Callback::new(move |id: String| vm.set_field(DraftField::BranchId(id)))
    };
    let on_service_type = {
        let vm = vm.clone();
        Callback::new(move |id: String| vm.set_field(DraftField::ServiceTypeId(id)))
    };
    let on_add_detail = {
        let vm = vm.clone();
        Callback::new(move |_: leptos::ev::MouseEvent| vm.add_detail())
    };
    let on_submit = {
        let vm = vm.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            vm.submit();
        }
    };

    view! {
        <div class="page page--form">
            <PageHeader title="Create service" subtitle="One detail per language" busy=busy />

            <FormNotices error=vm.error success=vm.success />

            <form class="service-form" on:submit=on_submit>
                <div class="service-form__root">
                    <Select
                        label="Branch"
                        value=vm.branch_id()
                        options=Signal::derive(move || model::branch_options(&branches.get()))
                        placeholder="-- Select branch --"
                        required=true
                        disabled=busy
                        on_change=on_branch
                    />
                    <Select
                        label="Service type"
                        value=vm.service_type_id()
                        options=Signal::derive(move || model::service_type_options(&service_types.get()))
                        placeholder="-- Select service type --"
                        required=true
                        disabled=busy
                        on_change=on_service_type
                    />
                    <Select
                        label="After saving"
                        value=Signal::derive(move || {
                            model::post_create_mode_code(post_create_mode.get()).to_string()
                        })
                        options=Signal::derive(model::post_create_mode_options)
                        on_change=Callback::new(move |code: String| {
                            post_create_mode.set(model::parse_post_create_mode(&code))
                        })
                    />
                </div>

                <For
                    each=move || detail_keys.get()
                    key=|k| k.clone()
                    children={
                        let vm = vm.clone();
                        move |detail_key| view! { <DetailCard vm=vm.clone() detail_key=detail_key /> }
                    }
                />

                <div class="service-form__actions">
                    <Button variant="secondary" disabled=busy on_click=on_add_detail>
                        {icon("plus")}
                        " Add language"
                    </Button>
                    <Button button_type="submit" disabled=busy>
                        {icon("save")}
                        " Create service"
                    </Button>
                </div>
            </form>

            <Show when=move || busy.get()>
                <div class="form-overlay">
                    <Spinner />
                </div>
            </Show>
        </div>
    }
}
