use super::model;
use super::view_model::ServiceEditVm;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::icons::icon;
use contracts::domain::a001_service::{
    DescriptionField, DescriptionKind, ServiceOption, Translation, TranslationField,
    TranslationOptionField,
};
use contracts::domain::common::{ClientKey, EntityId};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Editor for one translation of the selected service
#[component]
pub fn TranslationCard(vm: ServiceEditVm, translation_id: EntityId) -> impl IntoView {
    let id = translation_id;
    let locked = vm.is_submitting();
    let saving = vm.is_saving(id.clone());

    let field = {
        let vm = vm.clone();
        let id = id.clone();
        move |read: fn(&Translation) -> String| vm.translation_field(id.clone(), read)
    };
    let on_text = {
        let vm = vm.clone();
        let id = id.clone();
        move |make: fn(String) -> TranslationField| {
            let vm = vm.clone();
            let id = id.clone();
            Callback::new(move |v: String| vm.update_translation(&id, make(v)))
        }
    };

    let language = field(|t| t.language.clone());
    let on_save = {
        let vm = vm.clone();
        let id = id.clone();
        Callback::new(move |_: MouseEvent| vm.save(&id))
    };
    let on_add_description = {
        let vm = vm.clone();
        let id = id.clone();
        Callback::new(move |_: MouseEvent| vm.add_description(&id))
    };
    let on_add_option = {
        let vm = vm.clone();
        let id = id.clone();
        Callback::new(move |_: MouseEvent| vm.add_option(&id))
    };

    let description_keys = vm.description_keys(id.clone());
    let option_keys = vm.option_keys(id.clone());

    view! {
        <div class="detail-card">
            <div class="detail-card__header">
                <h3 class="detail-card__title">
                    {move || format!("Translation ({})", language.get())}
                </h3>
                <Button disabled=locked on_click=on_save>
                    {icon("save")}
                    {move || if saving.get() { " Saving..." } else { " Save" }}
                </Button>
            </div>

            <div class="detail-card__grid">
                <Input
                    label="Service name"
                    value=field(|t| t.service_name.clone())
                    on_input=on_text(TranslationField::ServiceName)
                    required=true
                    disabled=locked
                />
                <Input
                    label="Service sub name"
                    value=field(|t| t.service_sub_name.clone())
                    on_input=on_text(TranslationField::ServiceSubName)
                    disabled=locked
                />
                <Input
                    label="Default price"
                    inputmode="decimal"
                    value=field(|t| t.default_service_price_text())
                    on_input=on_text(TranslationField::DefaultServicePrice)
                    disabled=locked
                />
                <Input
                    label="Image URL"
                    input_type="url"
                    value=field(|t| t.service_image.clone())
                    on_input=on_text(TranslationField::ServiceImage)
                    disabled=locked
                />
            </div>

            <Textarea
                label="Description"
                value=field(|t| t.service_description.clone())
                on_input=on_text(TranslationField::ServiceDescription)
                rows=4
                disabled=locked
            />

            <div class="detail-card__options">
                <div class="detail-card__options-header">
                    <h4>"Description blocks"</h4>
                    <Button variant="secondary" size="sm" disabled=locked on_click=on_add_description>
                        {icon("plus")}
                        " Add block"
                    </Button>
                </div>
                <For
                    each=move || description_keys.get()
                    key=|k| k.clone()
                    children={
                        let vm = vm.clone();
                        let id = id.clone();
                        move |block_key| view! {
                            <DescriptionRow vm=vm.clone() translation_id=id.clone() block_key=block_key />
                        }
                    }
                />
            </div>

            <div class="detail-card__options">
                <div class="detail-card__options-header">
                    <h4>"Options"</h4>
                    <Button variant="secondary" size="sm" disabled=locked on_click=on_add_option>
                        {icon("plus")}
                        " Add option"
                    </Button>
                </div>
                <For
                    each=move || option_keys.get()
                    key=|k| k.clone()
                    children={
                        let vm = vm.clone();
                        let id = id.clone();
                        move |option_key| view! {
                            <OptionRow vm=vm.clone() translation_id=id.clone() option_key=option_key />
                        }
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn DescriptionRow(vm: ServiceEditVm, translation_id: EntityId, block_key: ClientKey) -> impl IntoView {
    let locked = vm.is_submitting();
    let kind = vm.description_kind(translation_id.clone(), block_key.clone());
    let content = vm.description_content(translation_id.clone(), block_key.clone());

    let on_kind = {
        let vm = vm.clone();
        let id = translation_id.clone();
        let key = block_key.clone();
        Callback::new(move |v: String| {
            vm.update_description(&id, &key, DescriptionField::Kind(DescriptionKind::from(v)))
        })
    };
    let on_content = {
        let vm = vm.clone();
        let id = translation_id.clone();
        let key = block_key.clone();
        Callback::new(move |v: String| vm.update_description(&id, &key, DescriptionField::Content(v)))
    };
    let on_remove = {
        let vm = vm.clone();
        Callback::new(move |_: MouseEvent| vm.remove_description(&translation_id, &block_key))
    };

    view! {
        <div class="option-row">
            <Select
                label="Type"
                value=Signal::derive(move || kind.get().as_str().to_string())
                options=Signal::derive(move || model::description_kind_options(&kind.get()))
                disabled=locked
                on_change=on_kind
            />
            <Textarea label="Content" value=content on_input=on_content rows=2 disabled=locked />
            <Button variant="ghost" size="sm" title="Remove block" disabled=locked on_click=on_remove>
                {icon("trash")}
            </Button>
        </div>
    }
}

#[component]
fn OptionRow(vm: ServiceEditVm, translation_id: EntityId, option_key: ClientKey) -> impl IntoView {
    let locked = vm.is_submitting();
    let field = {
        let vm = vm.clone();
        let id = translation_id.clone();
        let key = option_key.clone();
        move |read: fn(&ServiceOption) -> String| vm.option_field(id.clone(), key.clone(), read)
    };

    let on_name = {
        let vm = vm.clone();
        let id = translation_id.clone();
        let key = option_key.clone();
        Callback::new(move |v: String| vm.update_option(&id, &key, TranslationOptionField::Name(v)))
    };
    let on_duration = {
        let vm = vm.clone();
        let id = translation_id.clone();
        let key = option_key.clone();
        Callback::new(move |raw: String| {
            vm.update_option(&id, &key, TranslationOptionField::Duration(raw))
        })
    };
    let on_price = {
        let vm = vm.clone();
        let id = translation_id.clone();
        let key = option_key.clone();
        Callback::new(move |raw: String| {
            vm.update_option(&id, &key, TranslationOptionField::Price(raw))
        })
    };
    let on_remove = {
        let vm = vm.clone();
        Callback::new(move |_: MouseEvent| vm.remove_option(&translation_id, &option_key))
    };

    view! {
        <div class="option-row">
            <Input
                label="Name"
                value=field(|o| o.service_option_name.clone())
                on_input=on_name
                disabled=locked
            />
            <Input
                label="Duration (min)"
                inputmode="decimal"
                value=field(|o| o.duration_text())
                on_input=on_duration
                disabled=locked
            />
            <Input
                label="Price"
                inputmode="decimal"
                value=field(|o| o.price_text())
                on_input=on_price
                disabled=locked
            />
            <Button variant="ghost" size="sm" title="Remove option" disabled=locked on_click=on_remove>
                {icon("x")}
            </Button>
        </div>
    }
}
