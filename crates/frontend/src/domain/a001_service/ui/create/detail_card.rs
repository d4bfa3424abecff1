use super::model;
use super::view_model::ServiceCreateVm;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::icons::icon;
use contracts::domain::a001_service::{DetailField, OptionDraftField, ServiceDetail};
use contracts::domain::common::ClientKey;
use contracts::enums::LanguageCode;
use leptos::prelude::*;

/// Card with one language rendition of the new service
#[component]
pub fn DetailCard(vm: ServiceCreateVm, detail_key: ClientKey) -> impl IntoView {
    let key = detail_key;
    let busy = vm.is_submitting();

    // Обработчик на каждое поле: значение из input -> селектор поля
    let on_field = {
        let vm = vm.clone();
        let key = key.clone();
        move |make: fn(String) -> DetailField| {
            let vm = vm.clone();
            let key = key.clone();
            Callback::new(move |v: String| vm.update_detail(&key, make(v)))
        }
    };
    let field = {
        let vm = vm.clone();
        let key = key.clone();
        move |read: fn(&ServiceDetail) -> String| {
            vm.detail_field(key.clone(), read)
        }
    };

    let language = field(|d| d.language.map(|l| l.code().to_string()).unwrap_or_default());
    let images = field(|d| d.service_images.join("\n"));
    let title = move || {
        LanguageCode::from_code(&language.get())
            .map(|l| format!("Service detail: {}", l.display_name()))
            .unwrap_or_else(|| "Service detail".to_string())
    };

    let on_language = {
        let vm = vm.clone();
        let key = key.clone();
        Callback::new(move |code: String| {
            vm.update_detail(&key, DetailField::Language(LanguageCode::from_code(&code)))
        })
    };
    let on_images = {
        let vm = vm.clone();
        let key = key.clone();
        Callback::new(move |text: String| {
            let urls = text
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(String::from)
                .collect();
            vm.update_detail(&key, DetailField::ServiceImages(urls))
        })
    };
    let on_remove = {
        let vm = vm.clone();
        let key = key.clone();
        Callback::new(move |_: leptos::ev::MouseEvent| vm.remove_detail(&key))
    };
    let on_add_option = {
        let vm = vm.clone();
        let key = key.clone();
        Callback::new(move |_: leptos::ev::MouseEvent| vm.add_option(&key))
    };

    let option_keys = vm.option_keys(key.clone());

    view! {
        <div class="detail-card">
            <div class="detail-card__header">
                <h3 class="detail-card__title">{title}</h3>
                <Button variant="danger" size="sm" title="Remove detail" disabled=busy on_click=on_remove>
                    {icon("trash")}
                </Button>
            </div>

            <div class="detail-card__grid">
                <Select
                    label="Language"
                    value=language
                    options=Signal::derive(model::language_options)
                    placeholder="-- Select language --"
                    required=true
                    disabled=busy
                    on_change=on_language
                />
                <Input
                    label="Service name"
                    value=field(|d| d.service_name.clone())
                    on_input=on_field(DetailField::ServiceName)
                    required=true
                    disabled=busy
                />
                <Input
                    label="Service sub name"
                    value=field(|d| d.service_sub_name.clone())
                    on_input=on_field(DetailField::ServiceSubName)
                    disabled=busy
                />
                <Input
                    label="Image URL"
                    input_type="url"
                    value=field(|d| d.service_image.clone())
                    on_input=on_field(DetailField::ServiceImage)
                    disabled=busy
                />
                <Input
                    label="Default price"
                    inputmode="decimal"
                    value=field(|d| d.default_service_price.clone())
                    on_input=on_field(DetailField::DefaultServicePrice)
                    disabled=busy
                />
                <Input
                    label="Price"
                    inputmode="decimal"
                    value=field(|d| d.service_price.clone())
                    on_input=on_field(DetailField::ServicePrice)
                    disabled=busy
                />
                <Input
                    label="Discount price"
                    inputmode="decimal"
                    value=field(|d| d.service_price_discount.clone())
                    on_input=on_field(DetailField::ServicePriceDiscount)
                    disabled=busy
                />
                <Input
                    label="Discount %"
                    inputmode="decimal"
                    value=field(|d| d.service_price_discount_percent.clone())
                    on_input=on_field(DetailField::ServicePriceDiscountPercent)
                    disabled=busy
                />
            </div>

            <Textarea
                label="Description"
                value=field(|d| d.service_description.clone())
                on_input=on_field(DetailField::ServiceDescription)
                rows=4
                disabled=busy
            />
            <Textarea
                label="Gallery (one URL per line)"
                value=images
                on_input=on_images
                rows=3
                disabled=busy
            />

            <div class="detail-card__options">
                <div class="detail-card__options-header">
                    <h4>"Options"</h4>
                    <Button variant="secondary" size="sm" disabled=busy on_click=on_add_option>
                        {icon("plus")}
                        " Add option"
                    </Button>
                </div>
                <For
                    each=move || option_keys.get()
                    key=|k| k.clone()
                    children={
                        let vm = vm.clone();
                        let detail_key = key.clone();
                        move |option_key| view! {
                            <OptionRow vm=vm.clone() detail_key=detail_key.clone() option_key=option_key />
                        }
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn OptionRow(vm: ServiceCreateVm, detail_key: ClientKey, option_key: ClientKey) -> impl IntoView {
    let busy = vm.is_submitting();

    let on_field = {
        let vm = vm.clone();
        let detail_key = detail_key.clone();
        let option_key = option_key.clone();
        move |make: fn(String) -> OptionDraftField| {
            let vm = vm.clone();
            let detail_key = detail_key.clone();
            let option_key = option_key.clone();
            Callback::new(move |v: String| vm.update_option(&detail_key, &option_key, make(v)))
        }
    };
    let name = vm.option_field(detail_key.clone(), option_key.clone(), |o| {
        o.service_option_name.clone()
    });
    let duration = vm.option_field(detail_key.clone(), option_key.clone(), |o| {
        o.service_option_duration.clone()
    });
    let price = vm.option_field(detail_key.clone(), option_key.clone(), |o| {
        o.service_option_price.clone()
    });
    let on_remove = {
        let vm = vm.clone();
        Callback::new(move |_: leptos::ev::MouseEvent| vm.remove_option(&detail_key, &option_key))
    };

    view! {
        <div class="option-row">
            <Input label="Name" value=name on_input=on_field(OptionDraftField::Name) disabled=busy />
            <Input
                label="Duration (min)"
                inputmode="decimal"
                value=duration
                on_input=on_field(OptionDraftField::Duration)
                disabled=busy
            />
            <Input
                label="Price"
                inputmode="decimal"
                value=price
                on_input=on_field(OptionDraftField::Price)
                disabled=busy
            />
            <Button variant="ghost" size="sm" title="Remove option" disabled=busy on_click=on_remove>
                {icon("x")}
            </Button>
        </div>
    }
}
