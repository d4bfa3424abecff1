//! ViewModel for the edit-service form
//!
//! Language and branch select which services are fetched; picking a service
//! loads its translations into one `FormState<TranslationSet>`. Each
//! translation is saved on its own with a PATCH.

use super::model;
use crate::shared::api_client::ApiClient;
use contracts::domain::a001_service::{
    filter_services, serialize_for_update, Description, DescriptionField, DescriptionKind,
    ServiceOption, ServiceResponse, Translation, TranslationField, TranslationOptionField,
    TranslationSet, UpdateTranslationPayload,
};
use contracts::domain::a002_branch::Branch;
use contracts::domain::a003_language::Language;
use contracts::domain::common::{ClientKey, EntityId};
use contracts::shared::{ApiError, FormState, RequestSequence, SubmitError};
use leptos::prelude::*;

#[derive(Clone)]
pub struct ServiceEditVm {
    client: ApiClient,
    requests: RequestSequence,

    // === Filters ===
    pub lang_id: RwSignal<String>,
    pub branch_id: RwSignal<String>,
    pub search: RwSignal<String>,
    pub selected_service: RwSignal<Option<EntityId>>,

    // === Data ===
    pub languages: RwSignal<Vec<Language>>,
    pub branches: RwSignal<Vec<Branch>>,
    pub services: RwSignal<Vec<ServiceResponse>>,
    pub form: RwSignal<FormState<TranslationSet>>,
    /// Translation whose PATCH is in flight
    pub saving_id: RwSignal<Option<EntityId>>,

    // === UI State ===
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
}

impl ServiceEditVm {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            requests: RequestSequence::new(),
            lang_id: RwSignal::new(String::new()),
            branch_id: RwSignal::new(String::new()),
            search: RwSignal::new(String::new()),
            selected_service: RwSignal::new(None),
            languages: RwSignal::new(Vec::new()),
            branches: RwSignal::new(Vec::new()),
            services: RwSignal::new(Vec::new()),
            form: RwSignal::new(FormState::default()),
            saving_id: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            success: RwSignal::new(None),
        }
    }

    // === Derived signals ===

    pub fn is_submitting(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.is_submitting()))
    }

    /// Services whose name matches the search box
    pub fn service_options(&self) -> Signal<Vec<(String, String)>> {
        let services = self.services;
        let search = self.search;
        Signal::derive(move || {
            services.with(|all| {
                search.with(|q| model::service_options(&filter_services(all, q)))
            })
        })
    }

    pub fn selected_service_id(&self) -> Signal<String> {
        let selected = self.selected_service;
        Signal::derive(move || selected.get().map(|id| id.to_string()).unwrap_or_default())
    }

    pub fn translation_ids(&self) -> Signal<Vec<EntityId>> {
        let form = self.form;
        Signal::derive(move || {
            form.with(|f| f.tree().translations.iter().map(|t| t.id.clone()).collect())
        })
    }

    pub fn translation_field(&self, id: EntityId, read: fn(&Translation) -> String) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || {
            form.with(|f| f.tree().find(&id).map(|t| read(t)).unwrap_or_default())
        })
    }

    pub fn description_keys(&self, id: EntityId) -> Signal<Vec<ClientKey>> {
        let form = self.form;
        Signal::derive(move || {
            form.with(|f| {
                f.tree()
                    .find(&id)
                    .map(|t| t.service_descriptions.iter().map(|d| d.key.clone()).collect())
                    .unwrap_or_default()
            })
        })
    }

    pub fn description_kind(&self, id: EntityId, key: ClientKey) -> Signal<DescriptionKind> {
        let form = self.form;
        Signal::derive(move || {
            form.with(|f| {
                f.tree()
                    .find(&id)
                    .and_then(|t| t.service_descriptions.iter().find(|d| d.key == key))
                    .map(|d| d.kind.clone())
                    .unwrap_or_default()
            })
        })
    }

    pub fn description_content(&self, id: EntityId, key: ClientKey) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || {
            form.with(|f| {
                f.tree()
                    .find(&id)
                    .and_then(|t| t.service_descriptions.iter().find(|d| d.key == key))
                    .map(|d| d.content.clone())
                    .unwrap_or_default()
            })
        })
    }

    pub fn option_keys(&self, id: EntityId) -> Signal<Vec<ClientKey>> {
        let form = self.form;
        Signal::derive(move || {
            form.with(|f| {
                f.tree()
                    .find(&id)
                    .map(|t| t.options.iter().map(|o| o.key.clone()).collect())
                    .unwrap_or_default()
            })
        })
    }

    pub fn option_field(
        &self,
        id: EntityId,
        key: ClientKey,
        read: fn(&ServiceOption) -> String,
    ) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || {
            form.with(|f| {
                f.tree()
                    .find(&id)
                    .and_then(|t| t.options.iter().find(|o| o.key == key))
                    .map(|o| read(o))
                    .unwrap_or_default()
            })
        })
    }

    pub fn is_saving(&self, id: EntityId) -> Signal<bool> {
        let saving_id = self.saving_id;
        Signal::derive(move || saving_id.with(|s| s.as_ref() == Some(&id)))
    }

    // === Data loading ===

    /// Languages and branches for the filter selects, fetched concurrently
    pub fn load_reference_data(&self) {
        let client = self.client.clone();
        let languages = self.languages;
        leptos::task::spawn_local(async move {
            match client.fetch_languages().await {
                Ok(data) => languages.set(data),
                Err(e) => log::error!("Failed to fetch languages: {}", e),
            }
        });

        let client = self.client.clone();
        let branches = self.branches;
        leptos::task::spawn_local(async move {
            match client.fetch_branches(Some(model::BRANCH_LANG)).await {
                Ok(data) => branches.set(data),
                Err(e) => log::error!("Failed to fetch branches: {}", e),
            }
        });
    }

    /// Fetch the services of the selected language and branch.
    ///
    /// Does nothing until both are chosen. A response that arrives after a
    /// newer fetch was started is dropped.
    pub fn load_services(&self) {
        let lang_id = self.lang_id.get_untracked();
        let branch_id = self.branch_id.get_untracked();
        if lang_id.is_empty() || branch_id.is_empty() {
            return;
        }

        let token = self.requests.issue();
        self.loading.set(true);

        let this = self.clone();
        leptos::task::spawn_local(async move {
            let result = this.client.fetch_service_details(&lang_id, &branch_id).await;
            if !this.requests.is_current(token) {
                log::debug!(
                    "Dropping stale service list (lang={}, branch={})",
                    lang_id,
                    branch_id
                );
                return;
            }
            this.apply_services(result);
        });
    }

    /// Outcome of the current fetch. A failed fetch empties the list, so the
    /// picker never offers services of the previous language or branch.
    fn apply_services(&self, result: Result<Vec<ServiceResponse>, ApiError>) {
        self.loading.set(false);
        match result {
            Ok(services) => {
                self.services.set(services);
                self.reload_selected();
            }
            Err(e) => {
                log::error!("Failed to fetch services: {}", e);
                self.services.set(Vec::new());
                self.clear_selection();
                self.error.set(Some(model::LOAD_FAILURE_MESSAGE.into()));
            }
        }
    }

    /// Reload the translations of the selected service from `services`
    fn reload_selected(&self) {
        let Some(id) = self.selected_service.get_untracked() else {
            return;
        };
        let translations = self.services.with_untracked(|all| {
            all.iter().find(|s| s.id == id).map(|s| s.translations.clone())
        });
        match translations {
            Some(translations) => {
                self.form.update(|f| {
                    f.replace(TranslationSet::new(translations));
                });
            }
            None => self.clear_selection(),
        }
    }

    fn clear_selection(&self) {
        self.selected_service.set(None);
        self.form.update(|f| {
            f.replace(TranslationSet::default());
        });
    }

    // === Commands ===

    pub fn set_language(&self, id: String) {
        self.lang_id.set(id);
    }

    pub fn set_branch(&self, id: String) {
        self.branch_id.set(id);
    }

    /// New search text; the current selection may no longer match, so it is dropped
    pub fn set_search(&self, query: String) {
        self.search.set(query);
        self.clear_selection();
    }

    pub fn select_service(&self, id: String) {
        self.error.set(None);
        self.success.set(None);
        match EntityId::new(id) {
            Ok(id) => {
                self.selected_service.set(Some(id));
                self.reload_selected();
            }
            Err(_) => self.clear_selection(),
        }
    }

    fn edit(&self, op: impl FnOnce(&TranslationSet) -> TranslationSet) {
        let applied = self.form.try_update(|f| f.edit(op)).unwrap_or(false);
        if !applied {
            log::debug!("Translations are locked while saving, edit ignored");
        }
    }

    pub fn update_translation(&self, id: &EntityId, field: TranslationField) {
        self.edit(|set| set.update_translation(id, field));
    }

    pub fn add_description(&self, id: &EntityId) {
        let block = Description {
            kind: DescriptionKind::Paragraph,
            ..Description::default()
        };
        self.edit(|set| set.append_description(id, block));
    }

    pub fn remove_description(&self, id: &EntityId, key: &ClientKey) {
        self.edit(|set| set.remove_description(id, key));
    }

    pub fn update_description(&self, id: &EntityId, key: &ClientKey, field: DescriptionField) {
        self.edit(|set| set.update_description(id, key, field));
    }

    pub fn add_option(&self, id: &EntityId) {
        let option = ServiceOption::blank(id.as_str());
        self.edit(|set| set.append_option(id, option));
    }

    pub fn remove_option(&self, id: &EntityId, key: &ClientKey) {
        self.edit(|set| set.remove_option(id, key));
    }

    pub fn update_option(&self, id: &EntityId, key: &ClientKey, field: TranslationOptionField) {
        self.edit(|set| set.update_option(id, key, field));
    }

    /// PATCH one translation, then refetch the services so the form shows
    /// the server copy. Typed numbers are parsed here, not while typing.
    pub fn save(&self, id: &EntityId) {
        let started = self.form.try_update(|f| {
            f.begin_submit(|set: &TranslationSet| -> Result<UpdateTranslationPayload, SubmitError> {
                let translation = set
                    .find(id)
                    .ok_or_else(|| SubmitError::NotFound(id.to_string()))?;
                serialize_for_update(translation)
            })
        });
        let payload = match started {
            Some(Ok(payload)) => payload,
            Some(Err(SubmitError::AlreadySubmitting)) => {
                log::debug!("Save already in progress, {} ignored", id);
                return;
            }
            Some(Err(e)) => {
                self.success.set(None);
                self.error.set(Some(model::submit_error_message(&e)));
                return;
            }
            None => return,
        };

        self.error.set(None);
        self.success.set(None);
        self.saving_id.set(Some(id.clone()));

        let this = self.clone();
        let id = id.clone();
        leptos::task::spawn_local(async move {
            let result = this.client.update_translation(&id, &payload).await;
            this.form.update(|f| f.settle());
            this.saving_id.set(None);
            match result {
                Ok(response) => {
                    log::info!("Translation {} updated: {}", id, response);
                    this.success.set(Some(model::UPDATE_SUCCESS_MESSAGE.into()));
                    this.load_services();
                }
                Err(e) => {
                    log::error!("Failed to update translation {}: {}", id, e);
                    this.error.set(Some(model::UPDATE_FAILURE_MESSAGE.into()));
                }
            }
        });
    }
}
