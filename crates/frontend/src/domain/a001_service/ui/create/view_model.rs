//! ViewModel for the create-service form
//!
//! The whole draft lives in one `FormState` signal; every input dispatches an
//! editor operation that replaces the draft.

use super::model;
use crate::shared::api_client::ApiClient;
use contracts::domain::a001_service::{
    serialize_for_create, DetailField, DraftField, OptionDraftField, PostCreateMode,
    ServiceDetail, ServiceDraft, ServiceOptionDraft,
};
use contracts::domain::a002_branch::Branch;
use contracts::domain::a004_service_type::ServiceType;
use contracts::domain::common::ClientKey;
use contracts::shared::{FormState, SubmitError};
use leptos::prelude::*;

#[derive(Clone)]
pub struct ServiceCreateVm {
    client: ApiClient,

    pub form: RwSignal<FormState<ServiceDraft>>,
    pub post_create_mode: RwSignal<PostCreateMode>,

    // Reference data
    pub branches: RwSignal<Vec<Branch>>,
    pub service_types: RwSignal<Vec<ServiceType>>,

    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
}

impl ServiceCreateVm {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            form: RwSignal::new(FormState::new(ServiceDraft::new())),
            post_create_mode: RwSignal::new(PostCreateMode::default()),
            branches: RwSignal::new(Vec::new()),
            service_types: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            success: RwSignal::new(None),
        }
    }

    // === Derived signals ===

    pub fn is_submitting(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.is_submitting()))
    }

    pub fn branch_id(&self) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.tree().branch_id.clone()))
    }

    pub fn service_type_id(&self) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.tree().service_type_id.clone()))
    }

    pub fn detail_keys(&self) -> Signal<Vec<ClientKey>> {
        let form = self.form;
        Signal::derive(move || {
            form.with(|f| f.tree().service_details.iter().map(|d| d.key.clone()).collect())
        })
    }

    /// One field of one detail; empty once the detail is gone
    pub fn detail_field(&self, key: ClientKey, read: fn(&ServiceDetail) -> String) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || {
            form.with(|f| f.tree().detail(&key).map(|d| read(d)).unwrap_or_default())
        })
    }

    pub fn option_keys(&self, detail_key: ClientKey) -> Signal<Vec<ClientKey>> {
        let form = self.form;
        Signal::derive(move || {
            form.with(|f| {
                f.tree()
                    .detail(&detail_key)
                    .map(|d| d.options.iter().map(|o| o.key.clone()).collect())
                    .unwrap_or_default()
            })
        })
    }

    pub fn option_field(
        &self,
        detail_key: ClientKey,
        option_key: ClientKey,
        read: fn(&ServiceOptionDraft) -> String,
    ) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || {
            form.with(|f| {
                f.tree()
                    .detail(&detail_key)
                    .and_then(|d| d.options.iter().find(|o| o.key == option_key))
                    .map(|o| read(o))
                    .unwrap_or_default()
            })
        })
    }

    // === Data loading ===

    /// Branches and service types for the selects, fetched concurrently
    pub fn load_reference_data(&self) {
        let client = self.client.clone();
        let branches = self.branches;
        leptos::task::spawn_local(async move {
            match client.fetch_branches(None).await {
                Ok(data) => branches.set(data),
                Err(e) => log::error!("Failed to fetch branches: {}", e),
            }
        });

        let client = self.client.clone();
        let service_types = self.service_types;
        leptos::task::spawn_local(async move {
            match client.fetch_service_types().await {
                Ok(data) => service_types.set(data),
                Err(e) => log::error!("Failed to fetch service types: {}", e),
            }
        });
    }

    // === Commands ===

    fn edit(&self, op: impl FnOnce(&ServiceDraft) -> ServiceDraft) {
        let applied = self.form.try_update(|f| f.edit(op)).unwrap_or(false);
        if !applied {
            log::debug!("Draft is locked while submitting, edit ignored");
        }
    }

    pub fn set_field(&self, field: DraftField) {
        self.edit(|d| d.with_field(field));
    }

    /// New detail preset to the first language not used yet
    pub fn add_detail(&self) {
        self.edit(|d| d.append_detail(ServiceDetail::new(model::next_unused_language(d))));
    }

    pub fn remove_detail(&self, key: &ClientKey) {
        self.edit(|d| d.remove_detail(key));
    }

    pub fn update_detail(&self, key: &ClientKey, field: DetailField) {
        self.edit(|d| d.update_detail(key, field));
    }

    pub fn add_option(&self, detail_key: &ClientKey) {
        self.edit(|d| d.append_option(detail_key, ServiceOptionDraft::default()));
    }

    pub fn remove_option(&self, detail_key: &ClientKey, option_key: &ClientKey) {
        self.edit(|d| d.remove_option(detail_key, option_key));
    }

    pub fn update_option(&self, detail_key: &ClientKey, option_key: &ClientKey, field: OptionDraftField) {
        self.edit(|d| d.update_option(detail_key, option_key, field));
    }

    /// Serialize the draft and POST it
    pub fn submit(&self) {
        let payload = match self.form.try_update(|f| f.begin_submit(serialize_for_create)) {
            Some(Ok(payload)) => payload,
            Some(Err(SubmitError::AlreadySubmitting)) => {
                log::debug!("Create already in progress, submit ignored");
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

        let this = self.clone();
        leptos::task::spawn_local(async move {
            match this.client.create_service(&payload).await {
                Ok(response) => {
                    log::info!("Service created: {}", response);
                    let mode = this.post_create_mode.get_untracked();
                    this.form.update(|f| f.settle_with(|d| d.after_create(mode)));
                    this.success.set(Some(model::CREATE_SUCCESS_MESSAGE.into()));
                }
                Err(e) => {
                    log::error!("Failed to create service: {}", e);
                    this.form.update(|f| f.settle());
                    this.error.set(Some(model::CREATE_FAILURE_MESSAGE.into()));
                }
            }
        });
    }
}
