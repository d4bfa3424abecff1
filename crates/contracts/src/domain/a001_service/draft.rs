//! Create-flow draft: service -> details (one per language) -> options
//!
//! Every editing method takes `&self` and returns a new draft. Details and
//! options that an operation does not touch are shared with the previous
//! draft by pointer.

use crate::domain::common::{collection, ClientKey, Keyed};
use crate::enums::LanguageCode;
use std::sync::Arc;

// ============================================================================
// Records
// ============================================================================

/// Service being created, held only in client memory
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServiceDraft {
    pub branch_id: String,
    pub service_type_id: String,
    pub service_details: Vec<Arc<ServiceDetail>>,
}

/// One language-specific rendition of the new service.
///
/// Price fields hold the raw input text; they are converted to numbers only
/// when the payload is built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServiceDetail {
    pub key: ClientKey,
    pub service_name: String,
    pub service_sub_name: String,
    pub service_image: String,
    pub service_images: Vec<String>,
    pub service_description: String,
    pub default_service_price: String,
    pub service_price: String,
    pub service_price_discount: String,
    pub service_price_discount_percent: String,
    pub language: Option<LanguageCode>,
    pub options: Vec<Arc<ServiceOptionDraft>>,
}

/// Priced, timed variant of the new service
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServiceOptionDraft {
    pub key: ClientKey,
    pub service_option_name: String,
    pub service_option_duration: String,
    pub service_option_price: String,
}

impl Keyed for ServiceDetail {
    type Key = ClientKey;

    fn key(&self) -> &ClientKey {
        &self.key
    }
}

impl Keyed for ServiceOptionDraft {
    type Key = ClientKey;

    fn key(&self) -> &ClientKey {
        &self.key
    }
}

impl ServiceDetail {
    pub fn new(language: Option<LanguageCode>) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, field: DetailField) {
        match field {
            DetailField::ServiceName(v) => self.service_name = v,
            DetailField::ServiceSubName(v) => self.service_sub_name = v,
            DetailField::ServiceImage(v) => self.service_image = v,
            DetailField::ServiceImages(v) => self.service_images = v,
            DetailField::ServiceDescription(v) => self.service_description = v,
            DetailField::DefaultServicePrice(v) => self.default_service_price = v,
            DetailField::ServicePrice(v) => self.service_price = v,
            DetailField::ServicePriceDiscount(v) => self.service_price_discount = v,
            DetailField::ServicePriceDiscountPercent(v) => self.service_price_discount_percent = v,
            DetailField::Language(v) => self.language = v,
        }
    }
}

impl ServiceOptionDraft {
    pub fn new(
        name: impl Into<String>,
        duration: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            key: ClientKey::generate(),
            service_option_name: name.into(),
            service_option_duration: duration.into(),
            service_option_price: price.into(),
        }
    }

    pub fn apply(&mut self, field: OptionDraftField) {
        match field {
            OptionDraftField::Name(v) => self.service_option_name = v,
            OptionDraftField::Duration(v) => self.service_option_duration = v,
            OptionDraftField::Price(v) => self.service_option_price = v,
        }
    }
}

// ============================================================================
// Field selectors
// ============================================================================

/// Root-level fields of the draft
#[derive(Debug, Clone, PartialEq)]
pub enum DraftField {
    BranchId(String),
    ServiceTypeId(String),
}

/// Updatable fields of a [`ServiceDetail`], each carrying its new value
#[derive(Debug, Clone, PartialEq)]
pub enum DetailField {
    ServiceName(String),
    ServiceSubName(String),
    ServiceImage(String),
    ServiceImages(Vec<String>),
    ServiceDescription(String),
    DefaultServicePrice(String),
    ServicePrice(String),
    ServicePriceDiscount(String),
    ServicePriceDiscountPercent(String),
    Language(Option<LanguageCode>),
}

/// Updatable fields of a [`ServiceOptionDraft`]
#[derive(Debug, Clone, PartialEq)]
pub enum OptionDraftField {
    Name(String),
    Duration(String),
    Price(String),
}

/// What the create form does with its draft after a successful submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostCreateMode {
    /// Keep details and option rows, blank out option values
    #[default]
    ResetOptions,
    /// Start over with no details; branch and service type stay selected
    ClearForm,
    /// Only confirm, leave everything as submitted
    KeepData,
}

// ============================================================================
// Editor
// ============================================================================

impl ServiceDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(&self, field: DraftField) -> Self {
        let mut next = self.clone();
        match field {
            DraftField::BranchId(v) => next.branch_id = v,
            DraftField::ServiceTypeId(v) => next.service_type_id = v,
        }
        next
    }

    pub fn detail(&self, key: &ClientKey) -> Option<&Arc<ServiceDetail>> {
        collection::find(&self.service_details, key)
    }

    /// Append a detail under a freshly generated key
    pub fn append_detail(&self, mut detail: ServiceDetail) -> Self {
        detail.key = ClientKey::generate();
        self.with_details(collection::append(&self.service_details, detail))
    }

    pub fn remove_detail(&self, key: &ClientKey) -> Self {
        self.with_details(collection::remove(&self.service_details, key))
    }

    pub fn update_detail(&self, key: &ClientKey, field: DetailField) -> Self {
        self.with_details(collection::update(&self.service_details, key, |d| {
            d.apply(field)
        }))
    }

    /// Append an option under a freshly generated key
    pub fn append_option(&self, detail_key: &ClientKey, mut option: ServiceOptionDraft) -> Self {
        option.key = ClientKey::generate();
        self.with_details(collection::update(&self.service_details, detail_key, |d| {
            d.options = collection::append(&d.options, option);
        }))
    }

    pub fn remove_option(&self, detail_key: &ClientKey, option_key: &ClientKey) -> Self {
        self.edit_options(detail_key, |options| collection::remove(options, option_key))
    }

    pub fn update_option(
        &self,
        detail_key: &ClientKey,
        option_key: &ClientKey,
        field: OptionDraftField,
    ) -> Self {
        self.edit_options(detail_key, |options| {
            collection::update(options, option_key, |o| o.apply(field))
        })
    }

    /// Draft to show after the service was created
    pub fn after_create(&self, mode: PostCreateMode) -> Self {
        match mode {
            PostCreateMode::KeepData => self.clone(),
            PostCreateMode::ClearForm => Self {
                branch_id: self.branch_id.clone(),
                service_type_id: self.service_type_id.clone(),
                service_details: Vec::new(),
            },
            PostCreateMode::ResetOptions => {
                let details = self
                    .service_details
                    .iter()
                    .map(|detail| {
                        if detail.options.is_empty() {
                            return Arc::clone(detail);
                        }
                        let mut next = ServiceDetail::clone(detail);
                        next.options = detail
                            .options
                            .iter()
                            .map(|_| Arc::new(ServiceOptionDraft::default()))
                            .collect();
                        Arc::new(next)
                    })
                    .collect();
                self.with_details(details)
            }
        }
    }

    fn with_details(&self, service_details: Vec<Arc<ServiceDetail>>) -> Self {
        Self {
            branch_id: self.branch_id.clone(),
            service_type_id: self.service_type_id.clone(),
            service_details,
        }
    }

    /// Leave the draft untouched (by pointer) when the detail is unknown or
    /// the options vector comes back identical
    fn edit_options<F>(&self, detail_key: &ClientKey, edit: F) -> Self
    where
        F: FnOnce(&[Arc<ServiceOptionDraft>]) -> Vec<Arc<ServiceOptionDraft>>,
    {
        let Some(detail) = self.detail(detail_key) else {
            return self.clone();
        };
        let options = edit(&detail.options);
        let unchanged = options.len() == detail.options.len()
            && options
                .iter()
                .zip(&detail.options)
                .all(|(a, b)| Arc::ptr_eq(a, b));
        if unchanged {
            return self.clone();
        }
        self.with_details(collection::update(&self.service_details, detail_key, |d| {
            d.options = options
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_languages() -> ServiceDraft {
        ServiceDraft::new()
            .append_detail(ServiceDetail::new(Some(LanguageCode::Vi)))
            .append_detail(ServiceDetail::new(Some(LanguageCode::En)))
    }

    fn key_at(draft: &ServiceDraft, i: usize) -> ClientKey {
        draft.service_details[i].key.clone()
    }

    #[test]
    fn test_append_detail_assigns_fresh_keys() {
        let template = ServiceDetail::new(Some(LanguageCode::Vi));
        let draft = ServiceDraft::new()
            .append_detail(template.clone())
            .append_detail(template.clone());
        assert_eq!(draft.service_details.len(), 2);
        assert_ne!(draft.service_details[0].key, draft.service_details[1].key);
        assert_ne!(draft.service_details[0].key, template.key);
    }

    #[test]
    fn test_previous_draft_is_unaffected() {
        let before = two_languages();
        let vi = key_at(&before, 0);
        let after = before.update_detail(&vi, DetailField::ServiceName("Massage".into()));
        assert_eq!(before.service_details[0].service_name, "");
        assert_eq!(after.service_details[0].service_name, "Massage");
        assert!(Arc::ptr_eq(&before.service_details[1], &after.service_details[1]));
    }

    #[test]
    fn test_remove_unknown_detail_is_noop() {
        let before = two_languages();
        let after = before.remove_detail(&ClientKey::generate());
        assert_eq!(before, after);
    }

    #[test]
    fn test_update_same_field_twice_equals_last() {
        let draft = two_languages();
        let vi = key_at(&draft, 0);
        let twice = draft
            .update_detail(&vi, DetailField::ServicePrice("100".into()))
            .update_detail(&vi, DetailField::ServicePrice("200".into()));
        let once = draft.update_detail(&vi, DetailField::ServicePrice("200".into()));
        assert_eq!(twice, once);
    }

    #[test]
    fn test_root_fields() {
        let draft = ServiceDraft::new()
            .with_field(DraftField::BranchId("b1".into()))
            .with_field(DraftField::ServiceTypeId("t1".into()));
        assert_eq!(draft.branch_id, "b1");
        assert_eq!(draft.service_type_id, "t1");
    }

    #[test]
    fn test_option_edits_only_touch_target_detail() {
        let draft = two_languages();
        let vi = key_at(&draft, 0);
        let with_option =
            draft.append_option(&vi, ServiceOptionDraft::new("60 min", "60", "500000"));
        assert_eq!(with_option.service_details[0].options.len(), 1);
        assert!(Arc::ptr_eq(
            &draft.service_details[1],
            &with_option.service_details[1]
        ));

        let option_key = with_option.service_details[0].options[0].key.clone();
        let renamed = with_option.update_option(
            &vi,
            &option_key,
            OptionDraftField::Name("90 min".into()),
        );
        assert_eq!(
            renamed.service_details[0].options[0].service_option_name,
            "90 min"
        );
        assert_eq!(
            with_option.service_details[0].options[0].service_option_name,
            "60 min"
        );
    }

    #[test]
    fn test_remove_already_removed_option_is_noop() {
        let draft = two_languages();
        let vi = key_at(&draft, 0);
        let draft = draft.append_option(&vi, ServiceOptionDraft::new("a", "30", "1"));
        let option_key = draft.service_details[0].options[0].key.clone();

        let removed = draft.remove_option(&vi, &option_key);
        assert!(removed.service_details[0].options.is_empty());

        let again = removed.remove_option(&vi, &option_key);
        assert_eq!(again, removed);
        assert!(Arc::ptr_eq(
            &again.service_details[0],
            &removed.service_details[0]
        ));
    }

    #[test]
    fn test_option_edit_under_unknown_detail_is_noop() {
        let draft = two_languages();
        let next = draft.append_option(&ClientKey::generate(), ServiceOptionDraft::default());
        assert_eq!(next, draft);
    }

    #[test]
    fn test_after_create_reset_options_keeps_detail_fields() {
        let draft = two_languages();
        let vi = key_at(&draft, 0);
        let draft = draft
            .update_detail(&vi, DetailField::ServiceName("Body massage".into()))
            .append_option(&vi, ServiceOptionDraft::new("60 min", "60", "500000"))
            .append_option(&vi, ServiceOptionDraft::new("90 min", "90", "700000"));

        let reset = draft.after_create(PostCreateMode::ResetOptions);
        let detail = &reset.service_details[0];
        assert_eq!(detail.service_name, "Body massage");
        assert_eq!(detail.language, Some(LanguageCode::Vi));
        assert_eq!(detail.options.len(), 2);
        assert!(detail
            .options
            .iter()
            .all(|o| o.service_option_name.is_empty()
                && o.service_option_duration.is_empty()
                && o.service_option_price.is_empty()));
        assert!(Arc::ptr_eq(
            &draft.service_details[1],
            &reset.service_details[1]
        ));
    }

    #[test]
    fn test_after_create_other_modes() {
        let draft = two_languages().with_field(DraftField::BranchId("b1".into()));
        let cleared = draft.after_create(PostCreateMode::ClearForm);
        assert!(cleared.service_details.is_empty());
        assert_eq!(cleared.branch_id, "b1");

        assert_eq!(draft.after_create(PostCreateMode::KeepData), draft);
    }
}
