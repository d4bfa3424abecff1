//! Service catalog: create-flow draft, edit-flow translations, payloads

pub mod aggregate;
pub mod draft;
pub mod payload;
pub mod translation;

pub use aggregate::{filter_services, ServiceResponse};
pub use draft::{
    DetailField, DraftField, OptionDraftField, PostCreateMode, ServiceDetail, ServiceDraft,
    ServiceOptionDraft,
};
pub use payload::{
    parse_numeric, serialize_for_create, serialize_for_update, CreateServicePayload,
    UpdateTranslationPayload,
};
pub use translation::{
    Description, DescriptionField, DescriptionKind, ServiceOption, Translation, TranslationField,
    TranslationOptionField, TranslationSet,
};
