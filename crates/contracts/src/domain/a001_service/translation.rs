//! Edit-flow records: translations of an existing service, as stored on the
//! server, with their description blocks and options.
//!
//! Descriptions and options get a synthetic [`ClientKey`] when they are
//! loaded or created; the key is never serialized. Fields the server sends
//! but this module does not know about are kept in `extra` and written back
//! unchanged.

use super::payload::parse_numeric;
use crate::domain::common::{collection, ClientKey, EntityId, Keyed};
use crate::shared::errors::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::sync::Arc;

fn zero() -> Number {
    Number::from(0)
}

/// Typed text of a numeric input; blank means 0
fn number_or_zero(field: &str, raw: &str) -> Result<Number, ValidationError> {
    Ok(parse_numeric(field, raw)?.unwrap_or_else(zero))
}

/// What a numeric input shows: the typed text if any, else the stored number
fn input_text(typed: &Option<String>, stored: &Number) -> String {
    typed.clone().unwrap_or_else(|| stored.to_string())
}

// ============================================================================
// Description block
// ============================================================================

/// Kind of a description block. The server stores free text, so unknown
/// values are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DescriptionKind {
    #[default]
    Empty,
    Paragraph,
    Italic,
    Bold,
    Other(String),
}

impl DescriptionKind {
    pub fn as_str(&self) -> &str {
        match self {
            DescriptionKind::Empty => "",
            DescriptionKind::Paragraph => "paragraph",
            DescriptionKind::Italic => "italic",
            DescriptionKind::Bold => "bold",
            DescriptionKind::Other(s) => s,
        }
    }

    /// Options offered by the type select
    pub fn all() -> Vec<DescriptionKind> {
        vec![
            DescriptionKind::Paragraph,
            DescriptionKind::Italic,
            DescriptionKind::Bold,
        ]
    }
}

impl From<String> for DescriptionKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "" => DescriptionKind::Empty,
            "paragraph" => DescriptionKind::Paragraph,
            "italic" => DescriptionKind::Italic,
            "bold" => DescriptionKind::Bold,
            _ => DescriptionKind::Other(value),
        }
    }
}

impl From<DescriptionKind> for String {
    fn from(kind: DescriptionKind) -> Self {
        match kind {
            DescriptionKind::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

/// Typed rich-text fragment of a translation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Description {
    #[serde(skip)]
    pub key: ClientKey,
    #[serde(rename = "type", default)]
    pub kind: DescriptionKind,
    #[serde(default)]
    pub content: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Keyed for Description {
    type Key = ClientKey;

    fn key(&self) -> &ClientKey {
        &self.key
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DescriptionField {
    Kind(DescriptionKind),
    Content(String),
}

impl Description {
    pub fn apply(&mut self, field: DescriptionField) {
        match field {
            DescriptionField::Kind(v) => self.kind = v,
            DescriptionField::Content(v) => self.content = v,
        }
    }
}

// ============================================================================
// Service option (server shape)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOption {
    #[serde(skip)]
    pub key: ClientKey,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub service_detail_id: String,
    #[serde(default)]
    pub service_option_name: String,
    #[serde(default = "zero")]
    pub service_option_duration: Number,
    #[serde(default = "zero")]
    pub service_option_price: Number,
    /// Duration as typed, parsed into `service_option_duration` on save
    #[serde(skip)]
    pub duration_input: Option<String>,
    #[serde(skip)]
    pub price_input: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Keyed for ServiceOption {
    type Key = ClientKey;

    fn key(&self) -> &ClientKey {
        &self.key
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TranslationOptionField {
    Name(String),
    /// Raw input text
    Duration(String),
    /// Raw input text
    Price(String),
}

impl ServiceOption {
    /// Empty option row for the translation `service_detail_id`
    pub fn blank(service_detail_id: impl Into<String>) -> Self {
        Self {
            key: ClientKey::generate(),
            id: None,
            service_detail_id: service_detail_id.into(),
            service_option_name: String::new(),
            service_option_duration: zero(),
            service_option_price: zero(),
            duration_input: None,
            price_input: None,
            extra: Map::new(),
        }
    }

    pub fn apply(&mut self, field: TranslationOptionField) {
        match field {
            TranslationOptionField::Name(v) => self.service_option_name = v,
            TranslationOptionField::Duration(v) => self.duration_input = Some(v),
            TranslationOptionField::Price(v) => self.price_input = Some(v),
        }
    }

    pub fn duration_text(&self) -> String {
        input_text(&self.duration_input, &self.service_option_duration)
    }

    pub fn price_text(&self) -> String {
        input_text(&self.price_input, &self.service_option_price)
    }

    fn has_pending_input(&self) -> bool {
        self.duration_input.is_some() || self.price_input.is_some()
    }

    /// Copy with the typed inputs parsed; `path` prefixes error field names
    fn resolved(&self, path: &str) -> Result<ServiceOption, ValidationError> {
        let mut next = self.clone();
        if let Some(raw) = next.duration_input.take() {
            next.service_option_duration =
                number_or_zero(&format!("{path}.serviceOptionDuration"), &raw)?;
        }
        if let Some(raw) = next.price_input.take() {
            next.service_option_price = number_or_zero(&format!("{path}.serviceOptionPrice"), &raw)?;
        }
        Ok(next)
    }
}

// ============================================================================
// Translation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    #[serde(rename = "_id")]
    pub id: EntityId,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub service_name: String,
    #[serde(default)]
    pub service_sub_name: String,
    #[serde(default = "zero")]
    pub default_service_price: Number,
    /// Price as typed, parsed into `default_service_price` on save
    #[serde(skip)]
    pub default_service_price_input: Option<String>,
    #[serde(default)]
    pub service_image: String,
    #[serde(default)]
    pub service_images: Vec<String>,
    #[serde(default)]
    pub service_description: String,
    #[serde(default)]
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Revision stamp, passed through untouched
    #[serde(rename = "__v", default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<Value>,
    #[serde(default)]
    pub service_descriptions: Vec<Arc<Description>>,
    #[serde(default)]
    pub options: Vec<Arc<ServiceOption>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Keyed for Translation {
    type Key = EntityId;

    fn key(&self) -> &EntityId {
        &self.id
    }
}

/// Updatable top-level fields of a [`Translation`]
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationField {
    ServiceName(String),
    ServiceSubName(String),
    ServiceImage(String),
    ServiceImages(Vec<String>),
    ServiceDescription(String),
    /// Raw input text
    DefaultServicePrice(String),
}

impl Translation {
    pub fn apply(&mut self, field: TranslationField) {
        match field {
            TranslationField::ServiceName(v) => self.service_name = v,
            TranslationField::ServiceSubName(v) => self.service_sub_name = v,
            TranslationField::ServiceImage(v) => self.service_image = v,
            TranslationField::ServiceImages(v) => self.service_images = v,
            TranslationField::ServiceDescription(v) => self.service_description = v,
            TranslationField::DefaultServicePrice(v) => self.default_service_price_input = Some(v),
        }
    }

    pub fn default_service_price_text(&self) -> String {
        input_text(&self.default_service_price_input, &self.default_service_price)
    }

    /// Copy with every typed numeric input parsed into its number.
    ///
    /// Blank input counts as 0; anything else that is not a number fails
    /// with the field path, e.g. `options[1].serviceOptionPrice`.
    pub fn resolved(&self) -> Result<Translation, ValidationError> {
        let mut next = self.clone();
        if let Some(raw) = next.default_service_price_input.take() {
            next.default_service_price = number_or_zero("defaultServicePrice", &raw)?;
        }
        next.options = self
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                if option.has_pending_input() {
                    option.resolved(&format!("options[{i}]")).map(Arc::new)
                } else {
                    Ok(Arc::clone(option))
                }
            })
            .collect::<Result<_, _>>()?;
        Ok(next)
    }
}

// ============================================================================
// Editor root: all translations of the selected service
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TranslationSet {
    pub translations: Vec<Arc<Translation>>,
}

impl TranslationSet {
    pub fn new(translations: Vec<Translation>) -> Self {
        Self {
            translations: translations.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn find(&self, id: &EntityId) -> Option<&Arc<Translation>> {
        collection::find(&self.translations, id)
    }

    pub fn update_translation(&self, id: &EntityId, field: TranslationField) -> Self {
        self.with(collection::update(&self.translations, id, |t| t.apply(field)))
    }

    /// Append a description block under a freshly generated key
    pub fn append_description(&self, id: &EntityId, mut description: Description) -> Self {
        description.key = ClientKey::generate();
        self.with(collection::update(&self.translations, id, |t| {
            t.service_descriptions = collection::append(&t.service_descriptions, description);
        }))
    }

    pub fn remove_description(&self, id: &EntityId, key: &ClientKey) -> Self {
        self.edit_descriptions(id, |items| collection::remove(items, key))
    }

    pub fn update_description(&self, id: &EntityId, key: &ClientKey, field: DescriptionField) -> Self {
        self.edit_descriptions(id, |items| collection::update(items, key, |d| d.apply(field)))
    }

    /// Positional update; a stale index is a no-op
    pub fn update_description_field(
        &self,
        id: &EntityId,
        index: usize,
        field: DescriptionField,
    ) -> Self {
        self.edit_descriptions(id, |items| collection::update_at(items, index, |d| d.apply(field)))
    }

    /// Positional removal; a stale index is a no-op
    pub fn remove_description_at(&self, id: &EntityId, index: usize) -> Self {
        self.edit_descriptions(id, |items| collection::remove_at(items, index))
    }

    /// Append an option under a freshly generated key
    pub fn append_option(&self, id: &EntityId, mut option: ServiceOption) -> Self {
        option.key = ClientKey::generate();
        self.with(collection::update(&self.translations, id, |t| {
            t.options = collection::append(&t.options, option);
        }))
    }

    pub fn remove_option(&self, id: &EntityId, key: &ClientKey) -> Self {
        self.edit_options(id, |items| collection::remove(items, key))
    }

    pub fn update_option(&self, id: &EntityId, key: &ClientKey, field: TranslationOptionField) -> Self {
        self.edit_options(id, |items| collection::update(items, key, |o| o.apply(field)))
    }

    fn with(&self, translations: Vec<Arc<Translation>>) -> Self {
        Self { translations }
    }

    fn edit_descriptions<F>(&self, id: &EntityId, edit: F) -> Self
    where
        F: FnOnce(&[Arc<Description>]) -> Vec<Arc<Description>>,
    {
        let Some(translation) = self.find(id) else {
            return self.clone();
        };
        let items = edit(&translation.service_descriptions);
        if same_pointers(&items, &translation.service_descriptions) {
            return self.clone();
        }
        self.with(collection::update(&self.translations, id, |t| {
            t.service_descriptions = items
        }))
    }

    fn edit_options<F>(&self, id: &EntityId, edit: F) -> Self
    where
        F: FnOnce(&[Arc<ServiceOption>]) -> Vec<Arc<ServiceOption>>,
    {
        let Some(translation) = self.find(id) else {
            return self.clone();
        };
        let items = edit(&translation.options);
        if same_pointers(&items, &translation.options) {
            return self.clone();
        }
        self.with(collection::update(&self.translations, id, |t| t.options = items))
    }
}

fn same_pointers<T>(a: &[Arc<T>], b: &[Arc<T>]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| Arc::ptr_eq(x, y))
}
