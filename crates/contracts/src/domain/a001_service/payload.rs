//! Wire payloads for `POST /services/new` and `PATCH /service-details/{id}`

use super::draft::{ServiceDetail, ServiceDraft, ServiceOptionDraft};
use super::translation::Translation;
use crate::enums::LanguageCode;
use crate::shared::errors::{SubmitError, ValidationError};
use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::collections::HashSet;

/// Fields the server manages itself and must not receive back on update
pub const SERVER_MANAGED_FIELDS: &[&str] = &["_id", "createdAt", "__v", "language", "serviceId"];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServicePayload {
    pub branch_id: String,
    pub service_type_id: String,
    pub service_details: Vec<ServiceDetailPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetailPayload {
    pub service_name: String,
    pub service_sub_name: String,
    pub service_image: String,
    pub service_images: Vec<String>,
    pub service_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_service_price: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_price: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_price_discount: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_price_discount_percent: Option<Number>,
    pub language: LanguageCode,
    pub options: Vec<ServiceOptionPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOptionPayload {
    pub service_option_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_option_duration: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_option_price: Option<Number>,
}

/// Partial-update body: the translation minus [`SERVER_MANAGED_FIELDS`]
pub type UpdateTranslationPayload = Map<String, Value>;

/// Parse numeric input text.
///
/// Blank input means "not set" (`Ok(None)`). Integers stay integers so that
/// `"60"` is sent as `60`; anything with a fraction or exponent becomes a
/// float. Only `.` is accepted as decimal separator.
pub fn parse_numeric(field: &str, raw: &str) -> Result<Option<Number>, ValidationError> {
    let text = raw.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let invalid = || ValidationError::InvalidNumber {
        field: field.to_string(),
        value: raw.to_string(),
    };
    if let Ok(n) = text.parse::<i64>() {
        return Ok(Some(Number::from(n)));
    }
    if let Ok(n) = text.parse::<u64>() {
        return Ok(Some(Number::from(n)));
    }
    // f64::from_str понимает "inf" и "NaN" — отсекаем через from_f64
    text.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Some)
        .ok_or_else(invalid)
}

/// Build the create payload from a draft.
///
/// Client keys are dropped, blank numeric fields omitted, and each detail
/// must carry a language that no other detail uses.
pub fn serialize_for_create(draft: &ServiceDraft) -> Result<CreateServicePayload, ValidationError> {
    let mut seen = HashSet::new();
    let mut service_details = Vec::with_capacity(draft.service_details.len());

    for (i, detail) in draft.service_details.iter().enumerate() {
        let path = format!("serviceDetails[{i}]");
        let payload = detail_payload(&path, detail)?;
        if !seen.insert(payload.language) {
            return Err(ValidationError::DuplicateLanguage {
                language: payload.language,
            });
        }
        service_details.push(payload);
    }

    Ok(CreateServicePayload {
        branch_id: draft.branch_id.clone(),
        service_type_id: draft.service_type_id.clone(),
        service_details,
    })
}

fn detail_payload(path: &str, detail: &ServiceDetail) -> Result<ServiceDetailPayload, ValidationError> {
    let number = |name: &str, raw: &str| parse_numeric(&format!("{path}.{name}"), raw);

    let language = detail.language.ok_or_else(|| ValidationError::MissingLanguage {
        field: format!("{path}.language"),
    })?;

    let options = detail
        .options
        .iter()
        .enumerate()
        .map(|(j, option)| option_payload(&format!("{path}.options[{j}]"), option))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ServiceDetailPayload {
        service_name: detail.service_name.clone(),
        service_sub_name: detail.service_sub_name.clone(),
        service_image: detail.service_image.clone(),
        service_images: detail.service_images.clone(),
        service_description: detail.service_description.clone(),
        default_service_price: number("defaultServicePrice", &detail.default_service_price)?,
        service_price: number("servicePrice", &detail.service_price)?,
        service_price_discount: number("servicePriceDiscount", &detail.service_price_discount)?,
        service_price_discount_percent: number(
            "servicePriceDiscountPercent",
            &detail.service_price_discount_percent,
        )?,
        language,
        options,
    })
}

fn option_payload(path: &str, option: &ServiceOptionDraft) -> Result<ServiceOptionPayload, ValidationError> {
    Ok(ServiceOptionPayload {
        service_option_name: option.service_option_name.clone(),
        service_option_duration: parse_numeric(
            &format!("{path}.serviceOptionDuration"),
            &option.service_option_duration,
        )?,
        service_option_price: parse_numeric(
            &format!("{path}.serviceOptionPrice"),
            &option.service_option_price,
        )?,
    })
}

/// Build the partial-update body for one translation.
///
/// Numeric inputs are parsed here, so a half-typed value fails the save
/// with its field path instead of being coerced while typing.
pub fn serialize_for_update(translation: &Translation) -> Result<UpdateTranslationPayload, SubmitError> {
    let fields = match serde_json::to_value(translation.resolved()?)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    Ok(fields
        .into_iter()
        .filter(|(key, _)| !SERVER_MANAGED_FIELDS.contains(&key.as_str()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_service::draft::{DetailField, DraftField, OptionDraftField};
    use serde_json::json;

    fn detail(lang: LanguageCode) -> ServiceDetail {
        ServiceDetail::new(Some(lang))
    }

    fn collect_keys(value: &Value, out: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (k, v) in map {
                    out.push(k.clone());
                    collect_keys(v, out);
                }
            }
            Value::Array(items) => items.iter().for_each(|v| collect_keys(v, out)),
            _ => {}
        }
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric("f", ""), Ok(None));
        assert_eq!(parse_numeric("f", "   "), Ok(None));
        assert_eq!(parse_numeric("f", "60"), Ok(Some(Number::from(60))));
        assert_eq!(parse_numeric("f", " 150000 "), Ok(Some(Number::from(150000))));
        assert_eq!(parse_numeric("f", "-5"), Ok(Some(Number::from(-5))));
        assert_eq!(parse_numeric("f", "12.5"), Ok(Some(Number::from_f64(12.5).unwrap())));

        for bad in ["abc", "1,5", "12a", "NaN", "inf"] {
            let err = parse_numeric("serviceDetails[0].servicePrice", bad).unwrap_err();
            assert_eq!(err.field(), Some("serviceDetails[0].servicePrice"));
        }
    }

    #[test]
    fn test_empty_price_is_omitted_and_filled_price_is_number() {
        let draft = ServiceDraft::new().append_detail(detail(LanguageCode::Vi));
        let key = draft.service_details[0].key.clone();
        let draft = draft
            .update_detail(&key, DetailField::DefaultServicePrice("150000".into()))
            .update_detail(&key, DetailField::ServicePrice(String::new()));

        let value = serde_json::to_value(serialize_for_create(&draft).unwrap()).unwrap();
        let first = &value["serviceDetails"][0];
        assert_eq!(first["defaultServicePrice"], json!(150000));
        assert!(first.get("servicePrice").is_none());
        assert!(first.get("servicePriceDiscount").is_none());
        assert!(first.get("servicePriceDiscountPercent").is_none());
    }

    #[test]
    fn test_create_payload_never_contains_client_keys() {
        let draft = ServiceDraft::new()
            .with_field(DraftField::BranchId("b1".into()))
            .with_field(DraftField::ServiceTypeId("t1".into()))
            .append_detail(detail(LanguageCode::Vi))
            .append_detail(detail(LanguageCode::En));
        let vi = draft.service_details[0].key.clone();
        let en = draft.service_details[1].key.clone();
        let draft = draft
            .append_option(&vi, ServiceOptionDraft::new("a", "30", "100"))
            .append_option(&en, ServiceOptionDraft::new("b", "", ""));

        let value = serde_json::to_value(serialize_for_create(&draft).unwrap()).unwrap();
        let mut keys = Vec::new();
        collect_keys(&value, &mut keys);
        assert!(!keys.iter().any(|k| k == "key" || k == "clientKey" || k == "id"));
        assert_eq!(value["branchId"], json!("b1"));
        assert_eq!(value["serviceTypeId"], json!("t1"));
        assert_eq!(value["serviceDetails"][1]["options"][0], json!({ "serviceOptionName": "b" }));
    }

    #[test]
    fn test_scenario_two_languages_one_option() {
        let draft = ServiceDraft::new()
            .append_detail(detail(LanguageCode::Vi))
            .append_detail(detail(LanguageCode::En));
        let vi = draft.service_details[0].key.clone();
        let draft = draft.append_option(&vi, ServiceOptionDraft::new("60 min", "60", "500000"));

        let payload = serialize_for_create(&draft).unwrap();
        assert_eq!(payload.service_details.len(), 2);
        assert_eq!(payload.service_details[0].language, LanguageCode::Vi);
        assert_eq!(payload.service_details[0].options.len(), 1);

        let value = serde_json::to_value(&payload).unwrap();
        let option = &value["serviceDetails"][0]["options"][0];
        assert_eq!(option["serviceOptionDuration"], json!(60));
        assert!(option["serviceOptionDuration"].is_u64());
        assert_eq!(option["serviceOptionPrice"], json!(500000));
        assert_eq!(option["serviceOptionName"], json!("60 min"));
    }

    #[test]
    fn test_malformed_option_number_names_the_field() {
        let draft = ServiceDraft::new().append_detail(detail(LanguageCode::En));
        let key = draft.service_details[0].key.clone();
        let draft = draft
            .append_option(&key, ServiceOptionDraft::default())
            .append_option(&key, ServiceOptionDraft::default());
        let option_key = draft.service_details[0].options[1].key.clone();
        let draft = draft.update_option(&key, &option_key, OptionDraftField::Price("5OO".into()));

        let err = serialize_for_create(&draft).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidNumber {
                field: "serviceDetails[0].options[1].serviceOptionPrice".into(),
                value: "5OO".into(),
            }
        );
    }

    #[test]
    fn test_language_is_required_and_unique() {
        let missing = ServiceDraft::new().append_detail(ServiceDetail::new(None));
        assert_eq!(
            serialize_for_create(&missing).unwrap_err(),
            ValidationError::MissingLanguage {
                field: "serviceDetails[0].language".into()
            }
        );

        let duplicate = ServiceDraft::new()
            .append_detail(detail(LanguageCode::Vi))
            .append_detail(detail(LanguageCode::Vi));
        assert_eq!(
            serialize_for_create(&duplicate).unwrap_err(),
            ValidationError::DuplicateLanguage {
                language: LanguageCode::Vi
            }
        );
    }

    #[test]
    fn test_update_strips_exactly_server_managed_fields() {
        let source = json!({
            "_id": "t-vi",
            "serviceId": "s1",
            "serviceName": "Massage",
            "serviceSubName": "",
            "defaultServicePrice": 450000,
            "serviceImage": "a.jpg",
            "serviceImages": ["b.jpg", "c.jpg"],
            "serviceDescription": "desc",
            "language": "vi",
            "createdAt": "2024-05-01T10:00:00.000Z",
            "updatedAt": "2024-05-02T10:00:00.000Z",
            "__v": 3,
            "serviceDescriptions": [
                { "type": "bold", "content": "B" },
                { "type": "", "content": "E" },
                { "type": "paragraph", "content": "P", "_id": "d3" }
            ],
            "options": [
                { "_id": "o1", "serviceDetailId": "t-vi", "serviceOptionName": "60",
                  "serviceOptionDuration": 60, "serviceOptionPrice": 450000 },
                { "serviceDetailId": "t-vi", "serviceOptionName": "90",
                  "serviceOptionDuration": 90, "serviceOptionPrice": 650000.5 }
            ],
            "isActive": true
        });
        let translation: Translation = serde_json::from_value(source.clone()).unwrap();
        let payload = serialize_for_update(&translation).unwrap();

        let mut expected = source.as_object().unwrap().clone();
        expected.retain(|k, _| !SERVER_MANAGED_FIELDS.contains(&k.as_str()));

        let got: Map<String, Value> = payload.clone();
        assert_eq!(Value::Object(got), Value::Object(expected));
        for key in SERVER_MANAGED_FIELDS {
            assert!(!payload.contains_key(*key), "{key} must be stripped");
        }
        assert_eq!(payload["serviceDescriptions"], source["serviceDescriptions"]);
        assert_eq!(payload["options"], source["options"]);
    }

    #[test]
    fn test_update_reflects_local_edits() {
        use crate::domain::a001_service::translation::{TranslationField, TranslationSet};
        use crate::domain::common::EntityId;

        let translation: Translation = serde_json::from_value(json!({
            "_id": "t1", "serviceId": "s1", "serviceName": "Old", "language": "en",
            "defaultServicePrice": 100
        }))
        .unwrap();
        let id = EntityId::new("t1").unwrap();
        let set = TranslationSet::new(vec![translation])
            .update_translation(&id, TranslationField::ServiceName("New".into()))
            .update_translation(&id, TranslationField::DefaultServicePrice("120".into()));

        let payload = serialize_for_update(set.find(&id).unwrap()).unwrap();
        assert_eq!(payload["serviceName"], json!("New"));
        assert_eq!(payload["defaultServicePrice"], json!(120));
        assert!(!payload.contains_key("_id"));
    }

    #[test]
    fn test_update_parses_typed_numbers_on_save() {
        use crate::domain::a001_service::translation::{
            TranslationField, TranslationOptionField, TranslationSet,
        };
        use crate::domain::common::EntityId;

        let translation: Translation = serde_json::from_value(json!({
            "_id": "t1", "serviceName": "Scrub", "defaultServicePrice": 100,
            "options": [{ "_id": "o1", "serviceOptionName": "30'",
                          "serviceOptionDuration": 30, "serviceOptionPrice": 100 }]
        }))
        .unwrap();
        let id = EntityId::new("t1").unwrap();
        let mut set = TranslationSet::new(vec![translation]);
        for typed in ["12", "12.", "12.5"] {
            set = set.update_translation(&id, TranslationField::DefaultServicePrice(typed.into()));
        }
        let key = set.find(&id).unwrap().options[0].key.clone();
        let set = set.update_option(&id, &key, TranslationOptionField::Duration(" ".into()));

        let payload = serialize_for_update(set.find(&id).unwrap()).unwrap();
        assert_eq!(payload["defaultServicePrice"], json!(12.5));
        assert_eq!(payload["options"][0]["serviceOptionDuration"], json!(0));
        assert_eq!(payload["options"][0]["serviceOptionPrice"], json!(100));

        let bad = set.update_option(&id, &key, TranslationOptionField::Price("1o0".into()));
        assert_eq!(
            serialize_for_update(bad.find(&id).unwrap()),
            Err(SubmitError::Validation(ValidationError::InvalidNumber {
                field: "options[0].serviceOptionPrice".into(),
                value: "1o0".into(),
            }))
        );
    }
}
