use super::translation::Translation;
use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Service with all of its translations, as returned by
/// `GET /services/service-details`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    #[serde(rename = "_id")]
    pub id: EntityId,
    #[serde(default)]
    pub service_type_id: String,
    #[serde(default)]
    pub branch_id: String,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(rename = "__v", default)]
    pub revision: Option<Value>,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

impl ServiceResponse {
    /// Name for pickers: the service name, else the first translated name
    pub fn display_name(&self) -> String {
        self.service_name
            .clone()
            .filter(|s| !s.is_empty())
            .or_else(|| {
                self.translations
                    .iter()
                    .map(|t| t.service_name.clone())
                    .find(|s| !s.is_empty())
            })
            .unwrap_or_else(|| self.id.to_string())
    }
}

/// Case-insensitive substring search over the names shown in the picker
/// (see [`ServiceResponse::display_name`]).
/// An empty (or blank) query matches everything.
pub fn filter_services<'a>(services: &'a [ServiceResponse], query: &str) -> Vec<&'a ServiceResponse> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return services.iter().collect();
    }
    services
        .iter()
        .filter(|s| s.display_name().to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn services() -> Vec<ServiceResponse> {
        serde_json::from_value(json!([
            { "_id": "s1", "serviceTypeId": "t", "branchId": "b", "serviceName": "Foot Massage",
              "translations": [] },
            { "_id": "s2", "serviceTypeId": "t", "branchId": "b", "serviceName": "Gội đầu",
              "translations": [] },
            { "_id": "s3", "serviceTypeId": "t", "branchId": "b",
              "translations": [ { "_id": "t3", "serviceName": "Body scrub" } ] }
        ]))
        .unwrap()
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let all = services();
        let found: Vec<&str> = filter_services(&all, "MASSAGE")
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(found, vec!["s1"]);

        let found = filter_services(&all, "gội");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_filter_finds_service_named_by_translation() {
        let all = services();
        let found: Vec<&str> = filter_services(&all, "scrub")
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(found, vec!["s3"]);
    }

    #[test]
    fn test_empty_query_matches_all() {
        let all = services();
        assert_eq!(filter_services(&all, "  ").len(), 3);
    }

    #[test]
    fn test_display_name_falls_back_to_translation() {
        let all = services();
        assert_eq!(all[0].display_name(), "Foot Massage");
        assert_eq!(all[2].display_name(), "Body scrub");
    }

    #[test]
    fn test_rejects_service_without_id() {
        let result: Result<ServiceResponse, _> =
            serde_json::from_value(json!({ "_id": "", "translations": [] }));
        assert!(result.is_err());
    }
}
