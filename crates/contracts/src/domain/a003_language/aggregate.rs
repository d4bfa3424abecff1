use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};

/// Язык из справочника `/languages`; `id` используется как параметр `lang`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    #[serde(rename = "_id")]
    pub id: EntityId,
    #[serde(default)]
    pub language_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejects_empty_id() {
        let bad: Result<Language, _> =
            serde_json::from_value(json!({ "_id": "", "languageName": "English" }));
        assert!(bad.is_err());

        let ok: Language =
            serde_json::from_value(json!({ "_id": "l1", "languageName": "English" })).unwrap();
        assert_eq!(ok.language_name, "English");
    }
}
