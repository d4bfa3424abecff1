use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};

/// Филиал (точка оказания услуг)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    #[serde(rename = "_id")]
    pub id: EntityId,
    #[serde(default)]
    pub branch_address: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Branch {
    /// Address if known, otherwise the branch name, otherwise the id
    pub fn display_name(&self) -> String {
        if !self.branch_address.is_empty() {
            return self.branch_address.clone();
        }
        self.name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| self.id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::DataEnvelope;
    use serde_json::json;

    #[test]
    fn test_envelope_and_display_name() {
        let envelope: DataEnvelope<Branch> = serde_json::from_value(json!({
            "data": [
                { "_id": "b1", "branchAddress": "12 Lê Lợi" },
                { "_id": "b2", "name": "Quận 3" }
            ]
        }))
        .unwrap();
        let branches = envelope.into_inner();
        assert_eq!(branches[0].display_name(), "12 Lê Lợi");
        assert_eq!(branches[1].display_name(), "Quận 3");
    }

    #[test]
    fn test_missing_data_is_empty_list() {
        let envelope: DataEnvelope<Branch> = serde_json::from_value(json!({})).unwrap();
        assert!(envelope.data.is_empty());
    }
}
