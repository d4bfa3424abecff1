use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};

/// Тип услуги (массаж, уход за лицом и т.п.)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceType {
    #[serde(rename = "_id")]
    pub id: EntityId,
    #[serde(default)]
    pub service_type_name: String,
}
