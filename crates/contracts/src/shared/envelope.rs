use serde::{Deserialize, Serialize};

/// `{ "data": [...] }` wrapper used by list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> DataEnvelope<T> {
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}
