//! Select options and messages for the edit form

use contracts::domain::a001_service::{DescriptionKind, ServiceResponse};
use contracts::domain::a002_branch::Branch;
use contracts::domain::a003_language::Language;
use contracts::shared::SubmitError;

pub const UPDATE_SUCCESS_MESSAGE: &str = "Update successfully.";
pub const UPDATE_FAILURE_MESSAGE: &str = "Failed to update service. Please try again.";
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load services.";

/// Branch list on the edit page is requested in Vietnamese
pub const BRANCH_LANG: &str = "vi";

pub fn language_options(languages: &[Language]) -> Vec<(String, String)> {
    languages
        .iter()
        .map(|l| (l.id.to_string(), l.language_name.clone()))
        .collect()
}

pub fn branch_options(branches: &[Branch]) -> Vec<(String, String)> {
    branches
        .iter()
        .map(|b| (b.id.to_string(), b.display_name()))
        .collect()
}

pub fn service_options(services: &[&ServiceResponse]) -> Vec<(String, String)> {
    services
        .iter()
        .map(|s| (s.id.to_string(), s.display_name()))
        .collect()
}

/// Known block types, plus `current` when the server holds a custom one
pub fn description_kind_options(current: &DescriptionKind) -> Vec<(String, String)> {
    let mut kinds = DescriptionKind::all();
    if !kinds.contains(current) {
        kinds.push(current.clone());
    }
    kinds
        .into_iter()
        .map(|k| {
            let label = match &k {
                DescriptionKind::Empty => "(none)".to_string(),
                other => other.as_str().to_string(),
            };
            (k.as_str().to_string(), label)
        })
        .collect()
}

pub fn submit_error_message(err: &SubmitError) -> String {
    match err {
        SubmitError::NotFound(_) => "This translation is no longer loaded, reselect the service.".into(),
        other => other.to_string(),
    }
}
