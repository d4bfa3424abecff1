//! Select options and messages for the create form

use contracts::domain::a001_service::{PostCreateMode, ServiceDraft};
use contracts::domain::a002_branch::Branch;
use contracts::domain::a004_service_type::ServiceType;
use contracts::enums::LanguageCode;
use contracts::shared::SubmitError;

pub const CREATE_SUCCESS_MESSAGE: &str = "Create service successfully!";
pub const CREATE_FAILURE_MESSAGE: &str = "Failed to create service. Please try again.";

pub fn branch_options(branches: &[Branch]) -> Vec<(String, String)> {
    branches
        .iter()
        .map(|b| (b.id.to_string(), b.display_name()))
        .collect()
}

pub fn service_type_options(types: &[ServiceType]) -> Vec<(String, String)> {
    types
        .iter()
        .map(|t| (t.id.to_string(), t.service_type_name.clone()))
        .collect()
}

pub fn language_options() -> Vec<(String, String)> {
    LanguageCode::all()
        .into_iter()
        .map(|l| (l.code().to_string(), l.display_name().to_string()))
        .collect()
}

/// First language no detail uses yet; `None` once every language is taken
pub fn next_unused_language(draft: &ServiceDraft) -> Option<LanguageCode> {
    LanguageCode::all().into_iter().find(|lang| {
        !draft
            .service_details
            .iter()
            .any(|d| d.language == Some(*lang))
    })
}

pub fn post_create_mode_options() -> Vec<(String, String)> {
    [
        PostCreateMode::ResetOptions,
        PostCreateMode::ClearForm,
        PostCreateMode::KeepData,
    ]
    .into_iter()
    .map(|m| (post_create_mode_code(m).to_string(), post_create_mode_label(m).to_string()))
    .collect()
}

pub fn post_create_mode_code(mode: PostCreateMode) -> &'static str {
    match mode {
        PostCreateMode::ResetOptions => "reset_options",
        PostCreateMode::ClearForm => "clear_form",
        PostCreateMode::KeepData => "keep_data",
    }
}

fn post_create_mode_label(mode: PostCreateMode) -> &'static str {
    match mode {
        PostCreateMode::ResetOptions => "Keep details, clear options",
        PostCreateMode::ClearForm => "Clear the form",
        PostCreateMode::KeepData => "Keep everything",
    }
}

pub fn parse_post_create_mode(code: &str) -> PostCreateMode {
    match code {
        "clear_form" => PostCreateMode::ClearForm,
        "keep_data" => PostCreateMode::KeepData,
        _ => PostCreateMode::ResetOptions,
    }
}

/// Text shown when the draft could not be submitted
pub fn submit_error_message(err: &SubmitError) -> String {
    match err {
        SubmitError::Validation(e) => format!("Please check the form: {}", e),
        other => other.to_string(),
    }
}
