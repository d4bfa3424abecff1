//! HTTP client for the catalog REST API
//!
//! One method per endpoint. Every request carries JSON headers, the bearer
//! token from [`Credentials`] when there is one, and is aborted after
//! [`REQUEST_TIMEOUT_MS`].

use crate::shared::api_utils::{api_base, join_url, REQUEST_TIMEOUT_MS};
use crate::system::auth::Credentials;
use contracts::domain::a001_service::{
    CreateServicePayload, ServiceResponse, UpdateTranslationPayload,
};
use contracts::domain::a002_branch::Branch;
use contracts::domain::a003_language::Language;
use contracts::domain::a004_service_type::ServiceType;
use contracts::domain::common::EntityId;
use contracts::shared::{ApiError, DataEnvelope};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::AbortController;

#[derive(Serialize)]
struct BranchQuery<'a> {
    lang: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ServiceDetailsQuery<'a> {
    lang: &'a str,
    branch_id: &'a str,
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    base: String,
    credentials: Credentials,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            base: base.into(),
            credentials,
        }
    }

    /// Client for the configured API base, authenticated from localStorage
    pub fn from_environment() -> Self {
        Self::new(api_base(), Credentials::from_storage())
    }

    /// Client provided by `App`
    pub fn use_client() -> Self {
        leptos::context::use_context::<ApiClient>().unwrap_or_else(|| {
            log::warn!("ApiClient not provided in context, building from environment");
            Self::from_environment()
        })
    }

    /// `GET /branchs[?lang=<code>]`
    pub async fn fetch_branches(&self, lang: Option<&str>) -> Result<Vec<Branch>, ApiError> {
        let path = match lang {
            Some(lang) => format!("/branchs?{}", encode_query(&BranchQuery { lang })?),
            None => "/branchs".to_string(),
        };
        let envelope: DataEnvelope<Branch> = self.get_json(&path).await?;
        Ok(envelope.into_inner())
    }

    /// `GET /service-types`
    pub async fn fetch_service_types(&self) -> Result<Vec<ServiceType>, ApiError> {
        self.get_json("/service-types").await
    }

    /// `GET /languages`
    pub async fn fetch_languages(&self) -> Result<Vec<Language>, ApiError> {
        let envelope: DataEnvelope<Language> = self.get_json("/languages").await?;
        Ok(envelope.into_inner())
    }

    /// `GET /services/service-details?lang=<id>&branchId=<id>`
    pub async fn fetch_service_details(
        &self,
        lang_id: &str,
        branch_id: &str,
    ) -> Result<Vec<ServiceResponse>, ApiError> {
        let query = encode_query(&ServiceDetailsQuery {
            lang: lang_id,
            branch_id,
        })?;
        self.get_json(&format!("/services/service-details?{}", query))
            .await
    }

    /// `POST /services/new`
    pub async fn create_service(
        &self,
        payload: &CreateServicePayload,
    ) -> Result<serde_json::Value, ApiError> {
        let url = join_url(&self.base, "/services/new");
        let text = self.execute(Request::post(&url), Some(encode_body(payload)?)).await?;
        decode_lenient(&text)
    }

    /// `PATCH /service-details/{translationId}`
    pub async fn update_translation(
        &self,
        translation_id: &EntityId,
        payload: &UpdateTranslationPayload,
    ) -> Result<serde_json::Value, ApiError> {
        let path = format!(
            "/service-details/{}",
            urlencoding::encode(translation_id.as_str())
        );
        let url = join_url(&self.base, &path);
        let text = self
            .execute(Request::patch(&url), Some(encode_body(payload)?))
            .await?;
        decode_lenient(&text)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = join_url(&self.base, path);
        let text = self.execute(Request::get(&url), None).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(format!("{}: {}", path, e)))
    }

    /// Send the request and return the body of a 2xx response
    async fn execute(&self, builder: RequestBuilder, body: Option<String>) -> Result<String, ApiError> {
        let controller =
            AbortController::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;

        let mut builder = builder
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .abort_signal(Some(&controller.signal()));
        if let Some(auth) = self.credentials.authorization_header() {
            builder = builder.header("Authorization", &auth);
        }

        let request = match body {
            Some(json) => builder.body(json),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;

        // Таймер отменяется при drop, т.е. по завершении запроса
        let _timeout = Timeout::new(REQUEST_TIMEOUT_MS, {
            let controller = controller.clone();
            move || controller.abort()
        });

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Server {
                status: response.status(),
                body: text,
            });
        }
        Ok(text)
    }
}

fn encode_query<T: Serialize>(query: &T) -> Result<String, ApiError> {
    serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))
}

fn encode_body<T: Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Mutation responses are only logged, so an empty body is accepted
fn decode_lenient(text: &str) -> Result<serde_json::Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_details_query_uses_camel_case() {
        let query = encode_query(&ServiceDetailsQuery {
            lang: "l1",
            branch_id: "b2",
        })
        .unwrap();
        assert_eq!(query, "lang=l1&branchId=b2");
    }

    #[test]
    fn test_decode_lenient() {
        assert_eq!(decode_lenient("  "), Ok(serde_json::Value::Null));
        assert_eq!(
            decode_lenient("{\"ok\":true}"),
            Ok(serde_json::json!({ "ok": true }))
        );
        assert!(matches!(decode_lenient("<html>"), Err(ApiError::Decode(_))));
    }
}
