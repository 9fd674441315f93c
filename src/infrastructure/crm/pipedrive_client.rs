use async_trait::async_trait;
use serde_json::{json, Map, Value};

use crate::config::CrmConfig;
use crate::domain::gateways::{CrmError, CrmGateway, CrmRecord};
use crate::domain::lead::{DealDraft, Lead};

/// Pipedrive implementation of the CRM gateway
///
/// Thin HTTP adapter over the Pipedrive v1 REST API. Authentication is the
/// `api_token` query parameter on every call. No request timeout is set
/// beyond the transport's own; the relay never retries.
#[derive(Debug, Clone)]
pub struct PipedriveCrm {
    client: reqwest::Client,
    config: CrmConfig,
}

impl PipedriveCrm {
    /// Creates a new adapter from the immutable CRM configuration
    pub fn new(config: CrmConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: CrmConfig {
                base_url: config.base_url.trim_end_matches('/').to_string(),
                ..config
            },
        }
    }

    async fn post(&self, endpoint: &str, body: Value) -> Result<CrmRecord, CrmError> {
        let url = format!("{}{}", self.config.base_url, endpoint);

        let response = self
            .client
            .post(&url)
            .query(&[("api_token", self.config.api_token.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|err| CrmError::Transport(err.to_string()))?;

        // Rejections come back as JSON with success=false, whatever the
        // HTTP status; the envelope decides, not the status code.
        let raw: Value = response
            .json()
            .await
            .map_err(|err| CrmError::InvalidResponse(err.to_string()))?;

        Ok(CrmRecord::from_raw(raw))
    }
}

#[async_trait]
impl CrmGateway for PipedriveCrm {
    async fn create_person(&self, lead: &Lead) -> Result<CrmRecord, CrmError> {
        let mut body = json!({
            "name": lead.name(),
            "email": [lead.email()],
        });
        if let Some(phone) = lead.phone() {
            body["phone"] = json!([phone]);
        }

        self.post("/persons", body).await
    }

    async fn create_organization(&self, name: &str) -> Result<CrmRecord, CrmError> {
        self.post("/organizations", json!({ "name": name })).await
    }

    async fn create_deal(&self, draft: &DealDraft) -> Result<CrmRecord, CrmError> {
        let keys = &self.config.field_keys;

        // Custom field keys are opaque strings, so the payload is assembled
        // as a map rather than a static struct.
        let mut body = Map::new();
        body.insert("title".to_string(), json!(draft.title));
        body.insert("pipeline_id".to_string(), json!(draft.pipeline_id));
        body.insert(keys.lead_source.clone(), json!(draft.source));

        if let Some(person_id) = draft.person_id {
            body.insert("person_id".to_string(), json!(person_id));
        }
        if let Some(org_id) = draft.org_id {
            body.insert("org_id".to_string(), json!(org_id));
        }
        if let Some(service_need) = &draft.service_need {
            body.insert(keys.service_need.clone(), json!(service_need));
        }
        if let Some(role) = &draft.role {
            body.insert(keys.role.clone(), json!(role));
        }
        if let Some(timeline) = &draft.timeline {
            body.insert(keys.timeline.clone(), json!(timeline));
        }
        if let Some(message) = &draft.message {
            body.insert(keys.message.clone(), json!(message));
        }

        self.post("/deals", Value::Object(body)).await
    }
}
