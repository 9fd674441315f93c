use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::lead::{DealDraft, Lead};

/// Errors surfaced by a CRM gateway implementation
#[derive(Debug, Error)]
pub enum CrmError {
    #[error("CRM request failed: {0}")]
    Transport(String),

    #[error("unexpected CRM response: {0}")]
    InvalidResponse(String),
}

/// One CRM entity-creation result
///
/// Carries the parsed outcome alongside the raw response body, which is
/// surfaced to callers verbatim when deal creation is rejected.
#[derive(Debug, Clone)]
pub struct CrmRecord {
    pub success: bool,
    pub id: Option<i64>,
    pub raw: Value,
}

impl CrmRecord {
    /// Parses the CRM's `{success, data: {id, ...}}` envelope
    pub fn from_raw(raw: Value) -> Self {
        let success = raw.get("success").and_then(Value::as_bool).unwrap_or(false);
        let id = raw
            .get("data")
            .and_then(|data| data.get("id"))
            .and_then(Value::as_i64);

        Self { success, id, raw }
    }

    /// Returns the created entity id when the CRM accepted the request
    pub fn accepted_id(&self) -> Option<i64> {
        if self.success {
            self.id
        } else {
            None
        }
    }
}

/// Gateway trait for the CRM's entity-creation API
///
/// Defines the contract for the three outbound calls the relay makes.
/// Implementations handle transport and the CRM's wire format.
#[async_trait]
pub trait CrmGateway: Send + Sync {
    /// Create a person from the lead's contact details
    async fn create_person(&self, lead: &Lead) -> Result<CrmRecord, CrmError>;

    /// Create an organization with the given name
    async fn create_organization(&self, name: &str) -> Result<CrmRecord, CrmError>;

    /// Create a deal from the assembled draft
    async fn create_deal(&self, draft: &DealDraft) -> Result<CrmRecord, CrmError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_parses_success_envelope() {
        let record = CrmRecord::from_raw(json!({"success": true, "data": {"id": 42}}));

        assert!(record.success);
        assert_eq!(record.id, Some(42));
        assert_eq!(record.accepted_id(), Some(42));
    }

    #[test]
    fn record_parses_rejection_envelope() {
        let record = CrmRecord::from_raw(json!({"success": false, "error": "bad token"}));

        assert!(!record.success);
        assert!(record.id.is_none());
        assert!(record.accepted_id().is_none());
    }

    #[test]
    fn record_tolerates_missing_fields() {
        let record = CrmRecord::from_raw(json!({}));

        assert!(!record.success);
        assert!(record.id.is_none());
    }

    #[test]
    fn accepted_id_requires_success_flag() {
        let record = CrmRecord::from_raw(json!({"success": false, "data": {"id": 42}}));

        assert_eq!(record.accepted_id(), None);
    }

    #[test]
    fn record_keeps_raw_body() {
        let raw = json!({"success": false, "error": "quota exceeded"});
        let record = CrmRecord::from_raw(raw.clone());

        assert_eq!(record.raw, raw);
    }
}
