use serde::Deserialize;

/// Raw form payload as submitted by the marketing sites
///
/// Every field is optional at the wire level; validation and fallback
/// resolution happen when the submission is turned into a [`Lead`].
/// Unknown fields are ignored and JSON `null` is treated as absent.
///
/// [`Lead`]: super::Lead
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub role: Option<String>,
    pub service_need: Option<String>,
    /// Older forms submit the service need under `topic`.
    pub topic: Option<String>,
    pub timeline: Option<String>,
    pub message: Option<String>,
    /// Older forms submit the message under `brief`.
    pub brief: Option<String>,
    pub source: Option<String>,
    pub pipeline: Option<String>,
}
