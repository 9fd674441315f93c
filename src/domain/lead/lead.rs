use super::submission::LeadSubmission;
use super::value_objects::Pipeline;

/// Lead aggregate root
///
/// Represents one validated marketing-form submission on its way into the
/// CRM. Enforces the submission rules before any outbound call is made.
///
/// # Invariants
/// - Name and email are non-empty after trimming
/// - Phone and organization are either trimmed and non-empty, or absent
/// - Optional attributes (role, service need, timeline, message) are either
///   non-empty or absent
/// - Source always carries a value (`"Unknown"` when the form sent none)
///
/// # Example
/// ```
/// use leadrelay_api::domain::lead::{Lead, LeadSubmission};
///
/// let submission = LeadSubmission {
///     name: Some("Jane Doe".to_string()),
///     email: Some("jane@x.com".to_string()),
///     ..Default::default()
/// };
///
/// let lead = Lead::from_submission(submission).expect("valid lead");
/// assert_eq!(lead.name(), "Jane Doe");
/// assert_eq!(lead.source(), "Unknown");
/// ```
#[derive(Debug, Clone)]
pub struct Lead {
    name: String,
    email: String,
    phone: Option<String>,
    organization: Option<String>,
    role: Option<String>,
    service_need: Option<String>,
    timeline: Option<String>,
    message: Option<String>,
    source: String,
    pipeline: Pipeline,
}

impl Lead {
    /// Validates a raw submission and builds the Lead aggregate
    ///
    /// # Returns
    /// * `Ok(Lead)` - the validated lead
    /// * `Err(String)` - if name or email is missing or blank
    ///
    /// # Rules Applied
    /// - Name, email, phone, and organization are whitespace-trimmed
    /// - `service_need` falls back to the legacy `topic` field
    /// - `message` falls back to the legacy `brief` field
    /// - Source defaults to `"Unknown"`, pipeline key to `"lds"`
    pub fn from_submission(submission: LeadSubmission) -> Result<Self, String> {
        let name = trimmed(submission.name);
        let email = trimmed(submission.email);

        if name.is_empty() || email.is_empty() {
            return Err("Name and email required".to_string());
        }

        let phone = non_empty(trimmed(submission.phone));
        let organization = non_empty(trimmed(submission.organization));

        let role = non_empty(submission.role.unwrap_or_default());
        let service_need = non_empty(submission.service_need.or(submission.topic).unwrap_or_default());
        let timeline = non_empty(submission.timeline.unwrap_or_default());
        let message = non_empty(submission.message.or(submission.brief).unwrap_or_default());

        let source = submission.source.unwrap_or_else(|| "Unknown".to_string());
        let pipeline = Pipeline::from_key(submission.pipeline.as_deref().unwrap_or("lds"));

        Ok(Self {
            name,
            email,
            phone,
            organization,
            role,
            service_need,
            timeline,
            message,
            source,
            pipeline,
        })
    }

    /// Derives the CRM deal title for this lead
    ///
    /// Format: `"{source}: {name}"`, with `" ({organization})"` appended
    /// when an organization was submitted.
    pub fn deal_title(&self) -> String {
        match &self.organization {
            Some(org) => format!("{}: {} ({})", self.source, self.name, org),
            None => format!("{}: {}", self.source, self.name),
        }
    }

    // ===== Getters =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn service_need(&self) -> Option<&str> {
        self.service_need.as_deref()
    }

    pub fn timeline(&self) -> Option<&str> {
        self.timeline.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn pipeline(&self) -> Pipeline {
        self.pipeline
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str) -> LeadSubmission {
        LeadSubmission {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn valid_submission_builds_lead() {
        let lead = Lead::from_submission(submission("Jane Doe", "jane@x.com")).unwrap();

        assert_eq!(lead.name(), "Jane Doe");
        assert_eq!(lead.email(), "jane@x.com");
        assert_eq!(lead.source(), "Unknown");
        assert_eq!(lead.pipeline(), Pipeline::Strategy);
        assert!(lead.phone().is_none());
        assert!(lead.organization().is_none());
    }

    #[test]
    fn missing_name_is_rejected() {
        let result = Lead::from_submission(submission("", "a@b.com"));

        assert_eq!(result.unwrap_err(), "Name and email required");
    }

    #[test]
    fn whitespace_only_email_is_rejected() {
        let result = Lead::from_submission(submission("Jane", "   "));

        assert_eq!(result.unwrap_err(), "Name and email required");
    }

    #[test]
    fn absent_name_is_rejected() {
        let result = Lead::from_submission(LeadSubmission {
            email: Some("a@b.com".to_string()),
            ..Default::default()
        });

        assert_eq!(result.unwrap_err(), "Name and email required");
    }

    #[test]
    fn name_and_email_are_trimmed() {
        let lead = Lead::from_submission(submission("  Jane Doe  ", " jane@x.com ")).unwrap();

        assert_eq!(lead.name(), "Jane Doe");
        assert_eq!(lead.email(), "jane@x.com");
    }

    #[test]
    fn blank_phone_and_organization_become_absent() {
        let mut sub = submission("Jane", "jane@x.com");
        sub.phone = Some("   ".to_string());
        sub.organization = Some("".to_string());

        let lead = Lead::from_submission(sub).unwrap();

        assert!(lead.phone().is_none());
        assert!(lead.organization().is_none());
    }

    #[test]
    fn service_need_falls_back_to_topic() {
        let mut sub = submission("Jane", "jane@x.com");
        sub.topic = Some("SEO audit".to_string());

        let lead = Lead::from_submission(sub).unwrap();

        assert_eq!(lead.service_need(), Some("SEO audit"));
    }

    #[test]
    fn explicit_service_need_wins_over_topic() {
        let mut sub = submission("Jane", "jane@x.com");
        sub.service_need = Some("Brand strategy".to_string());
        sub.topic = Some("SEO audit".to_string());

        let lead = Lead::from_submission(sub).unwrap();

        assert_eq!(lead.service_need(), Some("Brand strategy"));
    }

    #[test]
    fn message_falls_back_to_brief() {
        let mut sub = submission("Jane", "jane@x.com");
        sub.brief = Some("Call me next week".to_string());

        let lead = Lead::from_submission(sub).unwrap();

        assert_eq!(lead.message(), Some("Call me next week"));
    }

    #[test]
    fn pipeline_key_resolves() {
        let mut sub = submission("Jane", "jane@x.com");
        sub.pipeline = Some("ldp".to_string());

        let lead = Lead::from_submission(sub).unwrap();

        assert_eq!(lead.pipeline(), Pipeline::Partners);
        assert_eq!(lead.pipeline().id(), 3);
    }

    #[test]
    fn absent_pipeline_defaults_to_strategy() {
        let lead = Lead::from_submission(submission("Jane", "jane@x.com")).unwrap();

        assert_eq!(lead.pipeline().id(), 2);
    }

    #[test]
    fn deal_title_without_organization() {
        let mut sub = submission("Jane Doe", "jane@x.com");
        sub.source = Some("LDS Site".to_string());

        let lead = Lead::from_submission(sub).unwrap();

        assert_eq!(lead.deal_title(), "LDS Site: Jane Doe");
    }

    #[test]
    fn deal_title_with_organization() {
        let mut sub = submission("Jane Doe", "jane@x.com");
        sub.source = Some("LDS Site".to_string());
        sub.organization = Some("Acme".to_string());

        let lead = Lead::from_submission(sub).unwrap();

        assert_eq!(lead.deal_title(), "LDS Site: Jane Doe (Acme)");
    }
}
