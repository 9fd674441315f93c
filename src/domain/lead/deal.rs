use super::lead::Lead;

/// Deal payload derived from a lead and the entities created before it
///
/// The draft is the terminal artifact of the relay: the person and
/// organization ids are whatever the earlier steps managed to create, and
/// stay absent when those steps failed.
#[derive(Debug, Clone)]
pub struct DealDraft {
    pub title: String,
    pub pipeline_id: i64,
    pub source: String,
    pub person_id: Option<i64>,
    pub org_id: Option<i64>,
    pub service_need: Option<String>,
    pub role: Option<String>,
    pub timeline: Option<String>,
    pub message: Option<String>,
}

impl DealDraft {
    /// Builds the draft from a validated lead plus the captured CRM ids
    pub fn from_lead(lead: &Lead, person_id: Option<i64>, org_id: Option<i64>) -> Self {
        Self {
            title: lead.deal_title(),
            pipeline_id: lead.pipeline().id(),
            source: lead.source().to_string(),
            person_id,
            org_id,
            service_need: lead.service_need().map(str::to_string),
            role: lead.role().map(str::to_string),
            timeline: lead.timeline().map(str::to_string),
            message: lead.message().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lead::LeadSubmission;

    fn lead_with_everything() -> Lead {
        Lead::from_submission(LeadSubmission {
            name: Some("Jane Doe".to_string()),
            email: Some("jane@x.com".to_string()),
            organization: Some("Acme".to_string()),
            role: Some("CMO".to_string()),
            service_need: Some("Brand strategy".to_string()),
            timeline: Some("Q3".to_string()),
            message: Some("Call me".to_string()),
            source: Some("LDS Site".to_string()),
            pipeline: Some("lds".to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn draft_carries_title_and_pipeline() {
        let draft = DealDraft::from_lead(&lead_with_everything(), Some(7), Some(9));

        assert_eq!(draft.title, "LDS Site: Jane Doe (Acme)");
        assert_eq!(draft.pipeline_id, 2);
        assert_eq!(draft.person_id, Some(7));
        assert_eq!(draft.org_id, Some(9));
    }

    #[test]
    fn draft_keeps_optional_attributes() {
        let draft = DealDraft::from_lead(&lead_with_everything(), None, None);

        assert_eq!(draft.service_need.as_deref(), Some("Brand strategy"));
        assert_eq!(draft.role.as_deref(), Some("CMO"));
        assert_eq!(draft.timeline.as_deref(), Some("Q3"));
        assert_eq!(draft.message.as_deref(), Some("Call me"));
    }

    #[test]
    fn draft_without_captured_ids() {
        let lead = Lead::from_submission(LeadSubmission {
            name: Some("Jane".to_string()),
            email: Some("jane@x.com".to_string()),
            ..Default::default()
        })
        .unwrap();

        let draft = DealDraft::from_lead(&lead, None, None);

        assert!(draft.person_id.is_none());
        assert!(draft.org_id.is_none());
        assert!(draft.service_need.is_none());
        assert_eq!(draft.title, "Unknown: Jane");
    }
}
