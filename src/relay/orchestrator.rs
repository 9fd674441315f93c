use serde_json::Value;
use thiserror::Error;

use crate::domain::gateways::{CrmError, CrmGateway};
use crate::domain::lead::{DealDraft, Lead};

/// Errors that end a relay run
#[derive(Debug, Error)]
pub enum RelayError {
    /// The CRM answered the deal call but did not accept it. The raw
    /// response body is kept for the caller to surface.
    #[error("Failed to create deal")]
    DealRejected { details: Value },

    #[error(transparent)]
    Crm(#[from] CrmError),
}

/// Outcome of a completed relay run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReport {
    pub deal_id: i64,
    pub person_id: Option<i64>,
    pub org_id: Option<i64>,
}

/// Relays one validated lead into the CRM
///
/// Runs the three entity creations strictly in order. Person and
/// organization failures are tolerated: the deal is still created, just
/// without the corresponding link. Deal failure is terminal.
///
/// # Returns
/// * `Ok(RelayReport)` - the deal was created; person/org ids are whatever
///   the earlier steps captured
/// * `Err(RelayError::DealRejected)` - the CRM rejected the deal
/// * `Err(RelayError::Crm)` - transport failure or unusable response on the
///   deal call
pub async fn relay_lead(crm: &dyn CrmGateway, lead: &Lead) -> Result<RelayReport, RelayError> {
    // 1. Person - tolerate failure, the deal can exist without a contact
    let person_id = match crm.create_person(lead).await {
        Ok(record) => {
            if !record.success {
                tracing::warn!(lead = lead.email(), "person creation rejected by CRM");
            }
            record.accepted_id()
        }
        Err(err) => {
            tracing::warn!(lead = lead.email(), error = %err, "person creation failed");
            None
        }
    };

    // 2. Organization - only attempted when the form named one
    let org_id = match lead.organization() {
        Some(name) => match crm.create_organization(name).await {
            Ok(record) => {
                if !record.success {
                    tracing::warn!(organization = name, "organization creation rejected by CRM");
                }
                record.accepted_id()
            }
            Err(err) => {
                tracing::warn!(organization = name, error = %err, "organization creation failed");
                None
            }
        },
        None => None,
    };

    // 3. Deal - terminal on any failure
    let draft = DealDraft::from_lead(lead, person_id, org_id);
    let record = crm.create_deal(&draft).await?;

    if !record.success {
        return Err(RelayError::DealRejected {
            details: record.raw,
        });
    }

    let deal_id = record.id.ok_or_else(|| {
        CrmError::InvalidResponse("deal response carried no id".to_string())
    })?;

    tracing::info!(deal_id, person_id, org_id, "lead relayed into CRM");

    Ok(RelayReport {
        deal_id,
        person_id,
        org_id,
    })
}
