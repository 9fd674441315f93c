// Relay module
// Drives the three-step Person -> Organization -> Deal pipeline into the CRM

pub mod orchestrator;

// Re-export main types
pub use orchestrator::{relay_lead, RelayError, RelayReport};
