// Lead domain module
// Contains the lead aggregate root, value objects, and deal derivation

#![allow(clippy::module_inception)]

pub mod deal;
pub mod lead;
pub mod submission;
pub mod value_objects;

// Re-export main types for convenience
pub use deal::DealDraft;
pub use lead::Lead;
pub use submission::LeadSubmission;
pub use value_objects::Pipeline;
