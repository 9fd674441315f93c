// Outbound port definitions
// Adapters in the infrastructure layer implement these interfaces

pub mod crm_gateway;

pub use crm_gateway::{CrmError, CrmGateway, CrmRecord};
