// CRM adapters (outbound HTTP)
// Implement the domain CRM gateway against the vendor's REST API

pub mod pipedrive_client;

pub use pipedrive_client::PipedriveCrm;
