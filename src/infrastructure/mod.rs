// Infrastructure layer module
// Contains outbound adapters for external service integrations
// Follows Hexagonal Architecture

pub mod crm;
