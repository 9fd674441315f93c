// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod cors;
pub mod errors;
pub mod handlers;
