//! Data Transfer Objects (DTOs) for the HTTP API contract.

mod responses;

pub use responses::{ConnectionTestResponse, HealthResponse, SchemasResponse};
