//! OpenAPI documentation.
//!
//! The generated document is embedded in the `/schemas` response.

mod openapi;

pub use openapi::ApiDoc;
