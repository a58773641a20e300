//! API-facing facade (route paths and transport DTOs).

pub mod routes;
pub mod types;
