//! # IO Module
//!
//! Interface layer between HTTP clients and the domain logic.
//!
//! Translates requests into domain calls and domain results into the shared
//! DTOs the frontend consumes.
//!
//! ## Supported Operations
//!
//! - **GET /api/pets/:pet_id/dashboard**: Full dashboard for one pet
//! - **GET /api/pets/:pet_id/dashboard/summary**: Dashboard with truncated sections
//! - **GET /api/health**: Liveness probe
//!
//! ## Design Patterns
//!
//! - **Handler Pattern**: Separate handler functions for each endpoint
//! - **Dependency Injection**: Services injected via Axum state
//! - **Result Mapping**: Domain errors mapped to HTTP status codes
//! - **Request/Response DTOs**: Dedicated types for API communication

pub mod rest;

pub use rest::*;
