//! # REST API Interface Layer
//!
//! HTTP endpoints for the pet care dashboard.
//! This layer handles:
//! - Query parameter parsing and date validation
//! - Error translation from domain to HTTP status codes
//! - JSON response serialization through the shared DTOs
//! - Request logging
//!
//! ## Design Principles
//!
//! - **Read Only**: Every endpoint is a GET
//! - **Consistent Error Format**: Failures return `shared::ErrorResponse`
//! - **Domain Separation**: Pure translation layer without business logic

pub mod dashboard_apis;
pub mod mappers;

pub use dashboard_apis::*;
