//! Conversions between domain models and the shared API DTOs.

pub mod dashboard_mapper;
