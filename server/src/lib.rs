//! Pet care dashboard server.
//!
//! Reads a shelter's care records from CSV files and serves per-pet status
//! dashboards over a small REST API.

pub mod backend;
