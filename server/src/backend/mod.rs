//! # Backend Module
//!
//! Contains all non-UI logic for the pet care dashboard.
//!
//! This module serves as the orchestration layer that brings together:
//! - **Domain**: Status rules and per-pet aggregation
//! - **Storage**: Read access to the CSV record store
//! - **IO**: REST endpoints that expose dashboards to the frontend
//! - **Config**: Data directory, bind address and logging settings
//!
//! ## Architecture
//!
//! ```text
//! Frontend
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (Status rules, dashboard service)
//!     ↓
//! Storage Layer (CSV files)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use log::info;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::backend::config::ServerConfig;
use crate::backend::domain::PetDashboardService;
use crate::backend::storage::{CsvCareRecordRepository, CsvConnection};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: PetDashboardService<CsvCareRecordRepository>,
}

impl AppState {
    pub fn new(repository: CsvCareRecordRepository) -> Self {
        Self {
            dashboard_service: PetDashboardService::new(Arc::new(repository)),
        }
    }
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &ServerConfig) -> Result<AppState> {
    info!("Setting up CSV storage in {:?}", config.data_directory);
    let connection = CsvConnection::new(&config.data_directory)?;

    info!("Setting up domain model");
    let app_state = AppState::new(CsvCareRecordRepository::new(connection));

    Ok(app_state)
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, allowed_origin: &str) -> Result<Router> {
    let origin = allowed_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid allowed origin '{}'", allowed_origin))?;

    // CORS setup to allow frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/health", get(io::health))
        .route("/pets/:pet_id/dashboard", get(io::get_pet_dashboard))
        .route(
            "/pets/:pet_id/dashboard/summary",
            get(io::get_pet_dashboard_summary),
        );

    Ok(Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state))
}
