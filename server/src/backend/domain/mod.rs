//! # Domain Module
//!
//! Business logic for the pet care dashboard.
//!
//! The domain turns raw care records (medications, vaccinations, checkups,
//! injuries and diet) into a per-pet status snapshot. It knows nothing about
//! HTTP or CSV files; storage is reached through
//! [`CareRecordStorage`](crate::backend::storage::CareRecordStorage).
//!
//! ## Module Organization
//!
//! - **models**: Care records and the derived dashboard views
//! - **care_dates**: Date parsing, age and window arithmetic
//! - **care_status**: Per-record status rules and section previews
//! - **dashboard_service**: Fetches, filters and assembles one pet's dashboard
//! - **errors**: Error type shared by the domain and its callers
//!
//! ## Business Rules
//!
//! - Every rule is evaluated against an explicit `as_of` date
//! - Medications and diet are active until their end date, inclusive
//! - Injuries are recent for 30 days, both ends inclusive
//! - Vaccinations and checkups are listed in full
//! - One failed collection fails the whole dashboard

pub mod care_dates;
pub mod care_status;
pub mod dashboard_service;
pub mod errors;
pub mod models;

pub use dashboard_service::PetDashboardService;
pub use errors::{CareError, CareResource};
