//! server/src/backend/domain/models/pet.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Domain model for a pet. Root aggregation key for every schedule type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub nickname: Option<String>,
    pub pet_type: String,
    pub breed: String,
    pub gender: Option<String>,
    pub birthday: NaiveDate,
    pub date_admitted: NaiveDate,
    pub picture: Option<String>,
    pub notes: Option<String>,
    pub adopted: Option<bool>,
}
