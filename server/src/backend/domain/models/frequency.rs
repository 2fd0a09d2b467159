//! server/src/backend/domain/models/frequency.rs

use serde::{Deserialize, Serialize};

use crate::backend::domain::errors::{CareError, CareResource};

/// Named recurrence interval referenced by medication, vaccination and diet schedules.
///
/// Schedules store explicit event dates, so editing a frequency never requires
/// recomputing anything that was derived from it earlier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frequency {
    pub id: i64,
    pub name: String,
    pub interval_days: u32,
}

impl Frequency {
    /// Check the positive-interval invariant
    pub fn validate(&self) -> Result<(), CareError> {
        if self.interval_days == 0 {
            return Err(CareError::InvalidRecord {
                resource: CareResource::Frequencies,
                id: self.id,
                reason: "interval_days must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
