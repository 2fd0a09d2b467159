//! Test utilities for CSV-backed storage
//!
//! `TestEnvironment` owns a temporary data directory that is removed when
//! the environment is dropped, even if the test panics.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{Builder, TempDir};

use super::care_record_repository::CsvCareRecordRepository;
use super::connection::CsvConnection;
use crate::backend::domain::errors::CareResource;

/// RAII test environment that automatically cleans up on drop
pub struct TestEnvironment {
    /// The temporary directory - kept alive to prevent auto-cleanup until drop
    _temp_dir: TempDir,
    /// The CSV connection for the test
    pub connection: CsvConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: PathBuf,
}

impl TestEnvironment {
    /// Create a new test environment with automatic cleanup
    pub fn new() -> Result<Self> {
        let temp_dir = Builder::new().prefix("pet_care_test_").tempdir()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = CsvConnection::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }

    /// Get the base directory path for this test environment
    pub fn base_directory(&self) -> &Path {
        &self.base_path
    }

    /// Repository reading from this environment's data directory
    pub fn repository(&self) -> CsvCareRecordRepository {
        CsvCareRecordRepository::new(self.connection.clone())
    }

    /// Write raw CSV content (header included) for a resource
    pub fn write_resource(&self, resource: CareResource, content: &str) -> Result<()> {
        fs::write(self.connection.resource_file_path(resource), content)?;
        Ok(())
    }

    /// Write the fixture data set used by the end-to-end tests.
    ///
    /// Pet 1 (Biscuit) has the medication and injury histories used in the
    /// dashboard scenarios; pet 2 (Mochi) owns records that must never leak
    /// into pet 1's dashboard.
    pub fn write_shelter_fixture(&self) -> Result<()> {
        self.write_resource(
            CareResource::Pets,
            "id,name,nickname,pet_type,breed,gender,birthday,date_admitted,picture,notes,adopted\n\
             1,Biscuit,Biscuit,dog,Beagle,female,2020-06-15,2024-01-10,,,false\n\
             2,Mochi,,cat,Siamese,male,2019-02-01,2023-05-05,,,true\n",
        )?;
        self.write_resource(
            CareResource::Frequencies,
            "id,name,interval_days\n\
             1,Daily,1\n\
             2,Yearly,365\n",
        )?;
        self.write_resource(
            CareResource::MedicationSchedules,
            "id,pet_id,medication_id,frequency_id,date_started,date_ended,notes\n\
             1,1,4,1,2025-01-01,2025-02-01,\n\
             2,1,7,1,2025-03-01,,Half a tablet\n\
             3,2,7,1,2025-03-01,,\n",
        )?;
        self.write_resource(
            CareResource::VaccinationSchedules,
            "id,pet_id,vaccine_id,frequency_id,date_given,notes\n\
             1,1,30,2,2024-04-01,Rabies\n\
             2,2,31,2,2024-05-01,\n",
        )?;
        self.write_resource(
            CareResource::ChecksSchedules,
            "id,pet_id,check_id,date_created,notes,performed\n\
             1,1,3,2025-02-01,,true\n",
        )?;
        self.write_resource(
            CareResource::PetFoods,
            "id,pet_id,food_id,frequency_id,date_started,date_ended,notes\n\
             1,1,8,1,2024-06-01,2024-12-31,Puppy food\n\
             2,1,9,1,2025-01-01,,Adult food\n",
        )?;
        self.write_resource(
            CareResource::InjuryReports,
            "id,pet_id,injury_id,body_part,description,date\n\
             1,1,2,leg,Limping after walk,2025-02-10\n\
             2,1,5,paw,Cut pad,2025-03-10\n\
             3,2,5,ear,Scratch,2025-03-12\n",
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_cleanup() -> Result<()> {
        let base_path;

        {
            let env = TestEnvironment::new()?;
            base_path = env.base_directory().to_path_buf();
            assert!(base_path.exists());

            env.write_resource(CareResource::Pets, "id\n")?;
            assert!(base_path.join("pets.csv").exists());
        } // env goes out of scope here, triggering cleanup

        assert!(!base_path.exists());
        Ok(())
    }
}
