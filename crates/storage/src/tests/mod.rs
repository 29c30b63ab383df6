//! Test utilities and module declarations for storage tests.

use crate::Storage;
use livery_core::{LiveryFields, NewLivery};
use tempfile::TempDir;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::open(&db_path).unwrap();
    storage.ensure_schema().unwrap();
    (storage, temp_dir)
}

pub fn create_test_livery(airline: &str, registration: &str, image_url: &str) -> NewLivery {
    NewLivery::new(
        LiveryFields {
            airline: airline.to_owned(),
            registration: registration.to_owned(),
            aircraft_model: "Boeing 737-800".to_owned(),
            location: "Atlanta-USA(".to_owned(),
        },
        image_url,
        format!("{airline} REG:{registration} Boeing 737-800 Atlanta-USA(KATL)"),
    )
}
