use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the per-entity JSON files live. One process per data directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeskConfig {
    pub data_dir: PathBuf,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
        }
    }
}

impl DeskConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn hotels_file(&self) -> PathBuf {
        self.data_dir.join("hotels.json")
    }

    pub fn customers_file(&self) -> PathBuf {
        self.data_dir.join("customers.json")
    }

    pub fn reservations_file(&self) -> PathBuf {
        self.data_dir.join("reservations.json")
    }
}
