use crate::domain::ports::Record;
use crate::utils::error::{DeskError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An in-memory collection of records bound to one JSON file.
///
/// The file holds a flat JSON array of objects. Every mutating operation
/// rewrites the whole file; there are no append or partial-write semantics.
/// If a rewrite fails the in-memory state has already changed, so memory and
/// disk can diverge until the next successful mutation.
#[derive(Debug)]
pub struct JsonStore<T: Record> {
    path: PathBuf,
    records: BTreeMap<String, T>,
}

impl<T: Record> JsonStore<T> {
    /// Binds to `path`, loading the existing collection. A missing file is
    /// an empty collection; malformed JSON or duplicate ids on disk are
    /// `CorruptData`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = Self::load(&path)?;
        Ok(Self { path, records })
    }

    fn load(path: &Path) -> Result<BTreeMap<String, T>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let raw = fs::read_to_string(path)?;
        let list: Vec<T> = serde_json::from_str(&raw).map_err(|source| DeskError::CorruptData {
            path: path.display().to_string(),
            source,
        })?;

        let mut records = BTreeMap::new();
        for record in list {
            let id = record.id().to_string();
            if records.insert(id.clone(), record).is_some() {
                return Err(DeskError::CorruptData {
                    path: path.display().to_string(),
                    source: serde::de::Error::custom(format!(
                        "duplicate {} id '{}'",
                        T::ENTITY,
                        id
                    )),
                });
            }
        }
        Ok(records)
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let list: Vec<&T> = self.records.values().collect();
        let json = serde_json::to_string_pretty(&list).map_err(|source| DeskError::CorruptData {
            path: self.path.display().to_string(),
            source,
        })?;
        fs::write(&self.path, json)?;

        debug!(
            path = %self.path.display(),
            records = self.records.len(),
            "rewrote collection"
        );
        Ok(())
    }

    pub fn create(&mut self, record: T) -> Result<()> {
        let id = record.id().to_string();
        if self.records.contains_key(&id) {
            return Err(DeskError::DuplicateKey {
                entity: T::ENTITY,
                id,
            });
        }
        self.records.insert(id, record);
        self.persist()
    }

    pub fn get(&self, id: &str) -> Result<&T> {
        self.records.get(id).ok_or_else(|| DeskError::NotFound {
            entity: T::ENTITY,
            id: id.to_string(),
        })
    }

    /// All records in id order.
    pub fn list(&self) -> Vec<&T> {
        self.records.values().collect()
    }

    pub fn update(&mut self, id: &str, patch: T::Patch) -> Result<()> {
        let mut record = self.get(id)?.clone();
        record.apply(patch);
        self.replace(record)
    }

    /// Overwrites an existing record with the same id. Used when the caller
    /// has already applied and validated a patch against a copy.
    pub fn replace(&mut self, record: T) -> Result<()> {
        let id = record.id().to_string();
        if !self.records.contains_key(&id) {
            return Err(DeskError::NotFound {
                entity: T::ENTITY,
                id,
            });
        }
        self.records.insert(id, record);
        self.persist()
    }

    pub fn delete(&mut self, id: &str) -> Result<T> {
        let removed = self.records.remove(id).ok_or_else(|| DeskError::NotFound {
            entity: T::ENTITY,
            id: id.to_string(),
        })?;
        self.persist()?;
        Ok(removed)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
