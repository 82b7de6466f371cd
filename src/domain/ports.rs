use serde::{de::DeserializeOwned, Serialize};

/// A persistable entity: a stable id, an entity name for error reporting,
/// and a patch type carrying optional replacements for its mutable fields.
pub trait Record: Serialize + DeserializeOwned + Clone {
    type Patch;

    const ENTITY: &'static str;

    fn id(&self) -> &str;

    fn apply(&mut self, patch: Self::Patch);
}
