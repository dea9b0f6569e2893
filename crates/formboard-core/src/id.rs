//! Identifier types for fields and containers.
//!
//! Every field carries a [`FieldId`] that is unique across the whole process
//! and stable for the field's lifetime. Containers are identified by a
//! [`ContainerId`], a cheap-to-clone interned string such as `"palette"` or
//! `"canvas"`.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter backing [`FieldId::next`]. Starts at 1 so that id 0 can serve as
/// an obvious "never allocated" value in debug output.
static NEXT_FIELD_ID: AtomicU64 = AtomicU64::new(1);

/// A unique identifier for a single field definition.
///
/// Ids are allocated from a process-wide counter and are never reused, so a
/// `FieldId` stays unique across all containers simultaneously — including
/// fields that have since been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(u64);

impl FieldId {
    /// Allocates a fresh id, distinct from every id allocated before it.
    pub fn next() -> Self {
        Self(NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric value, mainly for logging.
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field-{}", self.0)
    }
}

/// A stable identifier for a container of fields.
///
/// Containers are few (a palette and a canvas in the stock setup) and their
/// ids appear in log output and gesture events, so a readable interned
/// string beats an opaque integer here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerId(Arc<str>);

impl ContainerId {
    /// Creates a container id from a string.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContainerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ContainerId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl AsRef<str> for ContainerId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_field_ids_are_unique() {
        let ids: HashSet<FieldId> = (0..1000).map(|_| FieldId::next()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_field_id_display() {
        let id = FieldId::next();
        assert_eq!(format!("{id}"), format!("field-{}", id.raw()));
    }

    #[test]
    fn test_container_id_equality() {
        let a = ContainerId::new("palette");
        let b = ContainerId::from("palette");
        let c = ContainerId::from("canvas".to_string());

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.as_str(), "palette");
        assert_eq!(format!("{c}"), "canvas");
    }
}
