//! Descriptive metadata tracked by a store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Snapshot of a store's bookkeeping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreMetadata {
    /// Unique store identifier, also attached to log events
    pub id: Uuid,

    /// Optional human readable name from the builder
    pub name: Option<String>,

    /// When the store was created
    pub created_at: DateTime<Utc>,

    /// When the last transition was committed (creation time if none)
    pub updated_at: DateTime<Utc>,

    /// Number of committed transitions
    pub dispatch_count: u64,
}

impl StoreMetadata {
    pub(crate) fn new(name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            created_at: now,
            updated_at: now,
            dispatch_count: 0,
        }
    }

    /// Name for log output: the configured name, or the id.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.id.to_string(),
        }
    }

    pub(crate) fn record_commit(&mut self) -> u64 {
        self.dispatch_count += 1;
        self.updated_at = Utc::now();
        self.dispatch_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_metadata_has_no_dispatches() {
        let metadata = StoreMetadata::new(None);
        assert_eq!(metadata.dispatch_count, 0);
        assert_eq!(metadata.created_at, metadata.updated_at);
    }

    #[test]
    fn record_commit_counts_and_touches() {
        let mut metadata = StoreMetadata::new(Some("counter".to_string()));
        let created = metadata.created_at;

        assert_eq!(metadata.record_commit(), 1);
        assert_eq!(metadata.record_commit(), 2);
        assert!(metadata.updated_at >= created);
        assert_eq!(metadata.created_at, created);
    }

    #[test]
    fn label_prefers_name() {
        let named = StoreMetadata::new(Some("bio".to_string()));
        assert_eq!(named.label(), "bio");

        let anonymous = StoreMetadata::new(None);
        assert_eq!(anonymous.label(), anonymous.id.to_string());
    }

    #[test]
    fn metadata_serializes_correctly() {
        let mut metadata = StoreMetadata::new(Some("counter".to_string()));
        metadata.record_commit();

        let json = serde_json::to_string(&metadata).unwrap();
        let deserialized: StoreMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(metadata, deserialized);
    }
}
