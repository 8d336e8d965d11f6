//! Per-post version history storage.

use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const VERSIONS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("versions");

/// Versions kept per post; older ones are pruned on save.
pub const MAX_VERSIONS_PER_POST: usize = 10;

/// One saved version of a post's content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostVersion {
    pub id: String,
    pub post_id: String,
    pub content: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    /// Insertion counter; breaks `created_at` ties in list ordering.
    #[serde(default)]
    pub seq: u64,
}

/// Capacity-bounded version list per post.
#[derive(Debug, Clone)]
pub struct VersionStore {
    db: Arc<Database>,
}

impl VersionStore {
    pub fn new(db: Arc<Database>) -> Result<Self> {
        let write_txn = db.begin_write()?;
        write_txn.open_table(VERSIONS_TABLE)?;
        write_txn.commit()?;

        Ok(Self { db })
    }

    /// Save a new version at the front of the post's list, pruning beyond
    /// capacity.
    pub fn save(&self, post_id: &str, content: &str, description: &str) -> Result<PostVersion> {
        let write_txn = self.db.begin_write()?;
        let version = {
            let mut table = write_txn.open_table(VERSIONS_TABLE)?;

            let mut seq = 0;
            for item in table.iter()? {
                let (_, value) = item?;
                let row: PostVersion = serde_json::from_slice(value.value())?;
                seq = seq.max(row.seq);
            }

            let version = PostVersion {
                id: Uuid::new_v4().to_string(),
                post_id: post_id.to_string(),
                content: content.to_string(),
                description: description.to_string(),
                created_at: Utc::now(),
                seq: seq + 1,
            };
            let encoded = serde_json::to_vec(&version)?;
            table.insert(version.id.as_str(), encoded.as_slice())?;
            version
        };
        write_txn.commit()?;

        self.prune(post_id)?;
        Ok(version)
    }

    /// All versions for a post, newest first.
    pub fn list(&self, post_id: &str) -> Result<Vec<PostVersion>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(VERSIONS_TABLE)?;

        let mut versions = Vec::new();
        for item in table.iter()? {
            let (_, value) = item?;
            let version: PostVersion = serde_json::from_slice(value.value())?;
            if version.post_id == post_id {
                versions.push(version);
            }
        }
        versions.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.seq.cmp(&a.seq)));
        Ok(versions)
    }

    pub fn get(&self, id: &str) -> Result<Option<PostVersion>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(VERSIONS_TABLE)?;

        match table.get(id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Delete a version by ID, returns true if it existed.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let write_txn = self.db.begin_write()?;
        let existed = {
            let mut table = write_txn.open_table(VERSIONS_TABLE)?;
            table.remove(id)?.is_some()
        };
        write_txn.commit()?;
        Ok(existed)
    }

    /// Remove every version of a post.
    pub fn clear(&self, post_id: &str) -> Result<()> {
        let ids: Vec<String> = self.list(post_id)?.into_iter().map(|v| v.id).collect();

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(VERSIONS_TABLE)?;
            for id in &ids {
                table.remove(id.as_str())?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }

    fn prune(&self, post_id: &str) -> Result<()> {
        let versions = self.list(post_id)?;
        if versions.len() <= MAX_VERSIONS_PER_POST {
            return Ok(());
        }

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(VERSIONS_TABLE)?;
            for version in &versions[MAX_VERSIONS_PER_POST..] {
                table.remove(version.id.as_str())?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store() -> (tempfile::TempDir, VersionStore) {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let db = Arc::new(Database::create(db_path).unwrap());
        let store = VersionStore::new(db).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_save_and_list_newest_first() {
        let (_guard, store) = store();
        store.save("post-1", "# v1", "Initial generation").unwrap();
        let latest = store.save("post-1", "# v2", "Edited intro").unwrap();

        let versions = store.list("post-1").unwrap();
        assert_eq!(versions.len(), 2);
        assert_eq!(versions[0].id, latest.id);
        assert_eq!(versions[0].description, "Edited intro");
    }

    #[test]
    fn test_capacity_is_per_post() {
        let (_guard, store) = store();
        let first = store.save("post-1", "v0", "d").unwrap();
        for i in 1..=MAX_VERSIONS_PER_POST {
            store.save("post-1", &format!("v{i}"), "d").unwrap();
        }
        store.save("post-2", "other", "d").unwrap();

        assert_eq!(store.list("post-1").unwrap().len(), MAX_VERSIONS_PER_POST);
        assert!(store.get(&first.id).unwrap().is_none());
        // The other post's list is untouched.
        assert_eq!(store.list("post-2").unwrap().len(), 1);
    }

    #[test]
    fn test_clear_only_touches_one_post() {
        let (_guard, store) = store();
        store.save("post-1", "a", "d").unwrap();
        store.save("post-2", "b", "d").unwrap();

        store.clear("post-1").unwrap();
        assert!(store.list("post-1").unwrap().is_empty());
        assert_eq!(store.list("post-2").unwrap().len(), 1);
    }

    #[test]
    fn test_identical_timestamps_keep_insertion_order() {
        let (_guard, store) = store();
        let now = Utc::now();

        // Key order ("aaa" < "zzz") runs against insertion order, so a
        // timestamp tie must be broken by seq, not iteration order.
        let write_txn = store.db.begin_write().unwrap();
        {
            let mut table = write_txn.open_table(VERSIONS_TABLE).unwrap();
            for (seq, id) in [(1u64, "aaa"), (2, "zzz")] {
                let version = PostVersion {
                    id: id.to_string(),
                    post_id: "post-1".to_string(),
                    content: String::new(),
                    description: format!("v{seq}"),
                    created_at: now,
                    seq,
                };
                let encoded = serde_json::to_vec(&version).unwrap();
                table.insert(id, encoded.as_slice()).unwrap();
            }
        }
        write_txn.commit().unwrap();

        let versions = store.list("post-1").unwrap();
        assert_eq!(versions[0].id, "zzz");
        assert_eq!(versions[1].id, "aaa");
    }
}
