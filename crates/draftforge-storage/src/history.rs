//! Generated-post history storage.

use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const HISTORY_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("history");

/// Only the most recent posts are kept; older entries are pruned on insert.
pub const MAX_HISTORY_POSTS: usize = 20;

/// One generated blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub topic: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Insertion counter; breaks `created_at` ties in list ordering.
    #[serde(default)]
    pub seq: u64,
}

/// Capacity-bounded history of generated posts.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    db: Arc<Database>,
}

impl HistoryStore {
    pub fn new(db: Arc<Database>) -> Result<Self> {
        let write_txn = db.begin_write()?;
        write_txn.open_table(HISTORY_TABLE)?;
        write_txn.commit()?;

        Ok(Self { db })
    }

    /// Add a post at the front of the history, pruning beyond capacity.
    pub fn add(&self, topic: &str, content: &str) -> Result<BlogPost> {
        let write_txn = self.db.begin_write()?;
        let post = {
            let mut table = write_txn.open_table(HISTORY_TABLE)?;

            let mut seq = 0;
            for item in table.iter()? {
                let (_, value) = item?;
                let row: BlogPost = serde_json::from_slice(value.value())?;
                seq = seq.max(row.seq);
            }

            let post = BlogPost {
                id: Uuid::new_v4().to_string(),
                topic: topic.to_string(),
                content: content.to_string(),
                created_at: Utc::now(),
                seq: seq + 1,
            };
            let encoded = serde_json::to_vec(&post)?;
            table.insert(post.id.as_str(), encoded.as_slice())?;
            post
        };
        write_txn.commit()?;

        self.prune()?;
        Ok(post)
    }

    /// All posts, newest first.
    pub fn list(&self) -> Result<Vec<BlogPost>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(HISTORY_TABLE)?;

        let mut posts = Vec::new();
        for item in table.iter()? {
            let (_, value) = item?;
            posts.push(serde_json::from_slice::<BlogPost>(value.value())?);
        }
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.seq.cmp(&a.seq)));
        Ok(posts)
    }

    pub fn get(&self, id: &str) -> Result<Option<BlogPost>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(HISTORY_TABLE)?;

        match table.get(id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Delete a post by ID, returns true if it existed.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let write_txn = self.db.begin_write()?;
        let existed = {
            let mut table = write_txn.open_table(HISTORY_TABLE)?;
            table.remove(id)?.is_some()
        };
        write_txn.commit()?;
        Ok(existed)
    }

    /// Remove every post.
    pub fn clear(&self) -> Result<()> {
        let ids: Vec<String> = self.list()?.into_iter().map(|p| p.id).collect();

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(HISTORY_TABLE)?;
            for id in &ids {
                table.remove(id.as_str())?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.list()?.len())
    }

    fn prune(&self) -> Result<()> {
        let posts = self.list()?;
        if posts.len() <= MAX_HISTORY_POSTS {
            return Ok(());
        }

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(HISTORY_TABLE)?;
            for post in &posts[MAX_HISTORY_POSTS..] {
                table.remove(post.id.as_str())?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }
}
