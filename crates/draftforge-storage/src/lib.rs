//! Draftforge storage - persisted history and version lists.
//!
//! Both stores implement the same capacity-bounded list contract: newest
//! entry first, oldest entries pruned beyond a fixed cap.
//! The generation pipeline never depends on this crate; callers wire the two
//! together.

mod history;
mod versions;

pub use history::{BlogPost, HistoryStore, MAX_HISTORY_POSTS};
pub use versions::{MAX_VERSIONS_PER_POST, PostVersion, VersionStore};
