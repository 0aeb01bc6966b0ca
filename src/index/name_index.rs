//! Actor name multimaps
//!
//! Two multimaps from exact name string to the actors sharing it, fed at
//! actor-creation time only. The index is append-only by design: actor
//! deletion never removes entries, so bucket scans keep seeing actors
//! that are gone from the primary store. Callers rely on that staleness;
//! do not "fix" it here.

use crate::graph::{Actor, ActorId};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One bucket entry: the actor plus the half of the name the bucket key
/// does not carry
///
/// Storing the complementary name in the entry lets the same-name query
/// paths run off the bucket alone, without resolving the actor id against
/// the primary store. That is what keeps deleted actors visible here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameEntry {
    pub actor: ActorId,

    /// Last name in the first-name index, first name in the last-name index
    pub name: String,
}

/// Multimaps from first and last name to the actors sharing them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameIndex {
    by_first_name: FxHashMap<String, Vec<NameEntry>>,
    by_last_name: FxHashMap<String, Vec<NameEntry>>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a freshly created actor under both of its names.
    ///
    /// Each actor is inserted exactly once, so buckets never hold
    /// duplicate entries for the same actor id.
    pub fn insert(&mut self, actor: &Actor) {
        self.by_first_name
            .entry(actor.first_name.clone())
            .or_default()
            .push(NameEntry {
                actor: actor.id,
                name: actor.last_name.clone(),
            });

        self.by_last_name
            .entry(actor.last_name.clone())
            .or_default()
            .push(NameEntry {
                actor: actor.id,
                name: actor.first_name.clone(),
            });
    }

    /// Bucket of actors sharing `first_name`, empty if none was ever added.
    pub fn same_first_name(&self, first_name: &str) -> &[NameEntry] {
        self.by_first_name
            .get(first_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Bucket of actors sharing `last_name`, empty if none was ever added.
    pub fn same_last_name(&self, last_name: &str) -> &[NameEntry] {
        self.by_last_name
            .get(last_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
