//! Actor entity

use super::types::{ActorId, Gender, RoleId};
use serde::{Deserialize, Serialize};

/// An actor record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Unique identifier for this actor
    pub id: ActorId,

    pub first_name: String,

    pub last_name: String,

    pub gender: Gender,

    /// Cached mean rank over this actor's rated movies.
    ///
    /// `None` means the aggregate was never computed. The cache is a
    /// point-in-time value: it is updated only by the explicit recompute
    /// and incremental-bump passes, never invalidated by later rank or
    /// topology changes.
    pub avg_movies_rank: Option<f64>,

    /// Cast edges (one per movie appearance)
    pub roles: Vec<RoleId>,
}

impl Actor {
    /// Create a new actor with an empty role list and an unset rank cache
    pub fn new(
        id: ActorId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: Gender,
    ) -> Self {
        Actor {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender,
            avg_movies_rank: None,
            roles: Vec::new(),
        }
    }

    /// "first last" display form
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
