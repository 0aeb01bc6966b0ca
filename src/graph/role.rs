//! Cast role edge
//!
//! A role links exactly one movie and one actor. It must be reachable
//! from both adjacency lists or from neither; the store enforces this by
//! linking both sides in one operation and unlinking both sides during
//! cascading movie deletion.

use super::types::{ActorId, MovieId, RoleId};
use serde::{Deserialize, Serialize};

/// An actor's appearance in a movie, with an optional character-name label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,

    /// Movie side of the edge
    pub movie: MovieId,

    /// Actor side of the edge
    pub actor: ActorId,

    /// Character name, `None` when the dataset row had an empty label
    pub character: Option<String>,
}
