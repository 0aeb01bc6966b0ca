//! Director entity

use super::types::{DirectorId, MovieId};
use serde::{Deserialize, Serialize};

/// A director record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Director {
    /// Unique identifier for this director
    pub id: DirectorId,

    pub first_name: String,

    pub last_name: String,

    /// Cached mean rank over this director's rated movies. Same sentinel
    /// and staleness convention as [`super::Actor::avg_movies_rank`].
    pub avg_movies_rank: Option<f64>,

    /// Movies this director made
    pub movies: Vec<MovieId>,
}

impl Director {
    /// Create a new director with an empty movie list and an unset rank cache
    pub fn new(
        id: DirectorId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Director {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            avg_movies_rank: None,
            movies: Vec::new(),
        }
    }
}
