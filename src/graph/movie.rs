//! Movie entity
//!
//! A movie owns a genre set, a list of cast role edges and back-links to
//! the directors that made it. Adjacency lists store ids, not references;
//! the arenas in [`super::store`] resolve them.

use super::types::{DirectorId, GenreSet, MovieId, RoleId};
use serde::{Deserialize, Serialize};

/// A movie record
///
/// `rank` is the movie's quality score, nominally 0-10. A rank of 0 or
/// below means "unrated"; aggregate computations skip such movies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    /// Unique identifier for this movie
    pub id: MovieId,

    /// Title as it appears in the dataset
    pub name: String,

    /// Release year
    pub year: i32,

    /// Quality score, unrated when <= 0
    pub rank: f64,

    /// Genre membership
    pub genres: GenreSet,

    /// Cast edges (one per actor appearance)
    pub roles: Vec<RoleId>,

    /// Directors that made this movie
    pub directors: Vec<DirectorId>,
}

impl Movie {
    /// Create a new movie with empty genre and adjacency lists
    pub fn new(id: MovieId, name: impl Into<String>, year: i32, rank: f64) -> Self {
        Movie {
            id,
            name: name.into(),
            year,
            rank,
            genres: GenreSet::new(),
            roles: Vec::new(),
            directors: Vec::new(),
        }
    }

    /// Age of the movie relative to `current_year`
    pub fn age(&self, current_year: i32) -> i64 {
        i64::from(current_year - self.year)
    }
}
