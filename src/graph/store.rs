//! In-memory movie graph storage
//!
//! Owns the canonical id-keyed arenas for movies, actors and directors,
//! the role-edge arena, and the actor name indices. Cyclic relationships
//! (movie/actor via roles, movie/director) are broken by storing ids in
//! the adjacency lists and resolving them through the arenas, so deletion
//! is a local list splice rather than a graph-wide reference hunt.
//!
//! One logical consumer owns the whole graph for its lifetime; every
//! operation runs to completion before the next begins.

use super::actor::Actor;
use super::director::Director;
use super::movie::Movie;
use super::role::Role;
use super::types::{ActorId, DirectorId, Gender, Genre, MovieId, RoleId};
use crate::index::NameIndex;
use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Insertion-ordered map with the fast integer-key hasher. Insertion
/// order makes full-store scans reproducible across benchmark runs.
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Movie {0} not found")]
    MovieNotFound(MovieId),

    #[error("Actor {0} not found")]
    ActorNotFound(ActorId),

    #[error("Director {0} not found")]
    DirectorNotFound(DirectorId),

    #[error("Movie {0} already exists")]
    MovieAlreadyExists(MovieId),

    #[error("Actor {0} already exists")]
    ActorAlreadyExists(ActorId),

    #[error("Director {0} already exists")]
    DirectorAlreadyExists(DirectorId),

    /// A deletion removed an entity whose identity does not match the one
    /// looked up, or an adjacency list referenced a missing entity. The
    /// store is corrupted; callers must halt, not recover.
    #[error("Store corrupted: {0}")]
    Corrupted(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// The in-memory movie graph
///
/// Arenas keyed by entity id plus a role-edge arena:
/// - movies: MovieId -> Movie
/// - actors: ActorId -> Actor
/// - directors: DirectorId -> Director
/// - roles: RoleId -> Role (each reachable from both of its endpoints)
/// - names: append-only first/last-name multimaps over actors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieGraph {
    movies: FxIndexMap<MovieId, Movie>,
    actors: FxIndexMap<ActorId, Actor>,
    directors: FxIndexMap<DirectorId, Director>,
    roles: FxHashMap<RoleId, Role>,
    names: NameIndex,
    next_role_id: u64,
}

impl MovieGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    // ── Ingestion ───────────────────────────────────────────────────

    /// Insert a movie. Duplicate ids fail fast; the arena is never
    /// silently overwritten.
    pub fn add_movie(
        &mut self,
        id: MovieId,
        name: impl Into<String>,
        year: i32,
        rank: f64,
    ) -> GraphResult<()> {
        if self.movies.contains_key(&id) {
            return Err(GraphError::MovieAlreadyExists(id));
        }
        self.movies.insert(id, Movie::new(id, name, year, rank));
        Ok(())
    }

    /// Insert an actor and register it in both name indices.
    pub fn add_actor(
        &mut self,
        id: ActorId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: Gender,
    ) -> GraphResult<()> {
        if self.actors.contains_key(&id) {
            return Err(GraphError::ActorAlreadyExists(id));
        }
        let actor = Actor::new(id, first_name, last_name, gender);
        self.names.insert(&actor);
        self.actors.insert(id, actor);
        Ok(())
    }

    /// Insert a director.
    pub fn add_director(
        &mut self,
        id: DirectorId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> GraphResult<()> {
        if self.directors.contains_key(&id) {
            return Err(GraphError::DirectorAlreadyExists(id));
        }
        self.directors
            .insert(id, Director::new(id, first_name, last_name));
        Ok(())
    }

    /// Attach a genre to an existing movie.
    pub fn add_movie_genre(&mut self, movie_id: MovieId, genre: Genre) -> GraphResult<()> {
        let movie = self
            .movies
            .get_mut(&movie_id)
            .ok_or(GraphError::MovieNotFound(movie_id))?;
        movie.genres.insert(genre);
        Ok(())
    }

    /// Link a director to a movie. Both sides must already exist.
    pub fn add_movie_director(
        &mut self,
        movie_id: MovieId,
        director_id: DirectorId,
    ) -> GraphResult<()> {
        let movie = self
            .movies
            .get_mut(&movie_id)
            .ok_or(GraphError::MovieNotFound(movie_id))?;
        let director = self
            .directors
            .get_mut(&director_id)
            .ok_or(GraphError::DirectorNotFound(director_id))?;
        movie.directors.push(director_id);
        director.movies.push(movie_id);
        Ok(())
    }

    /// Create a cast role edge between an existing movie and actor.
    ///
    /// The role is appended to both adjacency lists before returning, so
    /// no partially-linked state is ever observable.
    pub fn add_movie_actor(
        &mut self,
        movie_id: MovieId,
        actor_id: ActorId,
        character: Option<String>,
    ) -> GraphResult<RoleId> {
        let movie = self
            .movies
            .get_mut(&movie_id)
            .ok_or(GraphError::MovieNotFound(movie_id))?;
        let actor = self
            .actors
            .get_mut(&actor_id)
            .ok_or(GraphError::ActorNotFound(actor_id))?;

        let role_id = RoleId::new(self.next_role_id);
        self.next_role_id += 1;

        movie.roles.push(role_id);
        actor.roles.push(role_id);
        self.roles.insert(
            role_id,
            Role {
                id: role_id,
                movie: movie_id,
                actor: actor_id,
                character,
            },
        );
        Ok(role_id)
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(&id)
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    pub fn director(&self, id: DirectorId) -> Option<&Director> {
        self.directors.get(&id)
    }

    pub fn movie_mut(&mut self, id: MovieId) -> Option<&mut Movie> {
        self.movies.get_mut(&id)
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(&id)
    }

    pub fn director_mut(&mut self, id: DirectorId) -> Option<&mut Director> {
        self.directors.get_mut(&id)
    }

    /// Resolve a role edge.
    ///
    /// # Panics
    ///
    /// Panics on a dangling role id, which can only mean the symmetry
    /// invariant was broken.
    pub fn role(&self, id: RoleId) -> &Role {
        &self.roles[&id]
    }

    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values()
    }

    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.actors.values()
    }

    pub fn directors(&self) -> impl Iterator<Item = &Director> {
        self.directors.values()
    }

    pub fn names(&self) -> &NameIndex {
        &self.names
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn director_count(&self) -> usize {
        self.directors.len()
    }

    pub fn role_count(&self) -> usize {
        self.roles.len()
    }

    /// Largest movie id currently in the store, 0 when empty. Drivers use
    /// this to bound sampled id ranges.
    pub fn max_movie_id(&self) -> u32 {
        self.movies.keys().map(|id| id.as_u32()).max().unwrap_or(0)
    }

    /// Largest actor id currently in the store, 0 when empty.
    pub fn max_actor_id(&self) -> u32 {
        self.actors.keys().map(|id| id.as_u32()).max().unwrap_or(0)
    }

    // ── Mutation engine ─────────────────────────────────────────────

    /// Pull every movie made in or before `year` toward the rank ceiling:
    /// `rank += factor * (10 - rank)`.
    ///
    /// No clamping: factors outside [0, 1] can push ranks past 10 or away
    /// from the ceiling, and that arithmetic is part of the workload.
    pub fn bump_rank_of_movies_made_in_or_before(&mut self, year: i32, factor: f64) {
        for movie in self.movies.values_mut() {
            if movie.year <= year {
                movie.rank += factor * (10.0 - movie.rank);
            }
        }
    }

    /// Recompute every actor's cached mean rank over its rated movies
    /// (rank > 0). Actors with no rated movies keep their previous cache,
    /// including the unset state.
    pub fn calc_actor_avg_movie_ranks(&mut self) {
        let roles = &self.roles;
        let movies = &self.movies;
        for actor in self.actors.values_mut() {
            let mut count = 0u32;
            let mut sum = 0.0;
            for role_id in &actor.roles {
                let rank = movies[&roles[role_id].movie].rank;
                if rank > 0.0 {
                    count += 1;
                    sum += rank;
                }
            }
            if count > 0 {
                actor.avg_movies_rank = Some(sum / f64::from(count));
            }
        }
    }

    /// Recompute every director's cached mean rank over its rated movies.
    /// Same skip rule as the actor pass.
    pub fn calc_director_avg_movie_ranks(&mut self) {
        let movies = &self.movies;
        for director in self.directors.values_mut() {
            let mut count = 0u32;
            let mut sum = 0.0;
            for movie_id in &director.movies {
                let rank = movies[movie_id].rank;
                if rank > 0.0 {
                    count += 1;
                    sum += rank;
                }
            }
            if count > 0 {
                director.avg_movies_rank = Some(sum / f64::from(count));
            }
        }
    }

    /// Bump one movie's rank and spread the delta into the cached
    /// averages of its cast and directors.
    ///
    /// This is an incremental approximation, not a recompute: each linked
    /// actor with a computed positive cache gets `delta / role_count`,
    /// each linked director `delta / movie_count`. Caches still in the
    /// unset state are left untouched.
    pub fn bump_up_rank_of_movie_and_its_actors_and_directors(
        &mut self,
        movie_id: MovieId,
        factor: f64,
    ) -> GraphResult<()> {
        let movie = self
            .movies
            .get_mut(&movie_id)
            .ok_or(GraphError::MovieNotFound(movie_id))?;
        let delta = factor * (10.0 - movie.rank);
        movie.rank += delta;

        let role_ids = movie.roles.clone();
        let director_ids = movie.directors.clone();

        for role_id in role_ids {
            let actor_id = self.roles[&role_id].actor;
            let actor = self
                .actors
                .get_mut(&actor_id)
                .ok_or_else(|| dangling("role", actor_id.as_u32()))?;
            if let Some(avg) = actor.avg_movies_rank {
                if avg > 0.0 {
                    actor.avg_movies_rank = Some(avg + delta / actor.roles.len() as f64);
                }
            }
        }

        for director_id in director_ids {
            let director = self
                .directors
                .get_mut(&director_id)
                .ok_or_else(|| dangling("movie", director_id.as_u32()))?;
            if let Some(avg) = director.avg_movies_rank {
                if avg > 0.0 {
                    director.avg_movies_rank = Some(avg + delta / director.movies.len() as f64);
                }
            }
        }

        Ok(())
    }

    /// Delete every movie with `rank < min_rank`, unlinking its role
    /// edges from the owning actors and removing it from each linked
    /// director's movie list. Name indices are untouched.
    ///
    /// Returns the number of movies removed. A mismatch between the
    /// removed record and the requested id is a [`GraphError::Corrupted`]
    /// fault and must halt the caller.
    pub fn delete_movies_with_rank_below(&mut self, min_rank: f64) -> GraphResult<usize> {
        let doomed: Vec<MovieId> = self
            .movies
            .values()
            .filter(|m| m.rank < min_rank)
            .map(|m| m.id)
            .collect();

        for &id in &doomed {
            let movie = self
                .movies
                .swap_remove(&id)
                .ok_or_else(|| dangling("doomed list", id.as_u32()))?;
            if movie.id != id {
                return Err(GraphError::Corrupted(format!(
                    "removed movie {} while deleting {}",
                    movie.id, id
                )));
            }

            for role_id in &movie.roles {
                let role = self
                    .roles
                    .remove(role_id)
                    .ok_or_else(|| GraphError::Corrupted(format!("dangling role {role_id}")))?;
                let actor = self
                    .actors
                    .get_mut(&role.actor)
                    .ok_or_else(|| dangling("role", role.actor.as_u32()))?;
                actor.roles.retain(|r| r != role_id);
            }

            for director_id in &movie.directors {
                let director = self
                    .directors
                    .get_mut(director_id)
                    .ok_or_else(|| dangling("movie", director_id.as_u32()))?;
                director.movies.retain(|m| *m != id);
            }
        }

        debug!(removed = doomed.len(), min_rank, "deleted low-rank movies");
        Ok(doomed.len())
    }

    /// Delete every actor whose role list is empty. Removal touches the
    /// primary arena only; the name indices keep their entries.
    pub fn delete_actors_with_no_roles(&mut self) -> GraphResult<usize> {
        let doomed: Vec<ActorId> = self
            .actors
            .values()
            .filter(|a| a.roles.is_empty())
            .map(|a| a.id)
            .collect();

        for &id in &doomed {
            let actor = self
                .actors
                .swap_remove(&id)
                .ok_or_else(|| dangling("doomed list", id.as_u32()))?;
            if actor.id != id {
                return Err(GraphError::Corrupted(format!(
                    "removed actor {} while deleting {}",
                    actor.id, id
                )));
            }
        }

        debug!(removed = doomed.len(), "deleted actors with no roles");
        Ok(doomed.len())
    }

    /// Delete every director whose movie list is empty. Primary arena
    /// only, as with actor deletion.
    pub fn delete_directors_with_no_movies(&mut self) -> GraphResult<usize> {
        let doomed: Vec<DirectorId> = self
            .directors
            .values()
            .filter(|d| d.movies.is_empty())
            .map(|d| d.id)
            .collect();

        for &id in &doomed {
            let director = self
                .directors
                .swap_remove(&id)
                .ok_or_else(|| dangling("doomed list", id.as_u32()))?;
            if director.id != id {
                return Err(GraphError::Corrupted(format!(
                    "removed director {} while deleting {}",
                    director.id, id
                )));
            }
        }

        debug!(removed = doomed.len(), "deleted directors with no movies");
        Ok(doomed.len())
    }
}

fn dangling(via: &str, id: u32) -> GraphError {
    GraphError::Corrupted(format!("adjacency via {via} references missing entity {id}"))
}
