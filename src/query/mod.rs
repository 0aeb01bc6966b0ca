//! Read-only query battery over the movie graph
//!
//! Every query reads the current snapshot of the store and indices and
//! leaves them untouched. The engine itself is stateless; it only pins
//! the borrow of the graph it traverses.

use crate::graph::{Actor, ActorId, Director, Movie, MovieGraph, MovieId};
use rustc_hash::{FxHashMap, FxHashSet};

/// Query engine over a borrowed graph snapshot
pub struct QueryEngine<'a> {
    graph: &'a MovieGraph,
}

impl<'a> QueryEngine<'a> {
    /// Create a new query engine over the given graph
    pub fn new(graph: &'a MovieGraph) -> Self {
        Self { graph }
    }

    /// Number of movies with `rank >= min_rank`.
    pub fn num_movies_with_rank_above(&self, min_rank: f64) -> usize {
        self.graph.movies().filter(|m| m.rank >= min_rank).count()
    }

    /// Number of actors appearing in at least one movie with
    /// `rank >= min_rank`. Short-circuits per actor on the first
    /// qualifying role.
    pub fn num_actors_in_a_movie_with_rank_above(&self, min_rank: f64) -> usize {
        self.graph
            .actors()
            .filter(|actor| {
                actor.roles.iter().any(|role_id| {
                    let movie_id = self.graph.role(*role_id).movie;
                    self.movie(movie_id).rank >= min_rank
                })
            })
            .count()
    }

    /// Distinct actors (other than `actor`) appearing in any of `actor`'s
    /// movies with `rank >= min_rank`.
    pub fn co_actors_in_movies_with_rank_above(
        &self,
        actor: &Actor,
        min_rank: f64,
    ) -> FxHashSet<ActorId> {
        let mut co_actors = FxHashSet::default();
        for role_id in &actor.roles {
            let movie = self.movie(self.graph.role(*role_id).movie);
            if movie.rank >= min_rank {
                for co_role_id in &movie.roles {
                    let co_actor = self.graph.role(*co_role_id).actor;
                    if co_actor != actor.id {
                        co_actors.insert(co_actor);
                    }
                }
            }
        }
        co_actors
    }

    /// Same traversal as [`Self::co_actors_in_movies_with_rank_above`],
    /// keyed with an appearance counter.
    ///
    /// The counter is recorded but never incremented, so every entry maps
    /// to 0; the workload only consumes the key set. Kept as-is pending a
    /// decision on the intended semantics (see DESIGN.md, open questions).
    pub fn co_actors_with_count_in_movies_with_rank_above(
        &self,
        actor: &Actor,
        min_rank: f64,
    ) -> FxHashMap<ActorId, u32> {
        let mut co_actors = FxHashMap::default();
        for role_id in &actor.roles {
            let movie = self.movie(self.graph.role(*role_id).movie);
            if movie.rank >= min_rank {
                for co_role_id in &movie.roles {
                    let co_actor = self.graph.role(*co_role_id).actor;
                    if co_actor != actor.id {
                        co_actors.entry(co_actor).or_insert(0);
                    }
                }
            }
        }
        co_actors
    }

    /// Movies (other than `movie`) sharing at least one actor with it.
    pub fn movies_with_actors_in_common(&self, movie: &Movie) -> FxHashSet<MovieId> {
        let mut movies = FxHashSet::default();
        for role_id in &movie.roles {
            let actor_id = self.graph.role(*role_id).actor;
            let actor = self
                .graph
                .actor(actor_id)
                .expect("role references live actor");
            for other_role_id in &actor.roles {
                let other_movie = self.graph.role(*other_role_id).movie;
                if other_movie != movie.id {
                    movies.insert(other_movie);
                }
            }
        }
        movies
    }

    /// Last names of the other actors sharing `actor`'s first name, via
    /// the first-name index. Duplicates are kept.
    pub fn last_names_of_actors_with_same_first_name_as(&self, actor: &Actor) -> Vec<&'a str> {
        self.graph
            .names()
            .same_first_name(&actor.first_name)
            .iter()
            .filter(|entry| entry.actor != actor.id)
            .map(|entry| entry.name.as_str())
            .collect()
    }

    /// Deduplicated variant of the same-first-name traversal.
    pub fn unique_last_names_of_actors_with_same_first_name_as(
        &self,
        actor: &Actor,
    ) -> FxHashSet<&'a str> {
        self.graph
            .names()
            .same_first_name(&actor.first_name)
            .iter()
            .filter(|entry| entry.actor != actor.id)
            .map(|entry| entry.name.as_str())
            .collect()
    }

    /// Whether an actor shares the director's full name. Scans the
    /// last-name bucket for an exact first-name match, O(bucket size).
    pub fn is_also_actor(&self, director: &Director) -> bool {
        self.graph
            .names()
            .same_last_name(&director.last_name)
            .iter()
            .any(|entry| entry.name == director.first_name)
    }

    /// Frequency histogram over `year - start_year` for movies with
    /// `rank >= min_rank` made in or after `start_year`. The bucket
    /// vector grows to the highest index encountered.
    pub fn movies_age_histogram(&self, start_year: i32, min_rank: f64) -> Vec<u32> {
        let mut histogram = Vec::new();
        for movie in self.graph.movies() {
            if movie.rank >= min_rank && movie.year >= start_year {
                let idx = (movie.year - start_year) as usize;
                if idx >= histogram.len() {
                    histogram.resize(idx + 1, 0);
                }
                histogram[idx] += 1;
            }
        }
        histogram
    }

    /// Mean of `current_year - year` over movies with `rank >= min_rank`.
    ///
    /// NaN when no movie qualifies; callers that sweep rank thresholds
    /// rely on getting a value back rather than an error.
    pub fn avg_age_of_movies_with_rank_above(&self, current_year: i32, min_rank: f64) -> f64 {
        let mut total_age: i64 = 0;
        let mut count: u64 = 0;
        for movie in self.graph.movies() {
            if movie.rank >= min_rank {
                total_age += movie.age(current_year);
                count += 1;
            }
        }
        total_age as f64 / count as f64
    }

    /// Sum of `current_year - year` over all movies, no rank filter.
    pub fn sum_of_all_movies_ages(&self, current_year: i32) -> i64 {
        self.graph.movies().map(|m| m.age(current_year)).sum()
    }

    fn movie(&self, id: MovieId) -> &'a Movie {
        self.graph.movie(id).expect("role references live movie")
    }
}
