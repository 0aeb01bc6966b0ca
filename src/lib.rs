//! Cinegraph — an in-memory movie graph store
//!
//! A reference engine for validating correctness and measuring the
//! performance of query and update workloads over a fixed movie-domain
//! schema: movies, actors, directors, genres and cast roles.
//!
//! # Architecture
//!
//! - [`graph`]: id-keyed entity arenas, the role-edge fabric between
//!   them, and the bulk mutation engine (rank bumps, cached-aggregate
//!   maintenance, cascading deletion)
//! - [`index`]: actor name multimaps, built at actor-creation time
//! - [`query`]: the stateless read-only query battery
//! - [`ingest`]: tokenizer and loaders for the six source row streams
//! - [`sample`]: deterministic id sampling for benchmark drivers
//!
//! The whole graph is owned by one logical consumer; operations are
//! synchronous and run to completion. Persistence and the command-line
//! driver live outside the engine.

pub mod graph;
pub mod index;
pub mod ingest;
pub mod query;
pub mod sample;

pub use graph::{
    Actor, ActorId, Director, DirectorId, Gender, Genre, GenreSet, GraphError, GraphResult,
    Movie, MovieGraph, MovieId, Role, RoleId,
};
pub use index::{NameEntry, NameIndex};
pub use ingest::{LoadError, ParseError};
pub use query::QueryEngine;

/// Crate version string
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
