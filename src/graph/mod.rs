//! Entity store, relationship fabric and mutation engine

pub mod actor;
pub mod director;
pub mod movie;
pub mod role;
pub mod store;
pub mod types;

pub use actor::Actor;
pub use director::Director;
pub use movie::Movie;
pub use role::Role;
pub use store::{GraphError, GraphResult, MovieGraph};
pub use types::{ActorId, DirectorId, Gender, Genre, GenreSet, MovieId, RoleId};
