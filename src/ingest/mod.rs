//! Bulk ingestion of the six semicolon-delimited source streams

pub mod loader;
pub mod reader;

pub use loader::{
    load_actors, load_dataset, load_directors, load_movie_directors, load_movie_genres,
    load_movies, load_roles,
};
pub use reader::{ParseError, RowReader};

use crate::graph::GraphError;
use thiserror::Error;

/// Errors that abort a bulk load
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("entity id {0} out of range")]
    InvalidId(i64),

    #[error("unknown gender code {0:?}")]
    UnknownGender(String),

    #[error("unknown genre {0:?}")]
    UnknownGenre(String),
}
