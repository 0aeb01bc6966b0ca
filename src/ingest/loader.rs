//! Typed-row loaders for the six source streams
//!
//! Each loader consumes one stream (header line skipped) and feeds the
//! graph through the store's ingestion operations. Streams must be
//! applied in dependency order: movies, actors and directors before any
//! genre, director-link or role row. A row referencing an absent id
//! fails the whole load with NotFound; there is no partial-row skip.

use super::reader::RowReader;
use super::LoadError;
use crate::graph::{ActorId, DirectorId, Gender, Genre, MovieGraph, MovieId};
use std::path::Path;
use tracing::info;

fn entity_id<T: From<u32>>(raw: i64) -> Result<T, LoadError> {
    u32::try_from(raw)
        .map(T::from)
        .map_err(|_| LoadError::InvalidId(raw))
}

/// Load `id;name;year;rank` movie rows.
pub fn load_movies(graph: &mut MovieGraph, bytes: &[u8]) -> Result<usize, LoadError> {
    let mut reader = RowReader::new(bytes);
    reader.skip_line();
    let mut count = 0;
    while !reader.eof() {
        let id: MovieId = entity_id(reader.read_int()?)?;
        reader.expect(b';')?;
        let name = reader.read_string()?;
        reader.expect(b';')?;
        let year = reader.read_int()? as i32;
        reader.expect(b';')?;
        let rank = reader.read_float()?;
        reader.skip_line();

        graph.add_movie(id, name, year, rank)?;
        count += 1;
    }
    Ok(count)
}

/// Load `id;firstName;lastName;gender` actor rows. Gender must be the
/// code "M" or "F"; anything else aborts the load.
pub fn load_actors(graph: &mut MovieGraph, bytes: &[u8]) -> Result<usize, LoadError> {
    let mut reader = RowReader::new(bytes);
    reader.skip_line();
    let mut count = 0;
    while !reader.eof() {
        let id: ActorId = entity_id(reader.read_int()?)?;
        reader.expect(b';')?;
        let first_name = reader.read_string()?;
        reader.expect(b';')?;
        let last_name = reader.read_string()?;
        reader.expect(b';')?;
        let code = reader.read_string()?;
        reader.skip_line();

        let gender = Gender::from_code(&code).ok_or(LoadError::UnknownGender(code))?;
        graph.add_actor(id, first_name, last_name, gender)?;
        count += 1;
    }
    Ok(count)
}

/// Load `id;firstName;lastName` director rows.
pub fn load_directors(graph: &mut MovieGraph, bytes: &[u8]) -> Result<usize, LoadError> {
    let mut reader = RowReader::new(bytes);
    reader.skip_line();
    let mut count = 0;
    while !reader.eof() {
        let id: DirectorId = entity_id(reader.read_int()?)?;
        reader.expect(b';')?;
        let first_name = reader.read_string()?;
        reader.expect(b';')?;
        let last_name = reader.read_string()?;
        reader.skip_line();

        graph.add_director(id, first_name, last_name)?;
        count += 1;
    }
    Ok(count)
}

/// Load `directorId;movieId` ownership rows.
pub fn load_movie_directors(graph: &mut MovieGraph, bytes: &[u8]) -> Result<usize, LoadError> {
    let mut reader = RowReader::new(bytes);
    reader.skip_line();
    let mut count = 0;
    while !reader.eof() {
        let director_id: DirectorId = entity_id(reader.read_int()?)?;
        reader.expect(b';')?;
        let movie_id: MovieId = entity_id(reader.read_int()?)?;
        reader.skip_line();

        graph.add_movie_director(movie_id, director_id)?;
        count += 1;
    }
    Ok(count)
}

/// Load `movieId;genreName` membership rows. Genre names outside the
/// fixed 21-value set abort the load.
pub fn load_movie_genres(graph: &mut MovieGraph, bytes: &[u8]) -> Result<usize, LoadError> {
    let mut reader = RowReader::new(bytes);
    reader.skip_line();
    let mut count = 0;
    while !reader.eof() {
        let movie_id: MovieId = entity_id(reader.read_int()?)?;
        reader.expect(b';')?;
        let label = reader.read_string()?;
        reader.skip_line();

        let genre = Genre::from_label(&label).ok_or(LoadError::UnknownGenre(label))?;
        graph.add_movie_genre(movie_id, genre)?;
        count += 1;
    }
    Ok(count)
}

/// Load `actorId;movieId;roleLabel` cast rows. An empty label means the
/// role has no character name.
pub fn load_roles(graph: &mut MovieGraph, bytes: &[u8]) -> Result<usize, LoadError> {
    let mut reader = RowReader::new(bytes);
    reader.skip_line();
    let mut count = 0;
    while !reader.eof() {
        let actor_id: ActorId = entity_id(reader.read_int()?)?;
        reader.expect(b';')?;
        let movie_id: MovieId = entity_id(reader.read_int()?)?;
        reader.expect(b';')?;
        let label = reader.read_string()?;
        reader.skip_line();

        let character = if label.is_empty() { None } else { Some(label) };
        graph.add_movie_actor(movie_id, actor_id, character)?;
        count += 1;
    }
    Ok(count)
}

/// Load the whole six-file dataset from a directory, in dependency order.
pub fn load_dataset(graph: &mut MovieGraph, dir: &Path) -> Result<(), LoadError> {
    let movies = std::fs::read(dir.join("movies.csv"))?;
    let count = load_movies(graph, &movies)?;
    info!(count, "loaded movies");

    let actors = std::fs::read(dir.join("actors.csv"))?;
    let count = load_actors(graph, &actors)?;
    info!(count, "loaded actors");

    let directors = std::fs::read(dir.join("directors.csv"))?;
    let count = load_directors(graph, &directors)?;
    info!(count, "loaded directors");

    let links = std::fs::read(dir.join("movies_directors.csv"))?;
    let count = load_movie_directors(graph, &links)?;
    info!(count, "loaded movie-director links");

    let genres = std::fs::read(dir.join("movies_genres.csv"))?;
    let count = load_movie_genres(graph, &genres)?;
    info!(count, "loaded movie genres");

    let roles = std::fs::read(dir.join("roles.csv"))?;
    let count = load_roles(graph, &roles)?;
    info!(count, "loaded roles");

    Ok(())
}
