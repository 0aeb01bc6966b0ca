//! End-to-end tests: ingest the six row streams, then exercise the
//! query battery and the full update workload against them.

use cinegraph::graph::{ActorId, DirectorId, MovieId};
use cinegraph::ingest::{self, load_dataset};
use cinegraph::{MovieGraph, QueryEngine};
use std::fmt::Write as _;
use tempfile::TempDir;

/// Build the six streams for a small cross-referenced dataset:
/// movies 1..=n, one actor and one director per movie, plus a shared
/// actor 999 appearing in every movie.
fn dataset(n: u32) -> [String; 6] {
    let mut movies = String::from("id;name;year;rank\n");
    let mut actors = String::from("id;first;last;gender\n");
    let mut directors = String::from("id;first;last\n");
    let mut movie_directors = String::from("director;movie\n");
    let mut movie_genres = String::from("movie;genre\n");
    let mut roles = String::from("actor;movie;role\n");

    writeln!(actors, "999;\"Ensemble\";\"Player\";\"F\"").unwrap();
    for id in 1..=n {
        let year = 1950 + (id % 60) as i32;
        let rank = f64::from(id % 11);
        writeln!(movies, "{id};\"Movie {id}\";{year};{rank}").unwrap();
        writeln!(actors, "{id};\"First{id}\";\"Last{}\";\"M\"", id % 7).unwrap();
        writeln!(directors, "{id};\"First{id}\";\"Last{}\"", id % 7).unwrap();
        writeln!(movie_directors, "{id};{id}").unwrap();
        writeln!(movie_genres, "{id};\"{}\"", if id % 2 == 0 { "Drama" } else { "Sci-Fi" })
            .unwrap();
        writeln!(roles, "{id};{id};\"Lead\"").unwrap();
        writeln!(roles, "999;{id};\"\"").unwrap();
    }

    [movies, actors, directors, movie_directors, movie_genres, roles]
}

fn load(n: u32) -> MovieGraph {
    let [movies, actors, directors, movie_directors, movie_genres, roles] = dataset(n);
    let mut graph = MovieGraph::new();
    ingest::load_movies(&mut graph, movies.as_bytes()).unwrap();
    ingest::load_actors(&mut graph, actors.as_bytes()).unwrap();
    ingest::load_directors(&mut graph, directors.as_bytes()).unwrap();
    ingest::load_movie_directors(&mut graph, movie_directors.as_bytes()).unwrap();
    ingest::load_movie_genres(&mut graph, movie_genres.as_bytes()).unwrap();
    ingest::load_roles(&mut graph, roles.as_bytes()).unwrap();
    graph
}

#[test]
fn round_trip_age_sum_matches_raw_rows() {
    let n = 200;
    let graph = load(n);
    assert_eq!(graph.movie_count(), n as usize);
    assert_eq!(graph.actor_count(), n as usize + 1);
    assert_eq!(graph.role_count(), 2 * n as usize);

    // independent recomputation from the generating formula
    let expected: i64 = (1..=n)
        .map(|id| i64::from(2020 - (1950 + (id % 60) as i32)))
        .sum();
    let queries = QueryEngine::new(&graph);
    assert_eq!(queries.sum_of_all_movies_ages(2020), expected);
}

#[test]
fn load_dataset_from_directory() {
    let dir = TempDir::new().unwrap();
    let names = [
        "movies.csv",
        "actors.csv",
        "directors.csv",
        "movies_directors.csv",
        "movies_genres.csv",
        "roles.csv",
    ];
    for (name, content) in names.iter().zip(dataset(50)) {
        std::fs::write(dir.path().join(name), content).unwrap();
    }

    let mut graph = MovieGraph::new();
    load_dataset(&mut graph, dir.path()).unwrap();
    assert_eq!(graph.movie_count(), 50);
    assert_eq!(graph.director_count(), 50);
    assert_eq!(graph.role_count(), 100);
}

#[test]
fn query_battery_over_ingested_data() {
    let graph = load(110);
    let queries = QueryEngine::new(&graph);

    // ranks cycle 0..=10, so exactly the ids with id % 11 >= 6 qualify
    let expected = (1..=110u32).filter(|id| id % 11 >= 6).count();
    assert_eq!(queries.num_movies_with_rank_above(6.0), expected);

    // the shared actor co-stars with every lead of a qualifying movie
    let shared = graph.actor(ActorId::new(999)).unwrap();
    let co_actors = queries.co_actors_in_movies_with_rank_above(shared, 6.0);
    assert_eq!(co_actors.len(), expected);

    // every movie shares the ensemble player with every other movie
    let m1 = graph.movie(MovieId::new(1)).unwrap();
    let common = queries.movies_with_actors_in_common(m1);
    assert_eq!(common.len(), 109);

    // per-lead: shared actor appears in >= 1 rated movie, leads only in
    // their own
    let lead = graph.actor(ActorId::new(11)).unwrap();
    let co_actors = queries.co_actors_in_movies_with_rank_above(lead, 0.5);
    assert!(co_actors.is_empty()); // movie 11 has rank 0

    // count map mirrors the set but never counts
    let counts = queries.co_actors_with_count_in_movies_with_rank_above(shared, 6.0);
    assert_eq!(counts.len(), expected);
    assert!(counts.values().all(|&c| c == 0));

    // directors reuse the actors' names, so every director also acts
    assert!(graph
        .directors()
        .all(|director| queries.is_also_actor(director)));
}

#[test]
fn update_workload_end_to_end() {
    let mut graph = load(100);

    graph.calc_actor_avg_movie_ranks();
    graph.calc_director_avg_movie_ranks();

    // every rated lead's average equals its single movie's rank
    for id in 1..=100u32 {
        let actor = graph.actor(ActorId::new(id)).unwrap();
        let rank = f64::from(id % 11);
        if rank > 0.0 {
            assert_eq!(actor.avg_movies_rank, Some(rank));
        } else {
            assert_eq!(actor.avg_movies_rank, None);
        }
    }

    let removed = graph.delete_movies_with_rank_below(4.0).unwrap();
    let expected_removed = (1..=100u32).filter(|id| id % 11 < 4).count();
    assert_eq!(removed, expected_removed);

    // no surviving actor or director references a deleted movie
    for actor in graph.actors() {
        for &role_id in &actor.roles {
            let role = graph.role(role_id);
            assert!(graph.movie(role.movie).is_some());
            assert_eq!(role.actor, actor.id);
        }
    }
    for director in graph.directors() {
        for &movie_id in &director.movies {
            assert!(graph.movie(movie_id).is_some());
        }
    }

    // leads of deleted movies now have no roles and get dropped
    let orphaned = graph.delete_actors_with_no_roles().unwrap();
    assert_eq!(orphaned, expected_removed);
    let orphaned = graph.delete_directors_with_no_movies().unwrap();
    assert_eq!(orphaned, expected_removed);

    // the name indices still answer for deleted actors
    let survivor = graph
        .actors()
        .find(|a| a.id != ActorId::new(999))
        .unwrap();
    let queries = QueryEngine::new(&graph);
    // first names are unique per actor, so the survivor sees no one else
    let names = queries.last_names_of_actors_with_same_first_name_as(survivor);
    assert!(names.is_empty());
    // but the bucket of a deleted actor keeps its entry
    let deleted_first = format!("First{}", (1..=100u32).find(|id| id % 11 < 4).unwrap());
    assert_eq!(graph.names().same_first_name(&deleted_first).len(), 1);
}

#[test]
fn bump_then_recompute_converges_to_ceiling() {
    let mut graph = load(50);

    graph.bump_rank_of_movies_made_in_or_before(2100, 1.0);
    let queries = QueryEngine::new(&graph);
    assert_eq!(queries.num_movies_with_rank_above(10.0), 50);

    graph.calc_actor_avg_movie_ranks();
    for actor in graph.actors() {
        assert_eq!(actor.avg_movies_rank, Some(10.0));
    }
}

#[test]
fn avg_age_of_empty_selection_is_nan() {
    let graph = load(10);
    let queries = QueryEngine::new(&graph);
    assert!(queries
        .avg_age_of_movies_with_rank_above(2020, 11.0)
        .is_nan());
}

#[test]
fn histogram_follows_year_distribution() {
    let graph = load(100);
    let queries = QueryEngine::new(&graph);

    let histogram = queries.movies_age_histogram(1950, 0.0);
    let total: u32 = histogram.iter().sum();
    assert_eq!(total, 100);

    // buckets line up with the year formula
    for (offset, &count) in histogram.iter().enumerate() {
        let expected = (1..=100u32).filter(|id| (id % 60) as usize == offset).count();
        assert_eq!(count as usize, expected, "bucket {offset}");
    }
}

#[test]
fn director_ownership_links_both_sides() {
    let graph = load(10);
    for id in 1..=10u32 {
        let movie = graph.movie(MovieId::new(id)).unwrap();
        assert_eq!(movie.directors, vec![DirectorId::new(id)]);
        let director = graph.director(DirectorId::new(id)).unwrap();
        assert_eq!(director.movies, vec![MovieId::new(id)]);
    }
}
