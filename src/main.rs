//! Benchmark driver for the movie graph engine
//!
//! Loads the six-file dataset, then runs the update and/or query
//! workloads, printing per-phase wall-clock milliseconds as a padded
//! comma-separated row. Inputs for the sampled passes come from the
//! deterministic generator in [`cinegraph::sample`], so repeated runs
//! exercise identical id sequences.

use anyhow::{bail, Context, Result};
use cinegraph::graph::{ActorId, GraphError, MovieGraph, MovieId};
use cinegraph::ingest::{self, LoadError};
use cinegraph::query::QueryEngine;
use cinegraph::sample::sample_ids;
use std::hint::black_box;
use std::path::Path;
use std::time::Instant;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        print_usage();
        bail!("expected 3 arguments, got {}", args.len() - 1);
    }

    let mode = args[1].as_str();
    let repetitions: usize = args[2]
        .parse()
        .with_context(|| format!("invalid repetition count {:?}", args[2]))?;
    let dir = Path::new(&args[3]);

    match mode {
        "-l" => {
            for _ in 0..repetitions {
                run_workload(dir, 0, false)?;
            }
        }
        "-u" => {
            for _ in 0..repetitions {
                run_workload(dir, 0, true)?;
            }
        }
        "-q" => run_workload(dir, repetitions, false)?,
        "-uq" => run_workload(dir, repetitions, true)?,
        _ => {
            print_usage();
            bail!("unknown mode {mode:?}");
        }
    }

    Ok(())
}

fn print_usage() {
    eprintln!("Usage: cinegraph [-l|-u|-q|-uq] <repetitions> <input directory>");
    eprintln!("  -l   load dataset only");
    eprintln!("  -u   run updates");
    eprintln!("  -q   run queries");
    eprintln!("  -uq  run queries on updated dataset");
}

fn run_workload(dir: &Path, query_runs: usize, run_updates: bool) -> Result<()> {
    let mut graph = MovieGraph::new();

    // timing columns are only printed for the load/update modes
    let load_width = if query_runs == 0 { 5 } else { 0 };

    load_stream(&mut graph, dir, "movies.csv", ingest::load_movies, false, load_width)?;
    load_stream(&mut graph, dir, "actors.csv", ingest::load_actors, true, load_width)?;
    load_stream(&mut graph, dir, "directors.csv", ingest::load_directors, true, load_width)?;
    load_stream(
        &mut graph,
        dir,
        "movies_directors.csv",
        ingest::load_movie_directors,
        true,
        load_width,
    )?;
    load_stream(
        &mut graph,
        dir,
        "movies_genres.csv",
        ingest::load_movie_genres,
        true,
        load_width,
    )?;
    load_stream(&mut graph, dir, "roles.csv", ingest::load_roles, true, load_width)?;

    if run_updates {
        run_update_passes(&mut graph, query_runs == 0)?;
    }

    for i in 0..query_runs {
        if i > 0 {
            println!();
        }
        run_query_passes(&graph);
    }

    println!();
    Ok(())
}

fn load_stream(
    graph: &mut MovieGraph,
    dir: &Path,
    file: &str,
    load: fn(&mut MovieGraph, &[u8]) -> Result<usize, LoadError>,
    sep: bool,
    width: usize,
) -> Result<()> {
    let path = dir.join(file);
    let bytes = std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?;

    let start = Instant::now();
    load(graph, &bytes).with_context(|| format!("loading {}", path.display()))?;
    print_time(start.elapsed().as_millis(), sep, width);
    Ok(())
}

// ── Update workload ─────────────────────────────────────────────────

fn run_update_passes(graph: &mut MovieGraph, print_times: bool) -> Result<()> {
    let wide = |w| if print_times { w } else { 0 };

    let start = Instant::now();
    for (year, factor) in [(1970, 0.2), (1989, 0.05), (2000, 0.05)] {
        graph.bump_rank_of_movies_made_in_or_before(year, factor);
    }
    print_time(start.elapsed().as_millis(), true, wide(6));

    let start = Instant::now();
    graph.calc_actor_avg_movie_ranks();
    print_time(start.elapsed().as_millis(), true, wide(4));

    let start = Instant::now();
    graph.calc_director_avg_movie_ranks();
    print_time(start.elapsed().as_millis(), true, wide(4));

    // bump a fixed pseudo-random quarter of the id space; sampled ids
    // that miss the store are skipped
    let start = Instant::now();
    let ids = sample_ids(graph.max_movie_id(), graph.movie_count() / 4, 735025);
    for id in ids {
        match graph.bump_up_rank_of_movie_and_its_actors_and_directors(MovieId::new(id), 0.1) {
            Ok(()) | Err(GraphError::MovieNotFound(_)) => {}
            Err(err) => return Err(err.into()),
        }
    }
    print_time(start.elapsed().as_millis(), true, wide(5));

    let start = Instant::now();
    graph.delete_movies_with_rank_below(4.0)?;
    print_time(start.elapsed().as_millis(), true, wide(5));

    let start = Instant::now();
    graph.delete_actors_with_no_roles()?;
    print_time(start.elapsed().as_millis(), true, wide(4));

    let start = Instant::now();
    graph.delete_directors_with_no_movies()?;
    print_time(start.elapsed().as_millis(), true, wide(4));

    Ok(())
}

// ── Query workload ──────────────────────────────────────────────────

fn run_query_passes(graph: &MovieGraph) {
    let queries = QueryEngine::new(graph);

    let start = Instant::now();
    for i in 0..100 {
        black_box(queries.num_movies_with_rank_above(f64::from(i + 1) * 0.1));
    }
    print_time(start.elapsed().as_millis(), false, 4);

    let start = Instant::now();
    for i in 0..50 {
        black_box(queries.num_actors_in_a_movie_with_rank_above(f64::from(i + 1) * 0.2));
    }
    print_time(start.elapsed().as_millis(), true, 5);

    let start = Instant::now();
    let mut max_co_actors = 0;
    for actor in graph.actors() {
        let co_actors = queries.co_actors_in_movies_with_rank_above(actor, 6.0);
        max_co_actors = max_co_actors.max(co_actors.len());
    }
    black_box(max_co_actors);
    print_time(start.elapsed().as_millis(), true, 5);

    let start = Instant::now();
    for i in 0..50 {
        black_box(queries.movies_age_histogram(1900, 5.0 + f64::from(i) * 0.1));
    }
    print_time(start.elapsed().as_millis(), true, 4);

    let start = Instant::now();
    for i in 0..50 {
        black_box(queries.avg_age_of_movies_with_rank_above(2019, 5.0 + f64::from(i) * 0.1));
    }
    print_time(start.elapsed().as_millis(), true, 4);

    let start = Instant::now();
    for _ in 0..10 {
        for year in 2019..2040 {
            black_box(queries.sum_of_all_movies_ages(year));
        }
    }
    print_time(start.elapsed().as_millis(), true, 4);

    let start = Instant::now();
    let mut total = 0usize;
    for id in sample_ids(graph.max_movie_id(), graph.movie_count() / 6, 64798) {
        if let Some(movie) = graph.movie(MovieId::new(id)) {
            total += queries.movies_with_actors_in_common(movie).len();
        }
    }
    black_box(total);
    print_time(start.elapsed().as_millis(), true, 5);

    let start = Instant::now();
    let mut max_names = 0;
    for id in sample_ids(graph.max_actor_id(), graph.actor_count() / 20, 35102) {
        if let Some(actor) = graph.actor(ActorId::new(id)) {
            let names = queries.unique_last_names_of_actors_with_same_first_name_as(actor);
            max_names = max_names.max(names.len());
        }
    }
    black_box(max_names);
    print_time(start.elapsed().as_millis(), true, 5);

    let start = Instant::now();
    let mut max_co_actors = 0;
    for id in sample_ids(graph.max_actor_id(), graph.actor_count() / 4, 72594) {
        if let Some(actor) = graph.actor(ActorId::new(id)) {
            let co_actors = queries.co_actors_with_count_in_movies_with_rank_above(actor, 6.0);
            max_co_actors = max_co_actors.max(co_actors.len());
        }
    }
    black_box(max_co_actors);
    print_time(start.elapsed().as_millis(), true, 5);

    let start = Instant::now();
    let mut max_names = 0;
    for id in sample_ids(graph.max_actor_id(), graph.actor_count() / 10, 47619) {
        if let Some(actor) = graph.actor(ActorId::new(id)) {
            let names = queries.last_names_of_actors_with_same_first_name_as(actor);
            max_names = max_names.max(names.len());
        }
    }
    black_box(max_names);
    print_time(start.elapsed().as_millis(), true, 5);

    let start = Instant::now();
    let mut count = 0usize;
    for director in graph.directors() {
        if queries.is_also_actor(director) {
            count += 1;
        }
    }
    black_box(count);
    print_time(start.elapsed().as_millis(), true, 4);

    let start = Instant::now();
    let mut total_len = 0usize;
    for actor in graph.actors() {
        total_len += actor.full_name().len();
    }
    black_box(total_len);
    print_time(start.elapsed().as_millis(), true, 4);
}

fn print_time(ms: u128, sep: bool, width: usize) {
    if width > 0 {
        if sep {
            print!(",");
        }
        print!("{ms:>width$}");
    }
}
