use cinegraph::graph::{ActorId, DirectorId, Gender, MovieGraph, MovieId};
use cinegraph::query::QueryEngine;
use cinegraph::sample::sample_ids;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Synthesize a cross-linked graph: `size` movies, `size` actors,
/// `size / 10` directors, ~5 roles per movie.
fn build_graph(size: u32) -> MovieGraph {
    let mut rng = StdRng::seed_from_u64(42);
    let mut graph = MovieGraph::new();

    for id in 1..=size {
        let year = rng.gen_range(1920..=2020);
        let rank = f64::from(rng.gen_range(0..=100)) / 10.0;
        graph
            .add_movie(MovieId::new(id), format!("Movie {id}"), year, rank)
            .unwrap();
    }
    for id in 1..=size {
        graph
            .add_actor(
                ActorId::new(id),
                format!("First{}", id % 500),
                format!("Last{}", id % 1000),
                if id % 2 == 0 { Gender::Female } else { Gender::Male },
            )
            .unwrap();
    }
    for id in 1..=size / 10 {
        graph
            .add_director(
                DirectorId::new(id),
                format!("First{}", id % 500),
                format!("Last{}", id % 1000),
            )
            .unwrap();
        graph
            .add_movie_director(MovieId::new(id * 10 % size + 1), DirectorId::new(id))
            .unwrap();
    }
    for movie in 1..=size {
        for _ in 0..5 {
            let actor = rng.gen_range(1..=size);
            graph
                .add_movie_actor(MovieId::new(movie), ActorId::new(actor), None)
                .unwrap();
        }
    }
    graph
}

/// Benchmark ingestion throughput over the entity + edge add path
fn bench_ingestion(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingestion");

    for size in [1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let graph = build_graph(size);
                criterion::black_box(graph.role_count());
            });
        });
    }
    group.finish();
}

/// Benchmark full-store filter scans
fn bench_count_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_queries");
    let graph = build_graph(10_000);
    let queries = QueryEngine::new(&graph);

    group.bench_function("movies_with_rank_above", |b| {
        b.iter(|| criterion::black_box(queries.num_movies_with_rank_above(6.0)));
    });

    group.bench_function("actors_in_a_movie_with_rank_above", |b| {
        b.iter(|| criterion::black_box(queries.num_actors_in_a_movie_with_rank_above(6.0)));
    });

    group.bench_function("age_histogram", |b| {
        b.iter(|| criterion::black_box(queries.movies_age_histogram(1900, 5.0)));
    });

    group.finish();
}

/// Benchmark the two-hop traversals over sampled inputs
fn bench_traversals(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversals");
    let graph = build_graph(10_000);
    let queries = QueryEngine::new(&graph);

    let actor_ids = sample_ids(graph.max_actor_id(), 100, 72594);
    group.bench_function("co_actors", |b| {
        b.iter(|| {
            let mut max_size = 0;
            for &id in &actor_ids {
                if let Some(actor) = graph.actor(ActorId::new(id)) {
                    let co = queries.co_actors_in_movies_with_rank_above(actor, 6.0);
                    max_size = max_size.max(co.len());
                }
            }
            criterion::black_box(max_size);
        });
    });

    let movie_ids = sample_ids(graph.max_movie_id(), 100, 64798);
    group.bench_function("movies_with_actors_in_common", |b| {
        b.iter(|| {
            let mut total = 0;
            for &id in &movie_ids {
                if let Some(movie) = graph.movie(MovieId::new(id)) {
                    total += queries.movies_with_actors_in_common(movie).len();
                }
            }
            criterion::black_box(total);
        });
    });

    group.finish();
}

/// Benchmark name-index lookups
fn bench_name_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("name_queries");
    let graph = build_graph(10_000);
    let queries = QueryEngine::new(&graph);

    let actor_ids = sample_ids(graph.max_actor_id(), 100, 47619);
    group.bench_function("same_first_name_last_names", |b| {
        b.iter(|| {
            let mut max_size = 0;
            for &id in &actor_ids {
                if let Some(actor) = graph.actor(ActorId::new(id)) {
                    let names = queries.last_names_of_actors_with_same_first_name_as(actor);
                    max_size = max_size.max(names.len());
                }
            }
            criterion::black_box(max_size);
        });
    });

    group.bench_function("is_also_actor", |b| {
        b.iter(|| {
            let count = graph
                .directors()
                .filter(|d| queries.is_also_actor(d))
                .count();
            criterion::black_box(count);
        });
    });

    group.finish();
}

/// Benchmark the bulk mutation passes on a fresh clone per iteration
fn bench_mutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutations");
    let base = build_graph(10_000);

    group.bench_function("bump_rank_in_or_before", |b| {
        b.iter_batched(
            || base.clone(),
            |mut graph| {
                graph.bump_rank_of_movies_made_in_or_before(1970, 0.2);
                criterion::black_box(graph.movie_count());
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.bench_function("calc_avg_ranks", |b| {
        b.iter_batched(
            || base.clone(),
            |mut graph| {
                graph.calc_actor_avg_movie_ranks();
                graph.calc_director_avg_movie_ranks();
                criterion::black_box(graph.actor_count());
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.bench_function("delete_cascade", |b| {
        b.iter_batched(
            || base.clone(),
            |mut graph| {
                graph.delete_movies_with_rank_below(4.0).unwrap();
                graph.delete_actors_with_no_roles().unwrap();
                graph.delete_directors_with_no_movies().unwrap();
                criterion::black_box(graph.movie_count());
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_ingestion,
    bench_count_queries,
    bench_traversals,
    bench_name_queries,
    bench_mutations
);
criterion_main!(benches);
