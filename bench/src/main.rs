use costar_core::{bounded_paths, build_graph, shortest_path, MovieRecord, DEFAULT_MAX_LENGTH};
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let movie_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: costar-bench [mode] [movie_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  chain       Each movie shares one actor with the next (deep paths)");
        println!("  ensemble    Preferential casting: busy actors get busier (hub-and-spoke)");
        println!("  clusters    Two studios joined by a thin bridge of crossover movies");
        println!("  random      Uniformly random casts");
        println!();
        println!("Default movie_count: 100000");
        return;
    }

    println!("costar-bench");
    println!("============");
    println!();

    let generators: Vec<(&str, fn(u64) -> Vec<MovieRecord>)> = match mode {
        "chain" => vec![("Chain", gen_chain)],
        "ensemble" => vec![("Ensemble (preferential casting)", gen_ensemble)],
        "clusters" => vec![("Clusters (studio-bridge-studio)", gen_clusters)],
        "random" => vec![("Random casts", gen_random)],
        "all" => vec![
            ("Chain", gen_chain as fn(u64) -> Vec<MovieRecord>),
            ("Ensemble (preferential casting)", gen_ensemble),
            ("Clusters (studio-bridge-studio)", gen_clusters),
            ("Random casts", gen_random),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, movie_count);
    }
}

fn run_benchmark(name: &str, generator: fn(u64) -> Vec<MovieRecord>, movie_count: u64) {
    println!("--- {} ---", name);
    println!("Target: {} movies", movie_count);

    let t = Instant::now();
    let records = generator(movie_count);
    let gen_time = t.elapsed();

    let t = Instant::now();
    let graph = match build_graph(&records) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Build failed: {}", e);
            return;
        }
    };
    let build_time = t.elapsed();
    println!(
        "Generated in {:.2}s, built in {:.2}s — {} vertices, {} edges, ~{:.0}MB",
        gen_time.as_secs_f64(),
        build_time.as_secs_f64(),
        graph.vertex_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    // First-cast actor of the first movie to first-cast actor of the last
    let (Some(origin), Some(destination)) = (
        records.first().and_then(|r| r.cast.first()),
        records.last().and_then(|r| r.cast.first()),
    ) else {
        println!("No cast to query");
        println!();
        return;
    };

    println!();
    let t = Instant::now();
    let path = shortest_path(&graph, origin, destination);
    let elapsed = t.elapsed();
    match path {
        Some(p) => println!(
            "Shortest path {} → {}: {} edges in {:.1}ms",
            origin,
            destination,
            p.length,
            elapsed.as_secs_f64() * 1000.0
        ),
        None => println!(
            "Shortest path {} → {}: no path ({:.1}ms)",
            origin,
            destination,
            elapsed.as_secs_f64() * 1000.0
        ),
    }

    println!();
    println!("{:>8} {:>12} {:>12} {:>10}", "cap", "paths", "visited", "time");
    println!("{:->8} {:->12} {:->12} {:->10}", "", "", "", "");

    for cap in [2, 4, DEFAULT_MAX_LENGTH, 10] {
        let t = Instant::now();
        let result = bounded_paths(&graph, origin, destination, Some(cap));
        let elapsed = t.elapsed();
        println!(
            "{:>8} {:>12} {:>12} {:>8.1}ms",
            cap,
            result.paths.len(),
            result.vertices_visited,
            elapsed.as_secs_f64() * 1000.0
        );
        // Search exhausted the component; larger caps change nothing
        if !result.cutoff_reached {
            println!("{:>8} (no cutoff, component exhausted)", "");
            break;
        }
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators: single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
}

fn actor(id: u64) -> String {
    format!("actor_{}", id)
}

fn movie(id: u64) -> String {
    format!("movie_{}", id)
}

/// Chain: movie i casts actor i and actor i+1.
///
/// Path length grows linearly with the dataset. Tests deep BFS and path
/// reconstruction through the parent-pointer arena.
fn gen_chain(movie_count: u64) -> Vec<MovieRecord> {
    (0..movie_count)
        .map(|i| MovieRecord::new(movie(i), [actor(i), actor(i + 1)]))
        .collect()
}

/// Preferential casting: each movie has 5 roles, each filled by a newcomer
/// or by sampling from past roles (busy actors are more likely to be cast).
fn gen_ensemble(movie_count: u64) -> Vec<MovieRecord> {
    let roles = 5u64;
    let mut rng = FastRng::new(12345);
    let mut past_roles: Vec<u64> = Vec::with_capacity((movie_count * roles) as usize);
    let mut next_actor = 0u64;
    let mut records = Vec::with_capacity(movie_count as usize);

    for i in 0..movie_count {
        let mut cast = Vec::with_capacity(roles as usize);
        for _ in 0..roles {
            let id = if past_roles.is_empty() || rng.next(3) == 0 {
                next_actor += 1;
                next_actor - 1
            } else {
                past_roles[rng.next(past_roles.len() as u64) as usize]
            };
            past_roles.push(id);
            cast.push(actor(id));
        }
        records.push(MovieRecord::new(movie(i), cast));
    }

    records
}

/// Two studios with their own actor pools, joined by a handful of crossover
/// movies. Worst case for "find path through bottleneck."
fn gen_clusters(movie_count: u64) -> Vec<MovieRecord> {
    let bridge_movies = 10u64.min(movie_count);
    let studio_movies = (movie_count - bridge_movies) / 2;
    let pool = (studio_movies / 2).max(10);
    let mut rng = FastRng::new(99999);
    let mut records = Vec::with_capacity(movie_count as usize);

    // Studio A casts actors 0..pool, studio B casts pool..2*pool
    for (studio, offset) in [(0u64, 0u64), (1, pool)] {
        for i in 0..studio_movies {
            let cast: Vec<String> = (0..4).map(|_| actor(offset + rng.next(pool))).collect();
            records.push(MovieRecord::new(movie(studio * studio_movies + i), cast));
        }
    }

    // Crossovers: one actor from each studio, studio B first so the last
    // record queries across the bridge
    for i in 0..bridge_movies {
        let cast = [actor(pool + rng.next(pool)), actor(rng.next(pool))];
        records.push(MovieRecord::new(movie(2 * studio_movies + i), cast));
    }

    records
}

/// Uniformly random casts of 3 drawn from a pool of 2 actors per movie.
/// Baseline topology with no structure.
fn gen_random(movie_count: u64) -> Vec<MovieRecord> {
    let pool = (movie_count * 2).max(1);
    let mut rng = FastRng::new(54321);
    (0..movie_count)
        .map(|i| {
            let cast: Vec<String> = (0..3).map(|_| actor(rng.next(pool))).collect();
            MovieRecord::new(movie(i), cast)
        })
        .collect()
}
