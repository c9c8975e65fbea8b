//! Race every search algorithm across one randomly walled grid.
//!
//! Run: cargo run --bin race -- [seed] [wall-percent]

use rand::SeedableRng;
use rand::rngs::StdRng;
use stepgrid_demos::{WALL_PERCENT, race};
use stepgrid_paths::SearchConfig;

fn main() {
    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let percent = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(WALL_PERCENT);

    let cfg = SearchConfig::default();
    let mut rng = StdRng::seed_from_u64(seed);
    let results = match race(&cfg, percent, &mut rng) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "{}x{} grid, seed {seed}, {percent}% walls, {} -> {}",
        cfg.columns, cfg.rows, cfg.start, cfg.finish
    );
    println!(
        "{:<10} {:<10} {:>6} {:>8} {:>6} {:>9}",
        "algorithm", "heuristic", "steps", "visited", "path", "cost"
    );
    for (algorithm, heuristic, r) in results {
        let cost = r.cost.map_or_else(|| "-".to_string(), |c| format!("{c:.3}"));
        println!(
            "{:<10} {:<10} {:>6} {:>8} {:>6} {:>9}",
            algorithm.to_string(),
            heuristic.to_string(),
            r.steps,
            r.visited,
            r.path_len,
            cost
        );
    }
}
