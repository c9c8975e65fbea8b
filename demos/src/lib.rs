//! Shared setup for the headless demos.
//!
//! Demonstrates: building a grid from [`SearchConfig`], scattering walls
//! with a seeded RNG, and driving every algorithm to completion with
//! [`PathSearch::run`].

use rand::{Rng, RngExt};
use stepgrid_core::NodeKind;
use stepgrid_paths::{
    Algorithm, ConfigError, GridGraph, Heuristic, PathSearch, RunSummary, SearchConfig,
};

/// Percentage of open cells turned into walls by [`scatter_walls`].
pub const WALL_PERCENT: u32 = 30;

/// Build the grid described by `cfg`, turning roughly `percent`% of the
/// open cells into walls. Start and finish are never walled.
pub fn scatter_walls(
    cfg: &SearchConfig,
    percent: u32,
    rng: &mut impl Rng,
) -> Result<GridGraph, ConfigError> {
    cfg.validate()?;
    let cells: Vec<_> = cfg
        .range()
        .iter()
        .map(|p| {
            let kind = if p == cfg.start {
                NodeKind::Start
            } else if p == cfg.finish {
                NodeKind::Finish
            } else if rng.random_range(0..100) < percent {
                NodeKind::Wall
            } else {
                NodeKind::Open
            };
            (p, kind)
        })
        .collect();
    Ok(GridGraph::with_nodes(cells, cfg.algorithm, cfg.diagonal)?)
}

/// The algorithm/heuristic pairs compared by [`race`].
pub const CONTENDERS: [(Algorithm, Heuristic); 4] = [
    (Algorithm::Dijkstra, Heuristic::Zero),
    (Algorithm::AStar, Heuristic::Euclidean),
    (Algorithm::AStar, Heuristic::Manhattan),
    (Algorithm::BreadthFirst, Heuristic::Zero),
];

/// Run every contender on the same walled grid.
pub fn race(
    cfg: &SearchConfig,
    percent: u32,
    rng: &mut impl Rng,
) -> Result<Vec<(Algorithm, Heuristic, RunSummary)>, ConfigError> {
    let mut graph = scatter_walls(cfg, percent, rng)?;
    let mut out = Vec::with_capacity(CONTENDERS.len());
    for (algorithm, heuristic) in CONTENDERS {
        graph.set_algorithm(algorithm);
        let mut search = PathSearch::new(graph, heuristic)?;
        let summary = search.run();
        out.push((algorithm, heuristic, summary));
        graph = search.into_graph();
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use stepgrid_core::Point;

    #[test]
    fn walls_spare_start_and_finish() {
        let cfg = SearchConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let g = scatter_walls(&cfg, 100, &mut rng).unwrap();
        assert_eq!(g.node_at(cfg.start).unwrap().kind(), NodeKind::Start);
        assert_eq!(g.node_at(cfg.finish).unwrap().kind(), NodeKind::Finish);
        assert_eq!(g.node_at(Point::new(0, 0)).unwrap().kind(), NodeKind::Wall);
    }

    #[test]
    fn same_seed_same_grid() {
        let cfg = SearchConfig::default();
        let a = scatter_walls(&cfg, WALL_PERCENT, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = scatter_walls(&cfg, WALL_PERCENT, &mut StdRng::seed_from_u64(9)).unwrap();
        let kinds = |g: &GridGraph| g.nodes().iter().map(|n| n.kind()).collect::<Vec<_>>();
        assert_eq!(kinds(&a), kinds(&b));
    }

    #[test]
    fn race_agrees_on_reachability() {
        let cfg = SearchConfig {
            diagonal: false,
            ..SearchConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(42);
        let results = race(&cfg, WALL_PERCENT, &mut rng).unwrap();
        assert_eq!(results.len(), CONTENDERS.len());
        let found = results[0].2.path_found;
        for (_, _, r) in &results {
            assert_eq!(r.path_found, found);
            assert_eq!(r.cost, results[0].2.cost);
        }
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = SearchConfig {
            columns: -1,
            ..SearchConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            race(&cfg, WALL_PERCENT, &mut rng),
            Err(ConfigError::InvalidDimensions { .. })
        ));
    }
}
