//! Construction parameters.

use std::fmt;
use std::str::FromStr;

use stepgrid_core::{NodeKind, Point, Range};

use crate::distance::Heuristic;
use crate::error::ConfigError;
use crate::frontier::{Frontier, FrontierKey};
use crate::graph::GridGraph;
use crate::search::PathSearch;

/// Which search a graph's frontier is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Uniform-cost search, frontier ordered by distance.
    #[default]
    Dijkstra,
    /// Heuristic search, frontier ordered by score.
    AStar,
    /// Unweighted search over a FIFO frontier.
    #[cfg_attr(feature = "serde", serde(rename = "bfs"))]
    BreadthFirst,
}

impl Algorithm {
    /// A fresh frontier container for this algorithm.
    pub fn frontier(self) -> Frontier {
        match self {
            Self::Dijkstra => Frontier::heap(FrontierKey::Distance),
            Self::AStar => Frontier::heap(FrontierKey::Score),
            Self::BreadthFirst => Frontier::fifo(),
        }
    }

    /// The heuristic actually applied: only A* uses the configured one.
    pub fn effective_heuristic(self, configured: Heuristic) -> Heuristic {
        match self {
            Self::AStar => configured,
            Self::Dijkstra | Self::BreadthFirst => Heuristic::Zero,
        }
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a*" => Ok(Self::AStar),
            "bfs" => Ok(Self::BreadthFirst),
            _ => Err(ConfigError::InvalidAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
            Self::BreadthFirst => "bfs",
        })
    }
}

/// Everything needed to build a rectangular grid and a search over it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub rows: i32,
    pub columns: i32,
    pub algorithm: Algorithm,
    /// Only used by [`Algorithm::AStar`].
    pub heuristic: Heuristic,
    pub diagonal: bool,
    pub start: Point,
    pub finish: Point,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            rows: 11,
            columns: 25,
            algorithm: Algorithm::Dijkstra,
            heuristic: Heuristic::Euclidean,
            diagonal: true,
            start: Point::new(4, 5),
            finish: Point::new(20, 5),
        }
    }
}

impl SearchConfig {
    /// The grid rectangle described by `rows` × `columns`.
    pub fn range(&self) -> Range {
        Range::with_size(self.columns, self.rows)
    }

    /// Check dimensions and start/finish placement.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows <= 0 || self.columns <= 0 {
            return Err(ConfigError::InvalidDimensions {
                rows: self.rows,
                columns: self.columns,
            });
        }
        let range = self.range();
        for (role, pos) in [(NodeKind::Start, self.start), (NodeKind::Finish, self.finish)] {
            if !range.contains(pos) {
                return Err(ConfigError::OutOfBounds { role, pos });
            }
        }
        if self.start == self.finish {
            return Err(ConfigError::SameStartAndFinish(self.start));
        }
        Ok(())
    }

    /// Build the open grid with start and finish placed.
    pub fn build_graph(&self) -> Result<GridGraph, ConfigError> {
        self.validate()?;
        let mut graph = GridGraph::rect(self.range(), self.algorithm, self.diagonal);
        graph.set_start(self.start)?;
        graph.set_finish(self.finish)?;
        Ok(graph)
    }

    /// Build the grid and a search ready for its first step.
    pub fn build(&self) -> Result<PathSearch, ConfigError> {
        PathSearch::new(self.build_graph()?, self.heuristic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_parsing() {
        assert_eq!("Dijkstra".parse::<Algorithm>().unwrap(), Algorithm::Dijkstra);
        assert_eq!("astar".parse::<Algorithm>().unwrap(), Algorithm::AStar);
        assert_eq!("A*".parse::<Algorithm>().unwrap(), Algorithm::AStar);
        assert_eq!("bfs".parse::<Algorithm>().unwrap(), Algorithm::BreadthFirst);
        assert_eq!(
            "greedy".parse::<Algorithm>(),
            Err(ConfigError::InvalidAlgorithm("greedy".into()))
        );
        assert_eq!(Algorithm::AStar.to_string(), "astar");
    }

    #[test]
    fn only_astar_uses_heuristic() {
        assert_eq!(
            Algorithm::AStar.effective_heuristic(Heuristic::Manhattan),
            Heuristic::Manhattan
        );
        assert_eq!(
            Algorithm::Dijkstra.effective_heuristic(Heuristic::Manhattan),
            Heuristic::Zero
        );
        assert_eq!(
            Algorithm::BreadthFirst.effective_heuristic(Heuristic::Euclidean),
            Heuristic::Zero
        );
    }

    #[test]
    fn frontier_flavours() {
        assert_eq!(Algorithm::Dijkstra.frontier().key(), Some(FrontierKey::Distance));
        assert_eq!(Algorithm::AStar.frontier().key(), Some(FrontierKey::Score));
        assert_eq!(Algorithm::BreadthFirst.frontier().key(), None);
    }

    #[test]
    fn default_builds() {
        let cfg = SearchConfig::default();
        let graph = cfg.build_graph().unwrap();
        assert_eq!(graph.len(), 11 * 25);
        assert_eq!(graph.start(), graph.id_at(Point::new(4, 5)));
        assert_eq!(graph.finish(), graph.id_at(Point::new(20, 5)));
        assert!(graph.diagonal());
    }

    #[test]
    fn validation_errors() {
        let cfg = SearchConfig {
            rows: 0,
            ..SearchConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidDimensions { rows: 0, columns: 25 })
        );

        let cfg = SearchConfig {
            finish: Point::new(25, 0),
            ..SearchConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::OutOfBounds {
                role: NodeKind::Finish,
                pos: Point::new(25, 0)
            })
        );

        let cfg = SearchConfig {
            start: Point::new(1, 1),
            finish: Point::new(1, 1),
            ..SearchConfig::default()
        };
        assert!(matches!(cfg.build(), Err(ConfigError::SameStartAndFinish(_))));
    }
}
