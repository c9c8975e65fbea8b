use std::fmt;

use stepgrid_core::{NodeKind, Point};

/// Invalid construction parameters. Fatal to the value being built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Heap mode other than `min` / `max`.
    InvalidHeapMode(String),
    /// Heuristic other than `euclidean` / `manhattan`.
    InvalidHeuristic(String),
    /// Algorithm other than `dijkstra` / `astar` / `bfs`.
    InvalidAlgorithm(String),
    /// Grid with zero or negative rows or columns.
    InvalidDimensions { rows: i32, columns: i32 },
    /// A configured start/finish lies outside the grid.
    OutOfBounds { role: NodeKind, pos: Point },
    /// Start and finish configured on the same cell.
    SameStartAndFinish(Point),
    /// The graph has no start node.
    MissingStart,
    /// The graph has no finish node.
    MissingFinish,
    /// Building the graph failed.
    Graph(GraphError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHeapMode(s) => write!(f, "heap mode must be min or max, got {s:?}"),
            Self::InvalidHeuristic(s) => {
                write!(f, "heuristic must be euclidean or manhattan, got {s:?}")
            }
            Self::InvalidAlgorithm(s) => {
                write!(f, "algorithm must be dijkstra, astar or bfs, got {s:?}")
            }
            Self::InvalidDimensions { rows, columns } => {
                write!(f, "grid must have positive size, got {columns}x{rows}")
            }
            Self::OutOfBounds { role, pos } => write!(f, "{role} cell {pos} is outside the grid"),
            Self::SameStartAndFinish(p) => write!(f, "start and finish both at {p}"),
            Self::MissingStart => f.write_str("graph has no start node"),
            Self::MissingFinish => f.write_str("graph has no finish node"),
            Self::Graph(e) => write!(f, "building graph: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Graph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GraphError> for ConfigError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}

/// A graph mutation that cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// No node at the given coordinates.
    NodeNotFound(Point),
    /// A node with these coordinates already exists.
    DuplicateNode(Point),
    /// The cell already holds the other unique role.
    RoleConflict {
        pos: Point,
        wanted: NodeKind,
        held: NodeKind,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeNotFound(p) => write!(f, "no node at {p}"),
            Self::DuplicateNode(p) => write!(f, "node at {p} already exists"),
            Self::RoleConflict { pos, wanted, held } => {
                write!(f, "cannot make {pos} the {wanted}: it is the {held}")
            }
        }
    }
}

impl std::error::Error for GraphError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let e = ConfigError::InvalidHeuristic("chebyshev".into());
        assert!(e.to_string().contains("\"chebyshev\""));
        let e = GraphError::RoleConflict {
            pos: Point::new(1, 2),
            wanted: NodeKind::Start,
            held: NodeKind::Finish,
        };
        assert_eq!(e.to_string(), "cannot make (1, 2) the start: it is the finish");
    }

    #[test]
    fn graph_errors_convert_with_source() {
        use std::error::Error;
        let e: ConfigError = GraphError::NodeNotFound(Point::new(9, 9)).into();
        assert!(e.source().is_some());
        assert!(ConfigError::MissingFinish.source().is_none());
    }
}
