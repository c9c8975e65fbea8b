//! Stepwise shortest-path search on 2D grids.
//!
//! This crate computes shortest paths one observable step at a time, so a
//! renderer or test harness can inspect the frontier, the visited set and
//! the path as it is revealed:
//!
//! - **Dijkstra** uniform-cost search ([`Algorithm::Dijkstra`])
//! - **A\*** with a Euclidean or Manhattan heuristic ([`Algorithm::AStar`])
//! - **BFS** over a FIFO frontier ([`Algorithm::BreadthFirst`])
//!
//! A [`GridGraph`] owns the nodes and the frontier container; a
//! [`PathSearch`] owns the graph and drives it with
//! [`step`](PathSearch::step). [`SearchConfig`] builds both from grid
//! dimensions and start/finish coordinates.
//!
//! # Containers
//!
//! | Type | Frontier for |
//! |---|---|
//! | [`PriorityHeap`] keyed by [`FrontierKey::Distance`] | Dijkstra |
//! | [`PriorityHeap`] keyed by [`FrontierKey::Score`] | A* |
//! | [`FifoQueue`] | BFS |

mod config;
mod distance;
mod error;
mod fifo;
mod frontier;
mod graph;
mod heap;
mod neighbors;
mod search;

pub use config::{Algorithm, SearchConfig};
pub use distance::{Heuristic, euclidean, manhattan};
pub use error::{ConfigError, GraphError};
pub use fifo::FifoQueue;
pub use frontier::{Frontier, FrontierKey};
pub use graph::{GridGraph, Node, NodeId};
pub use heap::{HeapMode, PriorityHeap};
pub use neighbors::{DIAGONAL_COST, Neighbor, ORTHOGONAL_COST, edge_cost};
pub use search::{PathSearch, RunSummary, SearchState};
pub use stepgrid_core::{Layout, LayoutError, NodeKind, Point, Range};
