//! Stepwise Dijkstra / A* / BFS with progressive path replay.
//!
//! A [`PathSearch`] owns its [`GridGraph`] and advances one unit of work
//! per [`step`](PathSearch::step): either one frontier expansion or, once
//! the finish has been reached, one more node of the path marked
//! `in_path`. Callers inspect the graph between steps to draw the frontier,
//! the visited set and the growing path.

use stepgrid_core::{NodeKind, Point};

use crate::distance::Heuristic;
use crate::error::ConfigError;
use crate::graph::{GridGraph, NodeId};
use crate::neighbors::Neighbor;

/// Phase of a search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Expanding the frontier.
    Searching,
    /// The finish was reached; the path is being revealed.
    PathFound,
    /// Nothing left to do, with or without a path.
    Done,
}

/// Outcome of driving a search to completion with [`PathSearch::run`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Steps taken in this call, including the final one returning `true`.
    pub steps: usize,
    pub path_found: bool,
    /// Number of nodes on the path, both endpoints included.
    pub path_len: usize,
    /// Cost of the path, if one was found.
    pub cost: Option<f64>,
    /// Nodes expanded during the run.
    pub visited: usize,
}

/// An incremental shortest-path search over a [`GridGraph`].
#[derive(Debug, Clone)]
pub struct PathSearch {
    graph: GridGraph,
    /// Heuristic as configured; only A* applies it.
    heuristic: Heuristic,
    start: NodeId,
    finish: NodeId,
    state: SearchState,
    /// Start to finish; empty until the finish is reached.
    path: Vec<NodeId>,
    /// Path nodes revealed so far, counted from the finish.
    cursor: usize,
    steps: usize,
    nbuf: Vec<Neighbor>,
}

impl PathSearch {
    /// Take ownership of `graph`, reset it and seed the frontier with the
    /// start node.
    ///
    /// Fails when the graph has no start or no finish.
    pub fn new(graph: GridGraph, heuristic: Heuristic) -> Result<Self, ConfigError> {
        let start = graph.start().ok_or(ConfigError::MissingStart)?;
        let finish = graph.finish().ok_or(ConfigError::MissingFinish)?;
        let mut search = Self {
            graph,
            heuristic,
            start,
            finish,
            state: SearchState::Searching,
            path: Vec::new(),
            cursor: 0,
            steps: 0,
            nbuf: Vec::with_capacity(8),
        };
        search.seed();
        log::debug!(
            "{} search from {} to {} ({} nodes, heuristic {})",
            search.graph.algorithm(),
            search.graph.nodes()[start].pos(),
            search.graph.nodes()[finish].pos(),
            search.graph.len(),
            search.effective_heuristic()
        );
        Ok(search)
    }

    fn seed(&mut self) {
        self.graph.reset();
        self.state = SearchState::Searching;
        self.path.clear();
        self.cursor = 0;
        self.steps = 0;
        self.graph.enqueue(self.start);
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    #[inline]
    pub fn graph(&self) -> &GridGraph {
        &self.graph
    }

    /// Give the graph back, ending the search.
    pub fn into_graph(self) -> GridGraph {
        self.graph
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.state == SearchState::Done
    }

    /// Whether the finish has been reached in this run.
    #[inline]
    pub fn path_found(&self) -> bool {
        !self.path.is_empty()
    }

    #[inline]
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// The finish node; after discovery, the node whose predecessor chain
    /// forms the path.
    #[inline]
    pub fn finish(&self) -> NodeId {
        self.finish
    }

    #[inline]
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// The heuristic applied to scores for this graph's algorithm.
    #[inline]
    pub fn effective_heuristic(&self) -> Heuristic {
        self.graph.algorithm().effective_heuristic(self.heuristic)
    }

    /// Steps taken since the last reset.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The reconstructed path, start first. Empty until found.
    #[inline]
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// Positions along the path, start first.
    pub fn path_points(&self) -> Vec<Point> {
        self.path.iter().map(|&id| self.graph.nodes()[id].pos()).collect()
    }

    /// Cost of the path, if found.
    pub fn path_cost(&self) -> Option<f64> {
        self.path_found()
            .then(|| self.graph.nodes()[self.finish].distance())
    }

    /// How many path nodes have been revealed.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Where `id` sits along the path as a fraction in `[0, 1)`, start at 0.
    pub fn path_fraction(&self, id: NodeId) -> Option<f64> {
        let at = self.path.iter().position(|&p| p == id)?;
        Some(at as f64 / self.path.len() as f64)
    }

    // -----------------------------------------------------------------------
    // Stepping
    // -----------------------------------------------------------------------

    /// Advance by one unit of work. Returns `true` once the run is over,
    /// either because no path exists or because the whole path has been
    /// revealed. Stepping a finished run does nothing and returns `true`.
    pub fn step(&mut self) -> bool {
        match self.state {
            SearchState::Searching => {
                self.steps += 1;
                self.expand()
            }
            SearchState::PathFound => {
                self.steps += 1;
                self.reveal()
            }
            SearchState::Done => true,
        }
    }

    /// Step until the run is over.
    pub fn run(&mut self) -> RunSummary {
        let before = self.steps;
        while !self.step() {}
        RunSummary {
            steps: self.steps - before,
            path_found: self.path_found(),
            path_len: self.path.len(),
            cost: self.path_cost(),
            visited: self.graph.visited_count(),
        }
    }

    fn expand(&mut self) -> bool {
        let Some(current) = self.graph.dequeue() else {
            log::debug!("frontier exhausted after {} steps: no path", self.steps);
            self.state = SearchState::Done;
            return true;
        };
        let (pos, distance) = {
            let n = &self.graph.nodes()[current];
            (n.pos(), n.distance())
        };
        let goal = self.graph.nodes()[self.finish].pos();
        let heuristic = self.effective_heuristic();

        self.graph.neighbors_into(pos, &mut self.nbuf);
        log::trace!(
            "step {}: expand {pos} at {distance:.3}, {} neighbors",
            self.steps,
            self.nbuf.len()
        );

        let mut reordered = false;
        for &Neighbor { id, cost } in &self.nbuf {
            let candidate = distance + cost;
            let node = self.graph.node_mut(id);
            if candidate < node.distance {
                node.distance = candidate;
                node.score = candidate + heuristic.estimate(node.pos, goal);
                node.predecessor = Some(current);
                if node.queued {
                    reordered = true;
                } else {
                    self.graph.enqueue(id);
                }
            }
            if id == self.finish {
                self.path = self.trace_path(id);
                self.graph.clear_frontier();
                self.state = SearchState::PathFound;
                log::debug!(
                    "path found after {} steps: {} nodes, cost {:.3}",
                    self.steps,
                    self.path.len(),
                    self.graph.nodes()[id].distance()
                );
                return false;
            }
        }
        if reordered {
            self.graph.reprioritize();
        }
        false
    }

    fn reveal(&mut self) -> bool {
        if self.cursor >= self.path.len() {
            self.state = SearchState::Done;
            return true;
        }
        let id = self.path[self.path.len() - 1 - self.cursor];
        self.graph.node_mut(id).in_path = true;
        self.cursor += 1;
        false
    }

    /// Walk predecessors from `end` back to the root, returned start first.
    fn trace_path(&self, end: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut at = Some(end);
        while let Some(id) = at {
            path.push(id);
            at = self.graph.nodes()[id].predecessor();
        }
        path.reverse();
        path
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Reset the graph and start a new run from the current start and
    /// finish.
    ///
    /// If the graph lost its start or finish the search is left `Done` and
    /// the error is returned.
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        let roles = match (self.graph.start(), self.graph.finish()) {
            (Some(start), Some(finish)) => Ok((start, finish)),
            (None, _) => Err(ConfigError::MissingStart),
            (_, None) => Err(ConfigError::MissingFinish),
        };
        match roles {
            Ok((start, finish)) => {
                self.start = start;
                self.finish = finish;
                self.seed();
                Ok(())
            }
            Err(e) => {
                log::warn!("search cannot restart: {e}");
                self.graph.reset();
                self.path.clear();
                self.cursor = 0;
                self.state = SearchState::Done;
                Err(e)
            }
        }
    }

    pub fn set_start(&mut self, p: Point) -> Result<(), ConfigError> {
        self.graph.set_start(p)?;
        self.reset()
    }

    pub fn set_finish(&mut self, p: Point) -> Result<(), ConfigError> {
        self.graph.set_finish(p)?;
        self.reset()
    }

    pub fn set_node_type(&mut self, p: Point, kind: NodeKind) -> Result<(), ConfigError> {
        self.graph.set_node_type(p, kind)?;
        self.reset()
    }

    pub fn set_diagonal(&mut self, diagonal: bool) -> Result<(), ConfigError> {
        self.graph.set_diagonal(diagonal);
        self.reset()
    }

    pub fn clear_walls(&mut self) -> Result<(), ConfigError> {
        self.graph.clear_walls();
        self.reset()
    }
}
