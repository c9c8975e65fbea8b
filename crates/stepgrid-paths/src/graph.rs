//! The searchable grid: node arena, classification and frontier.

use std::collections::HashMap;

use stepgrid_core::{Layout, NodeKind, Point, Range};

use crate::config::Algorithm;
use crate::error::GraphError;
use crate::frontier::Frontier;
use crate::neighbors::{self, Neighbor};

/// Stable index of a node in its graph's arena.
pub type NodeId = usize;

/// A grid cell plus the state one search run writes into it.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) pos: Point,
    pub(crate) kind: NodeKind,
    pub(crate) visited: bool,
    pub(crate) queued: bool,
    pub(crate) distance: f64,
    pub(crate) score: f64,
    pub(crate) predecessor: Option<NodeId>,
    pub(crate) in_path: bool,
}

impl Node {
    fn new(pos: Point, kind: NodeKind) -> Self {
        let root = if kind == NodeKind::Start { 0.0 } else { f64::INFINITY };
        Self {
            pos,
            kind,
            visited: false,
            queued: false,
            distance: root,
            score: root,
            predecessor: None,
            in_path: false,
        }
    }

    fn clear_search_state(&mut self) {
        self.visited = false;
        self.queued = false;
        self.predecessor = None;
        self.in_path = false;
        if self.kind == NodeKind::Start {
            self.distance = 0.0;
            self.score = 0.0;
        } else {
            self.distance = f64::INFINITY;
            self.score = f64::INFINITY;
        }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Whether the node has been expanded (popped from the frontier).
    #[inline]
    pub fn visited(&self) -> bool {
        self.visited
    }

    /// Whether the node currently sits in the frontier container.
    #[inline]
    pub fn queued(&self) -> bool {
        self.queued
    }

    /// Best known path cost from the start; `+∞` when undiscovered.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// `distance` plus the heuristic estimate; `+∞` when undiscovered.
    #[inline]
    pub fn score(&self) -> f64 {
        self.score
    }

    #[inline]
    pub fn predecessor(&self) -> Option<NodeId> {
        self.predecessor
    }

    #[inline]
    pub fn in_path(&self) -> bool {
        self.in_path
    }

    /// Whether a search has reached this node.
    #[inline]
    pub fn discovered(&self) -> bool {
        self.distance.is_finite()
    }
}

/// A grid of nodes with at most one start and one finish.
///
/// Nodes are created once and addressed by [`NodeId`]. Every mutation of
/// the classification resets all search state, and [`reset`](Self::reset)
/// leaves the frontier empty: a search seeds it with the start node.
#[derive(Debug, Clone)]
pub struct GridGraph {
    nodes: Vec<Node>,
    index: HashMap<Point, NodeId>,
    frontier: Frontier,
    algorithm: Algorithm,
    diagonal: bool,
    start: Option<NodeId>,
    finish: Option<NodeId>,
    visited_count: usize,
}

impl GridGraph {
    /// An empty graph; add nodes with [`push`](Self::push).
    pub fn new(algorithm: Algorithm, diagonal: bool) -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            frontier: algorithm.frontier(),
            algorithm,
            diagonal,
            start: None,
            finish: None,
            visited_count: 0,
        }
    }

    /// Build a graph from an explicit node list.
    ///
    /// A later start or finish replaces an earlier one, which becomes open.
    pub fn with_nodes(
        nodes: impl IntoIterator<Item = (Point, NodeKind)>,
        algorithm: Algorithm,
        diagonal: bool,
    ) -> Result<Self, GraphError> {
        let mut g = Self::new(algorithm, diagonal);
        for (pos, kind) in nodes {
            g.insert_node(pos, kind)?;
        }
        g.reset();
        Ok(g)
    }

    /// One open node per cell of `range`, in row-major order.
    pub fn rect(range: Range, algorithm: Algorithm, diagonal: bool) -> Self {
        let mut g = Self::new(algorithm, diagonal);
        g.nodes.reserve(range.len());
        for p in range {
            g.index.insert(p, g.nodes.len());
            g.nodes.push(Node::new(p, NodeKind::Open));
        }
        g
    }

    /// Build a graph from a parsed text layout.
    pub fn from_layout(layout: &Layout, algorithm: Algorithm, diagonal: bool) -> Self {
        let mut g = Self::rect(layout.range(), algorithm, diagonal);
        for (id, (_, kind)) in layout.iter().enumerate() {
            g.nodes[id].kind = kind;
            match kind {
                NodeKind::Start => g.start = Some(id),
                NodeKind::Finish => g.finish = Some(id),
                _ => {}
            }
        }
        g.reset();
        g
    }

    /// Append a node and reset.
    pub fn push(&mut self, pos: Point, kind: NodeKind) -> Result<NodeId, GraphError> {
        let id = self.insert_node(pos, kind)?;
        self.reset();
        Ok(id)
    }

    fn insert_node(&mut self, pos: Point, kind: NodeKind) -> Result<NodeId, GraphError> {
        if self.index.contains_key(&pos) {
            return Err(GraphError::DuplicateNode(pos));
        }
        let id = self.nodes.len();
        let slot = match kind {
            NodeKind::Start => Some(&mut self.start),
            NodeKind::Finish => Some(&mut self.finish),
            _ => None,
        };
        if let Some(slot) = slot {
            if let Some(old) = slot.replace(id) {
                self.nodes[old].kind = NodeKind::Open;
            }
        }
        self.nodes.push(Node::new(pos, kind));
        self.index.insert(pos, id);
        Ok(id)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in arena order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    #[inline]
    pub fn id_at(&self, p: Point) -> Option<NodeId> {
        self.index.get(&p).copied()
    }

    #[inline]
    pub fn node_at(&self, p: Point) -> Option<&Node> {
        self.id_at(p).map(|id| &self.nodes[id])
    }

    #[inline]
    pub fn start(&self) -> Option<NodeId> {
        self.start
    }

    #[inline]
    pub fn finish(&self) -> Option<NodeId> {
        self.finish
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[inline]
    pub fn diagonal(&self) -> bool {
        self.diagonal
    }

    /// The frontier container (read-only).
    #[inline]
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Number of nodes expanded since the last reset.
    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited_count
    }

    /// Every node sorted by `(x, y)` ascending.
    pub fn all_nodes_for_display(&self) -> Vec<&Node> {
        let mut out: Vec<&Node> = self.nodes.iter().collect();
        out.sort_by_key(|n| n.pos.column_major());
        out
    }

    /// Unexpanded, non-wall neighbors of `p`, orthogonal before diagonal.
    pub fn neighbors_of(&self, p: Point) -> Vec<Neighbor> {
        let mut buf = Vec::with_capacity(8);
        self.neighbors_into(p, &mut buf);
        buf
    }

    /// Like [`neighbors_of`](Self::neighbors_of), reusing `buf`.
    pub fn neighbors_into(&self, p: Point, buf: &mut Vec<Neighbor>) {
        neighbors::collect(
            p,
            self.diagonal,
            |q| self.id_at(q),
            |id| {
                let n = &self.nodes[id];
                !n.visited && !n.kind.is_wall()
            },
            buf,
        );
    }

    // -----------------------------------------------------------------------
    // Frontier
    // -----------------------------------------------------------------------

    /// Mark `id` queued and insert it into the frontier.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a node of this graph.
    pub fn enqueue(&mut self, id: NodeId) {
        self.nodes[id].queued = true;
        self.frontier.insert(id, &self.nodes);
    }

    /// Pop the next node and move it to the visited partition.
    ///
    /// Returns `None` once the frontier is exhausted.
    pub fn dequeue(&mut self) -> Option<NodeId> {
        let id = self.frontier.pop(&self.nodes)?;
        let node = &mut self.nodes[id];
        node.queued = false;
        node.visited = true;
        self.visited_count += 1;
        Some(id)
    }

    /// Restore frontier order after queued keys changed in place.
    pub fn reprioritize(&mut self) {
        self.frontier.reprioritize(&self.nodes);
    }

    /// Drop every queued node without expanding it.
    pub(crate) fn clear_frontier(&mut self) {
        for id in self.frontier.ids() {
            self.nodes[id].queued = false;
        }
        self.frontier.clear();
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Make `p` the start cell. The previous start becomes open.
    pub fn set_start(&mut self, p: Point) -> Result<(), GraphError> {
        self.assign_role(p, NodeKind::Start)
    }

    /// Make `p` the finish cell. The previous finish becomes open.
    pub fn set_finish(&mut self, p: Point) -> Result<(), GraphError> {
        self.assign_role(p, NodeKind::Finish)
    }

    fn assign_role(&mut self, p: Point, role: NodeKind) -> Result<(), GraphError> {
        let id = self.id_at(p).ok_or(GraphError::NodeNotFound(p))?;
        let (mine, other) = match role {
            NodeKind::Start => (self.start, self.finish),
            _ => (self.finish, self.start),
        };
        if other == Some(id) {
            return Err(GraphError::RoleConflict {
                pos: p,
                wanted: role,
                held: self.nodes[id].kind,
            });
        }
        if let Some(old) = mine {
            if old != id && self.nodes[old].kind == role {
                self.nodes[old].kind = NodeKind::Open;
            }
        }
        self.nodes[id].kind = role;
        match role {
            NodeKind::Start => self.start = Some(id),
            _ => self.finish = Some(id),
        }
        log::debug!("{role} moved to {p}");
        self.reset();
        Ok(())
    }

    /// Reclassify one cell and reset.
    ///
    /// `Start` and `Finish` go through [`set_start`](Self::set_start) and
    /// [`set_finish`](Self::set_finish). Turning the start or finish cell
    /// into open or wall leaves the graph without that role.
    pub fn set_node_type(&mut self, p: Point, kind: NodeKind) -> Result<(), GraphError> {
        match kind {
            NodeKind::Start => self.set_start(p),
            NodeKind::Finish => self.set_finish(p),
            NodeKind::Open | NodeKind::Wall => {
                let id = self.id_at(p).ok_or(GraphError::NodeNotFound(p))?;
                if self.start == Some(id) {
                    self.start = None;
                }
                if self.finish == Some(id) {
                    self.finish = None;
                }
                self.nodes[id].kind = kind;
                self.reset();
                Ok(())
            }
        }
    }

    /// Turn every wall back into an open cell and reset.
    pub fn clear_walls(&mut self) {
        for node in self.nodes.iter_mut().filter(|n| n.kind.is_wall()) {
            node.kind = NodeKind::Open;
        }
        self.reset();
    }

    /// Toggle diagonal adjacency and reset.
    pub fn set_diagonal(&mut self, diagonal: bool) {
        self.diagonal = diagonal;
        self.reset();
    }

    /// Switch the frontier flavour to the one `algorithm` uses and reset.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.frontier = algorithm.frontier();
        self.reset();
    }

    /// Restore every node's search state and rebuild an empty frontier.
    ///
    /// Distances and scores go back to `+∞` (the start gets `0`), all flags
    /// are cleared and predecessors dropped. Walls are kept.
    pub fn reset(&mut self) {
        for node in self.nodes.iter_mut() {
            node.clear_search_state();
        }
        self.frontier = self.frontier.emptied();
        self.visited_count = 0;
        log::debug!(
            "graph reset: {} nodes, algorithm {}, diagonal {}",
            self.nodes.len(),
            self.algorithm,
            self.diagonal
        );
    }
}
