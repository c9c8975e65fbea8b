//! The container holding discovered-but-unexpanded nodes.

use crate::fifo::FifoQueue;
use crate::graph::{Node, NodeId};
use crate::heap::PriorityHeap;

/// Which node field orders a heap frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierKey {
    /// Path cost from the start (Dijkstra).
    Distance,
    /// Path cost plus heuristic estimate (A*).
    Score,
}

impl FrontierKey {
    #[inline]
    pub fn of(self, node: &Node) -> f64 {
        match self {
            Self::Distance => node.distance,
            Self::Score => node.score,
        }
    }
}

/// Either a min-heap keyed by a node field or a FIFO queue.
#[derive(Debug, Clone)]
pub enum Frontier {
    Heap {
        heap: PriorityHeap<NodeId>,
        key: FrontierKey,
    },
    Fifo(FifoQueue<NodeId>),
}

impl Frontier {
    pub fn heap(key: FrontierKey) -> Self {
        Self::Heap {
            heap: PriorityHeap::min(),
            key,
        }
    }

    pub fn fifo() -> Self {
        Self::Fifo(FifoQueue::new())
    }

    /// A fresh, empty frontier of the same flavour.
    pub(crate) fn emptied(&self) -> Self {
        match self {
            Self::Heap { heap, key } => Self::Heap {
                heap: PriorityHeap::new(heap.mode()),
                key: *key,
            },
            Self::Fifo(_) => Self::fifo(),
        }
    }

    pub(crate) fn insert(&mut self, id: NodeId, nodes: &[Node]) {
        match self {
            Self::Heap { heap, key } => {
                let key = *key;
                heap.insert_by(id, |i| key.of(&nodes[*i]));
            }
            Self::Fifo(q) => q.insert(id),
        }
    }

    pub(crate) fn pop(&mut self, nodes: &[Node]) -> Option<NodeId> {
        match self {
            Self::Heap { heap, key } => {
                let key = *key;
                heap.pop_by(|i| key.of(&nodes[*i]))
            }
            Self::Fifo(q) => q.pop(),
        }
    }

    /// Re-sift after keys of queued nodes changed. No-op for a FIFO.
    pub(crate) fn reprioritize(&mut self, nodes: &[Node]) {
        if let Self::Heap { heap, key } = self {
            let key = *key;
            heap.heapify_by(|i| key.of(&nodes[*i]));
        }
    }

    pub(crate) fn clear(&mut self) {
        match self {
            Self::Heap { heap, .. } => heap.clear(),
            Self::Fifo(q) => q.clear(),
        }
    }

    /// The node the next pop would return.
    pub fn peek(&self) -> Option<NodeId> {
        match self {
            Self::Heap { heap, .. } => heap.peek().copied(),
            Self::Fifo(q) => q.peek().copied(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Heap { heap, .. } => heap.len(),
            Self::Fifo(q) => q.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Queued ids in container order.
    pub fn ids(&self) -> Vec<NodeId> {
        match self {
            Self::Heap { heap, .. } => heap.iter().copied().collect(),
            Self::Fifo(q) => q.iter().copied().collect(),
        }
    }

    /// The ordering key, or `None` for a FIFO.
    pub fn key(&self) -> Option<FrontierKey> {
        match self {
            Self::Heap { key, .. } => Some(*key),
            Self::Fifo(_) => None,
        }
    }
}
