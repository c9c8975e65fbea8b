use std::f64::consts::SQRT_2;

use stepgrid_core::Point;

use crate::graph::NodeId;

/// Cost of a horizontal or vertical move.
pub const ORTHOGONAL_COST: f64 = 1.0;

/// Cost of a diagonal move.
pub const DIAGONAL_COST: f64 = SQRT_2;

/// An adjacent node together with the cost of moving onto it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub id: NodeId,
    pub cost: f64,
}

/// Cost of the edge `from -> to`, or `None` when the cells are not adjacent.
#[inline]
pub fn edge_cost(from: Point, to: Point, diagonal: bool) -> Option<f64> {
    if from.is_orthogonal_to(to) {
        Some(ORTHOGONAL_COST)
    } else if diagonal && from.is_diagonal_to(to) {
        Some(DIAGONAL_COST)
    } else {
        None
    }
}

/// Fill `buf` with the neighbors of `p`, priced by [`edge_cost`].
///
/// `lookup` maps a position to the node living there, `keep` filters
/// candidates. The result is ordered by cost, then by node id, so
/// orthogonal neighbors always precede diagonal ones.
pub(crate) fn collect(
    p: Point,
    diagonal: bool,
    lookup: impl Fn(Point) -> Option<NodeId>,
    keep: impl Fn(NodeId) -> bool,
    buf: &mut Vec<Neighbor>,
) {
    buf.clear();
    for q in p.neighbors_4().into_iter().chain(p.diagonals_4()) {
        let Some(cost) = edge_cost(p, q, diagonal) else {
            continue;
        };
        if let Some(id) = lookup(q).filter(|&id| keep(id)) {
            buf.push(Neighbor { id, cost });
        }
    }
    buf.sort_by(|a, b| a.cost.total_cmp(&b.cost).then(a.id.cmp(&b.id)));
}
