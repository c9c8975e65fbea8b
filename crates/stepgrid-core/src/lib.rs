//! **stepgrid-core** — grid primitives shared by the *stepgrid* crates.
//!
//! This crate provides integer geometry ([`Point`], [`Range`]), the cell
//! classification used by search graphs ([`NodeKind`]) and text layouts
//! ([`Layout`]) for describing grids with walls, a start and a finish.

pub mod geom;
pub mod layout;
pub mod tile;

pub use geom::{Point, Range, RangeIter};
pub use layout::{Layout, LayoutError};
pub use tile::NodeKind;

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_round_trip() {
        let p = Point::new(3, -7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn node_kind_round_trip() {
        let json = serde_json::to_string(&NodeKind::Wall).unwrap();
        let back: NodeKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NodeKind::Wall);
    }
}
