use std::fmt;
use std::str::FromStr;

use stepgrid_core::Point;

use crate::error::ConfigError;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> f64 {
    f64::from((a.x - b.x).abs() + (a.y - b.y).abs())
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    f64::from(a.x - b.x).hypot(f64::from(a.y - b.y))
}

/// Estimate of the remaining cost from a node to the finish.
///
/// [`Euclidean`](Heuristic::Euclidean) never overestimates on either
/// adjacency. [`Manhattan`](Heuristic::Manhattan) is admissible only
/// without diagonal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heuristic {
    /// Always 0: plain Dijkstra ordering.
    Zero,
    #[default]
    Euclidean,
    Manhattan,
}

impl Heuristic {
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> f64 {
        match self {
            Self::Zero => 0.0,
            Self::Euclidean => euclidean(from, to),
            Self::Manhattan => manhattan(from, to),
        }
    }
}

impl FromStr for Heuristic {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zero" => Ok(Self::Zero),
            "euclidean" => Ok(Self::Euclidean),
            "manhattan" => Ok(Self::Manhattan),
            _ => Err(ConfigError::InvalidHeuristic(s.to_string())),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Zero => "zero",
            Self::Euclidean => "euclidean",
            Self::Manhattan => "manhattan",
        })
    }
}
