//! Cell classification shared by layouts and search graphs.

use std::fmt;

/// What a grid cell is, independent of any search state.
///
/// A graph holds at most one [`Start`](NodeKind::Start) and one
/// [`Finish`](NodeKind::Finish). [`Wall`](NodeKind::Wall) cells are never
/// traversable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    #[default]
    Open,
    Wall,
    Start,
    Finish,
}

impl NodeKind {
    /// The character used for this kind in text layouts.
    pub const fn rune(self) -> char {
        match self {
            Self::Open => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::Finish => 'F',
        }
    }

    /// Inverse of [`rune`](Self::rune).
    pub const fn from_rune(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Open),
            '#' => Some(Self::Wall),
            'S' => Some(Self::Start),
            'F' => Some(Self::Finish),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Open => "open",
            Self::Wall => "wall",
            Self::Start => "start",
            Self::Finish => "finish",
        };
        f.write_str(name)
    }
}
