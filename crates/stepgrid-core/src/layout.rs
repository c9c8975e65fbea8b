//! Grid layouts described as text.
//!
//! A [`Layout`] parses an ASCII map into classified cells:
//!
//! ```text
//! S..#.
//! .#.#.
//! ...#F
//! ```
//!
//! `.` is open, `#` is a wall, `S` the start and `F` the finish. Lines are
//! separated by `'\n'` and must all have the same width.

use std::fmt;

use crate::geom::{Point, Range};
use crate::tile::NodeKind;

/// A parsed text layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    cells: Vec<NodeKind>,
    size: Point,
}

impl Layout {
    /// Parse a layout.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string and
    /// trailing `'\r'` from each line. At most one `S` and one `F` may
    /// appear.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim();
        let mut cells = Vec::new();
        let mut width: Option<i32> = None;
        let mut height = 0;
        let mut start: Option<Point> = None;
        let mut finish: Option<Point> = None;

        for (y, line) in s.lines().enumerate() {
            let y = y as i32;
            let line = line.trim_end_matches('\r');
            let mut x = 0;
            for ch in line.chars() {
                let pos = Point::new(x, y);
                let kind = NodeKind::from_rune(ch).ok_or(LayoutError::InvalidRune { ch, pos })?;
                match kind {
                    NodeKind::Start => {
                        if let Some(first) = start.replace(pos) {
                            return Err(LayoutError::DuplicateRole { kind, first, second: pos });
                        }
                    }
                    NodeKind::Finish => {
                        if let Some(first) = finish.replace(pos) {
                            return Err(LayoutError::DuplicateRole { kind, first, second: pos });
                        }
                    }
                    _ => {}
                }
                cells.push(kind);
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(LayoutError::InconsistentWidth {
                        line: y,
                        expected: w,
                        found: x,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        Ok(Self {
            cells,
            size: Point::new(width.unwrap_or(0), height),
        })
    }

    /// Return the (width, height) size of the layout in cells.
    pub fn size(&self) -> Point {
        self.size
    }

    /// The range covered by the layout, anchored at the origin.
    pub fn range(&self) -> Range {
        Range::with_size(self.size.x, self.size.y)
    }

    /// The kind of the cell at `p`, or `None` outside the layout.
    pub fn at(&self, p: Point) -> Option<NodeKind> {
        if !self.range().contains(p) {
            return None;
        }
        self.cells.get((p.y * self.size.x + p.x) as usize).copied()
    }

    /// Iterate over all positions and their kinds in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, NodeKind)> + '_ {
        self.range().iter().zip(self.cells.iter().copied())
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, kind) in self.cells.iter().enumerate() {
            if i > 0 && i as i32 % self.size.x == 0 {
                writeln!(f)?;
            }
            write!(f, "{}", kind.rune())?;
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A line's width differs from the first line's.
    InconsistentWidth {
        line: i32,
        expected: i32,
        found: i32,
    },
    /// A character outside `.#SF` was found.
    InvalidRune { ch: char, pos: Point },
    /// More than one start or finish cell.
    DuplicateRole {
        kind: NodeKind,
        first: Point,
        second: Point,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(f, "layout: line {line} has width {found}, expected {expected}"),
            Self::InvalidRune { ch, pos } => {
                write!(f, "layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateRole {
                kind,
                first,
                second,
            } => write!(f, "layout: second {kind} cell at {second} (first at {first})"),
        }
    }
}

impl std::error::Error for LayoutError {}
