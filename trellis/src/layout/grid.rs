//! Mapping between a flat child sequence and grid cells.

use crate::primitives::Axis;

use super::style::MajorDirection;

/// Which kind of line: a column or a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineDirection {
    Column,
    Row,
}

impl LineDirection {
    pub const ALL: [LineDirection; 2] = [LineDirection::Column, LineDirection::Row];

    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            LineDirection::Column => 0,
            LineDirection::Row => 1,
        }
    }

    /// Axis in which the widgets of one line sit end to end.
    #[inline]
    pub const fn along(self) -> Axis {
        match self {
            LineDirection::Column => Axis::Vertical,
            LineDirection::Row => Axis::Horizontal,
        }
    }

    /// Axis shared by every widget of one line (the line's own extent).
    #[inline]
    pub const fn across(self) -> Axis {
        self.along().cross()
    }

    /// The line direction whose extent is measured along `axis`.
    #[inline]
    pub const fn sized_along(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => LineDirection::Column,
            Axis::Vertical => LineDirection::Row,
        }
    }
}

/// Shape of a grid: how many columns and rows, and which child sits where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    direction: MajorDirection,
    major_count: usize,
    child_count: usize,
}

impl GridShape {
    pub fn new(direction: MajorDirection, major_count: usize, child_count: usize) -> Self {
        debug_assert!(major_count >= 1, "grid needs at least one slot per major line");
        Self {
            direction,
            major_count,
            child_count,
        }
    }

    /// Number of major lines needed to hold every child.
    #[inline]
    pub fn minor_count(&self) -> usize {
        self.child_count.div_ceil(self.major_count)
    }

    #[inline]
    pub fn columns(&self) -> usize {
        match self.direction {
            MajorDirection::RowMajor => self.major_count,
            MajorDirection::ColumnMajor => self.minor_count(),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        match self.direction {
            MajorDirection::RowMajor => self.minor_count(),
            MajorDirection::ColumnMajor => self.major_count,
        }
    }

    #[inline]
    pub fn line_count(&self, direction: LineDirection) -> usize {
        match direction {
            LineDirection::Column => self.columns(),
            LineDirection::Row => self.rows(),
        }
    }

    /// Child index at `(column, row)`, or `None` for an empty slot.
    #[inline]
    pub fn slot(&self, column: usize, row: usize) -> Option<usize> {
        if column >= self.columns() || row >= self.rows() {
            return None;
        }
        let index = match self.direction {
            MajorDirection::RowMajor => row * self.major_count + column,
            MajorDirection::ColumnMajor => column * self.major_count + row,
        };
        (index < self.child_count).then_some(index)
    }

    /// `(column, row)` of the child at `index`.
    #[inline]
    pub fn cell_of(&self, index: usize) -> (usize, usize) {
        let major = index % self.major_count;
        let minor = index / self.major_count;
        match self.direction {
            MajorDirection::RowMajor => (major, minor),
            MajorDirection::ColumnMajor => (minor, major),
        }
    }

    /// Every slot on one line, in order, as optional child indices.
    pub fn line_slots(
        &self,
        direction: LineDirection,
        line: usize,
    ) -> impl Iterator<Item = Option<usize>> + '_ {
        let len = self.line_count(match direction {
            LineDirection::Column => LineDirection::Row,
            LineDirection::Row => LineDirection::Column,
        });
        (0..len).map(move |i| match direction {
            LineDirection::Column => self.slot(line, i),
            LineDirection::Row => self.slot(i, line),
        })
    }
}
