//! Placement pass: resize every child to its cell and center it there.
//!
//! A child may refuse part of its cell (for example when the cell is wider
//! than the child's maximum). The slack is split evenly on both sides; it is
//! never handed to neighbouring cells.

use crate::primitives::{Point, Rect, Size};
use crate::widget::BoxedWidget;

use super::aggregate::LineSpec;
use super::grid::GridShape;

/// Where one child ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Index of the child in its container.
    pub child: usize,
    /// The full cell offered to the child.
    pub cell: Rect,
    /// The rectangle the child actually occupies.
    pub rect: Rect,
}

/// Resolved geometry of one grid, ready to place children into.
pub struct CellGrid<'a> {
    pub shape: GridShape,
    pub columns: &'a [LineSpec],
    pub rows: &'a [LineSpec],
    pub column_widths: &'a [i32],
    pub row_heights: &'a [i32],
    /// Top-left corner of the first cell (container origin + frame margin).
    pub origin: Point,
    /// Gap between adjacent visible lines.
    pub spacing: i32,
}

/// Offset that centers `actual` inside `cell`.
#[inline]
pub fn centered(cell: Rect, actual: Size) -> Point {
    let extra = cell.size() - actual;
    Point::new(cell.x + extra.width / 2, cell.y + extra.height / 2)
}

/// Resize and move every present child, rows top to bottom and columns
/// left to right. Hidden lines take neither size nor spacing.
pub fn place_children(grid: &CellGrid<'_>, children: &mut [BoxedWidget], out: &mut Vec<Placement>) {
    out.clear();

    let mut y = grid.origin.y;
    for (row, row_spec) in grid.rows.iter().enumerate() {
        if row_spec.hidden {
            continue;
        }
        let height = grid.row_heights[row];

        let mut x = grid.origin.x;
        for (column, column_spec) in grid.columns.iter().enumerate() {
            if column_spec.hidden {
                continue;
            }
            let width = grid.column_widths[column];

            if let Some(index) = grid.shape.slot(column, row) {
                let child = &mut children[index];
                if child.occupies_slot() {
                    let cell = Rect::new(x, y, width, height);
                    let actual = child.resize(cell.size());
                    let position = centered(cell, actual);
                    child.move_to(position);
                    let rect = Rect::from_origin_size(position, actual);
                    if !cell.contains_rect(&rect) {
                        tracing::warn!("child {} overflows its cell: {:?} in {:?}", index, rect, cell);
                    }
                    out.push(Placement {
                        child: index,
                        cell,
                        rect,
                    });
                }
            }

            x += width + grid.spacing;
        }
        y += height + grid.spacing;
    }

    tracing::trace!("placed {} children from {:?}", out.len(), grid.origin);
}
