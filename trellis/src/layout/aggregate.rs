//! Line aggregation: folding widget constraints into per-line constraints.
//!
//! Along a line, widgets sit end to end, so their minimums and maximums add
//! up. Across a line, every widget shares the same extent, so the largest
//! minimum and the smallest maximum bind.

use crate::primitives::Axis;
use crate::widget::BoxedWidget;

use super::grid::{GridShape, LineDirection};
use super::size_spec::SizeSpec;

/// Aggregate constraints of one row or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineSpec {
    pub spec: SizeSpec,
    /// Every slot on the line is empty, hidden, or modal.
    pub hidden: bool,
}

impl LineSpec {
    pub const HIDDEN: Self = Self {
        spec: SizeSpec::UNBOUNDED,
        hidden: true,
    };
}

/// Compute the constraints of line `line` from the children occupying it.
pub fn compute_line_spec(
    shape: &GridShape,
    children: &[BoxedWidget],
    direction: LineDirection,
    line: usize,
) -> LineSpec {
    let present = shape
        .line_slots(direction, line)
        .flatten()
        .filter_map(|index| children.get(index))
        .filter(|child| child.occupies_slot())
        .map(|child| child.size_spec());
    fold_line(direction, present)
}

/// Fold the specs of the present widgets of one line.
///
/// An empty iterator yields a hidden line.
pub fn fold_line(direction: LineDirection, specs: impl IntoIterator<Item = SizeSpec>) -> LineSpec {
    let along = direction.along();
    let across = direction.across();

    let mut any_present = false;
    let mut along_min: Option<i32> = None;
    let mut along_max_sum = 0i32;
    let mut along_max_all = true;
    let mut across_min: Option<i32> = None;
    let mut across_max: Option<i32> = None;

    for spec in specs {
        any_present = true;

        if let Some(min) = spec.min(along) {
            along_min = Some(along_min.unwrap_or(0).saturating_add(min));
        }
        match spec.max(along) {
            Some(max) => along_max_sum = along_max_sum.saturating_add(max),
            None => along_max_all = false,
        }

        if let Some(min) = spec.min(across) {
            across_min = Some(across_min.map_or(min, |cur| cur.max(min)));
        }
        if let Some(max) = spec.max(across) {
            across_max = Some(across_max.map_or(max, |cur| cur.min(max)));
        }
    }

    if !any_present {
        return LineSpec::HIDDEN;
    }

    let mut spec = SizeSpec::UNBOUNDED;
    spec.set_min(along, along_min);
    spec.set_max(along, along_max_all.then_some(along_max_sum));
    spec.set_min(across, across_min);
    spec.set_max(across, across_max);

    LineSpec {
        spec: spec.normalized(),
        hidden: false,
    }
}

/// Constraints on the whole contents area (margins excluded).
///
/// Width comes from the columns' horizontal bounds, height from the rows'
/// vertical bounds. Hidden lines contribute nothing.
pub fn fold_contents(columns: &[LineSpec], rows: &[LineSpec]) -> SizeSpec {
    let mut spec = SizeSpec::UNBOUNDED;
    for (axis, lines) in [(Axis::Horizontal, columns), (Axis::Vertical, rows)] {
        let mut visible = lines.iter().filter(|l| !l.hidden).peekable();
        if visible.peek().is_none() {
            continue;
        }

        let mut min: Option<i32> = None;
        let mut max_sum = 0i32;
        let mut max_all = true;
        for line in visible {
            if let Some(m) = line.spec.min(axis) {
                min = Some(min.unwrap_or(0).saturating_add(m));
            }
            match line.spec.max(axis) {
                Some(m) => max_sum = max_sum.saturating_add(m),
                None => max_all = false,
            }
        }
        spec.set_min(axis, min);
        spec.set_max(axis, max_all.then_some(max_sum));
    }
    spec.normalized()
}
