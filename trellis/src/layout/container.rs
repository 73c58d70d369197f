//! GridContainer - the layout orchestrator.
//!
//! Owns its children, maps them onto a grid, and keeps every derived layout
//! artifact behind its own dirty flag:
//!
//! ```text
//! attach/detach/reorder/style ──> DirtyFlags
//!                                    │
//! resize() ──> line specs ──> spacing ──> contents spec
//!                  │
//!                  └──> delegate() per direction ──> placement pass
//! ```
//!
//! Mutators never recompute. Accessors take `&mut self`, bring exactly the
//! artifact they read up to date, and return it. Reading column widths does
//! not delegate rows, and a second read with no mutation in between costs
//! nothing (see `LayoutStats`).

use std::fmt;

use crate::error::{GridError, Result};
use crate::primitives::{Axis, Point, Size};
use crate::widget::{BoxedWidget, Widget};

use super::aggregate::{compute_line_spec, fold_contents, LineSpec};
use super::delegate::delegate;
use super::dirty::{DirtyFlags, LayoutStats, ResolvedLines};
use super::grid::{GridShape, LineDirection};
use super::placement::{place_children, CellGrid, Placement};
use super::size_spec::SizeSpec;
use super::style::{GridOptions, GridStyle, MajorDirection};

/// A container that lays its children out on a grid.
///
/// Insertion order defines grid position: with a row-major grid of three
/// columns, children 0..3 fill the first row, 3..6 the second, and so on.
pub struct GridContainer {
    children: Vec<BoxedWidget>,
    direction: MajorDirection,
    major_count: usize,
    style: GridStyle,
    frame_margin_enabled: bool,
    spacing_margin_enabled: bool,
    /// Own min/max, merged with what the contents demand.
    preferred: SizeSpec,
    hidden: bool,
    modal: bool,
    position: Point,
    size: Size,
    /// Whether `size` came from a resize (placement needs a real size).
    sized: bool,

    dirty: DirtyFlags,
    stats: LayoutStats,
    total_spacing: Size,
    /// Line specs indexed by `LineDirection`.
    lines: [Vec<LineSpec>; 2],
    resolved: [ResolvedLines; 2],
    contents: SizeSpec,
    placements: Vec<Placement>,
    placement_valid: bool,
}

impl GridContainer {
    /// Create an empty container.
    pub fn new(options: GridOptions) -> Result<Self> {
        if options.major_count == 0 {
            return Err(GridError::InvalidMajorCount);
        }
        if !options.style.is_valid() {
            return Err(GridError::NegativeMargin(options.style));
        }
        Ok(Self {
            children: Vec::new(),
            direction: options.direction,
            major_count: options.major_count,
            style: options.style,
            frame_margin_enabled: options.frame_margin_enabled,
            spacing_margin_enabled: options.spacing_margin_enabled,
            preferred: SizeSpec::UNBOUNDED,
            hidden: false,
            modal: false,
            position: Point::ORIGIN,
            size: Size::ZERO,
            sized: false,
            dirty: DirtyFlags::ALL,
            stats: LayoutStats::default(),
            total_spacing: Size::ZERO,
            lines: [Vec::new(), Vec::new()],
            resolved: [ResolvedLines::default(), ResolvedLines::default()],
            contents: SizeSpec::UNBOUNDED,
            placements: Vec::new(),
            placement_valid: false,
        })
    }

    // =====================================================================
    // Children
    // =====================================================================

    /// Append a child at the end of the grid sequence. Returns its index.
    pub fn attach(&mut self, child: BoxedWidget) -> usize {
        self.children.push(child);
        self.topology_changed();
        self.children.len() - 1
    }

    /// Insert a child at `index`, shifting later children one slot on.
    pub fn insert(&mut self, index: usize, child: BoxedWidget) -> Result<()> {
        if index > self.children.len() {
            return Err(GridError::ChildOutOfRange {
                index,
                len: self.children.len(),
            });
        }
        self.children.insert(index, child);
        self.topology_changed();
        Ok(())
    }

    /// Remove the child at `index` and hand it back to the caller.
    pub fn detach(&mut self, index: usize) -> Result<BoxedWidget> {
        self.check_child(index)?;
        let child = self.children.remove(index);
        self.topology_changed();
        Ok(child)
    }

    /// Move the child at `from` so that it ends up at index `to`.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_child(from)?;
        self.check_child(to)?;
        if from != to {
            let child = self.children.remove(from);
            self.children.insert(to, child);
            self.constraints_changed();
        }
        Ok(())
    }

    /// Exchange the grid slots of two children.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_child(a)?;
        self.check_child(b)?;
        if a != b {
            self.children.swap(a, b);
            self.constraints_changed();
        }
        Ok(())
    }

    /// Remove every child, returning them in grid order.
    pub fn clear(&mut self) -> Vec<BoxedWidget> {
        let children = std::mem::take(&mut self.children);
        self.topology_changed();
        children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child(&self, index: usize) -> Option<&dyn Widget> {
        self.children.get(index).map(|child| child.as_ref() as &dyn Widget)
    }

    /// Mutable access to a child.
    ///
    /// The caller may change the child's constraints or visibility through
    /// this reference, so line specs are invalidated up front.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut (dyn Widget + 'static)> {
        let child = self.children.get_mut(index)?;
        self.dirty.constraints_changed();
        self.placement_valid = false;
        Some(child.as_mut())
    }

    pub fn children(&self) -> impl Iterator<Item = &dyn Widget> + '_ {
        self.children.iter().map(|child| child.as_ref() as &dyn Widget)
    }

    /// Tell the container that some child's constraints or visibility
    /// changed behind its back.
    pub fn invalidate_constraints(&mut self) {
        self.constraints_changed();
    }

    // =====================================================================
    // Grid shape and style
    // =====================================================================

    pub fn direction(&self) -> MajorDirection {
        self.direction
    }

    pub fn set_direction(&mut self, direction: MajorDirection) {
        if direction != self.direction {
            self.direction = direction;
            self.topology_changed();
        }
    }

    pub fn major_count(&self) -> usize {
        self.major_count
    }

    /// Set the number of slots per major line.
    pub fn set_major_count(&mut self, major_count: usize) -> Result<()> {
        if major_count == 0 {
            return Err(GridError::InvalidMajorCount);
        }
        if major_count != self.major_count {
            self.major_count = major_count;
            self.topology_changed();
        }
        Ok(())
    }

    pub fn style(&self) -> GridStyle {
        self.style
    }

    /// Replace the margin metrics.
    pub fn set_style(&mut self, style: GridStyle) -> Result<()> {
        if !style.is_valid() {
            return Err(GridError::NegativeMargin(style));
        }
        if style != self.style {
            self.style = style;
            self.margins_changed();
        }
        Ok(())
    }

    pub fn set_frame_margin_enabled(&mut self, enabled: bool) {
        if enabled != self.frame_margin_enabled {
            self.frame_margin_enabled = enabled;
            self.margins_changed();
        }
    }

    pub fn set_spacing_margin_enabled(&mut self, enabled: bool) {
        if enabled != self.spacing_margin_enabled {
            self.spacing_margin_enabled = enabled;
            self.margins_changed();
        }
    }

    /// Set (or clear) the container's own minimum along `axis`.
    pub fn set_min_size(&mut self, axis: Axis, value: Option<i32>) {
        self.preferred.set_min(axis, value);
    }

    /// Set (or clear) the container's own maximum along `axis`.
    pub fn set_max_size(&mut self, axis: Axis, value: Option<i32>) {
        self.preferred.set_max(axis, value);
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn set_modal(&mut self, modal: bool) {
        self.modal = modal;
    }

    // =====================================================================
    // Geometry
    // =====================================================================

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Resize the container, then resize and place every child.
    ///
    /// The request is clamped to `layout_spec()`. Calling this every frame
    /// with an unchanged size and topology performs no recomputation.
    pub fn try_resize(&mut self, requested: Size) -> Result<Size> {
        if requested.is_negative() {
            return Err(GridError::NegativeSize(requested));
        }

        let spec = self.layout_spec();
        let actual = spec.constrain(requested);
        debug_assert!(spec.is_satisfied_by(actual));
        if !self.sized || actual != self.size {
            tracing::debug!("grid resize: requested {:?} -> {:?}", requested, actual);
            self.size = actual;
            self.sized = true;
            self.placement_valid = false;
        }
        self.run_placement();
        Ok(actual)
    }

    /// Move the container; children follow.
    pub fn relocate(&mut self, position: Point) {
        if position != self.position {
            self.position = position;
            self.placement_valid = false;
        }
        self.run_placement();
    }

    /// `(column, row)` of the child at `index`.
    pub fn cell_of(&self, index: usize) -> Result<(usize, usize)> {
        self.check_child(index)?;
        Ok(self.shape().cell_of(index))
    }

    // =====================================================================
    // Cached artifacts
    // =====================================================================

    /// Constraints this container exposes to its parent: contents plus
    /// margins, merged with its own preferred min/max.
    pub fn layout_spec(&mut self) -> SizeSpec {
        self.validate_constraints();
        self.composed_spec()
    }

    /// Frame margins plus inter-line spacing, per axis.
    pub fn total_spacing(&mut self) -> Size {
        self.update_spacing_if_dirty();
        self.total_spacing
    }

    /// Aggregate constraints of the contents area (margins excluded).
    pub fn contents_spec(&mut self) -> SizeSpec {
        self.update_contents_if_dirty();
        self.contents
    }

    pub fn column_count(&mut self) -> usize {
        self.update_alloc_if_dirty(LineDirection::Column);
        self.lines[LineDirection::Column.index()].len()
    }

    pub fn row_count(&mut self) -> usize {
        self.update_alloc_if_dirty(LineDirection::Row);
        self.lines[LineDirection::Row.index()].len()
    }

    /// Aggregate constraints of one row or column.
    pub fn line_spec(&mut self, direction: LineDirection, index: usize) -> Result<LineSpec> {
        let lines = self.line_specs(direction);
        lines.get(index).copied().ok_or(GridError::LineOutOfRange {
            direction,
            index,
            count: lines.len(),
        })
    }

    pub fn line_specs(&mut self, direction: LineDirection) -> &[LineSpec] {
        self.update_line_specs_if_dirty(direction);
        &self.lines[direction.index()]
    }

    /// Resolved width of every column for the current size.
    pub fn column_widths(&mut self) -> &[i32] {
        self.update_resolved_if_stale(LineDirection::Column);
        self.resolved[LineDirection::Column.index()].sizes()
    }

    /// Resolved height of every row for the current size.
    pub fn row_heights(&mut self) -> &[i32] {
        self.update_resolved_if_stale(LineDirection::Row);
        self.resolved[LineDirection::Row.index()].sizes()
    }

    /// Where every placed child ended up in the last layout.
    ///
    /// Empty until the container has been resized once.
    pub fn placements(&mut self) -> &[Placement] {
        self.run_placement();
        &self.placements
    }

    /// Recomputation counters since construction (or the last reset).
    pub fn stats(&self) -> LayoutStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = LayoutStats::default();
    }

    // =====================================================================
    // Invalidation
    // =====================================================================

    fn topology_changed(&mut self) {
        self.dirty.topology_changed();
        self.placement_valid = false;
        tracing::trace!("grid topology changed: {} children", self.children.len());
    }

    fn constraints_changed(&mut self) {
        self.dirty.constraints_changed();
        self.placement_valid = false;
    }

    fn margins_changed(&mut self) {
        self.dirty.margins_changed();
        self.placement_valid = false;
    }

    fn check_child(&self, index: usize) -> Result<()> {
        if index < self.children.len() {
            Ok(())
        } else {
            Err(GridError::ChildOutOfRange {
                index,
                len: self.children.len(),
            })
        }
    }

    // =====================================================================
    // Update-if-dirty routines
    // =====================================================================

    fn shape(&self) -> GridShape {
        GridShape::new(self.direction, self.major_count, self.children.len())
    }

    fn frame_margin(&self) -> i32 {
        if self.frame_margin_enabled { self.style.frame_margin } else { 0 }
    }

    fn spacing_margin(&self) -> i32 {
        if self.spacing_margin_enabled { self.style.spacing_margin } else { 0 }
    }

    fn update_alloc_if_dirty(&mut self, direction: LineDirection) {
        let i = direction.index();
        if !DirtyFlags::take(&mut self.dirty.alloc[i]) {
            return;
        }

        let count = self.shape().line_count(direction);
        if self.lines[i].len() != count {
            self.lines[i] = vec![LineSpec::HIDDEN; count];
            self.resolved[i].invalidate();
            self.dirty.specs[i] = true;
            self.stats.record_allocation(direction);
            tracing::trace!("reallocated {:?} lines: {}", direction, count);
        }
    }

    fn update_line_specs_if_dirty(&mut self, direction: LineDirection) {
        self.update_alloc_if_dirty(direction);
        let i = direction.index();
        if !DirtyFlags::take(&mut self.dirty.specs[i]) {
            return;
        }

        for child in &mut self.children {
            child.validate();
        }
        let shape = self.shape();
        let children = &self.children;
        for (line, spec) in self.lines[i].iter_mut().enumerate() {
            *spec = compute_line_spec(&shape, children, direction, line);
        }

        self.resolved[i].invalidate();
        self.placement_valid = false;
        self.dirty.line_specs_recomputed();
        self.stats.record_spec_update(direction);
        tracing::trace!(
            "aggregated {} {:?} specs ({} hidden)",
            self.lines[i].len(),
            direction,
            self.lines[i].iter().filter(|l| l.hidden).count()
        );
    }

    fn update_spacing_if_dirty(&mut self) {
        for direction in LineDirection::ALL {
            self.update_line_specs_if_dirty(direction);
        }
        if !DirtyFlags::take(&mut self.dirty.spacing) {
            return;
        }

        let frame = self.frame_margin();
        let gap = self.spacing_margin();
        let extent = |lines: &[LineSpec]| {
            let visible = lines.iter().filter(|l| !l.hidden).count() as i32;
            2 * frame + gap * (visible - 1).max(0)
        };
        self.total_spacing = Size::new(
            extent(self.lines[LineDirection::Column.index()].as_slice()),
            extent(self.lines[LineDirection::Row.index()].as_slice()),
        );
        self.stats.spacing_updates += 1;
        tracing::trace!("total spacing: {:?}", self.total_spacing);
    }

    fn update_contents_if_dirty(&mut self) {
        for direction in LineDirection::ALL {
            self.update_line_specs_if_dirty(direction);
        }
        if !DirtyFlags::take(&mut self.dirty.contents) {
            return;
        }

        self.contents = fold_contents(
            &self.lines[LineDirection::Column.index()],
            &self.lines[LineDirection::Row.index()],
        );
        self.stats.contents_updates += 1;
        tracing::trace!("contents spec: {:?}", self.contents);
    }

    fn update_resolved_if_stale(&mut self, direction: LineDirection) {
        self.update_line_specs_if_dirty(direction);
        self.update_spacing_if_dirty();

        let i = direction.index();
        let axis = direction.across();
        let available = self.size.get(axis) - self.total_spacing.get(axis);
        if self.resolved[i].is_valid_for(available) {
            return;
        }

        let sizes = delegate(axis, available, &self.lines[i]);
        self.resolved[i].store(available, sizes);
        self.placement_valid = false;
        self.stats.record_delegation(direction);
    }

    fn validate_constraints(&mut self) {
        self.update_contents_if_dirty();
        self.update_spacing_if_dirty();
    }

    fn is_validated(&self) -> bool {
        self.dirty.is_clean()
    }

    fn composed_spec(&self) -> SizeSpec {
        let derived = self.contents.inflate(self.total_spacing);
        let mut spec = derived;
        for axis in Axis::ALL {
            if let Some(min) = self.preferred.min(axis) {
                spec.set_min(axis, Some(derived.min(axis).map_or(min, |d| d.max(min))));
            }
            if let Some(max) = self.preferred.max(axis) {
                spec.set_max(axis, Some(derived.max(axis).map_or(max, |d| d.min(max))));
            }
        }
        spec.normalized()
    }

    fn run_placement(&mut self) {
        if !self.sized {
            return;
        }
        for direction in LineDirection::ALL {
            self.update_resolved_if_stale(direction);
        }
        if self.placement_valid {
            return;
        }

        let frame = self.frame_margin();
        let grid = CellGrid {
            shape: self.shape(),
            columns: &self.lines[LineDirection::Column.index()],
            rows: &self.lines[LineDirection::Row.index()],
            column_widths: self.resolved[LineDirection::Column.index()].sizes(),
            row_heights: self.resolved[LineDirection::Row.index()].sizes(),
            origin: self.position + Point::new(frame, frame),
            spacing: self.spacing_margin(),
        };
        place_children(&grid, &mut self.children, &mut self.placements);

        self.placement_valid = true;
        self.stats.placement_passes += 1;
    }
}

impl Widget for GridContainer {
    fn size_spec(&self) -> SizeSpec {
        debug_assert!(
            self.is_validated(),
            "GridContainer::size_spec read before validate()"
        );
        self.composed_spec()
    }

    fn resize(&mut self, requested: Size) -> Size {
        match self.try_resize(requested) {
            Ok(actual) => actual,
            Err(err) => {
                tracing::error!("grid resize rejected: {}", err);
                self.size
            }
        }
    }

    fn move_to(&mut self, position: Point) {
        self.relocate(position);
    }

    fn validate(&mut self) {
        self.validate_constraints();
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn is_modal(&self) -> bool {
        self.modal
    }
}

impl fmt::Debug for GridContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridContainer")
            .field("children", &self.children.len())
            .field("direction", &self.direction)
            .field("major_count", &self.major_count)
            .field("position", &self.position)
            .field("size", &self.size)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}
