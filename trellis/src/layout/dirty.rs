//! Dirty flags and recomputation counters for a grid container.
//!
//! Each cached artifact of a container has one flag. Mutators only set
//! flags; the container's update-if-dirty routines clear them by
//! recomputing, exactly once per invalidation.

use super::grid::LineDirection;

/// Invalidation flags, one per cached artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyFlags {
    /// Total frame + inter-line spacing.
    pub spacing: bool,
    /// Line arrays must be resized to the current column/row count.
    /// Indexed by `LineDirection`.
    pub alloc: [bool; 2],
    /// Line specs must be re-aggregated from the children.
    pub specs: [bool; 2],
    /// Aggregate contents spec.
    pub contents: bool,
}

impl DirtyFlags {
    pub const ALL: Self = Self {
        spacing: true,
        alloc: [true, true],
        specs: [true, true],
        contents: true,
    };

    pub const CLEAN: Self = Self {
        spacing: false,
        alloc: [false, false],
        specs: [false, false],
        contents: false,
    };

    /// Child count, grid shape, or child order changed shape.
    #[inline]
    pub fn topology_changed(&mut self) {
        *self = Self::ALL;
    }

    /// Some child's constraints or visibility may have changed.
    #[inline]
    pub fn constraints_changed(&mut self) {
        self.specs = [true, true];
        self.contents = true;
        self.spacing = true;
    }

    /// Margin modes or style metrics changed.
    #[inline]
    pub fn margins_changed(&mut self) {
        self.spacing = true;
    }

    /// Derived artifacts of one direction's line specs.
    #[inline]
    pub fn line_specs_recomputed(&mut self) {
        self.contents = true;
        self.spacing = true;
    }

    #[inline]
    pub fn is_clean(&self) -> bool {
        *self == Self::CLEAN
    }

    /// Clear `flag`, returning whether it was set.
    #[inline]
    pub fn take(flag: &mut bool) -> bool {
        std::mem::replace(flag, false)
    }
}

impl Default for DirtyFlags {
    fn default() -> Self {
        Self::ALL
    }
}

/// Per-direction resolved line sizes, valid for one available extent.
#[derive(Debug, Clone, Default)]
pub struct ResolvedLines {
    available: Option<i32>,
    sizes: Vec<i32>,
}

impl ResolvedLines {
    #[inline]
    pub fn is_valid_for(&self, available: i32) -> bool {
        self.available == Some(available)
    }

    #[inline]
    pub fn store(&mut self, available: i32, sizes: Vec<i32>) {
        self.available = Some(available);
        self.sizes = sizes;
    }

    #[inline]
    pub fn invalidate(&mut self) {
        self.available = None;
    }

    #[inline]
    pub fn sizes(&self) -> &[i32] {
        &self.sizes
    }
}

/// Counts every recomputation a container performs.
///
/// Reading an accessor twice with no mutation in between must leave these
/// unchanged the second time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutStats {
    pub spacing_updates: u64,
    pub column_allocations: u64,
    pub row_allocations: u64,
    pub column_spec_updates: u64,
    pub row_spec_updates: u64,
    pub contents_updates: u64,
    pub column_delegations: u64,
    pub row_delegations: u64,
    pub placement_passes: u64,
}

impl LayoutStats {
    pub(crate) fn record_allocation(&mut self, direction: LineDirection) {
        match direction {
            LineDirection::Column => self.column_allocations += 1,
            LineDirection::Row => self.row_allocations += 1,
        }
    }

    pub(crate) fn record_spec_update(&mut self, direction: LineDirection) {
        match direction {
            LineDirection::Column => self.column_spec_updates += 1,
            LineDirection::Row => self.row_spec_updates += 1,
        }
    }

    pub(crate) fn record_delegation(&mut self, direction: LineDirection) {
        match direction {
            LineDirection::Column => self.column_delegations += 1,
            LineDirection::Row => self.row_delegations += 1,
        }
    }
}
