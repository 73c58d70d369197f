//! Widget contract
//!
//! The `Widget` trait is the only thing the grid engine knows about the
//! things it lays out. Concrete widgets (text, images, buttons) live in the
//! host application; the engine reads their constraints, hands them a cell,
//! and moves them into place.
//!
//! # Sizing protocol
//!
//! 1. **Constraints** (`size_spec`): the widget publishes its min/max per
//!    axis. The container folds these into per-line constraints and never
//!    writes them back.
//!
//! 2. **Resize** (`resize`): the container offers a cell size. The widget
//!    may refuse part of it (typically clamping to its own maximum) and
//!    returns the size it actually took.
//!
//! 3. **Move** (`move_to`): the container positions the widget, centering
//!    it when it took less than its cell.
//!
//! Widgets that cache their own constraints (nested grids) refresh them in
//! `validate`, which a container calls on every child before reading any
//! `size_spec`.
//!
//! Hidden and modal widgets are skipped entirely: they consume no cell
//! space and are never resized or moved by the grid.

use crate::layout::SizeSpec;
use crate::primitives::{Axis, Point, Size};

/// A widget that can be placed in a grid container.
pub trait Widget {
    /// The widget's own min/max constraints.
    fn size_spec(&self) -> SizeSpec;

    /// Offer `requested` to the widget. Returns the size actually taken.
    fn resize(&mut self, requested: Size) -> Size;

    /// Move the widget's origin to `position`.
    fn move_to(&mut self, position: Point);

    /// Bring any cached constraints up to date. No-op for most widgets.
    fn validate(&mut self) {}

    /// Hidden widgets take no space in the grid.
    fn is_hidden(&self) -> bool {
        false
    }

    /// Modal widgets are handled outside normal grid flow.
    fn is_modal(&self) -> bool {
        false
    }

    /// Whether a minimum applies along `axis`.
    fn min_size_enabled(&self, axis: Axis) -> bool {
        self.size_spec().min_enabled(axis)
    }

    /// Minimum along `axis`, zero when disabled.
    fn min_size(&self, axis: Axis) -> i32 {
        self.size_spec().lower(axis)
    }

    /// Whether a maximum applies along `axis`.
    fn max_size_enabled(&self, axis: Axis) -> bool {
        self.size_spec().max_enabled(axis)
    }

    /// Maximum along `axis`, `i32::MAX` when disabled.
    fn max_size(&self, axis: Axis) -> i32 {
        self.size_spec().upper(axis)
    }

    /// Whether this widget occupies its grid slot.
    fn occupies_slot(&self) -> bool {
        !self.is_hidden() && !self.is_modal()
    }
}

/// A boxed widget for dynamic dispatch.
pub type BoxedWidget = Box<dyn Widget>;

/// Extension trait for convenient widget operations.
pub trait WidgetExt: Widget {
    /// Box this widget for dynamic dispatch.
    fn boxed(self) -> BoxedWidget
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<W: Widget> WidgetExt for W {}
