//! Trellis: Retained-Mode Grid Layout
//!
//! Trellis arranges widgets on a grid of rows and columns:
//! - Per-line min/max constraints folded from the children
//! - Greedy size delegation that honours every bound it can
//! - Centering of children that refuse part of their cell
//! - Dirty-flag caching, so an unchanged layout costs nothing per frame
//!
//! # Usage
//!
//! ```
//! use trellis::{Block, GridContainer, GridOptions, Size, SizeSpec, WidgetExt};
//!
//! let mut grid = GridContainer::new(GridOptions::columns(2)).unwrap();
//! grid.attach(Block::unbounded().boxed());
//! grid.attach(Block::new(SizeSpec::at_least(Size::new(40, 20))).boxed());
//!
//! let actual = grid.try_resize(Size::new(200, 100)).unwrap();
//! assert_eq!(actual, Size::new(200, 100));
//! assert_eq!(grid.placements().len(), 2);
//! ```
//!
//! Containers implement `Widget` themselves, so grids nest.

// Core primitives
pub mod primitives;
pub mod error;

// Widget contract
pub mod widget;

// Layout engine
pub mod layout;

// Stock widgets
pub mod widgets;

pub use error::{GridError, Result};
pub use layout::{
    GridContainer, GridOptions, GridStyle, LayoutStats, LineDirection, LineSpec, MajorDirection,
    Placement, SizeSpec,
};
pub use primitives::{Axis, Point, Rect, Size};
pub use widget::{BoxedWidget, Widget, WidgetExt};
pub use widgets::Block;
