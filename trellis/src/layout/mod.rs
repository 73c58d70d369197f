//! Grid layout engine.
//!
//! A `GridContainer` maps a flat list of children onto rows and columns,
//! folds their constraints into per-line constraints, splits the available
//! space between lines, and places every child in its cell.
//!
//! # Architecture
//!
//! ```text
//! children ─> aggregate (LineSpec per row/column) ─> delegate (pixels per line)
//!                                                        │
//!                                      placement (resize + center + move)
//! ```
//!
//! Every stage is cached behind its own dirty flag; see `dirty`.

pub mod size_spec;
pub mod style;
pub mod grid;
pub mod aggregate;
pub mod delegate;
pub mod dirty;
pub mod placement;

// container must come last (it drives every stage above)
pub mod container;

// Re-export core types
pub use size_spec::SizeSpec;
pub use style::{GridOptions, GridStyle, MajorDirection, DEFAULT_FRAME_MARGIN, DEFAULT_SPACING_MARGIN};
pub use grid::{GridShape, LineDirection};
pub use aggregate::LineSpec;
pub use delegate::delegate;
pub use dirty::{DirtyFlags, LayoutStats};
pub use placement::Placement;
pub use container::GridContainer;
