//! Trellis Widgets
//!
//! Stock leaf widgets. Hosts normally bring their own `Widget` impls; these
//! cover spacers, placeholders and tests.

mod block;

pub use block::Block;
