//! Block - a leaf with fixed constraints.

use crate::layout::SizeSpec;
use crate::primitives::{Point, Rect, Size};
use crate::widget::Widget;

/// A plain rectangle that takes whatever its constraints allow.
///
/// Useful as a spacer, a placeholder while the real widget loads, or a
/// stand-in for measuring layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    spec: SizeSpec,
    size: Size,
    position: Point,
    hidden: bool,
    modal: bool,
}

impl Block {
    pub fn new(spec: SizeSpec) -> Self {
        Self {
            spec: spec.normalized(),
            size: Size::ZERO,
            position: Point::ORIGIN,
            hidden: false,
            modal: false,
        }
    }

    /// A block with no constraints at all.
    pub fn unbounded() -> Self {
        Self::new(SizeSpec::UNBOUNDED)
    }

    /// A block that only ever takes `size`.
    pub fn fixed(size: Size) -> Self {
        Self::new(SizeSpec::tight(size))
    }

    /// Builder: start hidden.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Builder: start modal.
    pub fn modal(mut self, modal: bool) -> Self {
        self.modal = modal;
        self
    }

    pub fn spec(&self) -> SizeSpec {
        self.spec
    }

    pub fn set_spec(&mut self, spec: SizeSpec) {
        self.spec = spec.normalized();
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn set_modal(&mut self, modal: bool) {
        self.modal = modal;
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }
}

impl Default for Block {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl Widget for Block {
    fn size_spec(&self) -> SizeSpec {
        self.spec
    }

    fn resize(&mut self, requested: Size) -> Size {
        let requested = Size::new(requested.width.max(0), requested.height.max(0));
        self.size = self.spec.constrain(requested);
        self.size
    }

    fn move_to(&mut self, position: Point) {
        self.position = position;
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn is_modal(&self) -> bool {
        self.modal
    }
}
