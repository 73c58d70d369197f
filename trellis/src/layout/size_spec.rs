//! Size constraints for widgets and grid lines.
//!
//! A `SizeSpec` says, per axis, whether a minimum and a maximum apply and
//! how large they are. Widgets publish one for themselves; the line
//! aggregator folds the specs of every widget on a row or column into one
//! for the whole line.

use crate::primitives::{Axis, Size};

/// Min/max constraint record, one optional bound per axis.
///
/// `None` means the bound is disabled: no minimum is treated as zero and no
/// maximum as unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeSpec {
    min: [Option<i32>; 2],
    max: [Option<i32>; 2],
}

impl SizeSpec {
    /// No bounds on either axis.
    pub const UNBOUNDED: Self = Self {
        min: [None, None],
        max: [None, None],
    };

    /// Exact size required on both axes.
    #[inline]
    pub fn tight(size: Size) -> Self {
        Self {
            min: [Some(size.width), Some(size.height)],
            max: [Some(size.width), Some(size.height)],
        }
    }

    /// Minimum on both axes, no maximum.
    #[inline]
    pub fn at_least(size: Size) -> Self {
        Self {
            min: [Some(size.width), Some(size.height)],
            max: [None, None],
        }
    }

    /// Maximum on both axes, no minimum.
    #[inline]
    pub fn at_most(size: Size) -> Self {
        Self {
            min: [None, None],
            max: [Some(size.width), Some(size.height)],
        }
    }

    /// Builder: set the minimum along `axis`.
    #[inline]
    pub fn with_min(mut self, axis: Axis, value: i32) -> Self {
        self.min[axis.index()] = Some(value);
        self
    }

    /// Builder: set the maximum along `axis`.
    #[inline]
    pub fn with_max(mut self, axis: Axis, value: i32) -> Self {
        self.max[axis.index()] = Some(value);
        self
    }

    #[inline]
    pub fn min(&self, axis: Axis) -> Option<i32> {
        self.min[axis.index()]
    }

    #[inline]
    pub fn max(&self, axis: Axis) -> Option<i32> {
        self.max[axis.index()]
    }

    #[inline]
    pub fn set_min(&mut self, axis: Axis, value: Option<i32>) {
        self.min[axis.index()] = value;
    }

    #[inline]
    pub fn set_max(&mut self, axis: Axis, value: Option<i32>) {
        self.max[axis.index()] = value;
    }

    #[inline]
    pub fn min_enabled(&self, axis: Axis) -> bool {
        self.min(axis).is_some()
    }

    #[inline]
    pub fn max_enabled(&self, axis: Axis) -> bool {
        self.max(axis).is_some()
    }

    /// Effective lower bound along `axis` (zero when disabled).
    #[inline]
    pub fn lower(&self, axis: Axis) -> i32 {
        self.min(axis).unwrap_or(0)
    }

    /// Effective upper bound along `axis` (`i32::MAX` when disabled).
    #[inline]
    pub fn upper(&self, axis: Axis) -> i32 {
        self.max(axis).unwrap_or(i32::MAX)
    }

    /// Raise every enabled maximum to at least its enabled minimum.
    ///
    /// Inverted bounds are resolved in favor of the minimum.
    #[inline]
    pub fn normalized(mut self) -> Self {
        for axis in Axis::ALL {
            if let (Some(min), Some(max)) = (self.min(axis), self.max(axis)) {
                if max < min {
                    self.set_max(axis, Some(min));
                }
            }
        }
        self
    }

    /// Clamp a single extent to the bounds along `axis`.
    #[inline]
    pub fn clamp_extent(&self, axis: Axis, value: i32) -> i32 {
        let value = match self.max(axis) {
            Some(max) => value.min(max),
            None => value,
        };
        match self.min(axis) {
            Some(min) => value.max(min),
            None => value,
        }
    }

    /// Constrain a size to these bounds. The minimum wins on inverted bounds.
    #[inline]
    pub fn constrain(&self, size: Size) -> Size {
        Size {
            width: self.clamp_extent(Axis::Horizontal, size.width),
            height: self.clamp_extent(Axis::Vertical, size.height),
        }
    }

    /// Check if a size satisfies these bounds.
    #[inline]
    pub fn is_satisfied_by(&self, size: Size) -> bool {
        Axis::ALL.into_iter().all(|axis| {
            let v = size.get(axis);
            v >= self.lower(axis) && v <= self.upper(axis)
        })
    }

    /// Grow every enabled bound by `extra` along each axis.
    ///
    /// Used to wrap a contents spec in frame and spacing margins. A disabled
    /// minimum becomes the margin itself when the margin is non-zero.
    #[inline]
    pub fn inflate(&self, extra: Size) -> Self {
        let mut out = *self;
        for axis in Axis::ALL {
            let pad = extra.get(axis);
            out.set_min(
                axis,
                match self.min(axis) {
                    Some(min) => Some(min.saturating_add(pad)),
                    None if pad > 0 => Some(pad),
                    None => None,
                },
            );
            out.set_max(axis, self.max(axis).map(|max| max.saturating_add(pad)));
        }
        out
    }
}
