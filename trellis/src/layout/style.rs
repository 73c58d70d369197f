//! Grid style and construction options.
//!
//! Margins come from an explicit `GridStyle` handed to each container, so
//! two grids in the same process can use different metrics. Hosts usually
//! deserialize the style from their own theme file.

use serde::{Deserialize, Serialize};

/// Default frame margin around a grid's contents, in pixels.
pub const DEFAULT_FRAME_MARGIN: i32 = 4;
/// Default gap between adjacent visible lines, in pixels.
pub const DEFAULT_SPACING_MARGIN: i32 = 4;

/// Margin metrics shared by the grids of one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridStyle {
    /// Space between the container edge and the outermost lines.
    pub frame_margin: i32,
    /// Space between two adjacent visible lines.
    pub spacing_margin: i32,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            frame_margin: DEFAULT_FRAME_MARGIN,
            spacing_margin: DEFAULT_SPACING_MARGIN,
        }
    }
}

impl GridStyle {
    /// A style with no margins at all.
    pub const TIGHT: Self = Self {
        frame_margin: 0,
        spacing_margin: 0,
    };

    pub fn new(frame_margin: i32, spacing_margin: i32) -> Self {
        Self {
            frame_margin,
            spacing_margin,
        }
    }

    /// Both margins are non-negative.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.frame_margin >= 0 && self.spacing_margin >= 0
    }
}

/// How a flat child sequence fills the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MajorDirection {
    /// Fill each row left to right, then move down.
    #[default]
    RowMajor,
    /// Fill each column top to bottom, then move right.
    ColumnMajor,
}

/// Everything needed to construct a grid container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    pub style: GridStyle,
    pub direction: MajorDirection,
    /// Slots per major line (columns for row-major, rows for column-major).
    pub major_count: usize,
    pub frame_margin_enabled: bool,
    pub spacing_margin_enabled: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            style: GridStyle::default(),
            direction: MajorDirection::RowMajor,
            major_count: 1,
            frame_margin_enabled: true,
            spacing_margin_enabled: true,
        }
    }
}

impl GridOptions {
    /// A row-major grid with `columns` columns.
    pub fn columns(columns: usize) -> Self {
        Self {
            direction: MajorDirection::RowMajor,
            major_count: columns,
            ..Self::default()
        }
    }

    /// A column-major grid with `rows` rows.
    pub fn rows(rows: usize) -> Self {
        Self {
            direction: MajorDirection::ColumnMajor,
            major_count: rows,
            ..Self::default()
        }
    }

    /// Builder: margin metrics.
    pub fn style(mut self, style: GridStyle) -> Self {
        self.style = style;
        self
    }

    /// Builder: enable or disable the frame margin.
    pub fn frame_margin(mut self, enabled: bool) -> Self {
        self.frame_margin_enabled = enabled;
        self
    }

    /// Builder: enable or disable the spacing between lines.
    pub fn spacing_margin(mut self, enabled: bool) -> Self {
        self.spacing_margin_enabled = enabled;
        self
    }

    /// No margins at all: cells tile the container exactly.
    pub fn without_margins(self) -> Self {
        self.frame_margin(false).spacing_margin(false)
    }
}
