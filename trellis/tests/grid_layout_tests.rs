//! Integration tests for grid layout.
//!
//! These tests drive `GridContainer` through its public API the way a host
//! application would: attach widgets, resize once per frame, read back where
//! everything landed.
//!
//! Children are `Recorder` widgets that share their state with the test through
//! an `Rc`, so a test can observe every resize and move after the recorder has
//! been boxed into a container, and flip its visibility from outside.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use trellis::layout::{delegate, GridShape};
use trellis::{
    Axis, Block, GridContainer, GridError, GridOptions, GridStyle, LineDirection, LineSpec,
    MajorDirection, Point, Rect, Size, SizeSpec, Widget, WidgetExt,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// What a recorder has been told by its container.
#[derive(Debug, Default)]
struct Record {
    size: Size,
    position: Point,
    resizes: usize,
}

impl Record {
    fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }
}

/// Test widget with fixed constraints and externally observable state.
struct Recorder {
    spec: SizeSpec,
    hidden: Rc<Cell<bool>>,
    record: Rc<RefCell<Record>>,
}

/// Test-side handle to a recorder living inside a container.
#[derive(Clone)]
struct RecorderHandle {
    hidden: Rc<Cell<bool>>,
    record: Rc<RefCell<Record>>,
}

impl RecorderHandle {
    fn rect(&self) -> Rect {
        self.record.borrow().rect()
    }

    fn resizes(&self) -> usize {
        self.record.borrow().resizes
    }

    fn set_hidden(&self, hidden: bool) {
        self.hidden.set(hidden);
    }
}

fn recorder(spec: SizeSpec) -> (Recorder, RecorderHandle) {
    let hidden = Rc::new(Cell::new(false));
    let record = Rc::new(RefCell::new(Record::default()));
    let handle = RecorderHandle {
        hidden: hidden.clone(),
        record: record.clone(),
    };
    (Recorder { spec, hidden, record }, handle)
}

impl Widget for Recorder {
    fn size_spec(&self) -> SizeSpec {
        self.spec
    }

    fn resize(&mut self, requested: Size) -> Size {
        let mut record = self.record.borrow_mut();
        record.size = self.spec.constrain(requested);
        record.resizes += 1;
        record.size
    }

    fn move_to(&mut self, position: Point) {
        self.record.borrow_mut().position = position;
    }

    fn is_hidden(&self) -> bool {
        self.hidden.get()
    }
}

/// Test harness: a container plus handles to every recorder attached to it.
struct GridTest {
    grid: GridContainer,
    recorders: Vec<RecorderHandle>,
}

impl GridTest {
    fn new(options: GridOptions) -> Self {
        init_tracing();
        Self {
            grid: GridContainer::new(options).expect("valid grid options"),
            recorders: Vec::new(),
        }
    }

    fn with_recorders(options: GridOptions, specs: &[SizeSpec]) -> Self {
        let mut test = Self::new(options);
        for &spec in specs {
            test.attach(spec);
        }
        test
    }

    fn attach(&mut self, spec: SizeSpec) -> RecorderHandle {
        let (widget, handle) = recorder(spec);
        self.grid.attach(widget.boxed());
        self.recorders.push(handle.clone());
        handle
    }

    fn resize(&mut self, width: i32, height: i32) -> Size {
        self.grid
            .try_resize(Size::new(width, height))
            .expect("non-negative size")
    }

    fn expect_widths(&mut self, expected: &[i32]) {
        assert_eq!(self.grid.column_widths(), expected, "column widths");
    }

    fn expect_heights(&mut self, expected: &[i32]) {
        assert_eq!(self.grid.row_heights(), expected, "row heights");
    }
}

fn unbounded(count: usize) -> Vec<SizeSpec> {
    vec![SizeSpec::UNBOUNDED; count]
}

fn max_width(max: i32) -> SizeSpec {
    SizeSpec::UNBOUNDED.with_max(Axis::Horizontal, max)
}

// ============================================================================
// Size delegation
// ============================================================================

#[test]
fn test_equal_split_absorbs_remainder_in_last_line() {
    let mut t = GridTest::with_recorders(GridOptions::columns(3).without_margins(), &unbounded(3));
    t.resize(100, 10);

    t.expect_widths(&[33, 33, 34]);
    assert_eq!(t.recorders[2].rect(), Rect::new(66, 0, 34, 10));
}

#[test]
fn test_max_bounded_column_assigned_first() {
    let mut t = GridTest::with_recorders(
        GridOptions::columns(2).without_margins(),
        &[max_width(20), SizeSpec::UNBOUNDED],
    );
    t.resize(100, 10);

    t.expect_widths(&[20, 80]);
    assert_eq!(t.recorders[1].rect(), Rect::new(20, 0, 80, 10));
}

#[test]
fn test_over_constrained_minimums_degrade_last_line() {
    init_tracing();
    let line = |min: i32| LineSpec {
        spec: SizeSpec::UNBOUNDED.with_min(Axis::Horizontal, min),
        hidden: false,
    };

    let sizes = delegate(Axis::Horizontal, 100, &[line(70), line(50)]);
    assert_eq!(sizes, vec![70, 30]);
}

#[test]
fn test_container_never_shrinks_below_minimums() {
    let min_width = |min: i32| SizeSpec::UNBOUNDED.with_min(Axis::Horizontal, min);
    let mut t = GridTest::with_recorders(
        GridOptions::columns(2).without_margins(),
        &[min_width(70), min_width(50)],
    );

    assert_eq!(t.resize(100, 10), Size::new(120, 10));
    t.expect_widths(&[70, 50]);
}

#[test]
fn test_resolved_sizes_conserve_available_space() {
    let mut t = GridTest::with_recorders(GridOptions::columns(3), &unbounded(5));
    t.resize(200, 100);

    assert_eq!(t.grid.total_spacing(), Size::new(16, 12));
    t.expect_widths(&[61, 61, 62]);
    t.expect_heights(&[44, 44]);

    let widths: i32 = t.grid.column_widths().iter().sum();
    let heights: i32 = t.grid.row_heights().iter().sum();
    assert_eq!(widths + 16, 200);
    assert_eq!(heights + 12, 100);
}

#[test]
fn test_unbounded_column_takes_rounding_remainder() {
    let mut t = GridTest::with_recorders(
        GridOptions::columns(3).without_margins(),
        &[max_width(44), SizeSpec::UNBOUNDED, max_width(16)],
    );
    assert_eq!(t.resize(49, 10), Size::new(49, 10));

    t.expect_widths(&[16, 17, 16]);
    assert_eq!(t.recorders[1].rect(), Rect::new(16, 0, 17, 10));
    assert_eq!(t.recorders[2].rect().right(), 49);
}

#[test]
fn test_minimum_column_holds_while_width_grows() {
    let min_width = SizeSpec::UNBOUNDED.with_min(Axis::Horizontal, 44);
    let mut t = GridTest::with_recorders(
        GridOptions::columns(3).without_margins(),
        &[min_width, max_width(18), max_width(23)],
    );

    t.resize(56, 10);
    t.expect_widths(&[44, 6, 6]);
    t.resize(57, 10);
    t.expect_widths(&[44, 13, 0]);

    for width in 44..=120 {
        assert_eq!(t.resize(width, 10), Size::new(width, 10));
        let widths = t.grid.column_widths().to_vec();
        assert_eq!(widths.iter().sum::<i32>(), width, "{width}: {widths:?}");
        assert!(widths[0] >= 44, "{width}: {widths:?}");

        let bounds = Rect::new(0, 0, width, 10);
        for placement in t.grid.placements() {
            assert!(
                bounds.contains_rect(&placement.rect),
                "{width}: {:?} outside {:?}",
                placement.rect,
                bounds
            );
        }
    }
}

// ============================================================================
// Placement
// ============================================================================

#[test]
fn test_child_centered_in_larger_cell() {
    let fixed = SizeSpec::tight(Size::new(50, 50));
    let mut t = GridTest::with_recorders(
        GridOptions::columns(2).without_margins(),
        &[SizeSpec::at_most(Size::new(30, 30)), fixed, fixed, fixed],
    );
    t.resize(100, 100);

    t.expect_widths(&[50, 50]);
    t.expect_heights(&[50, 50]);
    assert_eq!(t.recorders[0].rect(), Rect::new(10, 10, 30, 30));

    let placement = t.grid.placements()[0];
    assert_eq!(placement.cell, Rect::new(0, 0, 50, 50));
    assert_eq!(placement.rect, Rect::new(10, 10, 30, 30));
}

#[test]
fn test_margins_offset_every_cell() {
    let mut t = GridTest::with_recorders(GridOptions::columns(3), &unbounded(5));
    t.resize(200, 100);

    assert_eq!(t.recorders[0].rect(), Rect::new(4, 4, 61, 44));
    assert_eq!(t.recorders[1].rect(), Rect::new(69, 4, 61, 44));
    assert_eq!(t.recorders[2].rect(), Rect::new(134, 4, 62, 44));
    assert_eq!(t.recorders[3].rect(), Rect::new(4, 52, 61, 44));

    assert_eq!(t.recorders[2].rect().right(), 200 - 4);
    assert_eq!(t.recorders[4].rect().bottom(), 100 - 4);
}

#[test]
fn test_custom_style_margins() {
    let options = GridOptions::columns(2).style(GridStyle::new(10, 2));
    let mut t = GridTest::with_recorders(options, &unbounded(2));
    t.resize(100, 40);

    assert_eq!(t.grid.total_spacing(), Size::new(22, 20));
    t.expect_widths(&[39, 39]);
    assert_eq!(t.recorders[1].rect(), Rect::new(51, 10, 39, 20));
}

#[test]
fn test_relocate_moves_children() {
    let mut t = GridTest::with_recorders(GridOptions::columns(2).without_margins(), &unbounded(2));
    t.resize(100, 20);
    assert_eq!(t.recorders[1].rect(), Rect::new(50, 0, 50, 20));

    t.grid.relocate(Point::new(10, 5));
    assert_eq!(t.grid.position(), Point::new(10, 5));
    assert_eq!(t.recorders[1].rect(), Rect::new(60, 5, 50, 20));
}

#[test]
fn test_column_major_fills_columns_first() {
    let mut t = GridTest::with_recorders(GridOptions::rows(2).without_margins(), &unbounded(3));
    t.resize(100, 100);

    assert_eq!(t.grid.column_count(), 2);
    assert_eq!(t.grid.row_count(), 2);
    assert_eq!(t.grid.cell_of(1), Ok((0, 1)));
    assert_eq!(t.grid.cell_of(2), Ok((1, 0)));
    assert_eq!(t.recorders[1].rect(), Rect::new(0, 50, 50, 50));
    assert_eq!(t.recorders[2].rect(), Rect::new(50, 0, 50, 50));
}

// ============================================================================
// Hidden and modal children
// ============================================================================

#[test]
fn test_hidden_column_gets_zero_and_no_spacing() {
    let mut t = GridTest::with_recorders(GridOptions::columns(3), &unbounded(3));
    t.resize(112, 20);
    assert_eq!(t.grid.total_spacing().width, 16);
    t.expect_widths(&[32, 32, 32]);

    t.recorders[1].set_hidden(true);
    t.grid.invalidate_constraints();
    t.resize(112, 20);

    assert_eq!(t.grid.total_spacing().width, 12);
    assert!(t.grid.line_spec(LineDirection::Column, 1).unwrap().hidden);
    t.expect_widths(&[50, 0, 50]);
    assert_eq!(t.recorders[2].rect(), Rect::new(58, 4, 50, 12));
    assert_eq!(t.grid.placements().len(), 2);
}

#[test]
fn test_modal_child_leaves_its_slot_empty() {
    init_tracing();
    let mut grid = GridContainer::new(GridOptions::columns(2).without_margins()).unwrap();
    grid.attach(Block::unbounded().boxed());
    grid.attach(Block::unbounded().modal(true).boxed());
    grid.try_resize(Size::new(80, 10)).unwrap();

    assert_eq!(grid.column_widths(), &[80, 0]);
    let placed: Vec<usize> = grid.placements().iter().map(|p| p.child).collect();
    assert_eq!(placed, vec![0]);
}

// ============================================================================
// Caching
// ============================================================================

#[test]
fn test_unchanged_frame_does_no_work() {
    let mut t = GridTest::with_recorders(GridOptions::columns(2), &unbounded(4));
    t.resize(100, 100);
    let stats = t.grid.stats();
    let resizes = t.recorders[0].resizes();

    for _ in 0..3 {
        t.resize(100, 100);
    }

    assert_eq!(t.grid.stats(), stats);
    assert_eq!(t.recorders[0].resizes(), resizes);
}

#[test]
fn test_resize_only_redelegates() {
    let mut t = GridTest::with_recorders(GridOptions::columns(2), &unbounded(4));
    t.resize(100, 100);
    t.grid.reset_stats();

    t.resize(120, 100);
    let stats = t.grid.stats();
    assert_eq!(stats.column_delegations, 1);
    assert_eq!(stats.row_delegations, 0);
    assert_eq!(stats.column_spec_updates, 0);
    assert_eq!(stats.contents_updates, 0);
    assert_eq!(stats.placement_passes, 1);
}

// ============================================================================
// Topology changes
// ============================================================================

#[test]
fn test_attach_adds_row() {
    let mut t = GridTest::with_recorders(GridOptions::columns(2).without_margins(), &unbounded(2));
    t.resize(100, 50);
    assert_eq!(t.grid.row_count(), 1);

    let third = t.attach(SizeSpec::UNBOUNDED);
    assert_eq!(t.grid.row_count(), 2);
    t.expect_heights(&[25, 25]);
    assert_eq!(t.grid.placements().len(), 3);
    assert_eq!(third.rect(), Rect::new(0, 25, 50, 25));
}

#[test]
fn test_detach_shifts_later_children() {
    let mut t = GridTest::with_recorders(
        GridOptions::columns(2).without_margins(),
        &[max_width(10), SizeSpec::UNBOUNDED, SizeSpec::UNBOUNDED],
    );
    t.resize(100, 40);
    t.expect_widths(&[10, 90]);

    let removed = t.grid.detach(0).unwrap();
    assert_eq!(removed.size_spec(), max_width(10));
    assert_eq!(t.grid.len(), 2);

    t.resize(100, 40);
    t.expect_widths(&[50, 50]);
    t.expect_heights(&[40]);
    assert_eq!(t.recorders[2].rect(), Rect::new(50, 0, 50, 40));
}

#[test]
fn test_reorder_keeps_allocation() {
    let mut t = GridTest::with_recorders(
        GridOptions::columns(2).without_margins(),
        &[max_width(10), SizeSpec::UNBOUNDED],
    );
    t.resize(100, 10);
    t.grid.reset_stats();

    t.grid.reorder(0, 1).unwrap();
    t.resize(100, 10);

    t.expect_widths(&[90, 10]);
    let stats = t.grid.stats();
    assert_eq!(stats.column_allocations, 0);
    assert_eq!(stats.column_spec_updates, 1);
    assert_eq!(t.recorders[0].rect(), Rect::new(90, 0, 10, 10));
}

#[test]
fn test_topology_errors_leave_grid_untouched() {
    let mut t = GridTest::with_recorders(GridOptions::columns(2), &unbounded(2));
    t.resize(100, 100);
    let stats = t.grid.stats();

    assert_eq!(
        t.grid.detach(2).err(),
        Some(GridError::ChildOutOfRange { index: 2, len: 2 })
    );
    assert!(t.grid.swap(0, 9).is_err());
    assert_eq!(t.grid.set_major_count(0), Err(GridError::InvalidMajorCount));

    t.resize(100, 100);
    assert_eq!(t.grid.stats(), stats);
}

#[test]
fn test_clear_returns_children_in_order() {
    let mut grid = GridContainer::new(GridOptions::columns(2)).unwrap();
    grid.attach(Block::fixed(Size::new(1, 1)).boxed());
    grid.attach(Block::fixed(Size::new(2, 2)).boxed());

    let children = grid.clear();
    assert!(grid.is_empty());
    assert_eq!(children[1].size_spec(), SizeSpec::tight(Size::new(2, 2)));
    assert_eq!(grid.row_count(), 0);
}

// ============================================================================
// Nesting
// ============================================================================

#[test]
fn test_nested_grid_reports_and_places() {
    init_tracing();
    let (left, left_handle) = recorder(SizeSpec::tight(Size::new(20, 10)));
    let (right, right_handle) = recorder(SizeSpec::tight(Size::new(30, 10)));

    let mut inner = GridContainer::new(GridOptions::columns(2).without_margins()).unwrap();
    inner.attach(left.boxed());
    inner.attach(right.boxed());
    assert_eq!(inner.layout_spec(), SizeSpec::tight(Size::new(50, 10)));

    let mut outer = GridContainer::new(GridOptions::columns(1).without_margins()).unwrap();
    outer.attach(inner.boxed());
    outer.attach(Block::unbounded().boxed());

    assert_eq!(outer.try_resize(Size::new(100, 60)).unwrap(), Size::new(50, 60));
    assert_eq!(outer.row_heights(), &[10, 50]);
    assert_eq!(left_handle.rect(), Rect::new(0, 0, 20, 10));
    assert_eq!(right_handle.rect(), Rect::new(20, 0, 30, 10));

    outer.relocate(Point::new(10, 10));
    assert_eq!(left_handle.rect(), Rect::new(10, 10, 20, 10));
    assert_eq!(right_handle.rect(), Rect::new(30, 10, 30, 10));
}

#[test]
fn test_nested_grid_rejects_negative_resize() {
    init_tracing();
    let mut inner = GridContainer::new(GridOptions::columns(1)).unwrap();
    inner.attach(Block::unbounded().boxed());
    inner.try_resize(Size::new(40, 40)).unwrap();

    let widget: &mut dyn Widget = &mut inner;
    assert_eq!(widget.resize(Size::new(-1, 5)), Size::new(40, 40));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_style_deserializes_with_defaults() {
    let style: GridStyle = serde_json::from_str("{}").unwrap();
    assert_eq!(style, GridStyle::default());
    assert_eq!(style.frame_margin, 4);

    let style: GridStyle = serde_json::from_str(r#"{"spacing_margin": 8}"#).unwrap();
    assert_eq!(style, GridStyle::new(4, 8));
}

#[test]
fn test_options_from_json() {
    let options: GridOptions = serde_json::from_str(
        r#"{"direction": "column_major", "major_count": 3, "frame_margin_enabled": false}"#,
    )
    .unwrap();

    assert_eq!(options.direction, MajorDirection::ColumnMajor);
    assert_eq!(options.major_count, 3);
    assert!(!options.frame_margin_enabled);
    assert!(options.spacing_margin_enabled);

    let json = serde_json::to_string(&options).unwrap();
    let back: GridOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, options);
}

#[test]
fn test_negative_margin_from_config_rejected() {
    let style: GridStyle = serde_json::from_str(r#"{"frame_margin": -2}"#).unwrap();
    assert_eq!(style, GridStyle::new(-2, 4));

    assert_eq!(
        GridContainer::new(GridOptions::columns(2).style(style)).unwrap_err(),
        GridError::NegativeMargin(style)
    );
}

#[test]
fn test_zero_major_count_from_config_rejected() {
    let options: GridOptions = serde_json::from_str(r#"{"major_count": 0}"#).unwrap();
    assert_eq!(
        GridContainer::new(options).unwrap_err(),
        GridError::InvalidMajorCount
    );
}

#[test]
fn test_shape_matches_container() {
    let shape = GridShape::new(MajorDirection::RowMajor, 3, 7);
    let mut grid = GridContainer::new(GridOptions::columns(3)).unwrap();
    for _ in 0..7 {
        grid.attach(Block::unbounded().boxed());
    }

    assert_eq!(grid.column_count(), shape.columns());
    assert_eq!(grid.row_count(), shape.rows());
    assert_eq!(grid.cell_of(4), Ok(shape.cell_of(4)));
}
