//! Greedy wrap-layout engine.
//!
//! Children are taken in insertion order and packed into the current row.
//! When a child no longer fits the remaining width the row is closed and the
//! child opens the next one. A row is as tall as its tallest member, and a
//! child never spans two rows.
//!
//! The algorithm is a pure function of its inputs: laying out the same sizes
//! twice yields the same result, and there is no failure path. Degenerate
//! inputs (an available width smaller than the padding) clamp the content
//! width to zero instead of erroring.
//!
//! # Example
//!
//! ```
//! use flow_system::prelude::*;
//! use embedded_graphics::prelude::*;
//!
//! let engine = WrapLayout::new(WrapStyle::new());
//! let sizes = [
//!     Size::new(100, 20),
//!     Size::new(100, 40),
//!     Size::new(100, 20),
//!     Size::new(150, 30),
//! ];
//! let result = engine.layout(300, &sizes);
//!
//! // First three fill the row exactly; the fourth wraps.
//! assert_eq!(result.row_count(), 2);
//! assert_eq!(result.content_height(), 70);
//! ```

use crate::layout::{Placement, MAX_CHILDREN};
use crate::style::{RowAlign, WrapStyle};
use embedded_graphics::prelude::{Point, Size};
use heapless::Vec;

/// One computed row: a contiguous run of children in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowInfo {
    /// Index of the first child in this row.
    pub first: usize,
    /// Number of children in this row (always at least 1).
    pub len: usize,
    /// Consumed width: child widths plus the gaps between them.
    pub width: u32,
    /// Row height: the maximum child height in this row.
    pub height: u32,
}

/// Output of a wrap-layout pass.
///
/// Placements are in insertion order and positioned relative to the
/// container's top-left corner. `size` is the content size the children
/// actually need, including padding; it is not clamped to the available
/// width, so a single over-wide child can push it past the input width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapResult {
    /// Content size: padded extent of all rows. Zero when there are no
    /// children.
    pub size: Size,
    placements: Vec<Placement, MAX_CHILDREN>,
    rows: Vec<RowInfo, MAX_CHILDREN>,
}

impl WrapResult {
    fn empty() -> Self {
        Self {
            size: Size::zero(),
            placements: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Placement of every child, in insertion order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Computed rows, top to bottom.
    pub fn rows(&self) -> &[RowInfo] {
        &self.rows
    }

    /// Placement of the child at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&Placement> {
        self.placements.get(index)
    }

    /// Number of rows produced.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total content height, padding included. Zero with no children.
    pub fn content_height(&self) -> u32 {
        self.size.height
    }

    /// Whether the layout holds no children.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// The wrap-layout engine. Holds only style; layout itself is stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct WrapLayout {
    style: WrapStyle,
}

impl WrapLayout {
    /// Create an engine with the given style.
    pub const fn new(style: WrapStyle) -> Self {
        Self { style }
    }

    /// The style this engine lays out with.
    pub const fn style(&self) -> &WrapStyle {
        &self.style
    }

    /// Lay out `child_sizes` within `available_width`.
    ///
    /// Children beyond [`MAX_CHILDREN`] are ignored. The height axis is
    /// unconstrained: rows stack downward as far as they need.
    // SAFETY: all arithmetic operates on screen pixel values (max ~4000) and
    // child counts bounded by MAX_CHILDREN; no u32/i32 overflow is possible.
    #[allow(
        clippy::arithmetic_side_effects,
        clippy::cast_possible_wrap,
        clippy::cast_possible_truncation
    )]
    pub fn layout(&self, available_width: u32, child_sizes: &[Size]) -> WrapResult {
        let children = child_sizes.get(..child_sizes.len().min(MAX_CHILDREN)).unwrap_or(&[]);
        if children.is_empty() {
            return WrapResult::empty();
        }

        let padding = self.style.padding;
        let spacing = self.style.spacing;
        let content_width = available_width.saturating_sub(padding.horizontal());

        // Pass 1: break children into rows.
        let mut rows: Vec<RowInfo, MAX_CHILDREN> = Vec::new();
        let mut first = 0usize;
        let mut row_width = 0u32;
        let mut row_height = 0u32;

        for (index, child) in children.iter().enumerate() {
            let row_empty = index == first;
            let needed = if row_empty {
                child.width
            } else {
                row_width + spacing.horizontal + child.width
            };

            // Wrap only when the row already holds something: an over-wide
            // child occupies a row alone rather than producing an empty row.
            if !row_empty && needed > content_width {
                rows.push(RowInfo {
                    first,
                    len: index - first,
                    width: row_width,
                    height: row_height,
                })
                .ok();
                first = index;
                row_width = child.width;
                row_height = child.height;
            } else {
                row_width = needed;
                row_height = row_height.max(child.height);
            }
        }
        rows.push(RowInfo {
            first,
            len: children.len() - first,
            width: row_width,
            height: row_height,
        })
        .ok();

        // Pass 2: assign placements now that row heights are known.
        let mut placements: Vec<Placement, MAX_CHILDREN> = Vec::new();
        let mut max_row_width = 0u32;
        let mut y = padding.top;

        for (row_index, row) in rows.iter().enumerate() {
            if row_index > 0 {
                y += spacing.vertical;
            }
            max_row_width = max_row_width.max(row.width);

            let mut x = padding.left;
            for child in children.iter().skip(row.first).take(row.len) {
                let dy = match self.style.row_align {
                    RowAlign::Top => 0,
                    RowAlign::Center => row.height.saturating_sub(child.height) / 2,
                    RowAlign::Bottom => row.height.saturating_sub(child.height),
                };
                placements
                    .push(Placement::new(
                        Point::new(x as i32, (y + dy) as i32),
                        *child,
                    ))
                    .ok();
                x += child.width + spacing.horizontal;
            }

            y += row.height;
        }

        let size = Size::new(
            padding.horizontal() + max_row_width,
            y + padding.bottom,
        );

        WrapResult {
            size,
            placements,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(
        clippy::unwrap_used,
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects
    )]

    use super::*;
    use crate::style::{Edges, Spacing};
    extern crate std;

    fn sizes(widths_heights: &[(u32, u32)]) -> std::vec::Vec<Size> {
        widths_heights
            .iter()
            .map(|&(w, h)| Size::new(w, h))
            .collect()
    }

    #[test]
    fn empty_input_yields_zero_rows_and_zero_height() {
        let engine = WrapLayout::new(WrapStyle::new().padding(Edges::all(12)));
        let result = engine.layout(300, &[]);

        assert!(result.is_empty());
        assert_eq!(result.row_count(), 0);
        assert_eq!(result.content_height(), 0);
        assert_eq!(result.size, Size::zero());
    }

    #[test]
    fn children_fill_row_to_exact_width() {
        // width 300, children [100, 100, 100, 150]: the first three sum to
        // exactly 300 and share row 1; the fourth wraps to row 2.
        let engine = WrapLayout::new(WrapStyle::new());
        let children = sizes(&[(100, 20), (100, 40), (100, 20), (150, 30)]);
        let result = engine.layout(300, &children);

        assert_eq!(result.row_count(), 2);
        assert_eq!(result.rows()[0].len, 3);
        assert_eq!(result.rows()[1].len, 1);
        assert_eq!(result.rows()[0].height, 40); // max of 20, 40, 20
        assert_eq!(result.rows()[1].height, 30);
        assert_eq!(result.content_height(), 70);
    }

    #[test]
    fn placements_follow_insertion_order() {
        let engine = WrapLayout::new(WrapStyle::new());
        let children = sizes(&[(100, 10), (100, 10), (100, 10), (150, 10)]);
        let result = engine.layout(300, &children);

        let p = result.placements();
        assert_eq!(p.len(), 4);
        assert_eq!(p[0].offset, Point::new(0, 0));
        assert_eq!(p[1].offset, Point::new(100, 0));
        assert_eq!(p[2].offset, Point::new(200, 0));
        assert_eq!(p[3].offset, Point::new(0, 10));
    }

    #[test]
    fn horizontal_spacing_counts_toward_row_width() {
        // 3 * 90 = 270 fits in 300, but with 2 gaps of 20 it needs 310.
        let engine =
            WrapLayout::new(WrapStyle::new().spacing(Spacing::new(20, 0)));
        let children = sizes(&[(90, 10), (90, 10), (90, 10)]);
        let result = engine.layout(300, &children);

        assert_eq!(result.row_count(), 2);
        assert_eq!(result.rows()[0].len, 2);
        assert_eq!(result.placements()[1].offset.x, 110); // 90 + 20
    }

    #[test]
    fn vertical_spacing_separates_rows() {
        let engine =
            WrapLayout::new(WrapStyle::new().spacing(Spacing::new(0, 8)));
        let children = sizes(&[(200, 30), (200, 50)]);
        let result = engine.layout(300, &children);

        assert_eq!(result.row_count(), 2);
        assert_eq!(result.placements()[1].offset.y, 38); // 30 + 8
        assert_eq!(result.content_height(), 88); // 30 + 8 + 50
    }

    #[test]
    fn padding_offsets_content_and_grows_size() {
        let engine = WrapLayout::new(
            WrapStyle::new().padding(Edges::new(5, 10, 15, 20)),
        );
        let children = sizes(&[(100, 30)]);
        let result = engine.layout(300, &children);

        assert_eq!(result.placements()[0].offset, Point::new(20, 5));
        assert_eq!(result.size, Size::new(130, 50)); // 100+30, 30+20
    }

    #[test]
    fn overwide_child_occupies_its_own_row() {
        let engine = WrapLayout::new(WrapStyle::new());
        let children = sizes(&[(80, 10), (500, 40), (80, 10)]);
        let result = engine.layout(300, &children);

        assert_eq!(result.row_count(), 3);
        assert_eq!(result.rows()[1].len, 1);
        assert_eq!(result.rows()[1].width, 500);
        // Content width tracks the widest row, even past the input width.
        assert_eq!(result.size.width, 500);
    }

    #[test]
    fn overwide_first_child_does_not_create_empty_leading_row() {
        let engine = WrapLayout::new(WrapStyle::new());
        let children = sizes(&[(500, 40)]);
        let result = engine.layout(300, &children);

        assert_eq!(result.row_count(), 1);
        assert_eq!(result.placements()[0].offset, Point::new(0, 0));
    }

    #[test]
    fn width_smaller_than_padding_clamps_content_width() {
        // Content width saturates to zero; every child still lands in a row
        // of its own rather than the engine erroring.
        let engine =
            WrapLayout::new(WrapStyle::new().padding(Edges::all(50)));
        let children = sizes(&[(10, 10), (10, 10)]);
        let result = engine.layout(40, &children);

        assert_eq!(result.row_count(), 2);
    }

    #[test]
    fn row_height_is_max_member_height() {
        let engine = WrapLayout::new(WrapStyle::new());
        let children = sizes(&[(50, 12), (50, 48), (50, 24)]);
        let result = engine.layout(300, &children);

        assert_eq!(result.row_count(), 1);
        assert_eq!(result.rows()[0].height, 48);
        assert_eq!(result.content_height(), 48);
    }

    #[test]
    fn row_align_center_and_bottom() {
        let children = sizes(&[(50, 40), (50, 20)]);

        let centered = WrapLayout::new(WrapStyle::new().row_align(RowAlign::Center))
            .layout(300, &children);
        assert_eq!(centered.placements()[0].offset.y, 0);
        assert_eq!(centered.placements()[1].offset.y, 10); // (40 - 20) / 2

        let bottomed = WrapLayout::new(WrapStyle::new().row_align(RowAlign::Bottom))
            .layout(300, &children);
        assert_eq!(bottomed.placements()[1].offset.y, 20); // 40 - 20
    }

    #[test]
    fn no_child_exceeds_available_width_unless_overwide() {
        let engine = WrapLayout::new(
            WrapStyle::new()
                .padding(Edges::all(10))
                .spacing(Spacing::uniform(10)),
        );
        let children = sizes(&[
            (60, 10),
            (120, 20),
            (90, 15),
            (200, 25),
            (30, 5),
            (250, 40),
            (70, 10),
        ]);
        let available = 260;
        let result = engine.layout(available, &children);

        for (placement, child) in result.placements().iter().zip(children.iter()) {
            if child.width + 20 <= available {
                assert!(
                    placement.right() <= (available - 10) as i32,
                    "child at {:?} overflows the content area",
                    placement.offset
                );
            }
        }
    }

    #[test]
    fn relayout_is_idempotent() {
        let engine = WrapLayout::new(
            WrapStyle::new()
                .padding(Edges::all(4))
                .spacing(Spacing::new(10, 10)),
        );
        let children = sizes(&[(100, 20), (80, 35), (120, 10), (60, 60), (90, 25)]);

        let first = engine.layout(240, &children);
        let second = engine.layout(240, &children);
        assert_eq!(first, second);
    }

    #[test]
    fn total_height_is_sum_of_rows_plus_gaps() {
        let engine = WrapLayout::new(
            WrapStyle::new()
                .padding(Edges::horizontal_vertical(0, 7))
                .spacing(Spacing::new(0, 5)),
        );
        let children = sizes(&[(300, 10), (300, 20), (300, 30)]);
        let result = engine.layout(300, &children);

        assert_eq!(result.row_count(), 3);
        // 7 + 10 + 5 + 20 + 5 + 30 + 7
        assert_eq!(result.content_height(), 84);
    }

    #[test]
    fn children_beyond_capacity_are_ignored() {
        let engine = WrapLayout::new(WrapStyle::new());
        let children: std::vec::Vec<Size> =
            (0..40).map(|_| Size::new(10, 10)).collect();
        let result = engine.layout(1000, &children);

        assert_eq!(result.placements().len(), MAX_CHILDREN);
    }
}
