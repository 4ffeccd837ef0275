//! Styling for wrap containers.
//!
//! Only the knobs the wrap algorithm actually consumes live here: edge
//! insets, the two spacing axes, and cross-axis alignment within a row.

/// Edge insets in pixels, CSS box-model order: top, right, bottom, left.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Edges {
    /// Top edge inset.
    pub top: u32,
    /// Right edge inset.
    pub right: u32,
    /// Bottom edge inset.
    pub bottom: u32,
    /// Left edge inset.
    pub left: u32,
}

impl Edges {
    /// All four edges set to the same value.
    pub const fn all(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Individual values per edge.
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Separate horizontal (left/right) and vertical (top/bottom) values.
    pub const fn horizontal_vertical(horizontal: u32, vertical: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Total horizontal inset (left + right).
    // SAFETY: edge values are screen pixel counts (max ~4000); the sum cannot
    // overflow u32.
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn horizontal(self) -> u32 {
        self.left + self.right
    }

    /// Total vertical inset (top + bottom).
    // SAFETY: edge values are screen pixel counts (max ~4000); the sum cannot
    // overflow u32.
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn vertical(self) -> u32 {
        self.top + self.bottom
    }
}

impl Default for Edges {
    fn default() -> Self {
        Self::all(0)
    }
}

/// Gaps between children: `horizontal` between neighbours in a row,
/// `vertical` between rows.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Spacing {
    /// Gap between adjacent children in a row.
    pub horizontal: u32,
    /// Gap between adjacent rows.
    pub vertical: u32,
}

impl Spacing {
    /// Separate horizontal and vertical gaps.
    pub const fn new(horizontal: u32, vertical: u32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// The same gap on both axes.
    pub const fn uniform(value: u32) -> Self {
        Self::new(value, value)
    }
}

/// Vertical alignment of a child within its row.
///
/// Rows are sized by their tallest member; shorter members are aligned
/// according to this setting. `Top` matches the classic flow-layout look.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum RowAlign {
    /// Align child tops with the row top.
    #[default]
    Top,
    /// Center children within the row height.
    Center,
    /// Align child bottoms with the row bottom.
    Bottom,
}

/// Complete styling for a wrap container.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct WrapStyle {
    /// Inner padding around the content area.
    pub padding: Edges,
    /// Gaps between children and between rows.
    pub spacing: Spacing,
    /// Cross-axis alignment within each row.
    pub row_align: RowAlign,
}

impl WrapStyle {
    /// Style with zero padding, zero spacing, top alignment.
    pub const fn new() -> Self {
        Self {
            padding: Edges::all(0),
            spacing: Spacing::new(0, 0),
            row_align: RowAlign::Top,
        }
    }

    /// Builder method to set padding.
    pub const fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Builder method to set spacing.
    pub const fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Builder method to set row alignment.
    pub const fn row_align(mut self, align: RowAlign) -> Self {
        self.row_align = align;
        self
    }
}
