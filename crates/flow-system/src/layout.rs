//! Core layout vocabulary.
//!
//! Layout flows in two directions: the owner of a container passes
//! [`Constraints`] down, and the engine hands [`Placement`]s back up. Children
//! themselves are opaque: the only thing the engine asks of them is an
//! intrinsic size, expressed through the [`Measurable`] trait.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

/// Maximum number of children a single container can hold.
///
/// A compile-time bound so the engine stays heap-free (`heapless`).
pub const MAX_CHILDREN: usize = 32;

/// Valid size range for a layout pass.
///
/// # Invariants
///
/// - `min.width <= max.width`
/// - `min.height <= max.height`
///
/// Maintained by the constructors; violated ranges are a caller bug and are
/// caught by a debug assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    /// Minimum allowed size (inclusive).
    pub min: Size,
    /// Maximum allowed size (inclusive).
    pub max: Size,
}

impl Constraints {
    /// Create constraints with explicit min and max bounds.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `min > max` on either axis.
    pub fn new(min: Size, max: Size) -> Self {
        debug_assert!(
            min.width <= max.width,
            "min.width ({}) must be <= max.width ({})",
            min.width,
            max.width
        );
        debug_assert!(
            min.height <= max.height,
            "min.height ({}) must be <= max.height ({})",
            min.height,
            max.height
        );

        Self { min, max }
    }

    /// Exact-size constraints (`min == max`).
    pub fn tight(size: Size) -> Self {
        Self {
            min: size,
            max: size,
        }
    }

    /// Zero-to-max constraints.
    pub fn loose(max: Size) -> Self {
        Self {
            min: Size::zero(),
            max,
        }
    }

    /// Clamp a size into the valid range.
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min.width, self.max.width),
            size.height.clamp(self.min.height, self.max.height),
        )
    }

    /// Whether these constraints force an exact size.
    pub fn is_tight(&self) -> bool {
        self.min == self.max
    }

    /// Shrink both bounds by the given amount, clamping at zero.
    ///
    /// Used to carve padding out of the available space.
    pub fn deflate(&self, amount: Size) -> Self {
        Self {
            min: Size::new(
                self.min.width.saturating_sub(amount.width),
                self.min.height.saturating_sub(amount.height),
            ),
            max: Size::new(
                self.max.width.saturating_sub(amount.width),
                self.max.height.saturating_sub(amount.height),
            ),
        }
    }
}

/// Final position and size of one child, relative to the container origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Offset from the container's top-left corner.
    pub offset: Point,
    /// Size of the child.
    pub size: Size,
}

impl Placement {
    /// Create a placement.
    pub fn new(offset: Point, size: Size) -> Self {
        Self { offset, size }
    }

    /// Bounding rectangle of this placement.
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(self.offset, self.size)
    }

    /// Rightmost x coordinate covered by this placement (exclusive).
    // SAFETY: offsets and sizes are screen pixel values (max ~4000); the sum
    // is far from i32::MAX.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
    pub fn right(&self) -> i32 {
        self.offset.x + self.size.width as i32
    }

    /// Bottommost y coordinate covered by this placement (exclusive).
    // SAFETY: offsets and sizes are screen pixel values (max ~4000); the sum
    // is far from i32::MAX.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
    pub fn bottom(&self) -> i32 {
        self.offset.y + self.size.height as i32
    }
}

/// A child the wrap engine can place.
///
/// Children report the size their own content wants; the engine never resizes
/// them, it only positions them. A text label, for example, reports
/// `chars * glyph_width` by `line_height`.
pub trait Measurable {
    /// The size this element's content wants, independent of any container.
    fn intrinsic_size(&self) -> Size;
}
