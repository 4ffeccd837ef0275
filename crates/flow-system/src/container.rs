//! Retained wrap container.
//!
//! [`FlowContainer`] owns an ordered list of children and re-runs the wrap
//! engine on demand. There is no incremental reflow: any change to the child
//! list or the available width is answered by a full `layout` call, which is
//! cheap at these child counts.
//!
//! The container is single-owner, single-threaded state: nothing here uses
//! interior mutability, so the child list can only change through `&mut self`
//! on the owning thread.

use crate::layout::{Constraints, Measurable};
use crate::style::{Edges, RowAlign, Spacing, WrapStyle};
use crate::wrap::{WrapLayout, WrapResult};
use embedded_graphics::prelude::Size;
use heapless::Vec;

/// A wrap container over a homogeneous child type.
///
/// `C` is any [`Measurable`]; mixed content is expressed with an enum child.
/// `N` bounds the child list (keep it at or below
/// [`MAX_CHILDREN`](crate::layout::MAX_CHILDREN); the engine ignores children
/// past that bound).
///
/// # Example
///
/// ```
/// use flow_system::prelude::*;
/// use embedded_graphics::prelude::*;
///
/// struct Badge(u32);
/// impl Measurable for Badge {
///     fn intrinsic_size(&self) -> Size {
///         Size::new(self.0, 16)
///     }
/// }
///
/// let mut wall: FlowContainer<Badge, 8> =
///     FlowContainer::new().spacing(Spacing::uniform(4));
/// wall.add_child(Badge(40)).ok();
/// wall.add_child(Badge(60)).ok();
///
/// let result = wall.layout(Constraints::loose(Size::new(120, 200)));
/// assert_eq!(result.row_count(), 1);
/// ```
pub struct FlowContainer<C, const N: usize> {
    children: Vec<C, N>,
    style: WrapStyle,
}

impl<C: Measurable, const N: usize> FlowContainer<C, N> {
    /// Create an empty container with default style.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            style: WrapStyle::new(),
        }
    }

    /// Create an empty container with the given style.
    pub fn with_style(style: WrapStyle) -> Self {
        Self {
            children: Vec::new(),
            style,
        }
    }

    /// Builder method to set padding.
    pub fn padding(mut self, padding: Edges) -> Self {
        self.style.padding = padding;
        self
    }

    /// Builder method to set spacing.
    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.style.spacing = spacing;
        self
    }

    /// Builder method to set row alignment.
    pub fn row_align(mut self, align: RowAlign) -> Self {
        self.style.row_align = align;
        self
    }

    /// The container's style.
    pub fn style(&self) -> &WrapStyle {
        &self.style
    }

    /// Append a child.
    ///
    /// # Errors
    ///
    /// Returns the child back if the container is full.
    pub fn add_child(&mut self, child: C) -> Result<(), C> {
        self.children.push(child)
    }

    /// Remove and return the child at `index`, shifting later children left.
    ///
    /// Insertion order of the remaining children is preserved. Returns `None`
    /// if `index` is out of bounds.
    pub fn remove_child(&mut self, index: usize) -> Option<C> {
        if index < self.children.len() {
            Some(self.children.remove(index))
        } else {
            None
        }
    }

    /// Borrow the children in insertion order.
    pub fn children(&self) -> &[C] {
        &self.children
    }

    /// Borrow the child at `index`.
    pub fn get_child(&self, index: usize) -> Option<&C> {
        self.children.get(index)
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the container holds no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Run a full wrap layout within `constraints.max.width`.
    ///
    /// The result's placements and size describe the content as-is; use
    /// [`measure`](Self::measure) for a size clamped into the constraints.
    pub fn layout(&self, constraints: Constraints) -> WrapResult {
        let mut sizes: Vec<Size, N> = Vec::new();
        for child in &self.children {
            sizes.push(child.intrinsic_size()).ok();
        }
        WrapLayout::new(self.style).layout(constraints.max.width, &sizes)
    }

    /// Content size clamped into the given constraints.
    pub fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.layout(constraints).size)
    }

    /// Total content height at the given width, without keeping the result.
    pub fn content_height(&self, available_width: u32) -> u32 {
        self.layout(Constraints::loose(Size::new(available_width, u32::MAX)))
            .content_height()
    }
}

impl<C: Measurable, const N: usize> Default for FlowContainer<C, N> {
    fn default() -> Self {
        Self::new()
    }
}
