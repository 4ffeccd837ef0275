//! Chip component: a label on a filled background.
//!
//! Chips are the natural child type for a tag wall: the wrap engine treats
//! each one as an opaque box of `label size + padding`.

use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};
use flow_system::prelude::{fill_background, Edges, Measurable, Renderable};

use crate::label::Label;

/// A label wrapped in padding over a solid background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    label: Label,
    padding: Edges,
    background: Rgb888,
}

impl Chip {
    /// Create a chip around the given label.
    pub fn new(label: Label) -> Self {
        Self {
            label,
            padding: Edges::horizontal_vertical(8, 4),
            background: Rgb888::CSS_LIGHT_GRAY,
        }
    }

    /// Set inner padding between the background edge and the label.
    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Set background color.
    pub fn background(mut self, color: Rgb888) -> Self {
        self.background = color;
        self
    }

    /// The wrapped label.
    pub fn label(&self) -> &Label {
        &self.label
    }
}

impl Measurable for Chip {
    // SAFETY: label sizes and padding are small pixel counts; the sums cannot
    // overflow u32.
    #[allow(clippy::arithmetic_side_effects)]
    fn intrinsic_size(&self) -> Size {
        let inner = self.label.intrinsic_size();
        Size::new(
            inner.width + self.padding.horizontal(),
            inner.height + self.padding.vertical(),
        )
    }
}

impl Renderable for Chip {
    // SAFETY: offset plus padding stays well within i32 range for display
    // coordinates.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
    fn render<D: DrawTarget<Color = Rgb888>>(
        &self,
        display: &mut D,
        offset: Point,
    ) -> Result<(), D::Error> {
        fill_background(
            Rectangle::new(offset, self.intrinsic_size()),
            self.background,
            display,
        )?;

        let label_offset = offset + Point::new(self.padding.left as i32, self.padding.top as i32);
        self.label.render(display, label_offset)
    }
}
