//! Label component for displaying text.

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10, FONT_9X18_BOLD},
        MonoTextStyle,
    },
    pixelcolor::Rgb888,
    prelude::*,
    text::{Baseline, Text},
};
use flow_system::prelude::{Measurable, Renderable};
use heapless::String;

/// Label text capacity in bytes; longer text is truncated at a char
/// boundary.
pub const MAX_LABEL_LEN: usize = 64;

/// Text size variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextSize {
    /// 6x10 font.
    Small,
    /// 10x20 font.
    Normal,
    /// 9x18 bold font.
    Title,
}

impl TextSize {
    /// Line height in pixels.
    pub fn line_height(&self) -> u32 {
        match self {
            TextSize::Small => 10,
            TextSize::Normal => 20,
            TextSize::Title => 18,
        }
    }

    /// Glyph advance in pixels.
    pub fn char_width(&self) -> u32 {
        match self {
            TextSize::Small => 6,
            TextSize::Normal => 10,
            TextSize::Title => 9,
        }
    }
}

/// Single-line text label.
///
/// The label reports its intrinsic size as `chars * glyph_width` by
/// `line_height` and never wraps internally; wrapping across labels is the
/// container's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    text: String<MAX_LABEL_LEN>,
    color: Rgb888,
    size: TextSize,
}

impl Label {
    /// Create a new label with the given text.
    ///
    /// Text beyond [`MAX_LABEL_LEN`] bytes is dropped; truncation never
    /// splits a character.
    pub fn new(text: &str) -> Self {
        let mut stored: String<MAX_LABEL_LEN> = String::new();
        for c in text.chars() {
            if stored.push(c).is_err() {
                break;
            }
        }

        Self {
            text: stored,
            color: Rgb888::BLACK,
            size: TextSize::Normal,
        }
    }

    /// Set text color.
    pub fn color(mut self, color: Rgb888) -> Self {
        self.color = color;
        self
    }

    /// Set text size.
    pub fn size(mut self, size: TextSize) -> Self {
        self.size = size;
        self
    }

    /// The label's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The label's text size.
    pub fn text_size(&self) -> TextSize {
        self.size
    }
}

impl Measurable for Label {
    // SAFETY: text is at most MAX_LABEL_LEN chars and glyph widths are <= 10;
    // the product is at most 640.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    fn intrinsic_size(&self) -> Size {
        Size::new(
            (self.text.chars().count() as u32) * self.size.char_width(),
            self.size.line_height(),
        )
    }
}

impl Renderable for Label {
    fn render<D: DrawTarget<Color = Rgb888>>(
        &self,
        display: &mut D,
        offset: Point,
    ) -> Result<(), D::Error> {
        let style = match self.size {
            TextSize::Small => MonoTextStyle::new(&FONT_6X10, self.color),
            TextSize::Normal => MonoTextStyle::new(&FONT_10X20, self.color),
            TextSize::Title => MonoTextStyle::new(&FONT_9X18_BOLD, self.color),
        };

        // Baseline::Top so `offset` is the top-left corner, matching the
        // placement the wrap engine computed.
        Text::with_baseline(&self.text, offset, style, Baseline::Top).draw(display)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;

    #[test]
    fn label_creation() {
        let label = Label::new("Hello World");
        assert_eq!(label.text(), "Hello World");
        assert_eq!(label.color, Rgb888::BLACK);
    }

    #[test]
    fn label_intrinsic_size() {
        let label = Label::new("Test");
        let size = label.intrinsic_size();
        assert_eq!(size.width, 4 * 10); // 4 chars * 10px
        assert_eq!(size.height, 20);
    }

    #[test]
    fn label_intrinsic_size_small() {
        let label = Label::new("abc").size(TextSize::Small);
        assert_eq!(label.intrinsic_size(), Size::new(18, 10));
    }

    #[test]
    fn empty_label_has_zero_width() {
        let label = Label::new("");
        assert_eq!(label.intrinsic_size(), Size::new(0, 20));
    }

    #[test]
    fn long_text_is_truncated() {
        let long = "x".repeat(100);
        let label = Label::new(&long);
        assert_eq!(label.text().len(), MAX_LABEL_LEN);
    }

    #[test]
    fn multibyte_text_truncates_at_char_boundary() {
        // Two-byte chars: exactly 32 fit in the 64-byte capacity.
        let long = "\u{00e9}".repeat(100);
        let label = Label::new(&long);

        assert_eq!(label.text().len(), MAX_LABEL_LEN);
        assert_eq!(label.text().chars().count(), 32);
        // Width counts the chars actually kept.
        assert_eq!(label.intrinsic_size().width, 320);
    }

    #[test]
    fn text_sizes() {
        assert_eq!(TextSize::Small.line_height(), 10);
        assert_eq!(TextSize::Normal.line_height(), 20);
        assert_eq!(TextSize::Title.line_height(), 18);
        assert_eq!(TextSize::Small.char_width(), 6);
        assert_eq!(TextSize::Normal.char_width(), 10);
        assert_eq!(TextSize::Title.char_width(), 9);
    }

    #[test]
    fn render_draws_from_top_left() {
        use embedded_graphics::mock_display::MockDisplay;
        use flow_system::prelude::Renderable;

        let mut display: MockDisplay<Rgb888> = MockDisplay::new();
        display.set_allow_out_of_bounds_drawing(true);

        let label = Label::new("Hi").size(TextSize::Small);
        label.render(&mut display, Point::new(5, 5)).unwrap_or(());

        // Pixels land at or below the offset row, never above it.
        let area = display.affected_area();
        assert!(area.top_left.y >= 5);
        assert!(area.top_left.x >= 5);
    }
}
