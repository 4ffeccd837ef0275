//! Rendering helpers over embedded-graphics draw targets.
//!
//! Layout and rendering are separate passes: the wrap engine produces
//! [`Placement`]s, and this module draws children at those placements on any
//! `DrawTarget`. Children implement [`Renderable`] to draw their own content;
//! the helpers here handle positioning, backgrounds, and debug outlines.

use crate::layout::Placement;
use crate::wrap::WrapResult;
use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

/// Trait for elements that can draw themselves to a display.
///
/// `offset` is the element's absolute top-left corner; implementations draw
/// their content relative to it and must not assume any particular origin.
pub trait Renderable {
    /// Draw this element at the given absolute offset.
    fn render<D: DrawTarget<Color = Rgb888>>(
        &self,
        display: &mut D,
        offset: Point,
    ) -> Result<(), D::Error>;
}

/// Fill a rectangle with a solid color.
pub fn fill_background<D: DrawTarget<Color = Rgb888>>(
    rect: Rectangle,
    color: Rgb888,
    display: &mut D,
) -> Result<(), D::Error> {
    rect.into_styled(PrimitiveStyle::with_fill(color)).draw(display)
}

/// Draw a container's children at their computed placements.
///
/// `children` and `result` must come from the same layout pass; children
/// beyond the engine's capacity have no placement and are skipped.
// SAFETY: origin and placement offsets are display coordinates; their sum is
// well within i32 range.
#[allow(clippy::arithmetic_side_effects)]
pub fn draw_children<C, D>(
    children: &[C],
    result: &WrapResult,
    origin: Point,
    display: &mut D,
) -> Result<(), D::Error>
where
    C: Renderable,
    D: DrawTarget<Color = Rgb888>,
{
    for (child, placement) in children.iter().zip(result.placements()) {
        child.render(display, origin + placement.offset)?;
    }
    Ok(())
}

/// Outline each placement with a 1px stroke.
///
/// Debug aid for inspecting wrap decisions without real child content.
// SAFETY: origin and placement offsets are display coordinates; their sum is
// well within i32 range.
#[allow(clippy::arithmetic_side_effects)]
pub fn draw_placements<D: DrawTarget<Color = Rgb888>>(
    placements: &[Placement],
    origin: Point,
    color: Rgb888,
    display: &mut D,
) -> Result<(), D::Error> {
    let style = PrimitiveStyle::with_stroke(color, 1);
    for placement in placements {
        Rectangle::new(origin + placement.offset, placement.size)
            .into_styled(style)
            .draw(display)?;
    }
    Ok(())
}

/// Whether a rectangle intersects the clipping bounds.
///
/// Early rejection for offscreen elements.
// SAFETY: coordinate arithmetic here adds i32 positions and i32-cast pixel
// sizes. Display dimensions (max ~4000px) added to typical screen coordinates
// are far from i32::MAX.
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
pub fn is_visible(rect: Rectangle, clip_bounds: Rectangle) -> bool {
    let rect_right = rect.top_left.x + rect.size.width as i32;
    let rect_bottom = rect.top_left.y + rect.size.height as i32;
    let clip_right = clip_bounds.top_left.x + clip_bounds.size.width as i32;
    let clip_bottom = clip_bounds.top_left.y + clip_bounds.size.height as i32;

    !(rect.top_left.x >= clip_right
        || rect_right <= clip_bounds.top_left.x
        || rect.top_left.y >= clip_bottom
        || rect_bottom <= clip_bounds.top_left.y)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::indexing_slicing)]

    use super::*;
    use crate::layout::Measurable;
    use crate::style::WrapStyle;
    use crate::wrap::WrapLayout;
    use embedded_graphics::mock_display::MockDisplay;

    struct Block(Size, Rgb888);

    impl Measurable for Block {
        fn intrinsic_size(&self) -> Size {
            self.0
        }
    }

    impl Renderable for Block {
        fn render<D: DrawTarget<Color = Rgb888>>(
            &self,
            display: &mut D,
            offset: Point,
        ) -> Result<(), D::Error> {
            fill_background(Rectangle::new(offset, self.0), self.1, display)
        }
    }

    #[test]
    fn fill_background_covers_rect() {
        let mut display: MockDisplay<Rgb888> = MockDisplay::new();
        let rect = Rectangle::new(Point::new(2, 3), Size::new(5, 4));

        fill_background(rect, Rgb888::RED, &mut display).unwrap();

        assert_eq!(display.affected_area(), rect);
    }

    #[test]
    fn draw_children_places_each_child() {
        let children = [
            Block(Size::new(10, 5), Rgb888::RED),
            Block(Size::new(10, 5), Rgb888::GREEN),
            Block(Size::new(10, 5), Rgb888::BLUE),
        ];
        let sizes = [Size::new(10, 5); 3];
        let result = WrapLayout::new(WrapStyle::new()).layout(25, &sizes);
        assert_eq!(result.row_count(), 2);

        let mut display: MockDisplay<Rgb888> = MockDisplay::new();
        draw_children(&children, &result, Point::zero(), &mut display).unwrap();

        // First row at y=0, wrapped child at y=5.
        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(Rgb888::RED));
        assert_eq!(display.get_pixel(Point::new(10, 0)), Some(Rgb888::GREEN));
        assert_eq!(display.get_pixel(Point::new(0, 5)), Some(Rgb888::BLUE));
    }

    #[test]
    fn draw_children_applies_origin() {
        let children = [Block(Size::new(4, 4), Rgb888::WHITE)];
        let result = WrapLayout::new(WrapStyle::new()).layout(20, &[Size::new(4, 4)]);

        let mut display: MockDisplay<Rgb888> = MockDisplay::new();
        draw_children(&children, &result, Point::new(7, 9), &mut display).unwrap();

        assert_eq!(
            display.affected_area(),
            Rectangle::new(Point::new(7, 9), Size::new(4, 4))
        );
    }

    #[test]
    fn draw_placements_outlines_bounds() {
        let placements = [Placement::new(Point::new(1, 1), Size::new(6, 4))];

        let mut display: MockDisplay<Rgb888> = MockDisplay::new();
        draw_placements(&placements, Point::zero(), Rgb888::YELLOW, &mut display).unwrap();

        // Stroke touches the corners but not the interior.
        assert_eq!(display.get_pixel(Point::new(1, 1)), Some(Rgb888::YELLOW));
        assert_eq!(display.get_pixel(Point::new(6, 4)), Some(Rgb888::YELLOW));
        assert_eq!(display.get_pixel(Point::new(3, 2)), None);
    }

    #[test]
    fn is_visible_inside_and_outside() {
        let clip = Rectangle::new(Point::zero(), Size::new(100, 100));

        assert!(is_visible(
            Rectangle::new(Point::new(10, 10), Size::new(50, 50)),
            clip
        ));
        assert!(!is_visible(
            Rectangle::new(Point::new(200, 200), Size::new(50, 50)),
            clip
        ));
    }

    #[test]
    fn is_visible_boundary() {
        let clip = Rectangle::new(Point::zero(), Size::new(100, 100));

        // One pixel overlapping on each side is visible.
        assert!(is_visible(
            Rectangle::new(Point::new(-49, 10), Size::new(50, 50)),
            clip
        ));
        assert!(is_visible(
            Rectangle::new(Point::new(99, 10), Size::new(50, 50)),
            clip
        ));

        // Flush against the edge is not.
        assert!(!is_visible(
            Rectangle::new(Point::new(-50, 10), Size::new(50, 50)),
            clip
        ));
        assert!(!is_visible(
            Rectangle::new(Point::new(100, 10), Size::new(50, 50)),
            clip
        ));
    }
}
