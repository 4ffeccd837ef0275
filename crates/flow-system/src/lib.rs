//! Flow Layout System
//!
//! A wrap-layout ("flow") engine for fixed-function UI surfaces: children are
//! placed left-to-right in insertion order and wrap to a new row when the
//! available width is exhausted. Each row is as tall as its tallest member.
//!
//! # Architecture
//!
//! - Core types: `Constraints`, `Placement`, `Measurable`
//! - Style: `Edges`, `Spacing`, `RowAlign`, `WrapStyle`
//! - Wrap engine: greedy single-pass line breaking over intrinsic sizes
//! - Container: `FlowContainer`, a retained child list with add/remove
//! - Rendering: helpers over embedded-graphics draw targets
//!
//! # Example
//!
//! ```
//! use flow_system::prelude::*;
//! use embedded_graphics::prelude::*;
//!
//! let style = WrapStyle::new().spacing(Spacing::uniform(10));
//! let engine = WrapLayout::new(style);
//! let sizes = [Size::new(80, 20), Size::new(80, 30), Size::new(80, 20)];
//! let result = engine.layout(200, &sizes);
//! assert_eq!(result.row_count(), 2);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod container;
pub mod layout;
pub mod render;
pub mod style;
pub mod wrap;

pub mod prelude {
    //! Convenience re-exports of the public API.

    pub use crate::container::FlowContainer;
    pub use crate::layout::{Constraints, Measurable, Placement, MAX_CHILDREN};
    pub use crate::render::{draw_children, draw_placements, fill_background, Renderable};
    pub use crate::style::{Edges, RowAlign, Spacing, WrapStyle};
    pub use crate::wrap::{RowInfo, WrapLayout, WrapResult};
}
