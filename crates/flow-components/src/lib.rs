//! Flow Layout Components
//!
//! Ready-made children for [`flow_system`] containers: text labels and
//! chip-style tags. Every component implements `Measurable` (so the wrap
//! engine can place it) and `Renderable` (so it can draw itself).

#![cfg_attr(not(feature = "std"), no_std)]

pub mod chip;
pub mod label;

pub mod prelude {
    //! Convenience re-exports of the public API.

    pub use crate::chip::Chip;
    pub use crate::label::{Label, TextSize, MAX_LABEL_LEN};
}
