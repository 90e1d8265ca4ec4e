//! Theme system
//!
//! Unlike a fixed-skin UI the viewer carries two palettes and flips
//! between them at runtime, so colors are fields on [`palette::Palette`]
//! rather than constants. `styles` builds the semantic styles widgets use.

pub mod palette;
pub mod styles;

pub use palette::Palette;
