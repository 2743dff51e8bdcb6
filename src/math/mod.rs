//! Minimal 2D vector math used by the clipper.

pub mod vec2;

pub use vec2::Vec2;
