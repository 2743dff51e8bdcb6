//! Raster line/circle drawing and 2D line clipping algorithms.
//!
//! This crate is the computational core of the classic raster-graphics
//! exercises: it converts continuous line and circle descriptions into
//! discrete pixel sequences (naive stepping, DDA, Bresenham line,
//! Bresenham circle) and computes the visible portion of segments
//! against a rectangle (Cohen–Sutherland) or a convex polygon
//! (Cyrus–Beck). Everything is a pure function over value types; a
//! front end supplies coordinates and paints the returned pixels or
//! segments however it likes.
//!
//! # Quick Start
//!
//! ```
//! use rasterclip::prelude::*;
//!
//! // Rasterize a line and a circle
//! let line = bresenham_line(-20, -10, 20, 15);
//! let circle = bresenham_circle(0, 0, 15)?;
//!
//! // Keep only the pixels inside a 61x61 grid centered on the origin
//! let grid = Viewport::centered(30);
//! let visible: Vec<Pixel> = grid.clip(&line).collect();
//!
//! // Clip a world-space segment against a window
//! let window = Rect::new(0.0, 0.0, 20.0, 20.0);
//! let seg = Segment::new(Vec2::new(-10.0, 5.0), Vec2::new(10.0, 5.0));
//! assert_eq!(
//!     cohen_sutherland_clip(&seg, &window),
//!     Some(Segment::new(Vec2::new(0.0, 5.0), Vec2::new(10.0, 5.0))),
//! );
//! # Ok::<(), rasterclip::InputError>(())
//! ```

// Public API - exposed to library consumers
pub mod clipper;
pub mod error;
pub mod geometry;
pub mod math;
pub mod raster;
pub mod scene;

// Re-export commonly needed types at crate root for convenience
pub use clipper::{cohen_sutherland_clip, cyrus_beck_clip, ClipRegion, Outcode};
pub use error::InputError;
pub use geometry::{Polygon, Rect, Segment};
pub use raster::{
    bresenham_circle, bresenham_line, dda_line, rasterize_line, step_line, LineAlgorithm, Pixel,
    Viewport,
};
pub use scene::Scene;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use rasterclip::prelude::*;
/// ```
pub mod prelude {
    // Rasterizer
    pub use crate::raster::{
        bresenham_circle, bresenham_line, dda_line, rasterize_line, step_line, LineAlgorithm,
        Pixel, Viewport,
    };

    // Clipper
    pub use crate::clipper::{cohen_sutherland_clip, cyrus_beck_clip, ClipRegion, Outcode};

    // Geometry
    pub use crate::geometry::{Polygon, Rect, Segment};
    pub use crate::math::Vec2;

    // Scene description
    pub use crate::error::InputError;
    pub use crate::scene::Scene;
}
