//! Line clipping implementations.
//!
//! This module computes the visible portion of a line segment against
//! a convex clip region. Two algorithms are available:
//!
//! - [`cohen_sutherland_clip`]: 4-bit outcode clipping against an
//!   axis-aligned rectangle. Trivial accept/reject plus iterative
//!   boundary intersection.
//!
//! - [`cyrus_beck_clip`]: parametric clipping against an arbitrary
//!   convex polygon.
//!
//! Both return `Option<Segment>`: `None` means no visible portion,
//! which is a normal geometric outcome, not an error. [`ClipRegion`]
//! picks the matching algorithm for a rectangle or polygon window.

pub mod cohen_sutherland;
pub mod cyrus_beck;

pub use cohen_sutherland::{cohen_sutherland_clip, Outcode};
pub use cyrus_beck::cyrus_beck_clip;

use crate::geometry::{Polygon, Rect, Segment};

/// A clip region dispatching to the algorithm that fits its shape.
///
/// Rectangular windows use Cohen–Sutherland, convex polygon windows
/// use Cyrus–Beck. A rectangle can also be clipped parametrically via
/// [`Rect::to_polygon`] when comparing the two algorithms.
#[derive(Clone, Debug, PartialEq)]
pub enum ClipRegion {
    Window(Rect),
    Convex(Polygon),
}

impl ClipRegion {
    /// Clip `segment` against this region.
    pub fn clip(&self, segment: &Segment) -> Option<Segment> {
        match self {
            ClipRegion::Window(rect) => cohen_sutherland_clip(segment, rect),
            ClipRegion::Convex(polygon) => cyrus_beck_clip(segment, polygon),
        }
    }
}

impl std::fmt::Display for ClipRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipRegion::Window(_) => write!(f, "rectangle (Cohen-Sutherland)"),
            ClipRegion::Convex(p) => {
                write!(f, "convex polygon with {} vertices (Cyrus-Beck)", p.len())
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;

    #[test]
    fn region_dispatches_to_the_matching_algorithm() {
        let s = Segment::new(Vec2::new(-5.0, 5.0), Vec2::new(15.0, 5.0));
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        let window = ClipRegion::Window(rect);
        let convex = ClipRegion::Convex(rect.to_polygon());

        let a = window.clip(&s).unwrap();
        let b = convex.clip(&s).unwrap();
        assert_eq!(a, Segment::new(Vec2::new(0.0, 5.0), Vec2::new(10.0, 5.0)));
        assert_eq!(a, b);
    }

    #[test]
    fn region_reports_no_visible_portion() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let s = Segment::new(Vec2::new(20.0, 0.0), Vec2::new(30.0, 10.0));
        assert_eq!(ClipRegion::Window(rect).clip(&s), None);
        assert_eq!(ClipRegion::Convex(rect.to_polygon()).clip(&s), None);
    }
}
