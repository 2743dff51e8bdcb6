//! Shared geometric primitives for the clipper: segments, rectangles
//! and convex polygons.
//!
//! All of these are plain value types. The constructors normalize what
//! can be normalized cheaply (rectangle bounds ordering, polygon
//! winding) so the clipping algorithms can assume a fixed convention.

use crate::error::InputError;
use crate::math::Vec2;

/// A directed line segment from `p1` to `p2`.
///
/// Direction matters for clip parameterization: the clippers express
/// points on the segment as `p1 + t * (p2 - p1)` with `t` in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p1: Vec2,
    pub p2: Vec2,
}

impl Segment {
    pub const fn new(p1: Vec2, p2: Vec2) -> Self {
        Self { p1, p2 }
    }

    /// Direction vector `p2 - p1`.
    pub fn direction(&self) -> Vec2 {
        self.p2 - self.p1
    }

    /// The point at parameter `t` along the segment.
    pub fn at(&self, t: f64) -> Vec2 {
        self.p1 + self.direction() * t
    }
}

/// An axis-aligned clip rectangle.
///
/// Construction normalizes the bounds so `xmin <= xmax` and
/// `ymin <= ymax`; degenerate (zero-width or zero-height) rectangles
/// are legal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl Rect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            xmin: x0.min(x1),
            ymin: y0.min(y1),
            xmax: x0.max(x1),
            ymax: y0.max(y1),
        }
    }

    /// The equivalent convex polygon, wound counter-clockwise.
    ///
    /// Useful for checking Cohen–Sutherland and Cyrus–Beck against each
    /// other on the same window.
    pub fn to_polygon(&self) -> Polygon {
        // Normalized bounds make this ring counter-clockwise already
        Polygon {
            vertices: vec![
                Vec2::new(self.xmin, self.ymin),
                Vec2::new(self.xmax, self.ymin),
                Vec2::new(self.xmax, self.ymax),
                Vec2::new(self.xmin, self.ymax),
            ],
        }
    }
}

/// A convex polygon given as a closed ring of vertices (the last vertex
/// connects back to the first).
///
/// The constructor normalizes winding to counter-clockwise using the
/// shoelace signed area, so callers may supply vertices in either
/// order. Convexity is a precondition the clipper assumes but does not
/// verify; a non-convex ring produces deterministic but meaningless
/// clip results.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    /// Build a polygon from at least 3 vertices, normalizing winding
    /// to counter-clockwise.
    pub fn new(mut vertices: Vec<Vec2>) -> Result<Self, InputError> {
        if vertices.len() < 3 {
            return Err(InputError::TooFewVertices {
                count: vertices.len(),
            });
        }
        if signed_area(&vertices) < 0.0 {
            log::debug!("polygon supplied clockwise, reversing to CCW");
            vertices.reverse();
        }
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over the directed edges `(v1, v2)`, including the
    /// closing edge from the last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

/// Twice the signed area of the ring (shoelace formula).
/// Positive for counter-clockwise winding.
fn signed_area(vertices: &[Vec2]) -> f64 {
    let n = vertices.len();
    (0..n)
        .map(|i| {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rect_normalizes_swapped_bounds() {
        let r = Rect::new(10.0, 20.0, 0.0, 5.0);
        assert_eq!(r, Rect::new(0.0, 5.0, 10.0, 20.0));
        assert!(r.xmin <= r.xmax && r.ymin <= r.ymax);
    }

    #[test]
    fn rect_to_polygon_is_ccw_quad() {
        let p = Rect::new(0.0, 0.0, 10.0, 10.0).to_polygon();
        assert_eq!(p.len(), 4);
        assert!(signed_area(p.vertices()) > 0.0);
    }

    #[test]
    fn polygon_rejects_fewer_than_three_vertices() {
        let err = Polygon::new(vec![Vec2::ZERO, Vec2::new(1.0, 0.0)]).unwrap_err();
        assert_eq!(err, InputError::TooFewVertices { count: 2 });
    }

    #[test]
    fn clockwise_polygon_is_reversed() {
        // Clockwise square
        let cw = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(10.0, 0.0),
        ];
        let p = Polygon::new(cw).unwrap();
        assert!(signed_area(p.vertices()) > 0.0);
    }

    #[test]
    fn edges_close_the_ring() {
        let p = Rect::new(0.0, 0.0, 1.0, 1.0).to_polygon();
        let edges: Vec<_> = p.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].1, p.vertices()[0]);
    }

    #[test]
    fn segment_parameterization() {
        let s = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 20.0));
        let mid = s.at(0.5);
        assert_relative_eq!(mid.x, 5.0);
        assert_relative_eq!(mid.y, 10.0);
        assert_eq!(s.at(0.0), s.p1);
        assert_eq!(s.at(1.0), s.p2);
    }
}
