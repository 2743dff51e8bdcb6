//! Cyrus–Beck parametric clipping against a convex polygon.

use crate::geometry::{Polygon, Segment};

/// Threshold below which a dot product or direction component is
/// treated as zero.
const EPS: f64 = 1e-12;

/// Clip `segment` against the convex `polygon` with the Cyrus–Beck
/// algorithm.
///
/// The segment is expressed parametrically as `p1 + t * D` with
/// `t` in `[0, 1]`, and every polygon edge narrows the admissible
/// `[t_enter, t_exit]` interval. Returns the restricted segment, or
/// `None` when the interval empties out (no visible portion).
///
/// [`Polygon`] construction normalizes winding to counter-clockwise,
/// so for every edge `(v1, v2)` the rotated vector `(-edge.y, edge.x)`
/// is the inner normal: `N · D > 0` means the segment is entering
/// through that edge, `N · D < 0` means it is exiting.
///
/// A degenerate segment (both direction components below 1e-12) cannot
/// be parameterized and is reported as fully clipped. A segment
/// parallel to an edge and strictly outside it is likewise fully
/// clipped; parallel and inside imposes no constraint.
pub fn cyrus_beck_clip(segment: &Segment, polygon: &Polygon) -> Option<Segment> {
    let d = segment.direction();
    if d.x.abs() < EPS && d.y.abs() < EPS {
        // A zero-length segment has no direction to clip along
        return None;
    }

    let mut t_enter: f64 = 0.0;
    let mut t_exit: f64 = 1.0;

    for (v1, v2) in polygon.edges() {
        let normal = (v2 - v1).perp();
        let s = normal.dot(d);
        let w_dot = normal.dot(segment.p1 - v1);

        if s.abs() < EPS {
            // Parallel to this edge: outside it means outside the
            // polygon, inside it means the edge constrains nothing
            if w_dot < 0.0 {
                log::trace!("parallel and outside edge {v1:?} -> {v2:?}");
                return None;
            }
            continue;
        }

        let t = -w_dot / s;
        if s > 0.0 {
            // Potential entry point
            if t > t_exit {
                return None;
            }
            if t > t_enter {
                t_enter = t;
            }
        } else {
            // Potential exit point
            if t < t_enter {
                return None;
            }
            if t < t_exit {
                t_exit = t;
            }
        }

        if t_enter > t_exit {
            return None;
        }
    }

    if t_enter <= t_exit {
        Some(Segment::new(segment.at(t_enter), segment.at(t_exit)))
    } else {
        None
    }
}

// =============================================================================
// Tests
// =============================================================================
