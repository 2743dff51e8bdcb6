//! Cohen–Sutherland outcode clipping against an axis-aligned rectangle.

use bitflags::bitflags;

use crate::geometry::{Rect, Segment};
use crate::math::Vec2;

bitflags! {
    /// 4-bit region classifier for a point relative to a clip
    /// rectangle. An empty outcode means the point is inside
    /// (boundaries inclusive).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Outcode: u8 {
        const LEFT = 1;
        const RIGHT = 2;
        const BOTTOM = 4;
        const TOP = 8;
    }
}

impl Outcode {
    /// Classify `p` against `rect`.
    pub fn compute(p: Vec2, rect: &Rect) -> Self {
        let mut code = Outcode::empty();
        if p.x < rect.xmin {
            code |= Outcode::LEFT;
        } else if p.x > rect.xmax {
            code |= Outcode::RIGHT;
        }
        if p.y < rect.ymin {
            code |= Outcode::BOTTOM;
        } else if p.y > rect.ymax {
            code |= Outcode::TOP;
        }
        code
    }
}

/// Clip `segment` against `rect` with the Cohen–Sutherland algorithm.
///
/// Returns the visible portion, or `None` when nothing of the segment
/// lies inside the rectangle. A segment entirely inside comes back
/// unchanged, so clipping is idempotent.
///
/// When an endpoint's outcode has two bits set (a corner region), the
/// boundary resolved first follows the fixed priority TOP, BOTTOM,
/// RIGHT, LEFT. Each iteration clears at least one outcode bit of one
/// endpoint, so the loop terminates for any finite input.
pub fn cohen_sutherland_clip(segment: &Segment, rect: &Rect) -> Option<Segment> {
    let (mut p1, mut p2) = (segment.p1, segment.p2);
    let mut code1 = Outcode::compute(p1, rect);
    let mut code2 = Outcode::compute(p2, rect);

    loop {
        if (code1 | code2).is_empty() {
            // Trivial accept: both endpoints inside
            return Some(Segment::new(p1, p2));
        }
        if !(code1 & code2).is_empty() {
            // Trivial reject: both endpoints beyond the same boundary
            log::trace!("trivial reject: {code1:?} & {code2:?}");
            return None;
        }

        // Move the endpoint that is outside onto the boundary its
        // outcode names. The outcode guarantees the segment crosses
        // that boundary, so the slope divisions below cannot divide by
        // zero: a TOP/BOTTOM bit implies p1.y != p2.y, a LEFT/RIGHT
        // bit implies p1.x != p2.x.
        let outside = if code1.is_empty() { code2 } else { code1 };
        let p = if outside.contains(Outcode::TOP) {
            Vec2::new(
                p1.x + (p2.x - p1.x) * (rect.ymax - p1.y) / (p2.y - p1.y),
                rect.ymax,
            )
        } else if outside.contains(Outcode::BOTTOM) {
            Vec2::new(
                p1.x + (p2.x - p1.x) * (rect.ymin - p1.y) / (p2.y - p1.y),
                rect.ymin,
            )
        } else if outside.contains(Outcode::RIGHT) {
            Vec2::new(
                rect.xmax,
                p1.y + (p2.y - p1.y) * (rect.xmax - p1.x) / (p2.x - p1.x),
            )
        } else {
            Vec2::new(
                rect.xmin,
                p1.y + (p2.y - p1.y) * (rect.xmin - p1.x) / (p2.x - p1.x),
            )
        };

        if outside == code1 {
            p1 = p;
            code1 = Outcode::compute(p1, rect);
        } else {
            p2 = p;
            code2 = Outcode::compute(p2, rect);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
