//! Midpoint (Bresenham) circle rasterization.

use super::Pixel;
use crate::error::InputError;

/// Push the eight symmetric reflections of the first-octant point
/// `(x, y)` around the center `(cx, cy)`.
///
/// Degenerate octant points (x == 0 or x == y) reflect onto each
/// other; the duplicates are emitted as-is and left for the caller to
/// deduplicate if rendering cares.
fn mirror_octant(pixels: &mut Vec<Pixel>, cx: i32, cy: i32, x: i32, y: i32) {
    pixels.push(Pixel::new(cx + x, cy + y));
    pixels.push(Pixel::new(cx - x, cy + y));
    pixels.push(Pixel::new(cx + x, cy - y));
    pixels.push(Pixel::new(cx - x, cy - y));
    pixels.push(Pixel::new(cx + y, cy + x));
    pixels.push(Pixel::new(cx - y, cy + x));
    pixels.push(Pixel::new(cx + y, cy - x));
    pixels.push(Pixel::new(cx - y, cy - x));
}

/// Bresenham's circle of radius `r` centered at `(cx, cy)`.
///
/// Walks the first octant from `(0, r)` with the integer decision
/// variable `e = 3 - 2r`, mirroring every computed point into the
/// other seven octants. The radius must be strictly positive;
/// `r <= 0` is an input error, never an empty drawing.
pub fn bresenham_circle(cx: i32, cy: i32, r: i32) -> Result<Vec<Pixel>, InputError> {
    if r <= 0 {
        return Err(InputError::NonPositiveRadius { radius: r });
    }

    let mut pixels = Vec::with_capacity(8 * (r as usize + 1));
    let mut x = 0;
    let mut y = r;
    let mut e = 3 - 2 * r;

    mirror_octant(&mut pixels, cx, cy, x, y);
    while y >= x {
        x += 1;
        if e >= 0 {
            y -= 1;
            e += 4 * (x - y) + 10;
        } else {
            e += 4 * x + 6;
        }
        mirror_octant(&mut pixels, cx, cy, x, y);
    }

    Ok(pixels)
}

// =============================================================================
// Tests
// =============================================================================
