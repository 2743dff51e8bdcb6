//! Line rasterization: naive stepping, DDA, and Bresenham.

use super::Pixel;

/// Walk from `(x1, y1)` to `(x2, y2)` in `max(|dx|, |dy|)` equal float
/// increments, rounding each intermediate point to the nearest pixel.
///
/// Shared body of [`step_line`] and [`dda_line`]: the two algorithms
/// are presented separately in the classic curriculum but the
/// arithmetic is identical, so they intentionally share one
/// implementation rather than maintaining two diverging copies.
fn incremental_line(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<Pixel> {
    // Deltas computed in f64 so spans wider than i32 cannot overflow
    let dx = x2 as f64 - x1 as f64;
    let dy = y2 as f64 - y1 as f64;
    let steps = dx.abs().max(dy.abs());
    if steps == 0.0 {
        return vec![Pixel::new(x1, y1)];
    }

    let x_inc = dx / steps;
    let y_inc = dy / steps;

    let mut pixels = Vec::with_capacity(steps as usize + 1);
    let mut x = x1 as f64;
    let mut y = y1 as f64;
    for _ in 0..=steps as u32 {
        pixels.push(Pixel::new(x.round() as i32, y.round() as i32));
        x += x_inc;
        y += y_inc;
    }
    pixels
}

/// Naive stepping line algorithm.
///
/// Emits `max(|dx|, |dy|) + 1` pixels by linear float increments along
/// both axes, rounding each step. A zero-length line emits the single
/// pixel `(x1, y1)`.
pub fn step_line(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<Pixel> {
    incremental_line(x1, y1, x2, y2)
}

/// Digital differential analyzer line.
///
/// Behaviorally identical to [`step_line`] (same step count, same
/// increments, same rounding); kept as a distinct entry point because
/// the two are taught as distinct algorithms.
pub fn dda_line(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<Pixel> {
    incremental_line(x1, y1, x2, y2)
}

/// Bresenham's integer-only line algorithm.
///
/// Tracks an error term against the ideal line and steps the minor
/// axis when the accumulated error crosses the midpoint. Emits both
/// endpoints exactly once and every pixel in between, in order from
/// `(x1, y1)` to `(x2, y2)`. Works in all octants via independent sign
/// steps.
pub fn bresenham_line(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<Pixel> {
    // Deltas and the error term are i64: a span across the full i32
    // range would overflow i32 arithmetic. The current point stays
    // i32 since it never leaves the endpoint bounding box.
    let dx = (x2 as i64 - x1 as i64).abs();
    let dy = (y2 as i64 - y1 as i64).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };

    let mut err = dx - dy;
    let mut x = x1;
    let mut y = y1;

    let mut pixels = Vec::with_capacity(dx.max(dy) as usize + 1);
    loop {
        pixels.push(Pixel::new(x, y));
        if x == x2 && y == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
    pixels
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn step_and_dda_are_identical() {
        // Endpoints covering every octant plus degenerate cases
        let cases = [
            (0, 0, 0, 0),
            (0, 0, 10, 3),
            (0, 0, 3, 10),
            (0, 0, -10, 3),
            (0, 0, -3, -10),
            (5, 5, -7, 2),
            (-20, -10, 20, 15),
            (2, 9, 2, -4),
            (-8, 3, 11, 3),
        ];
        for (x1, y1, x2, y2) in cases {
            assert_eq!(
                step_line(x1, y1, x2, y2),
                dda_line(x1, y1, x2, y2),
                "({x1},{y1})-({x2},{y2})"
            );
        }
    }

    #[test]
    fn step_line_zero_length_emits_single_pixel() {
        assert_eq!(step_line(4, -7, 4, -7), vec![Pixel::new(4, -7)]);
    }

    #[test]
    fn step_line_emits_steps_plus_one_pixels() {
        let pixels = step_line(0, 0, 10, 4);
        assert_eq!(pixels.len(), 11);
        assert_eq!(pixels[0], Pixel::new(0, 0));
        assert_eq!(pixels[10], Pixel::new(10, 4));
    }

    #[test]
    fn bresenham_single_point() {
        assert_eq!(bresenham_line(3, 3, 3, 3), vec![Pixel::new(3, 3)]);
    }

    #[test]
    fn bresenham_includes_endpoints_exactly_once() {
        for (x1, y1, x2, y2) in [(0, 0, 12, 5), (0, 0, -5, 12), (7, -3, -2, -9)] {
            let pixels = bresenham_line(x1, y1, x2, y2);
            let start = Pixel::new(x1, y1);
            let end = Pixel::new(x2, y2);
            assert_eq!(pixels.iter().filter(|&&p| p == start).count(), 1);
            assert_eq!(pixels.iter().filter(|&&p| p == end).count(), 1);
            assert_eq!(pixels[0], start);
            assert_eq!(*pixels.last().unwrap(), end);
        }
    }

    #[test]
    fn bresenham_is_symmetric_as_a_point_set() {
        for (x1, y1, x2, y2) in [(0, 0, 10, 4), (-3, 7, 8, -2), (1, 1, -9, -5)] {
            let forward: HashSet<_> = bresenham_line(x1, y1, x2, y2).into_iter().collect();
            let backward: HashSet<_> = bresenham_line(x2, y2, x1, y1).into_iter().collect();
            assert_eq!(forward, backward, "({x1},{y1})-({x2},{y2})");
        }
    }

    #[test]
    fn bresenham_horizontal_and_vertical() {
        let h = bresenham_line(-2, 5, 3, 5);
        assert_eq!(h.len(), 6);
        assert!(h.iter().all(|p| p.y == 5));

        let v = bresenham_line(0, 4, 0, -1);
        assert_eq!(v.len(), 6);
        assert!(v.iter().all(|p| p.x == 0));
    }

    #[test]
    fn bresenham_steps_are_adjacent() {
        // Consecutive pixels differ by at most 1 on each axis
        let pixels = bresenham_line(-15, 4, 9, -11);
        for pair in pixels.windows(2) {
            assert!((pair[1].x - pair[0].x).abs() <= 1);
            assert!((pair[1].y - pair[0].y).abs() <= 1);
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn endpoints_at_integer_extremes() {
        // Lines pinned to the i32 boundaries; the delta arithmetic
        // must not overflow even when the endpoints sit at the edges
        // of the coordinate range. (Spans wider than i32 itself imply
        // billions of pixels, so the widened deltas are exercised
        // here through boundary-adjacent endpoints.)
        let pixels = bresenham_line(i32::MAX - 3, i32::MIN + 3, i32::MAX, i32::MIN);
        assert_eq!(pixels.len(), 4);
        assert_eq!(pixels[0], Pixel::new(i32::MAX - 3, i32::MIN + 3));
        assert_eq!(*pixels.last().unwrap(), Pixel::new(i32::MAX, i32::MIN));

        let pixels = step_line(i32::MIN, 0, i32::MIN + 4, 2);
        assert_eq!(pixels.len(), 5);
        assert_eq!(pixels[0], Pixel::new(i32::MIN, 0));
        assert_eq!(*pixels.last().unwrap(), Pixel::new(i32::MIN + 4, 2));
        assert_eq!(pixels, dda_line(i32::MIN, 0, i32::MIN + 4, 2));
    }

    #[test]
    fn all_algorithms_agree_on_axis_aligned_lines() {
        for (x1, y1, x2, y2) in [(0, 0, 7, 0), (0, 0, 0, 7), (3, 2, -4, 2)] {
            let b = bresenham_line(x1, y1, x2, y2);
            assert_eq!(step_line(x1, y1, x2, y2), b);
            assert_eq!(dda_line(x1, y1, x2, y2), b);
        }
    }
}
