//! Raster line and circle drawing algorithms.
//!
//! This module converts continuous line/circle descriptions into the
//! discrete pixel sequences a caller can paint onto a grid. Three line
//! algorithms are available, selectable at runtime:
//!
//! - [`LineAlgorithm::Step`]: naive stepping along the major axis
//! - [`LineAlgorithm::Dda`]: digital differential analyzer
//! - [`LineAlgorithm::Bresenham`]: integer-only midpoint-error stepping
//!
//! plus [`bresenham_circle`] for circles (midpoint algorithm, one
//! octant mirrored eightfold).
//!
//! The algorithms emit their full, unbounded pixel sequence; bounding
//! to a drawing area is a separate concern handled by [`Viewport`].

mod circle;
mod line;

pub use circle::bresenham_circle;
pub use line::{bresenham_line, dda_line, step_line};

/// A single grid-space pixel coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

impl Pixel {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Available line rasterization algorithms.
///
/// Use this enum to select which algorithm [`rasterize_line`] runs;
/// it mirrors the algorithm picker a front end would present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineAlgorithm {
    /// Naive stepping: float increments along the major axis, rounding
    /// each intermediate point. Pedagogically distinct from DDA even
    /// though the arithmetic is the same.
    Step,
    /// Digital differential analyzer. Same max-delta float walk as
    /// `Step`; kept as a separately named algorithm on purpose.
    Dda,
    /// Bresenham's integer-only algorithm.
    #[default]
    Bresenham,
}

impl std::fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineAlgorithm::Step => write!(f, "Step"),
            LineAlgorithm::Dda => write!(f, "DDA"),
            LineAlgorithm::Bresenham => write!(f, "Bresenham"),
        }
    }
}

/// Rasterize the line from `(x1, y1)` to `(x2, y2)` with the selected
/// algorithm.
pub fn rasterize_line(algorithm: LineAlgorithm, x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<Pixel> {
    match algorithm {
        LineAlgorithm::Step => step_line(x1, y1, x2, y2),
        LineAlgorithm::Dda => dda_line(x1, y1, x2, y2),
        LineAlgorithm::Bresenham => bresenham_line(x1, y1, x2, y2),
    }
}

/// An inclusive integer drawing window.
///
/// The rasterizer itself never bound-checks; a renderer wraps its
/// output in a viewport to drop the pixels that fall outside the
/// visible grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub xmin: i32,
    pub ymin: i32,
    pub xmax: i32,
    pub ymax: i32,
}

impl Viewport {
    /// Build a viewport, normalizing so `xmin <= xmax`, `ymin <= ymax`.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            xmin: x0.min(x1),
            ymin: y0.min(y1),
            xmax: x0.max(x1),
            ymax: y0.max(y1),
        }
    }

    /// A square viewport centered on the origin, `[-half, half]` on
    /// both axes.
    pub fn centered(half: i32) -> Self {
        Self::new(-half, -half, half, half)
    }

    pub fn contains(&self, p: Pixel) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }

    /// The subsequence of `pixels` that falls inside the viewport,
    /// in emission order.
    pub fn clip<'a>(&'a self, pixels: &'a [Pixel]) -> impl Iterator<Item = Pixel> + 'a {
        pixels.iter().copied().filter(move |p| self.contains(*p))
    }
}

// =============================================================================
// Tests
// =============================================================================
