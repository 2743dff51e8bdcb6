//! Textual scene description: segments plus a clip region.
//!
//! The classic clipping exercise reads its input as a fixed text
//! block: a segment count, that many `x1 y1 x2 y2` lines, then either
//! four numbers (a rectangle) or a vertex count followed by that many
//! `x y` vertex lines (a convex polygon). This module parses that
//! format into a [`Scene`] and reports every malformed field as an
//! [`InputError`] before any clipping runs.

use crate::clipper::ClipRegion;
use crate::error::InputError;
use crate::geometry::{Polygon, Rect, Segment};
use crate::math::Vec2;

/// A parsed scene: the segments to clip and the region to clip
/// against.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub segments: Vec<Segment>,
    pub region: ClipRegion,
}

impl Scene {
    /// Parse a scene description.
    ///
    /// Blank lines and lines starting with `#` are skipped, so a
    /// dataset can carry commented-out alternatives.
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let mut lines = input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'));

        let count_line = lines.next().ok_or(InputError::UnexpectedEnd {
            expected: "segment count",
        })?;
        let n: usize = parse_field("segment count", count_line)?;

        let mut segments = Vec::with_capacity(n);
        for i in 0..n {
            let line = lines.next().ok_or(InputError::UnexpectedEnd {
                expected: "segment coordinates",
            })?;
            let nums = parse_numbers(&format!("segment {}", i + 1), line, 4)?;
            segments.push(Segment::new(
                Vec2::new(nums[0], nums[1]),
                Vec2::new(nums[2], nums[3]),
            ));
        }

        let region_line = lines.next().ok_or(InputError::UnexpectedEnd {
            expected: "clip region",
        })?;
        let tokens: Vec<&str> = region_line.split_whitespace().collect();
        let region = match tokens.len() {
            4 => {
                let nums = parse_numbers("clip rectangle", region_line, 4)?;
                // Rect::new swap-normalizes the bounds
                ClipRegion::Window(Rect::new(nums[0], nums[1], nums[2], nums[3]))
            }
            1 => {
                let m: usize = parse_field("vertex count", tokens[0])?;
                let mut vertices = Vec::with_capacity(m);
                for i in 0..m {
                    let line = lines.next().ok_or(InputError::UnexpectedEnd {
                        expected: "polygon vertex",
                    })?;
                    let nums = parse_numbers(&format!("vertex {}", i + 1), line, 2)?;
                    vertices.push(Vec2::new(nums[0], nums[1]));
                }
                ClipRegion::Convex(Polygon::new(vertices)?)
            }
            tokens => return Err(InputError::MalformedRegion { tokens }),
        };

        log::debug!(
            "parsed scene: {} segments against {}",
            segments.len(),
            region
        );
        Ok(Self { segments, region })
    }

    /// Clip every segment against the region, keeping only the visible
    /// portions.
    pub fn clip_all(&self) -> Vec<Segment> {
        self.segments
            .iter()
            .filter_map(|s| self.region.clip(s))
            .collect()
    }
}

/// Parse one whitespace-separated line into exactly `expected` floats.
fn parse_numbers(field: &str, line: &str, expected: usize) -> Result<Vec<f64>, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != expected {
        return Err(InputError::InvalidNumber {
            field: field.to_string(),
            value: line.to_string(),
        });
    }
    tokens
        .iter()
        .map(|t| {
            t.parse::<f64>().map_err(|_| InputError::InvalidNumber {
                field: field.to_string(),
                value: (*t).to_string(),
            })
        })
        .collect()
}

/// Parse a single integer field.
fn parse_field(field: &str, token: &str) -> Result<usize, InputError> {
    token.parse().map_err(|_| InputError::InvalidNumber {
        field: field.to_string(),
        value: token.to_string(),
    })
}

// =============================================================================
// Tests
// =============================================================================
