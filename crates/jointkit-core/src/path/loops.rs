//! Closed polygon loops and the path/loop conversions.

use super::{Path, Point, Segment};
use crate::error::GeometryError;
use serde::{Deserialize, Serialize};

/// Fixed number of parameter steps used to sample a curved segment.
pub const DEFAULT_CURVE_SAMPLES: usize = 20;

fn push_unique_point(points: &mut Vec<Point>, point: Point) {
    if points.last() != Some(&point) {
        points.push(point);
    }
}

/// A closed polygon: an ordered point list whose first and last points are
/// identical. Consecutive duplicate points are never stored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Loop {
    points: Vec<Point>,
}

impl Loop {
    /// Builds a loop, dropping consecutive duplicates and closing it.
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        let mut closed: Vec<Point> = Vec::new();
        for point in points {
            push_unique_point(&mut closed, point);
        }
        if let Some(first) = closed.first().copied() {
            if closed.len() == 1 || closed.last() != Some(&first) {
                closed.push(first);
            }
        }
        Self { points: closed }
    }

    /// All points including the closing duplicate.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Distinct vertices, without the closing duplicate.
    pub fn vertices(&self) -> &[Point] {
        match self.points.len() {
            0 => &self.points,
            n => &self.points[..n - 1],
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Fewer than three distinct vertices.
    pub fn is_degenerate(&self) -> bool {
        self.vertices().len() < 3
    }

    /// Shoelace area; positive for counter-clockwise loops.
    pub fn signed_area(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].x * pair[1].y - pair[1].x * pair[0].y)
            .sum::<f64>()
            / 2.0
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    pub fn reversed(&self) -> Loop {
        Loop {
            points: self.points.iter().rev().copied().collect(),
        }
    }

    /// This loop wound counter-clockwise (`ccw`) or clockwise.
    pub fn oriented(self, ccw: bool) -> Loop {
        if self.is_counter_clockwise() == ccw {
            self
        } else {
            self.reversed()
        }
    }

    /// Same loop, starting at vertex `start`.
    pub fn rotated_to(&self, start: usize) -> Loop {
        let vertices = self.vertices();
        if vertices.is_empty() {
            return self.clone();
        }
        let start = start % vertices.len();
        Loop::new(
            vertices[start..]
                .iter()
                .chain(vertices[..start].iter())
                .copied(),
        )
    }

    /// Axis-aligned bounds as `(min, max)`.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.points.first()?;
        Some(self.points.iter().fold((first, first), |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }
}

/// Samples a segment: both endpoints for a line, `samples + 1` evenly
/// parameterised points for a curve. A point identical to the one before it
/// is dropped.
pub fn sample(segment: &Segment, samples: usize) -> Vec<Point> {
    if segment.is_line() {
        return vec![segment.start(), segment.end()];
    }
    let steps = samples.max(1);
    let mut points = Vec::with_capacity(steps + 1);
    for step in 0..=steps {
        let point = if step == 0 {
            segment.start()
        } else if step == steps {
            segment.end()
        } else {
            segment.point_at(step as f64 / steps as f64)
        };
        push_unique_point(&mut points, point);
    }
    points
}

/// Concatenated samples of every segment of `path`.
pub fn sample_path(path: &Path, samples: usize) -> Vec<Point> {
    let mut points = Vec::new();
    for segment in path.segments() {
        for point in sample(segment, samples) {
            push_unique_point(&mut points, point);
        }
    }
    points
}

/// Reduces a closed path to a loop.
pub fn path_to_loop(path: &Path, samples: usize) -> Result<Loop, GeometryError> {
    let (Some(start), Some(end)) = (path.start_point(), path.end_point()) else {
        return Err(GeometryError::EmptyPath);
    };
    if !path.is_closed() {
        return Err(GeometryError::OpenPath {
            start_x: start.x,
            start_y: start.y,
            end_x: end.x,
            end_y: end.y,
        });
    }
    Ok(Loop::new(sample_path(path, samples)))
}

/// Loops for every closed sub-path of `path`; open sub-paths are skipped.
pub fn path_to_loops(path: &Path, samples: usize) -> Vec<Loop> {
    path.subpaths()
        .iter()
        .filter(|sub| sub.is_closed())
        .map(|sub| Loop::new(sample_path(sub, samples)))
        .filter(|l| !l.is_degenerate())
        .collect()
}

/// Straight connectors between consecutive loop points, ending with the
/// closing connector.
pub fn loop_to_path(l: &Loop) -> Path {
    Path::polyline(l.points(), true)
}
