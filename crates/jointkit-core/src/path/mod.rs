//! Vector path model
//!
//! A [`Path`] is an ordered list of [`Segment`]s split into sub-paths by
//! move breaks. A break is recorded explicitly, so a sub-path may start
//! exactly where the previous one ended; a gap between two segments is
//! always a break. Curved segments are
//! evaluated with `lyon::geom` and only ever reach the rest of the pipeline as
//! sampled point sequences (see [`sample`]).

mod data;
mod loops;

pub use loops::{
    loop_to_path, path_to_loop, path_to_loops, sample, sample_path, Loop, DEFAULT_CURVE_SAMPLES,
};

use lyon::geom::{
    point as lyon_point, vector, Angle, ArcFlags, CubicBezierSegment, QuadraticBezierSegment,
    SvgArc,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::GeometryError;

/// Parameter steps used when measuring curve length.
const CURVE_LENGTH_STEPS: usize = 128;

/// A 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Linear interpolation, `t = 0` is `self`.
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Rotates counter-clockwise by `degrees` about `origin`.
    pub fn rotated(&self, degrees: f64, origin: &Point) -> Point {
        let (sin, cos) = sin_cos_degrees(degrees);
        let dx = self.x - origin.x;
        let dy = self.y - origin.y;
        Point::new(origin.x + dx * cos - dy * sin, origin.y + dx * sin + dy * cos)
    }

    pub fn mirrored_y(&self) -> Point {
        Point::new(self.x, -self.y)
    }

    pub fn approx_eq(&self, other: &Point, epsilon: f64) -> bool {
        self.distance_to(other) <= epsilon
    }

    /// Angle of the vector from `self` to `other`, degrees counter-clockwise
    /// from the positive x axis.
    pub fn angle_to(&self, other: &Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x).to_degrees()
    }

    fn to_lyon(self) -> lyon::geom::Point<f64> {
        lyon_point(self.x, self.y)
    }
}

impl From<lyon::geom::Point<f64>> for Point {
    fn from(p: lyon::geom::Point<f64>) -> Self {
        Point::new(p.x, p.y)
    }
}

/// Sine and cosine of an angle in degrees, exact on quarter turns.
fn sin_cos_degrees(degrees: f64) -> (f64, f64) {
    let turns = degrees / 90.0;
    if turns.fract() == 0.0 {
        match (turns as i64).rem_euclid(4) {
            0 => (0.0, 1.0),
            1 => (1.0, 0.0),
            2 => (0.0, -1.0),
            _ => (-1.0, 0.0),
        }
    } else {
        degrees.to_radians().sin_cos()
    }
}

/// A line or curve primitive between parameters 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line {
        start: Point,
        end: Point,
    },
    QuadraticBezier {
        start: Point,
        control: Point,
        end: Point,
    },
    CubicBezier {
        start: Point,
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Elliptical arc in endpoint form; `rotation` is in degrees.
    Arc {
        start: Point,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        end: Point,
    },
}

impl Segment {
    pub fn line(start: Point, end: Point) -> Self {
        Segment::Line { start, end }
    }

    pub fn start(&self) -> Point {
        match *self {
            Segment::Line { start, .. }
            | Segment::QuadraticBezier { start, .. }
            | Segment::CubicBezier { start, .. }
            | Segment::Arc { start, .. } => start,
        }
    }

    pub fn end(&self) -> Point {
        match *self {
            Segment::Line { end, .. }
            | Segment::QuadraticBezier { end, .. }
            | Segment::CubicBezier { end, .. }
            | Segment::Arc { end, .. } => end,
        }
    }

    pub fn is_line(&self) -> bool {
        matches!(self, Segment::Line { .. })
    }

    /// Same segment with its start point moved to `point`.
    pub fn with_start(mut self, point: Point) -> Self {
        match &mut self {
            Segment::Line { start, .. }
            | Segment::QuadraticBezier { start, .. }
            | Segment::CubicBezier { start, .. }
            | Segment::Arc { start, .. } => *start = point,
        }
        self
    }

    /// Same segment with its end point moved to `point`.
    pub fn with_end(mut self, point: Point) -> Self {
        match &mut self {
            Segment::Line { end, .. }
            | Segment::QuadraticBezier { end, .. }
            | Segment::CubicBezier { end, .. }
            | Segment::Arc { end, .. } => *end = point,
        }
        self
    }

    /// Evaluates the segment at parameter `t` in `[0, 1]`.
    pub fn point_at(&self, t: f64) -> Point {
        match *self {
            Segment::Line { start, end } => start.lerp(&end, t),
            Segment::QuadraticBezier {
                start,
                control,
                end,
            } => QuadraticBezierSegment {
                from: start.to_lyon(),
                ctrl: control.to_lyon(),
                to: end.to_lyon(),
            }
            .sample(t)
            .into(),
            Segment::CubicBezier {
                start,
                control1,
                control2,
                end,
            } => CubicBezierSegment {
                from: start.to_lyon(),
                ctrl1: control1.to_lyon(),
                ctrl2: control2.to_lyon(),
                to: end.to_lyon(),
            }
            .sample(t)
            .into(),
            Segment::Arc {
                start,
                radius_x,
                radius_y,
                rotation,
                large_arc,
                sweep,
                end,
            } => {
                let arc = SvgArc {
                    from: start.to_lyon(),
                    to: end.to_lyon(),
                    radii: vector(radius_x, radius_y),
                    x_rotation: Angle::degrees(rotation),
                    flags: ArcFlags { large_arc, sweep },
                };
                if arc.is_straight_line() {
                    start.lerp(&end, t)
                } else {
                    arc.to_arc().sample(t).into()
                }
            }
        }
    }

    /// The same curve traversed end to start.
    pub fn reversed(&self) -> Segment {
        match *self {
            Segment::Line { start, end } => Segment::Line {
                start: end,
                end: start,
            },
            Segment::QuadraticBezier {
                start,
                control,
                end,
            } => Segment::QuadraticBezier {
                start: end,
                control,
                end: start,
            },
            Segment::CubicBezier {
                start,
                control1,
                control2,
                end,
            } => Segment::CubicBezier {
                start: end,
                control1: control2,
                control2: control1,
                end: start,
            },
            Segment::Arc {
                start,
                radius_x,
                radius_y,
                rotation,
                large_arc,
                sweep,
                end,
            } => Segment::Arc {
                start: end,
                radius_x,
                radius_y,
                rotation,
                large_arc,
                sweep: !sweep,
                end: start,
            },
        }
    }

    fn map_points(&self, f: impl Fn(&Point) -> Point) -> Segment {
        match *self {
            Segment::Line { start, end } => Segment::Line {
                start: f(&start),
                end: f(&end),
            },
            Segment::QuadraticBezier {
                start,
                control,
                end,
            } => Segment::QuadraticBezier {
                start: f(&start),
                control: f(&control),
                end: f(&end),
            },
            Segment::CubicBezier {
                start,
                control1,
                control2,
                end,
            } => Segment::CubicBezier {
                start: f(&start),
                control1: f(&control1),
                control2: f(&control2),
                end: f(&end),
            },
            Segment::Arc {
                start,
                radius_x,
                radius_y,
                rotation,
                large_arc,
                sweep,
                end,
            } => Segment::Arc {
                start: f(&start),
                radius_x,
                radius_y,
                rotation,
                large_arc,
                sweep,
                end: f(&end),
            },
        }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Segment {
        self.map_points(|p| p.translated(dx, dy))
    }

    pub fn rotated(&self, degrees: f64, origin: &Point) -> Segment {
        match self.map_points(|p| p.rotated(degrees, origin)) {
            Segment::Arc {
                start,
                radius_x,
                radius_y,
                rotation,
                large_arc,
                sweep,
                end,
            } => Segment::Arc {
                start,
                radius_x,
                radius_y,
                rotation: rotation + degrees,
                large_arc,
                sweep,
                end,
            },
            other => other,
        }
    }

    /// Reflection across the x axis (`y -> -y`).
    pub fn mirrored_y(&self) -> Segment {
        match self.map_points(Point::mirrored_y) {
            Segment::Arc {
                start,
                radius_x,
                radius_y,
                rotation,
                large_arc,
                sweep,
                end,
            } => Segment::Arc {
                start,
                radius_x,
                radius_y,
                rotation: -rotation,
                large_arc,
                sweep: !sweep,
                end,
            },
            other => other,
        }
    }

    /// Exact for lines; curves are measured along a dense parameter sampling.
    pub fn length(&self) -> f64 {
        match self {
            Segment::Line { start, end } => start.distance_to(end),
            _ => {
                let mut total = 0.0;
                let mut previous = self.start();
                for step in 1..=CURVE_LENGTH_STEPS {
                    let next = if step == CURVE_LENGTH_STEPS {
                        self.end()
                    } else {
                        self.point_at(step as f64 / CURVE_LENGTH_STEPS as f64)
                    };
                    total += previous.distance_to(&next);
                    previous = next;
                }
                total
            }
        }
    }
}

/// An ordered sequence of segments, possibly holding several sub-paths.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    segments: Vec<Segment>,
    /// Indices of the segments that open a new sub-path, ascending, never 0.
    breaks: Vec<usize>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path from consecutive segments; every gap between two segments
    /// becomes a move break.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        let breaks = (1..segments.len())
            .filter(|&i| segments[i - 1].end() != segments[i].start())
            .collect();
        Self { segments, breaks }
    }

    /// Straight connectors between consecutive points. With `closed` set a
    /// closing connector back to the first point is added when needed.
    pub fn polyline(points: &[Point], closed: bool) -> Self {
        let mut segments: Vec<Segment> = points
            .windows(2)
            .map(|pair| Segment::line(pair[0], pair[1]))
            .collect();
        if closed {
            if let (Some(first), Some(last)) = (points.first(), points.last()) {
                if first != last {
                    segments.push(Segment::line(*last, *first));
                }
            }
        }
        Self::from_segments(segments)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Adds a segment to the current sub-path, or opens a new one when the
    /// segment does not start where the path ends.
    pub fn push(&mut self, segment: Segment) {
        if self.end_point().is_some_and(|end| end != segment.start()) {
            self.breaks.push(self.segments.len());
        }
        self.segments.push(segment);
    }

    /// Makes the next pushed segment open a new sub-path, even when it
    /// starts at the current end point.
    pub fn move_to(&mut self) {
        let at = self.segments.len();
        if at > 0 && self.breaks.last() != Some(&at) {
            self.breaks.push(at);
        }
    }

    /// Appends all sub-paths of `other` as sub-paths of their own.
    pub fn append(&mut self, other: Path) {
        if other.is_empty() {
            return;
        }
        self.move_to();
        let offset = self.segments.len();
        self.breaks.extend(other.breaks.iter().map(|b| b + offset));
        self.segments.extend(other.segments);
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn start_point(&self) -> Option<Point> {
        self.segments.first().map(Segment::start)
    }

    pub fn end_point(&self) -> Option<Point> {
        self.segments.last().map(Segment::end)
    }

    /// True when the path is a single sub-path.
    pub fn is_continuous(&self) -> bool {
        self.breaks.is_empty()
    }

    /// A single continuous sub-path whose end point is its start point.
    pub fn is_closed(&self) -> bool {
        match (self.start_point(), self.end_point()) {
            (Some(start), Some(end)) => start == end && self.is_continuous(),
            _ => false,
        }
    }

    /// Splits the path at every move break.
    pub fn subpaths(&self) -> Vec<Path> {
        let mut bounds = Vec::with_capacity(self.breaks.len() + 2);
        bounds.push(0);
        bounds.extend(self.breaks.iter().copied());
        bounds.push(self.segments.len());
        bounds
            .windows(2)
            .filter(|w| w[0] < w[1])
            .map(|w| Path {
                segments: self.segments[w[0]..w[1]].to_vec(),
                breaks: Vec::new(),
            })
            .collect()
    }

    /// Same sub-path structure, every segment mapped through `f`.
    fn map_segments(&self, f: impl Fn(&Segment) -> Segment) -> Path {
        Path {
            segments: self.segments.iter().map(f).collect(),
            breaks: self.breaks.clone(),
        }
    }

    pub fn reversed(&self) -> Path {
        let count = self.segments.len();
        Path {
            segments: self.segments.iter().rev().map(Segment::reversed).collect(),
            breaks: self.breaks.iter().rev().map(|b| count - b).collect(),
        }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Path {
        self.map_segments(|s| s.translated(dx, dy))
    }

    /// Rotates counter-clockwise by `degrees` about `origin`.
    pub fn rotated(&self, degrees: f64, origin: &Point) -> Path {
        self.map_segments(|s| s.rotated(degrees, origin))
    }

    pub fn mirrored_y(&self) -> Path {
        self.map_segments(Segment::mirrored_y)
    }

    pub fn length(&self) -> f64 {
        self.segments.iter().map(Segment::length).sum()
    }

    /// Direction of the path in degrees, counter-clockwise from +x.
    ///
    /// Measured from the start point to the end point. For a closed path the
    /// second distinct point of its sampled loop stands in for the end point.
    pub fn direction_angle(&self) -> Option<f64> {
        let start = self.start_point()?;
        let end = self.end_point()?;
        if start != end {
            return Some(start.angle_to(&end));
        }
        let next = sample_path(self, DEFAULT_CURVE_SAMPLES)
            .into_iter()
            .find(|p| *p != start)?;
        Some(start.angle_to(&next))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_data())
    }
}

impl FromStr for Path {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

impl Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_data())
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let data = String::deserialize(deserializer)?;
        Path::parse(&data).map_err(serde::de::Error::custom)
    }
}

/// Free-function form of [`Path::length`].
pub fn length(path: &Path) -> f64 {
    path.length()
}

/// Free-function form of [`Path::start_point`].
pub fn start_point(path: &Path) -> Option<Point> {
    path.start_point()
}

/// Free-function form of [`Path::direction_angle`].
pub fn direction_angle(path: &Path) -> Option<f64> {
    path.direction_angle()
}
