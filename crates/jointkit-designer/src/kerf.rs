//! Kerf overlap classification
//!
//! After both the original and the processed outlines of a face have been
//! offset by half a kerf, every point of a processed loop either lies on the
//! original offset or not. A point counts as on when it is a vertex of the
//! original or sits on one of its edges within a fraction of a grid unit, so
//! vertices that only the processed outline has (the lips of a notch) still
//! match. Segments on the original are visible on the finished part and get
//! the slow pass. The others only exist because of joint geometry and get the
//! fast pass.

use crate::clipper::{offset, SCALE};
use crate::error::DesignerResult;
use jointkit_core::{loop_to_path, Loop, Path, Point};
use std::collections::HashSet;
use tracing::info;

/// Largest distance from an original outline that still counts as on it.
/// Covers snapping both outlines to the grid while staying below the sag
/// of the first chord of a round join.
const ON_OUTLINE_TOLERANCE: f64 = 0.75 / SCALE;

/// Membership test against the edges of the original outline.
#[derive(Debug, Default)]
struct Outline {
    vertices: HashSet<(u64, u64)>,
    edges: Vec<(Point, Point)>,
}

impl Outline {
    fn key(p: &Point) -> (u64, u64) {
        // +0.0 and -0.0 are the same coordinate.
        ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
    }

    fn from_loops(loops: &[Loop]) -> Self {
        Self {
            vertices: loops
                .iter()
                .flat_map(|l| l.points().iter())
                .map(Self::key)
                .collect(),
            edges: loops
                .iter()
                .flat_map(|l| l.points().windows(2).map(|pair| (pair[0], pair[1])))
                .collect(),
        }
    }

    /// A vertex of the outline or a point on one of its edges.
    fn contains(&self, p: &Point) -> bool {
        self.vertices.contains(&Self::key(p))
            || self
                .edges
                .iter()
                .any(|(a, b)| distance_to_segment(p, a, b) <= ON_OUTLINE_TOLERANCE)
    }

    /// Both ends and the midpoint of `a`-`b` lie on the outline.
    fn covers(&self, a: &Point, b: &Point) -> bool {
        self.contains(a) && self.contains(b) && self.contains(&a.lerp(b, 0.5))
    }
}

fn distance_to_segment(p: &Point, a: &Point, b: &Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let length_sq = dx * dx + dy * dy;
    if length_sq == 0.0 {
        return p.distance_to(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / length_sq).clamp(0.0, 1.0);
    p.distance_to(&Point::new(a.x + t * dx, a.y + t * dy))
}

/// Maximal runs of points on and off the original outline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlapRuns {
    pub visible: Vec<Vec<Point>>,
    pub hidden: Vec<Vec<Point>>,
}

/// Walks every processed loop in point order and cuts it into runs of
/// points that do, or do not, lie on the original loops. A run ends where
/// the classification flips or the loop ends.
pub fn classify_overlap(original: &[Loop], processed: &[Loop]) -> OverlapRuns {
    let outline = Outline::from_loops(original);
    let mut runs = OverlapRuns::default();

    for l in processed {
        let mut current: Vec<Point> = Vec::new();
        let mut current_on = false;
        for p in l.points() {
            let on = outline.contains(p);
            if !current.is_empty() && on != current_on {
                emit(&mut runs, std::mem::take(&mut current), current_on);
            }
            current_on = on;
            current.push(*p);
        }
        if !current.is_empty() {
            emit(&mut runs, current, current_on);
        }
    }
    runs
}

fn emit(runs: &mut OverlapRuns, run: Vec<Point>, on: bool) {
    if on {
        runs.visible.push(run);
    } else {
        runs.hidden.push(run);
    }
}

/// Visible and hidden toolpaths of a face.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KerfToolpaths {
    pub visible: Vec<Path>,
    pub hidden: Vec<Path>,
}

/// Splits processed loops into toolpaths so that every segment belongs to
/// exactly one toolpath: segments running along the original outline are
/// visible, all others hidden. A loop entirely on or entirely off the
/// original stays one closed toolpath.
pub fn split_toolpaths(original: &[Loop], processed: &[Loop]) -> KerfToolpaths {
    let outline = Outline::from_loops(original);
    let mut result = KerfToolpaths::default();

    for l in processed {
        let vertices = l.vertices();
        let n = vertices.len();
        if n == 0 {
            continue;
        }
        // Segment i runs from vertex i to vertex i + 1.
        let on: Vec<bool> = (0..n)
            .map(|i| outline.covers(&vertices[i], &vertices[(i + 1) % n]))
            .collect();

        let Some(flip) = (0..n).find(|&i| on[i] != on[(i + n - 1) % n]) else {
            if on[0] {
                result.visible.push(loop_to_path(l));
            } else {
                result.hidden.push(loop_to_path(l));
            }
            continue;
        };

        let at = |k: usize| (flip + k) % n;
        let mut start = 0;
        while start < n {
            let state = on[at(start)];
            let mut end = start;
            while end + 1 < n && on[at(end + 1)] == state {
                end += 1;
            }
            let points: Vec<Point> = (start..=end + 1).map(|k| vertices[at(k)]).collect();
            let path = Path::polyline(&points, false);
            if state {
                result.visible.push(path);
            } else {
                result.hidden.push(path);
            }
            start = end + 1;
        }
    }
    result
}

/// Kerf-compensated toolpaths for one face.
#[derive(Debug, Clone)]
pub struct KerfClassifier {
    slow_kerf: f64,
    fast_kerf: f64,
    arc_segments: usize,
}

impl KerfClassifier {
    pub fn new(slow_kerf: f64, fast_kerf: f64, arc_segments: usize) -> Self {
        Self {
            slow_kerf,
            fast_kerf,
            arc_segments,
        }
    }

    /// Visible toolpaths at the slow kerf, hidden toolpaths at the fast kerf.
    /// The beam centre runs half a kerf outside the material.
    pub fn toolpaths(&self, original: &[Loop], processed: &[Loop]) -> DesignerResult<KerfToolpaths> {
        let slow = split_toolpaths(
            &offset(original, self.slow_kerf / 2.0, self.arc_segments)?,
            &offset(processed, self.slow_kerf / 2.0, self.arc_segments)?,
        );
        let fast = split_toolpaths(
            &offset(original, self.fast_kerf / 2.0, self.arc_segments)?,
            &offset(processed, self.fast_kerf / 2.0, self.arc_segments)?,
        );

        info!(
            "Kerf toolpaths: {} visible, {} hidden",
            slow.visible.len(),
            fast.hidden.len()
        );
        Ok(KerfToolpaths {
            visible: slow.visible,
            hidden: fast.hidden,
        })
    }
}
