//! Boolean and offset operations on loops
//!
//! Loops are scaled by [`SCALE`] and rounded onto the integer grid before the
//! boolean engine (`i_overlay`) or the offset engine (`cavalier_contours`)
//! sees them; results are snapped back to the 0.001 grid. Every call runs a
//! fresh engine invocation.

use crate::error::{DesignerError, DesignerResult};
use cavalier_contours::polyline::{PlineSource, PlineSourceMut, PlineVertex, Polyline};
use i_overlay::core::{fill_rule::FillRule, overlay_rule::OverlayRule};
use i_overlay::float::single::SingleFloatOverlay;
use jointkit_core::{loop_to_path, path_to_loops, Loop, Path, Point};
use std::panic;
use tracing::{debug, warn};

/// Grid scale: coordinates keep 0.001 unit precision.
pub const SCALE: f64 = 1000.0;

type Contour = Vec<[f64; 2]>;

/// Rounds a coordinate onto the 0.001 grid.
pub fn snap(value: f64) -> f64 {
    (value * SCALE).round() / SCALE
}

pub fn snap_point(point: Point) -> Point {
    Point::new(snap(point.x), snap(point.y))
}

fn to_grid(l: &Loop) -> Contour {
    l.vertices()
        .iter()
        .map(|p| [(p.x * SCALE).round(), (p.y * SCALE).round()])
        .collect()
}

fn from_grid(contour: &[[f64; 2]]) -> Option<Loop> {
    let l = Loop::new(
        contour
            .iter()
            .map(|p| Point::new(p[0].round() / SCALE, p[1].round() / SCALE)),
    );
    (!l.is_degenerate()).then_some(l)
}

fn overlay(subject: &[Loop], clip: &[Loop], rule: OverlayRule, fill: FillRule) -> Vec<Loop> {
    let subject: Vec<Contour> = subject
        .iter()
        .filter(|l| !l.is_degenerate())
        .map(to_grid)
        .collect();
    let clip: Vec<Contour> = clip
        .iter()
        .filter(|l| !l.is_degenerate())
        .map(to_grid)
        .collect();

    if subject.is_empty() && clip.is_empty() {
        return Vec::new();
    }

    let shapes = subject.overlay(&clip, rule, fill);
    let loops: Vec<Loop> = shapes
        .iter()
        .flat_map(|shape| shape.iter())
        .filter_map(|contour| from_grid(contour))
        .collect();

    debug!(
        "{:?}: {} subject, {} clip -> {} loops",
        rule,
        subject.len(),
        clip.len(),
        loops.len()
    );
    loops
}

/// Subject minus clip, even-odd fill on both sets.
pub fn difference(subject: &[Loop], clip: &[Loop]) -> Vec<Loop> {
    if subject.is_empty() {
        return Vec::new();
    }
    overlay(subject, clip, OverlayRule::Difference, FillRule::EvenOdd)
}

/// Subject plus clip, even-odd fill on both sets.
pub fn union(subject: &[Loop], clip: &[Loop]) -> Vec<Loop> {
    overlay(subject, clip, OverlayRule::Union, FillRule::EvenOdd)
}

pub fn intersection(subject: &[Loop], clip: &[Loop]) -> Vec<Loop> {
    if subject.is_empty() || clip.is_empty() {
        return Vec::new();
    }
    overlay(subject, clip, OverlayRule::Intersect, FillRule::EvenOdd)
}

pub fn xor(subject: &[Loop], clip: &[Loop]) -> Vec<Loop> {
    overlay(subject, clip, OverlayRule::Xor, FillRule::EvenOdd)
}

/// Perimeters minus cuts.
pub fn subtract_geometry(perimeters: &[Loop], cuts: &[Loop]) -> Vec<Loop> {
    difference(perimeters, cuts)
}

/// Merges independent shapes into one region. Overlapping shapes add up
/// instead of cancelling, unlike the even-odd operations.
pub fn merge(shapes: &[Loop]) -> Vec<Loop> {
    let oriented: Vec<Loop> = shapes.iter().cloned().map(|l| l.oriented(true)).collect();
    overlay(&oriented, &[], OverlayRule::Union, FillRule::NonZero)
}

/// Result of a point-in-loop query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    Inside,
    Outside,
    OnBoundary,
}

/// Locates `point` relative to `l` on the integer grid with exact
/// arithmetic.
pub fn point_in_loop(point: Point, l: &Loop) -> Containment {
    let grid = |p: &Point| -> (i128, i128) {
        ((p.x * SCALE).round() as i128, (p.y * SCALE).round() as i128)
    };
    let (px, py) = grid(&point);
    let mut inside = false;

    for pair in l.points().windows(2) {
        let (ax, ay) = grid(&pair[0]);
        let (bx, by) = grid(&pair[1]);
        let cross = (bx - ax) * (py - ay) - (px - ax) * (by - ay);

        if cross == 0
            && px >= ax.min(bx)
            && px <= ax.max(bx)
            && py >= ay.min(by)
            && py <= ay.max(by)
        {
            return Containment::OnBoundary;
        }

        if (ay > py) != (by > py) && (cross > 0) == (by > ay) {
            inside = !inside;
        }
    }

    if inside {
        Containment::Inside
    } else {
        Containment::Outside
    }
}

/// True when some vertex of `inner` lies strictly inside `outer`.
pub fn any_vertex_inside(inner: &Loop, outer: &Loop) -> bool {
    inner
        .vertices()
        .iter()
        .any(|p| point_in_loop(*p, outer) == Containment::Inside)
}

/// Number of other loops enclosing each loop.
pub fn nesting_depths(loops: &[Loop]) -> Vec<usize> {
    loops
        .iter()
        .enumerate()
        .map(|(i, l)| {
            loops
                .iter()
                .enumerate()
                .filter(|(j, other)| *j != i && any_vertex_inside(l, other))
                .count()
        })
        .collect()
}

/// Material area of a loop set under the even-odd rule.
pub fn region_area(loops: &[Loop]) -> f64 {
    nesting_depths(loops)
        .into_iter()
        .zip(loops)
        .map(|(depth, l)| if depth % 2 == 0 { l.area() } else { -l.area() })
        .sum()
}

/// Grows material by `distance` (shrinks for negative distances): outer
/// loops move outward and holes close in. Round joins are sampled with
/// `arc_segments` chords per arc.
pub fn offset(loops: &[Loop], distance: f64, arc_segments: usize) -> DesignerResult<Vec<Loop>> {
    let loops: Vec<Loop> = loops.iter().filter(|l| !l.is_degenerate()).cloned().collect();
    if distance == 0.0 {
        return Ok(union(&loops, &[]));
    }

    let mut result = Vec::new();
    for (l, depth) in loops.iter().zip(nesting_depths(&loops)) {
        let hole = depth % 2 == 1;
        for grown in offset_loop(l, hole, distance, arc_segments)? {
            // Outers counter-clockwise, holes clockwise for the non-zero merge.
            result.push(grown.oriented(!hole));
        }
    }

    let normalized = overlay(&result, &[], OverlayRule::Union, FillRule::NonZero);
    debug!(
        "Offset {} loops by {} -> {} loops",
        loops.len(),
        distance,
        normalized.len()
    );
    Ok(normalized)
}

fn offset_loop(
    l: &Loop,
    hole: bool,
    distance: f64,
    arc_segments: usize,
) -> DesignerResult<Vec<Loop>> {
    // Positive offsets move counter-clockwise polylines inward.
    let pline = clean_polyline(to_polyline(l, hole));
    let grows = (distance > 0.0) != hole;

    let first = run_offset(&pline, distance, arc_segments)?;
    let area: f64 = first.iter().map(Loop::area).sum();
    let moved_right_way = if grows {
        area >= l.area()
    } else {
        area <= l.area()
    };
    if moved_right_way {
        return Ok(first);
    }

    debug!("Offset went the wrong way, retrying with opposite sign");
    run_offset(&pline, -distance, arc_segments)
}

fn to_polyline(l: &Loop, ccw: bool) -> Polyline<f64> {
    let oriented = l.clone().oriented(ccw);
    let mut pline: Polyline<f64> = Polyline::new();
    for p in oriented.vertices() {
        pline.add_vertex(PlineVertex::new(p.x, p.y, 0.0));
    }
    pline.set_is_closed(true);
    pline
}

fn clean_polyline(mut pline: Polyline<f64>) -> Polyline<f64> {
    pline.remove_repeat_pos(1e-5);
    if pline.is_closed() && pline.vertex_count() > 1 {
        if let (Some(first), Some(last)) = (pline.get(0), pline.get(pline.vertex_count() - 1)) {
            if (first.x - last.x).abs() < 1e-5 && (first.y - last.y).abs() < 1e-5 {
                pline.remove(pline.vertex_count() - 1);
            }
        }
    }
    pline
}

fn run_offset(
    pline: &Polyline<f64>,
    distance: f64,
    arc_segments: usize,
) -> DesignerResult<Vec<Loop>> {
    let offsets = panic::catch_unwind(panic::AssertUnwindSafe(|| pline.parallel_offset(distance)))
        .map_err(|_| {
            warn!("Panic during parallel offset of {} vertices", pline.vertex_count());
            DesignerError::OffsetFailed(format!(
                "offset by {} of a {}-vertex loop",
                distance,
                pline.vertex_count()
            ))
        })?;

    Ok(offsets
        .iter()
        .filter_map(|result| {
            let l = Loop::new(sample_polyline(result, arc_segments).into_iter().map(snap_point));
            (!l.is_degenerate()).then_some(l)
        })
        .collect())
}

/// Vertices of a closed polyline with every bulge arc expanded into chords.
fn sample_polyline(pline: &Polyline<f64>, arc_segments: usize) -> Vec<Point> {
    let count = pline.vertex_count();
    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let v1 = pline.at(i);
        let v2 = pline.at((i + 1) % count);
        let start = Point::new(v1.x, v1.y);
        points.push(start);
        if v1.bulge.abs() > 1e-9 {
            points.extend(arc_points(start, Point::new(v2.x, v2.y), v1.bulge, arc_segments));
        }
    }
    points
}

/// Interior points of the bulge arc from `start` to `end`.
fn arc_points(start: Point, end: Point, bulge: f64, arc_segments: usize) -> Vec<Point> {
    let chord = start.distance_to(&end);
    if chord < 1e-12 || arc_segments < 2 {
        return Vec::new();
    }
    let sweep = 4.0 * bulge.atan();
    let mid = start.lerp(&end, 0.5);
    let offset = chord * (1.0 - bulge * bulge) / (4.0 * bulge);
    let center = Point::new(
        mid.x - (end.y - start.y) / chord * offset,
        mid.y + (end.x - start.x) / chord * offset,
    );
    let radius = center.distance_to(&start);
    let start_angle = (start.y - center.y).atan2(start.x - center.x);

    (1..arc_segments)
        .map(|k| {
            let angle = start_angle + sweep * k as f64 / arc_segments as f64;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Loops of every closed sub-path of every path.
pub fn loops_of(paths: &[Path], samples: usize) -> Vec<Loop> {
    paths
        .iter()
        .flat_map(|path| path_to_loops(path, samples))
        .collect()
}

pub fn paths_of(loops: &[Loop]) -> Vec<Path> {
    loops.iter().map(loop_to_path).collect()
}
