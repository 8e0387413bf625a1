//! Path stitching
//!
//! Splits raw paths at their move breaks and reassembles the open pieces
//! into closed loops by joining pieces that share an endpoint. Pieces that
//! never close are handed back as open paths.

use jointkit_core::{Path, Point};
use jointkit_settings::EndpointMatch;
use tracing::{debug, info, warn};

/// Closed loops and the open paths left over after stitching.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StitchResult {
    pub closed: Vec<Path>,
    pub open: Vec<Path>,
}

/// How two pieces meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pairing {
    /// Candidate end meets other start
    EndStart,
    /// Candidate start meets other end
    StartEnd,
    /// Ends meet; the other piece runs backwards
    EndEnd,
    /// Starts meet; the other piece runs backwards
    StartStart,
}

#[derive(Debug, Clone, Default)]
pub struct Stitcher {
    endpoint_match: EndpointMatch,
}

impl Stitcher {
    pub fn new(endpoint_match: EndpointMatch) -> Self {
        Self { endpoint_match }
    }

    fn meets(&self, a: Point, b: Point) -> bool {
        match self.endpoint_match {
            EndpointMatch::Exact => a == b,
            EndpointMatch::Tolerance { epsilon } => a.approx_eq(&b, epsilon),
        }
    }

    fn is_closed(&self, path: &Path) -> bool {
        match (path.start_point(), path.end_point()) {
            (Some(start), Some(end)) => path.is_continuous() && self.meets(start, end),
            _ => false,
        }
    }

    /// Snaps the final end point onto the start.
    fn close(&self, path: Path) -> Path {
        if path.is_closed() {
            return path;
        }
        let Some(start) = path.start_point() else {
            return path;
        };
        let mut segments = path.into_segments();
        if let Some(last) = segments.pop() {
            segments.push(last.with_end(start));
        }
        Path::from_segments(segments)
    }

    fn pairing(&self, candidate: &Path, other: &Path) -> Option<Pairing> {
        let (a_start, a_end) = (candidate.start_point()?, candidate.end_point()?);
        let (b_start, b_end) = (other.start_point()?, other.end_point()?);
        if self.meets(a_end, b_start) {
            Some(Pairing::EndStart)
        } else if self.meets(a_start, b_end) {
            Some(Pairing::StartEnd)
        } else if self.meets(a_end, b_end) {
            Some(Pairing::EndEnd)
        } else if self.meets(a_start, b_start) {
            Some(Pairing::StartStart)
        } else {
            None
        }
    }

    /// Reassembles closed loops from the sub-paths of `paths`.
    pub fn stitch(&self, paths: &[Path]) -> StitchResult {
        let mut result = StitchResult::default();
        let mut pool: Vec<Path> = Vec::new();

        for sub in paths.iter().flat_map(Path::subpaths) {
            if self.is_closed(&sub) {
                result.closed.push(self.close(sub));
            } else {
                pool.push(sub);
            }
        }
        let already_closed = result.closed.len();
        let pieces = pool.len();

        // Scan from the front, mirroring input order.
        pool.reverse();
        while let Some(candidate) = pool.pop() {
            if self.is_closed(&candidate) {
                result.closed.push(self.close(candidate));
                continue;
            }

            let found = pool
                .iter()
                .enumerate()
                .rev()
                .find_map(|(index, other)| {
                    self.pairing(&candidate, other).map(|pairing| (index, pairing))
                });

            match found {
                Some((index, pairing)) => {
                    let other = pool.remove(index);
                    pool.push(splice(candidate, other, pairing));
                }
                None => {
                    if let (Some(start), Some(end)) = (candidate.start_point(), candidate.end_point())
                    {
                        warn!(
                            "Dead end: open path from ({}, {}) to ({}, {})",
                            start.x, start.y, end.x, end.y
                        );
                    }
                    result.open.push(candidate);
                }
            }
        }

        debug!(
            "{} sub-paths already closed, {} open pieces to stitch",
            already_closed, pieces
        );
        info!(
            "Stitched {} closed loops, {} open paths",
            result.closed.len(),
            result.open.len()
        );
        result
    }
}

/// Joins `second` onto the end of `first`, moving the start of `second`
/// onto the end of `first`.
fn join(first: Path, second: Path) -> Path {
    let Some(end) = first.end_point() else {
        return second;
    };
    let mut segments = first.into_segments();
    let mut rest = second.into_segments().into_iter();
    if let Some(head) = rest.next() {
        segments.push(head.with_start(end));
    }
    segments.extend(rest);
    Path::from_segments(segments)
}

fn splice(candidate: Path, other: Path, pairing: Pairing) -> Path {
    match pairing {
        Pairing::EndStart => join(candidate, other),
        Pairing::StartEnd => join(other, candidate),
        Pairing::EndEnd => join(candidate, other.reversed()),
        Pairing::StartStart => join(other.reversed(), candidate),
    }
}

/// Stitches with the given endpoint matching strategy.
pub fn stitch(paths: &[Path], endpoint_match: EndpointMatch) -> StitchResult {
    Stitcher::new(endpoint_match).stitch(paths)
}
