//! Face classification
//!
//! Sorts closed loops into perimeters and cuts: a loop inside any other loop
//! is a cut, every other loop is a perimeter. Each cut then belongs to the
//! first perimeter that contains it.

use crate::clipper::{point_in_loop, Containment};
use jointkit_core::{path_to_loop, Loop, Path};
use jointkit_settings::ContainmentStrategy;
use tracing::{debug, info, warn};

/// One face found by the classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceOutline {
    pub name: String,
    pub perimeter: Path,
    pub cuts: Vec<Path>,
}

/// Faces plus the loops that could not be placed in any face.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    pub faces: Vec<FaceOutline>,
    pub orphans: Vec<Path>,
}

impl Classification {
    pub fn cut_count(&self) -> usize {
        self.faces.iter().map(|f| f.cuts.len()).sum()
    }
}

/// Whether `inner` lies inside `outer` under the given strategy.
pub fn is_contained(inner: &Loop, outer: &Loop, strategy: ContainmentStrategy) -> bool {
    let mut located = inner.vertices().iter().map(|p| point_in_loop(*p, outer));
    match strategy {
        ContainmentStrategy::AnyVertex => located.any(|c| c == Containment::Inside),
        ContainmentStrategy::AllVertices => {
            let mut any_inside = false;
            for c in located {
                match c {
                    Containment::Outside => return false,
                    Containment::Inside => any_inside = true,
                    Containment::OnBoundary => {}
                }
            }
            any_inside
        }
    }
}

#[derive(Debug, Clone)]
pub struct TopologyClassifier {
    strategy: ContainmentStrategy,
    samples: usize,
}

impl TopologyClassifier {
    pub fn new(strategy: ContainmentStrategy, samples: usize) -> Self {
        Self { strategy, samples }
    }

    /// Classifies closed paths into named faces.
    pub fn classify(&self, closed: &[Path]) -> Classification {
        let mut result = Classification::default();
        let mut entries: Vec<(&Path, Loop)> = Vec::with_capacity(closed.len());

        for path in closed {
            match path_to_loop(path, self.samples) {
                Ok(l) if !l.is_degenerate() => entries.push((path, l)),
                Ok(_) => {
                    warn!("Skipping degenerate loop {}", path);
                    result.orphans.push(path.clone());
                }
                Err(e) => {
                    warn!("Skipping unclosed path: {}", e);
                    result.orphans.push(path.clone());
                }
            }
        }

        let is_cut: Vec<bool> = entries
            .iter()
            .enumerate()
            .map(|(i, (_, l))| {
                entries
                    .iter()
                    .enumerate()
                    .any(|(j, (_, other))| i != j && is_contained(l, other, self.strategy))
            })
            .collect();

        let perimeters: Vec<usize> = (0..entries.len()).filter(|&i| !is_cut[i]).collect();
        for (n, &i) in perimeters.iter().enumerate() {
            result.faces.push(FaceOutline {
                name: format!("face{}", n + 1),
                perimeter: entries[i].0.clone(),
                cuts: Vec::new(),
            });
        }

        for (i, (path, l)) in entries.iter().enumerate().filter(|(i, _)| is_cut[*i]) {
            let owner = perimeters
                .iter()
                .position(|&p| is_contained(l, &entries[p].1, self.strategy));
            match owner {
                Some(face) => {
                    debug!("Loop {} is a cut of {}", i, result.faces[face].name);
                    result.faces[face].cuts.push((*path).clone());
                }
                None => {
                    warn!("Loop {} is inside another cut but no perimeter", i);
                    result.orphans.push((*path).clone());
                }
            }
        }

        info!(
            "Classified {} loops: {} faces, {} cuts, {} unresolved",
            closed.len(),
            result.faces.len(),
            result.cut_count(),
            result.orphans.len()
        );
        result
    }
}
