//! Joint placement
//!
//! Maps edge-local joint geometry onto a real perimeter edge. The local
//! template is mirrored in y when the panel interior lies to the right of the
//! edge, translated to the edge start and then rotated about the edge start
//! by the edge angle. Rotation always follows translation.

use crate::error::CamToolResult;
use crate::joints::JointGeometry;
use jointkit_core::{path_to_loop, GeometryError, Path, Point, Segment};

/// Position, orientation and length of one edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeFrame {
    pub start: Point,
    /// Degrees counter-clockwise from +x
    pub angle: f64,
    pub length: f64,
    /// Panel interior lies to the left of the edge direction
    pub interior_left: bool,
}

impl EdgeFrame {
    /// Measures an edge path. Fails on an empty path.
    pub fn measure(edge: &Path, interior_left: bool) -> Result<Self, GeometryError> {
        let start = edge.start_point().ok_or(GeometryError::EmptyPath)?;
        let angle = edge.direction_angle().ok_or_else(|| GeometryError::Degenerate {
            reason: "edge has no direction".to_string(),
        })?;
        Ok(Self {
            start,
            angle,
            length: edge.length(),
            interior_left,
        })
    }

    /// Frame of one perimeter segment, with the interior side taken from the
    /// winding of the whole perimeter.
    pub fn for_segment(
        segment: &Segment,
        perimeter: &Path,
        samples: usize,
    ) -> Result<Self, GeometryError> {
        let interior_left = interior_is_left(perimeter, samples)?;
        Self::measure(&Path::from_segments(vec![*segment]), interior_left)
    }

    /// Places an edge-local path onto this edge.
    pub fn place(&self, local: &Path) -> Path {
        let oriented = if self.interior_left {
            local.clone()
        } else {
            local.mirrored_y()
        };
        oriented
            .translated(self.start.x, self.start.y)
            .rotated(self.angle, &self.start)
    }

    /// Places both parts of a joint geometry.
    pub fn place_geometry(&self, geometry: &JointGeometry) -> JointGeometry {
        JointGeometry {
            additive: self.place(&geometry.additive),
            subtractive: self.place(&geometry.subtractive),
        }
    }
}

/// Counter-clockwise perimeters have their interior on the left of every
/// edge.
pub fn interior_is_left(perimeter: &Path, samples: usize) -> Result<bool, GeometryError> {
    let outline = path_to_loop(perimeter, samples)?;
    if outline.is_degenerate() {
        return Err(GeometryError::Degenerate {
            reason: "perimeter has fewer than three vertices".to_string(),
        });
    }
    Ok(outline.is_counter_clockwise())
}

/// Places `local` onto `target_edge` with the interior on the left.
pub fn place(local: &Path, target_edge: &Path) -> CamToolResult<Path> {
    let frame = EdgeFrame::measure(target_edge, true)?;
    tracing::debug!(
        "Placing joint at ({}, {}) angle {}",
        frame.start.x,
        frame.start.y,
        frame.angle
    );
    Ok(frame.place(local))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(x0: f64, y0: f64, x1: f64, y1: f64) -> Path {
        Path::from_segments(vec![Segment::line(Point::new(x0, y0), Point::new(x1, y1))])
    }

    fn template() -> Path {
        Path::polyline(
            &[
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 2.0),
            ],
            false,
        )
    }

    #[test]
    fn test_place_vertical_edge() {
        let placed = place(&template(), &edge(5.0, 5.0, 5.0, 15.0)).unwrap();
        assert_eq!(placed.start_point(), Some(Point::new(5.0, 5.0)));
        assert_eq!(
            Path::from_segments(vec![placed.segments()[0]]).direction_angle(),
            Some(90.0)
        );
        // Local +y maps to the left of the edge, here -x.
        assert_eq!(placed.end_point(), Some(Point::new(3.0, 15.0)));
    }

    #[test]
    fn test_interior_right_mirrors() {
        let frame = EdgeFrame::measure(&edge(0.0, 0.0, 10.0, 0.0), false).unwrap();
        let placed = frame.place(&template());
        assert_eq!(placed.end_point(), Some(Point::new(10.0, -2.0)));
    }

    #[test]
    fn test_frame_from_perimeter_winding() {
        let ccw = Path::polyline(
            &[
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
            ],
            true,
        );
        let frame = EdgeFrame::for_segment(&ccw.segments()[0], &ccw, 20).unwrap();
        assert!(frame.interior_left);
        assert_eq!(frame.length, 10.0);
        assert_eq!(frame.angle, 0.0);

        let cw = ccw.reversed();
        assert!(!interior_is_left(&cw, 20).unwrap());
    }

    #[test]
    fn test_measure_empty_edge() {
        assert_eq!(
            EdgeFrame::measure(&Path::new(), true),
            Err(GeometryError::EmptyPath)
        );
    }
}
