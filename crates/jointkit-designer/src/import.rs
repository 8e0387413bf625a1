//! # Contour Import
//!
//! Turns raw contour paths into a [`Model`]: the paths are stitched into
//! closed loops, the loops are classified into faces, and every face gets
//! its `Perimeter` and `Cuts` stages. Open paths and cuts without a face
//! end up in the model's unresolved bucket.
//!
//! Contour text holds one path-data string per line; blank lines and lines
//! starting with `#` are skipped.

use crate::error::DesignerResult;
use crate::stitcher::Stitcher;
use crate::topology::{Classification, TopologyClassifier};
use jointkit_core::{path_to_loops, Bucket, Face, Model, Path, Point, Stage};
use jointkit_settings::Config;
use tracing::info;

/// Parses contour text into paths.
pub fn parse_contours(text: &str) -> DesignerResult<Vec<Path>> {
    let mut paths = Vec::new();
    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        paths.push(Path::parse(line)?);
    }
    Ok(paths)
}

/// Builds a model from raw contour paths.
pub fn import_contours(raw: &[Path], config: &Config) -> DesignerResult<Model> {
    config.validate()?;
    let stitched = Stitcher::new(config.stitching.endpoint_match).stitch(raw);
    let classification =
        TopologyClassifier::new(config.topology.containment, config.sampling.curve_samples)
            .classify(&stitched.closed);

    let mut model = Model::new();
    if let Some(view_box) = view_box(&stitched.closed, config.sampling.curve_samples) {
        model.attrib.insert("viewBox".to_string(), view_box);
    }

    let Classification { faces, orphans } = classification;
    let styles = &config.styles;
    for outline in faces {
        let mut face = Face::new();
        face.insert_stage(
            Stage::Perimeter,
            Bucket::new(vec![outline.perimeter]).with_style(styles.style_for(Stage::Perimeter)),
        )?;
        if !outline.cuts.is_empty() {
            face.insert_stage(
                Stage::Cuts,
                Bucket::new(outline.cuts).with_style(styles.style_for(Stage::Cuts)),
            )?;
        }
        model.add_face(outline.name, face);
    }

    let mut unresolved = stitched.open;
    unresolved.extend(orphans);
    if !unresolved.is_empty() {
        model.unresolved = Some(Bucket::new(unresolved));
    }

    info!(
        "Imported {} raw paths into {} faces",
        raw.len(),
        model.faces.len()
    );
    Ok(model)
}

/// Reads a contour file and imports it.
pub fn import_file(path: &std::path::Path, config: &Config) -> DesignerResult<Model> {
    let text = std::fs::read_to_string(path)?;
    import_contours(&parse_contours(&text)?, config)
}

/// `min_x min_y width height` of all closed paths.
fn view_box(paths: &[Path], samples: usize) -> Option<String> {
    let bounds = paths
        .iter()
        .flat_map(|p| path_to_loops(p, samples))
        .filter_map(|l| l.bounds())
        .reduce(|(lo, hi), (l2, h2)| {
            (
                Point::new(lo.x.min(l2.x), lo.y.min(l2.y)),
                Point::new(hi.x.max(h2.x), hi.y.max(h2.y)),
            )
        })?;
    let (lo, hi) = bounds;
    Some(format!("{} {} {} {}", lo.x, lo.y, hi.x - lo.x, hi.y - lo.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_contours_skips_comments() {
        let text = "# panel\nM 0,0 L 10,0 L 10,10 Z\n\n  M 2,2 L 4,2 L 4,4 Z  \n";
        let paths = parse_contours(text).unwrap();
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn test_parse_contours_reports_bad_line() {
        assert!(parse_contours("M 0,0 L 10,0\nX 5").is_err());
    }

    #[test]
    fn test_import_face_with_hole_and_stray_line() {
        let paths = parse_contours(
            "M 0,0 L 100,0 L 100,100 L 0,100 Z\n\
             M 40,40 L 60,40 L 60,60 L 40,60 Z\n\
             M 200,0 L 210,0",
        )
        .unwrap();
        let model = import_contours(&paths, &Config::default()).unwrap();

        assert_eq!(model.faces.len(), 1);
        let face = model.face("face1").unwrap();
        assert_eq!(face.paths(Stage::Perimeter).len(), 1);
        assert_eq!(face.paths(Stage::Cuts).len(), 1);
        assert!(face.stage(Stage::Perimeter).unwrap().style.is_some());

        let unresolved = model.unresolved.as_ref().unwrap();
        assert_eq!(unresolved.paths.len(), 1);
        assert_eq!(model.attrib.get("viewBox").map(String::as_str), Some("0 0 100 100"));
    }
}
