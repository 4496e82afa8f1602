pub mod commands;

use serde::Serialize;

use crate::directions::{DirectionRecord, DIRECTIONS};

/// Angular width of one compass sector.
pub const SECTOR_WIDTH: f64 = 22.5;
pub const HALF_SECTOR: f64 = SECTOR_WIDTH / 2.0;

// Fixed dial canvas, matching the SVG the frontend renders.
pub const VIEW_BOX: f64 = 500.0;
pub const CENTER: f64 = VIEW_BOX / 2.0;
pub const OUTER_RADIUS: f64 = 245.0;
const LABEL_RADIUS: f64 = 185.0;
const DEGREE_LABEL_RADIUS: f64 = 155.0;

/// Wrap a heading into the canonical [0, 360) range. Negative values wrap
/// upward; non-finite input collapses to 0 so it can never poison state.
pub fn normalize_degrees(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    degrees.rem_euclid(360.0)
}

/// Rotation applied to the dial face so the sector under the fixed top
/// indicator is the one currently being faced. Pure function of the
/// heading; selection is not involved.
pub fn dial_rotation(heading: f64) -> f64 {
    -normalize_degrees(heading)
}

/// Index into [`DIRECTIONS`] of the sector containing `angle` on the
/// unrotated dial face. Each sector spans [degree - 11.25, degree + 11.25).
pub fn sector_index(angle: f64) -> usize {
    ((normalize_degrees(angle) + HALF_SECTOR) / SECTOR_WIDTH) as usize % DIRECTIONS.len()
}

pub fn sector_at(angle: f64) -> &'static DirectionRecord {
    &DIRECTIONS[sector_index(angle)]
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Polar placement on the dial canvas: 0 degrees points up, angles grow
/// clockwise (SVG y grows downward, hence the minus).
pub fn polar_point(radius: f64, angle_degrees: f64) -> Point {
    let radians = angle_degrees.to_radians();
    Point {
        x: CENTER + radius * radians.sin(),
        y: CENTER - radius * radians.cos(),
    }
}

/// One entry of the decorative fine scale. Carries no selection semantics.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DegreeTick {
    pub degree: u16,
    pub is_major: bool,
    pub is_direction: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorGeometry {
    pub id: &'static str,
    pub degree: f64,
    /// Anchor for the short name ("N", "NNE", ...).
    pub label: Point,
    /// Anchor for the degree caption underneath it.
    pub degree_label: Point,
    /// SVG wedge covering the full sector, used as the selection highlight.
    pub highlight_path: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialGeometry {
    pub view_box: f64,
    pub center: f64,
    pub outer_radius: f64,
    pub ticks: Vec<DegreeTick>,
    pub sectors: Vec<SectorGeometry>,
}

/// Fine scale: one tick every 2 degrees, major ticks every 10.
fn degree_ticks() -> Vec<DegreeTick> {
    (0..360)
        .step_by(2)
        .map(|degree| DegreeTick {
            degree: degree as u16,
            is_major: degree % 10 == 0,
            is_direction: (degree as f64) % SECTOR_WIDTH == 0.0,
        })
        .collect()
}

/// Wedge path from the center out to the rim, spanning one full sector
/// around `degree`.
fn sector_path(degree: f64) -> String {
    let start = polar_point(OUTER_RADIUS, degree - HALF_SECTOR);
    let end = polar_point(OUTER_RADIUS, degree + HALF_SECTOR);
    format!(
        "M {CENTER} {CENTER} L {:.2} {:.2} A {OUTER_RADIUS} {OUTER_RADIUS} 0 0 1 {:.2} {:.2} Z",
        start.x, start.y, end.x, end.y
    )
}

/// Everything the frontend needs to draw the dial face. Heading-independent;
/// the whole face is rotated by [`dial_rotation`] at render time.
pub fn dial_geometry() -> DialGeometry {
    let sectors = DIRECTIONS
        .iter()
        .map(|dir| SectorGeometry {
            id: dir.id,
            degree: dir.degree,
            label: polar_point(LABEL_RADIUS, dir.degree),
            degree_label: polar_point(DEGREE_LABEL_RADIUS, dir.degree),
            highlight_path: sector_path(dir.degree),
        })
        .collect();

    DialGeometry {
        view_box: VIEW_BOX,
        center: CENTER,
        outer_radius: OUTER_RADIUS,
        ticks: degree_ticks(),
        sectors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_is_periodic() {
        for h in [0.0, 1.0, 11.25, 90.0, 359.9] {
            for k in [-2.0, -1.0, 1.0, 3.0] {
                assert!(
                    (dial_rotation(h) - dial_rotation(h + 360.0 * k)).abs() < 1e-9,
                    "rotation differs for {h} + 360*{k}"
                );
            }
        }
    }

    #[test]
    fn negative_headings_wrap_upward() {
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(-360.0), 0.0);
        assert_eq!(normalize_degrees(-0.5), 359.5);
    }

    #[test]
    fn non_finite_headings_collapse_to_zero() {
        assert_eq!(normalize_degrees(f64::NAN), 0.0);
        assert_eq!(normalize_degrees(f64::INFINITY), 0.0);
        assert_eq!(normalize_degrees(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn sector_centers_map_back_to_their_own_index() {
        for (i, dir) in DIRECTIONS.iter().enumerate() {
            assert_eq!(sector_index(dir.degree), i, "center of {}", dir.id);
        }
    }

    #[test]
    fn sector_boundaries_belong_to_the_upper_sector() {
        // [degree - 11.25, degree + 11.25): 11.25 is already NNE.
        assert_eq!(sector_at(11.24).id, "N");
        assert_eq!(sector_at(11.25).id, "NNE");
        assert_eq!(sector_at(348.74).id, "NNW");
        assert_eq!(sector_at(348.75).id, "N");
        assert_eq!(sector_at(360.0).id, "N");
        assert_eq!(sector_at(-10.0).id, "N");
    }

    #[test]
    fn polar_zero_points_straight_up() {
        let p = polar_point(OUTER_RADIUS, 0.0);
        assert!((p.x - CENTER).abs() < 1e-9);
        assert!((p.y - (CENTER - OUTER_RADIUS)).abs() < 1e-9);

        let east = polar_point(100.0, 90.0);
        assert!((east.x - (CENTER + 100.0)).abs() < 1e-9);
        assert!((east.y - CENTER).abs() < 1e-9);
    }

    #[test]
    fn geometry_covers_every_sector() {
        let geometry = dial_geometry();
        assert_eq!(geometry.sectors.len(), 16);
        assert_eq!(geometry.ticks.len(), 180);
        assert_eq!(geometry.ticks.iter().filter(|t| t.is_major).count(), 36);

        for (sector, dir) in geometry.sectors.iter().zip(DIRECTIONS.iter()) {
            assert_eq!(sector.id, dir.id);
            assert!(sector.highlight_path.starts_with("M 250 250 L "));
        }
    }
}
