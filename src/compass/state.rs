use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dial::{dial_rotation, normalize_degrees};
use crate::directions::{DirectionRecord, DIRECTIONS};

use super::feed::{heading_from_sample, OrientationSample};

/// Which source currently owns the heading. Exactly one is ever active;
/// the variant is the whole invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingMode {
    Manual,
    Live,
}

/// The single owner of heading and selection. Heading reflects whichever
/// source is active; the selected direction only changes on an explicit
/// pick, never from heading proximity.
#[derive(Debug, Clone)]
pub struct CompassState {
    heading: f64,
    mode: HeadingMode,
    selected: &'static DirectionRecord,
    updated_at: DateTime<Utc>,
}

impl CompassState {
    pub fn new() -> Self {
        Self {
            heading: 0.0,
            mode: HeadingMode::Manual,
            selected: &DIRECTIONS[0],
            updated_at: Utc::now(),
        }
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn mode(&self) -> HeadingMode {
        self.mode
    }

    pub fn selected(&self) -> &'static DirectionRecord {
        self.selected
    }

    pub fn set_mode(&mut self, mode: HeadingMode) {
        self.mode = mode;
        self.updated_at = Utc::now();
    }

    pub fn set_heading(&mut self, degrees: f64) {
        self.heading = normalize_degrees(degrees);
        self.updated_at = Utc::now();
    }

    /// Apply one live sensor sample, last-write-wins. Returns false when
    /// the sample carries no usable heading; state is untouched in that
    /// case.
    pub fn apply_sample(&mut self, sample: &OrientationSample) -> bool {
        match heading_from_sample(sample) {
            Some(heading) => {
                self.heading = heading;
                self.updated_at = Utc::now();
                true
            }
            None => false,
        }
    }

    pub fn select(&mut self, record: &'static DirectionRecord) {
        self.selected = record;
        self.updated_at = Utc::now();
    }

    pub fn snapshot(&self) -> CompassSnapshot {
        CompassSnapshot {
            heading: self.heading,
            heading_display: self.heading.round() as u16,
            rotation: dial_rotation(self.heading),
            mode: self.mode,
            selected: *self.selected,
            updated_at: self.updated_at,
        }
    }
}

impl Default for CompassState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompassSnapshot {
    pub heading: f64,
    /// Rounded integer degrees for the heading readout.
    pub heading_display: u16,
    /// Rotation to apply to the dial face, `-heading`.
    pub rotation: f64,
    pub mode: HeadingMode,
    pub selected: DirectionRecord,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directions::direction_by_id;

    fn corrected(heading: f64) -> OrientationSample {
        OrientationSample {
            webkit_compass_heading: Some(heading),
            alpha: None,
        }
    }

    #[test]
    fn starts_manual_at_north() {
        let state = CompassState::new();
        assert_eq!(state.mode(), HeadingMode::Manual);
        assert_eq!(state.heading(), 0.0);
        assert_eq!(state.selected().id, "N");
    }

    #[test]
    fn manual_heading_is_normalized() {
        let mut state = CompassState::new();
        state.set_heading(-90.0);
        assert_eq!(state.heading(), 270.0);
        state.set_heading(725.0);
        assert_eq!(state.heading(), 5.0);
    }

    #[test]
    fn corrected_heading_wins_over_alpha() {
        let mut state = CompassState::new();
        let sample = OrientationSample {
            webkit_compass_heading: Some(30.0),
            alpha: Some(100.0),
        };
        assert!(state.apply_sample(&sample));
        assert_eq!(state.heading(), 30.0);
    }

    #[test]
    fn alpha_is_mirrored_into_a_heading() {
        let mut state = CompassState::new();
        let sample = OrientationSample {
            webkit_compass_heading: None,
            alpha: Some(100.0),
        };
        assert!(state.apply_sample(&sample));
        assert_eq!(state.heading(), 260.0);
    }

    #[test]
    fn empty_samples_leave_the_heading_alone() {
        let mut state = CompassState::new();
        state.set_heading(42.0);
        let sample = OrientationSample {
            webkit_compass_heading: None,
            alpha: None,
        };
        assert!(!state.apply_sample(&sample));
        assert_eq!(state.heading(), 42.0);
    }

    #[test]
    fn non_finite_sensor_fields_count_as_absent() {
        let mut state = CompassState::new();
        state.set_heading(42.0);
        let sample = OrientationSample {
            webkit_compass_heading: Some(f64::NAN),
            alpha: Some(f64::INFINITY),
        };
        assert!(!state.apply_sample(&sample));
        assert_eq!(state.heading(), 42.0);
    }

    #[test]
    fn last_sample_wins() {
        let mut state = CompassState::new();
        for heading in [10.0, 200.0, 355.5] {
            assert!(state.apply_sample(&corrected(heading)));
        }
        assert_eq!(state.heading(), 355.5);
    }

    #[test]
    fn heading_does_not_move_the_selection() {
        let mut state = CompassState::new();
        state.apply_sample(&corrected(180.0));
        assert_eq!(state.selected().id, "N");

        state.select(direction_by_id("SE").unwrap());
        state.apply_sample(&corrected(0.0));
        assert_eq!(state.selected().id, "SE");
    }

    #[test]
    fn snapshot_mirrors_the_dial_contract() {
        let mut state = CompassState::new();
        state.set_heading(359.6);
        let snapshot = state.snapshot();
        assert_eq!(snapshot.rotation, -359.6);
        assert_eq!(snapshot.heading_display, 360);
        assert_eq!(snapshot.selected.id, "N");
    }
}
