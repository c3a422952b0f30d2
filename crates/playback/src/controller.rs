use foundation::{LngLat, NoteId};
use notes::CoordinateIndex;

use crate::report::{ReportKind, ReportLog};

/// Visible-area fraction above which a section counts as "in view".
pub const INTERSECTION_THRESHOLD: f64 = 0.3;

/// Camera fly animation duration in milliseconds.
pub const FLY_DURATION_MS: u64 = 1000;

/// One section's visibility state crossing the observation threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityChange {
    pub note: NoteId,
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// Effect sink for the playback controller.
///
/// The controller decides; the stage applies. Implementations toggle
/// presentation state on the sidecar sections and map markers, show or hide
/// the navigation bar, and forward camera moves to the map engine.
///
/// Camera contract:
/// - `fly_to` is fire-and-forget. Overlapping commands during rapid scroll
///   are last-writer-wins on the camera position.
pub trait Stage {
    /// Whether a marker is bound to this note's ordinal.
    fn has_marker(&self, note: NoteId) -> bool;

    fn set_section_visible(&mut self, note: NoteId, visible: bool);

    fn set_marker_highlighted(&mut self, note: NoteId, highlighted: bool);

    fn set_nav_bar_visible(&mut self, visible: bool);

    fn fly_to(&mut self, target: LngLat, duration_ms: u64, essential: bool);
}

/// Keeps camera and marker highlighting consistent with the note the user
/// is currently reading.
///
/// Ordering contract:
/// - Changes within one batch are applied in reported order.
/// - Each section's update is independent and idempotent, so no ordering is
///   required across sections.
///
/// Failure semantics:
/// - A missing marker or coordinate entry is recorded in the `ReportLog`
///   and skipped for that section only.
#[derive(Debug, Clone)]
pub struct PlaybackController {
    coords: CoordinateIndex,
    start_section: NoteId,
}

impl PlaybackController {
    pub fn new(coords: CoordinateIndex, start_section: NoteId) -> Self {
        Self {
            coords,
            start_section,
        }
    }

    pub fn start_section(&self) -> NoteId {
        self.start_section
    }

    /// Apply one batch of visibility changes to the stage.
    pub fn process(&self, changes: &[VisibilityChange], stage: &mut dyn Stage, log: &mut ReportLog) {
        for change in changes {
            self.process_one(*change, stage, log);
        }
    }

    fn process_one(&self, change: VisibilityChange, stage: &mut dyn Stage, log: &mut ReportLog) {
        // The nav bar follows the start section alone, under the stricter
        // rule (intersecting AND ratio at threshold), and is evaluated
        // independently of marker resolution.
        if change.note == self.start_section {
            let hide = change.is_intersecting && change.ratio >= INTERSECTION_THRESHOLD;
            stage.set_nav_bar_visible(!hide);
        }

        if !stage.has_marker(change.note) {
            log.emit(
                ReportKind::MissingMarker,
                change.note,
                format!("no marker bound to section {}", change.note),
            );
            return;
        }

        if change.ratio >= INTERSECTION_THRESHOLD {
            stage.set_section_visible(change.note, true);
            stage.set_marker_highlighted(change.note, true);
            match self.coords.get(change.note) {
                Some(target) => stage.fly_to(target, FLY_DURATION_MS, true),
                None => log.emit(
                    ReportKind::MissingCoordinate,
                    change.note,
                    format!("no coordinate entry for section {}", change.note),
                ),
            }
        } else {
            stage.set_marker_highlighted(change.note, false);
            stage.set_section_visible(change.note, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use foundation::{LngLat, NoteId};
    use notes::CoordinateIndex;
    use pretty_assertions::assert_eq;

    use super::{FLY_DURATION_MS, PlaybackController, Stage, VisibilityChange};
    use crate::report::{ReportKind, ReportLog};

    /// In-memory stage that records every effect.
    #[derive(Debug, Default)]
    struct RecordingStage {
        markers: BTreeSet<NoteId>,
        visible_sections: BTreeSet<NoteId>,
        highlighted_markers: BTreeSet<NoteId>,
        nav_bar_visible: Option<bool>,
        flights: Vec<(LngLat, u64, bool)>,
    }

    impl RecordingStage {
        fn with_markers(ids: &[u32]) -> Self {
            let mut stage = Self::default();
            for &id in ids {
                stage.markers.insert(NoteId::new(id));
            }
            stage
        }
    }

    impl Stage for RecordingStage {
        fn has_marker(&self, note: NoteId) -> bool {
            self.markers.contains(&note)
        }

        fn set_section_visible(&mut self, note: NoteId, visible: bool) {
            if visible {
                self.visible_sections.insert(note);
            } else {
                self.visible_sections.remove(&note);
            }
        }

        fn set_marker_highlighted(&mut self, note: NoteId, highlighted: bool) {
            if highlighted {
                self.highlighted_markers.insert(note);
            } else {
                self.highlighted_markers.remove(&note);
            }
        }

        fn set_nav_bar_visible(&mut self, visible: bool) {
            self.nav_bar_visible = Some(visible);
        }

        fn fly_to(&mut self, target: LngLat, duration_ms: u64, essential: bool) {
            self.flights.push((target, duration_ms, essential));
        }
    }

    fn controller_with_coords(entries: &[(u32, [f64; 2])]) -> PlaybackController {
        let mut coords = CoordinateIndex::new();
        for &(id, [lon, lat]) in entries {
            coords.insert(NoteId::new(id), LngLat::new(lon, lat));
        }
        PlaybackController::new(coords, NoteId::new(0))
    }

    fn entered(id: u32) -> VisibilityChange {
        VisibilityChange {
            note: NoteId::new(id),
            is_intersecting: true,
            ratio: 0.35,
        }
    }

    fn left(id: u32) -> VisibilityChange {
        VisibilityChange {
            note: NoteId::new(id),
            is_intersecting: false,
            ratio: 0.0,
        }
    }

    #[test]
    fn entering_view_highlights_and_flies_once() {
        let controller = controller_with_coords(&[(1, [11.0, 21.0])]);
        let mut stage = RecordingStage::with_markers(&[1]);
        let mut log = ReportLog::new();

        controller.process(&[entered(1)], &mut stage, &mut log);

        assert!(stage.visible_sections.contains(&NoteId::new(1)));
        assert!(stage.highlighted_markers.contains(&NoteId::new(1)));
        assert_eq!(
            stage.flights,
            vec![(LngLat::new(11.0, 21.0), FLY_DURATION_MS, true)]
        );
        assert!(log.reports().is_empty());
    }

    #[test]
    fn leaving_view_clears_both_classes_without_camera_action() {
        let controller = controller_with_coords(&[(1, [11.0, 21.0])]);
        let mut stage = RecordingStage::with_markers(&[1]);
        let mut log = ReportLog::new();

        controller.process(&[entered(1), left(1)], &mut stage, &mut log);

        assert!(stage.visible_sections.is_empty());
        assert!(stage.highlighted_markers.is_empty());
        // Only the entering transition moved the camera.
        assert_eq!(stage.flights.len(), 1);
    }

    #[test]
    fn transitions_are_idempotent() {
        let controller = controller_with_coords(&[(1, [11.0, 21.0])]);
        let mut stage = RecordingStage::with_markers(&[1]);
        let mut log = ReportLog::new();

        controller.process(&[entered(1), entered(1)], &mut stage, &mut log);
        let visible = stage.visible_sections.clone();
        let highlighted = stage.highlighted_markers.clone();

        controller.process(&[entered(1)], &mut stage, &mut log);
        assert_eq!(stage.visible_sections, visible);
        assert_eq!(stage.highlighted_markers, highlighted);
    }

    #[test]
    fn missing_marker_skips_all_effects_and_logs_once() {
        let controller = controller_with_coords(&[(3, [1.0, 2.0])]);
        let mut stage = RecordingStage::with_markers(&[]);
        let mut log = ReportLog::new();

        controller.process(&[entered(3)], &mut stage, &mut log);

        assert!(stage.visible_sections.is_empty());
        assert!(stage.highlighted_markers.is_empty());
        assert!(stage.flights.is_empty());
        assert_eq!(log.reports().len(), 1);
        assert_eq!(log.reports()[0].kind, ReportKind::MissingMarker);
    }

    #[test]
    fn missing_marker_does_not_abort_the_batch() {
        let controller = controller_with_coords(&[(1, [11.0, 21.0]), (2, [12.0, 22.0])]);
        let mut stage = RecordingStage::with_markers(&[2]);
        let mut log = ReportLog::new();

        controller.process(&[entered(1), entered(2)], &mut stage, &mut log);

        assert!(stage.visible_sections.contains(&NoteId::new(2)));
        assert_eq!(stage.flights.len(), 1);
        assert_eq!(log.reports().len(), 1);
    }

    #[test]
    fn missing_coordinate_skips_camera_move_only() {
        let controller = controller_with_coords(&[]);
        let mut stage = RecordingStage::with_markers(&[1]);
        let mut log = ReportLog::new();

        controller.process(&[entered(1)], &mut stage, &mut log);

        assert!(stage.visible_sections.contains(&NoteId::new(1)));
        assert!(stage.highlighted_markers.contains(&NoteId::new(1)));
        assert!(stage.flights.is_empty());
        assert_eq!(log.reports().len(), 1);
        assert_eq!(log.reports()[0].kind, ReportKind::MissingCoordinate);
    }

    #[test]
    fn nav_bar_hides_only_when_start_section_intersects_at_threshold() {
        let controller = controller_with_coords(&[(0, [10.0, 20.0])]);
        let mut stage = RecordingStage::with_markers(&[0, 1]);
        let mut log = ReportLog::new();

        // Intersecting at ratio >= 0.3: hidden.
        controller.process(
            &[VisibilityChange {
                note: NoteId::new(0),
                is_intersecting: true,
                ratio: 0.3,
            }],
            &mut stage,
            &mut log,
        );
        assert_eq!(stage.nav_bar_visible, Some(false));

        // Intersecting below the threshold: shown.
        controller.process(
            &[VisibilityChange {
                note: NoteId::new(0),
                is_intersecting: true,
                ratio: 0.1,
            }],
            &mut stage,
            &mut log,
        );
        assert_eq!(stage.nav_bar_visible, Some(true));

        // Not intersecting at all: shown.
        controller.process(
            &[VisibilityChange {
                note: NoteId::new(0),
                is_intersecting: false,
                ratio: 0.0,
            }],
            &mut stage,
            &mut log,
        );
        assert_eq!(stage.nav_bar_visible, Some(true));

        // Other sections never touch the nav bar.
        stage.nav_bar_visible = None;
        controller.process(&[entered(1)], &mut stage, &mut log);
        assert_eq!(stage.nav_bar_visible, None);
    }

    #[test]
    fn nav_bar_rule_applies_even_without_a_start_marker() {
        let controller = controller_with_coords(&[]);
        let mut stage = RecordingStage::with_markers(&[]);
        let mut log = ReportLog::new();

        controller.process(&[entered(0)], &mut stage, &mut log);

        assert_eq!(stage.nav_bar_visible, Some(false));
        assert_eq!(log.reports().len(), 1);
        assert_eq!(log.reports()[0].kind, ReportKind::MissingMarker);
    }

    #[test]
    fn marker_without_coordinate_entry_scenario() {
        // Sections 0..=2 exist; only 0 and 1 have coordinate entries.
        let controller = controller_with_coords(&[(0, [10.0, 20.0]), (1, [11.0, 21.0])]);
        let mut stage = RecordingStage::with_markers(&[0, 1, 2]);
        let mut log = ReportLog::new();

        controller.process(&[entered(2)], &mut stage, &mut log);

        assert!(stage.visible_sections.contains(&NoteId::new(2)));
        assert!(stage.highlighted_markers.contains(&NoteId::new(2)));
        assert!(stage.flights.is_empty());
        assert_eq!(log.reports().len(), 1);
        assert_eq!(log.reports()[0].kind, ReportKind::MissingCoordinate);
    }
}
