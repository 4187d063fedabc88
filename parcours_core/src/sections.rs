// parcours_core/src/sections.rs

use nalgebra::Vector3;

use crate::track::CheckpointMap;

/// Emitted when the current portfolio section changes or a checkpoint is
/// (re-)entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionChange {
    pub from: usize,
    pub to: usize,
}

/// The single owner of "which portfolio section is current".
///
/// Both detection paths feed it: checkpoint-containment polling while
/// driving, and scroll paging while in free mode. Keeping one tracker means
/// the transition policy (de-duplication, tie-breaks) lives in exactly one
/// place no matter which mechanism detected the change.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    current: usize,
    /// The checkpoint whose radius the vehicle is currently parked in, used
    /// to suppress per-tick re-fires. Cleared once the vehicle leaves it.
    last_triggered: Option<usize>,
}

impl SectionTracker {
    pub fn new(initial: usize) -> Self {
        Self {
            current: initial,
            last_triggered: None,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Containment poll, called once per simulation tick with the latest
    /// vehicle position.
    ///
    /// Fires at most once per checkpoint entry: while the vehicle stays
    /// inside the radius it last triggered, repeated polls return `None`.
    /// Leaving that radius re-arms it, so a later re-entry of the same
    /// checkpoint fires again. The machine has no terminal state and happily
    /// cycles backward.
    pub fn observe(&mut self, map: &CheckpointMap, position: &Vector3<f64>) -> Option<SectionChange> {
        if let Some(last) = self.last_triggered {
            if map.get(last).is_some_and(|checkpoint| !checkpoint.contains(position)) {
                self.last_triggered = None;
            }
        }

        let entered = map.containing(position)?;
        if self.last_triggered == Some(entered) {
            return None;
        }

        self.last_triggered = Some(entered);
        let from = self.current;
        self.current = entered;
        Some(SectionChange { from, to: entered })
    }

    /// Paging path (wheel / swipe / arrow keys in free mode): jump straight
    /// to a section index. The caller clamps the index to the section range.
    /// Does not touch the containment de-dup state, so switching back to
    /// drive mode inside an already-visited checkpoint stays quiet.
    pub fn select(&mut self, section: usize) -> Option<SectionChange> {
        if section == self.current {
            return None;
        }
        let from = self.current;
        self.current = section;
        Some(SectionChange { from, to: section })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::Checkpoint;
    use nalgebra::Vector2;

    fn checkpoint(section: usize, x: f64, z: f64, radius: f64) -> Checkpoint {
        Checkpoint {
            section,
            label: format!("ZONE {section}"),
            color: [1.0, 1.0, 1.0],
            center: Vector2::new(x, z),
            trigger_radius: radius,
        }
    }

    /// The default portfolio loop shape: a ring of checkpoints 20 units
    /// apart with 4-unit trigger radii.
    fn loop_map() -> CheckpointMap {
        CheckpointMap::new(vec![
            checkpoint(0, 0.0, 0.0, 4.0),
            checkpoint(1, 0.0, -20.0, 4.0),
            checkpoint(2, 20.0, -20.0, 4.0),
            checkpoint(3, 20.0, 0.0, 4.0),
            checkpoint(4, 20.0, 20.0, 4.0),
            checkpoint(5, 0.0, 20.0, 4.0),
            checkpoint(6, -20.0, 20.0, 4.0),
            checkpoint(7, -20.0, 0.0, 4.0),
        ])
        .expect("valid map")
    }

    fn at(x: f64, z: f64) -> Vector3<f64> {
        Vector3::new(x, 0.0, z)
    }

    #[test]
    fn parked_inside_fires_once() {
        let map = loop_map();
        let mut tracker = SectionTracker::new(0);
        let inside = at(0.5, 0.5);

        assert_eq!(
            tracker.observe(&map, &inside),
            Some(SectionChange { from: 0, to: 0 })
        );
        // Many more ticks at the same spot: silence.
        for _ in 0..200 {
            assert_eq!(tracker.observe(&map, &inside), None);
        }
        assert_eq!(tracker.current(), 0);
    }

    #[test]
    fn leaving_and_reentering_fires_again() {
        let map = loop_map();
        let mut tracker = SectionTracker::new(0);
        let inside = at(0.0, 0.0);
        let outside = at(10.0, 10.0);

        assert!(tracker.observe(&map, &inside).is_some());
        assert_eq!(tracker.observe(&map, &outside), None);
        // Back in: that is a fresh entry event, even though the section
        // index is unchanged.
        assert_eq!(
            tracker.observe(&map, &inside),
            Some(SectionChange { from: 0, to: 0 })
        );
    }

    #[test]
    fn crossing_between_checkpoints_fires_exactly_once() {
        let map = loop_map();
        let mut tracker = SectionTracker::new(0);
        assert!(tracker.observe(&map, &at(0.0, 0.0)).is_some());

        // Drive from checkpoint 0 toward checkpoint 1 in small steps.
        let mut changes = Vec::new();
        let steps = 100;
        for step in 1..=steps {
            let t = f64::from(step) / f64::from(steps);
            if let Some(change) = tracker.observe(&map, &at(0.0, -20.0 * t)) {
                changes.push(change);
            }
        }
        assert_eq!(changes, vec![SectionChange { from: 0, to: 1 }]);
        assert_eq!(tracker.current(), 1);
    }

    #[test]
    fn start_at_zero_then_reach_section_three() {
        // End-to-end scenario: spawn on checkpoint 0, report section 0 on
        // the first poll, then teleport-free travel to checkpoint 3 without
        // touching any other radius fires exactly one change with payload 3.
        let map = loop_map();
        let mut tracker = SectionTracker::new(0);

        let first = tracker.observe(&map, &at(0.0, 0.0));
        assert_eq!(first, Some(SectionChange { from: 0, to: 0 }));
        assert_eq!(tracker.current(), 0);

        // Diagonal-ish path that stays clear of checkpoints 1 and 2.
        let waypoints = [
            at(5.0, -8.0),
            at(10.0, -10.0),
            at(15.0, -8.0),
            at(18.0, -4.0),
            at(20.0, -1.0),
        ];
        let mut changes = Vec::new();
        for position in &waypoints {
            if let Some(change) = tracker.observe(&map, position) {
                changes.push(change);
            }
        }
        assert_eq!(changes, vec![SectionChange { from: 0, to: 3 }]);
        assert_eq!(tracker.current(), 3);
    }

    #[test]
    fn overlapping_radii_pick_the_nearest() {
        let map = CheckpointMap::new(vec![
            checkpoint(0, 0.0, 0.0, 10.0),
            checkpoint(1, 6.0, 0.0, 10.0),
        ])
        .expect("valid map");
        let mut tracker = SectionTracker::new(0);

        // Inside both radii but closer to checkpoint 1.
        assert_eq!(
            tracker.observe(&map, &at(5.0, 0.0)),
            Some(SectionChange { from: 0, to: 1 })
        );
    }

    #[test]
    fn select_deduplicates() {
        let mut tracker = SectionTracker::new(2);
        assert_eq!(tracker.select(2), None);
        assert_eq!(tracker.select(3), Some(SectionChange { from: 2, to: 3 }));
        assert_eq!(tracker.current(), 3);
    }
}
