// parcours_core/src/track.rs

use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::serde_vec2;

#[derive(Debug, Error, PartialEq)]
pub enum TrackError {
    #[error("a track needs at least one checkpoint")]
    Empty,
    #[error("checkpoint {index} has non-positive trigger radius {radius}")]
    InvalidRadius { index: usize, radius: f64 },
    #[error("duplicate section id {section}")]
    DuplicateSection { section: usize },
    #[error("section id {section} out of range for a {len}-checkpoint track")]
    SectionOutOfRange { section: usize, len: usize },
}

/// A fixed trigger zone in world space. Driving inside its radius activates
/// the portfolio section it is tagged with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Checkpoint {
    /// Portfolio section this zone activates.
    pub section: usize,
    /// Display name shown on the HUD ("START", "PROJECTS", ...).
    pub label: String,
    /// Display color, linear RGB.
    #[serde(default = "default_color")]
    pub color: [f32; 3],
    /// Ground-plane center as (x, z). Height never matters for containment.
    #[serde(with = "serde_vec2")]
    pub center: Vector2<f64>,
    #[serde(default = "default_trigger_radius")]
    pub trigger_radius: f64,
}

fn default_trigger_radius() -> f64 {
    4.0
}

fn default_color() -> [f32; 3] {
    [0.392, 1.0, 0.855]
}

impl Checkpoint {
    /// Planar (x, z) distance from a world position to this checkpoint's
    /// center, ignoring any vertical offset.
    pub fn planar_distance(&self, position: &Vector3<f64>) -> f64 {
        (Vector2::new(position.x, position.z) - self.center).norm()
    }

    pub fn contains(&self, position: &Vector3<f64>) -> bool {
        self.planar_distance(position) < self.trigger_radius
    }
}

/// Fixed, ordered set of checkpoints. Built once at scene start and immutable
/// afterwards; consecutive section ids are expected to be spatially adjacent
/// so driving forward progresses the portfolio naturally.
#[derive(Debug, Clone)]
pub struct CheckpointMap {
    checkpoints: Vec<Checkpoint>,
}

impl CheckpointMap {
    /// Validates the set: non-empty, positive radii, and section ids covering
    /// 0..N-1 exactly once.
    pub fn new(checkpoints: Vec<Checkpoint>) -> Result<Self, TrackError> {
        if checkpoints.is_empty() {
            return Err(TrackError::Empty);
        }
        let len = checkpoints.len();
        let mut seen = vec![false; len];
        for (index, checkpoint) in checkpoints.iter().enumerate() {
            if checkpoint.trigger_radius <= 0.0 {
                return Err(TrackError::InvalidRadius {
                    index,
                    radius: checkpoint.trigger_radius,
                });
            }
            if checkpoint.section >= len {
                return Err(TrackError::SectionOutOfRange {
                    section: checkpoint.section,
                    len,
                });
            }
            if seen[checkpoint.section] {
                return Err(TrackError::DuplicateSection {
                    section: checkpoint.section,
                });
            }
            seen[checkpoint.section] = true;
        }
        Ok(Self { checkpoints })
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        // Ruled out by the constructor, but clippy wants the pair.
        self.checkpoints.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Checkpoint> {
        self.checkpoints.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Checkpoint> {
        self.checkpoints.iter()
    }

    /// Display label for a section id, if that section exists.
    pub fn label(&self, section: usize) -> Option<&str> {
        self.checkpoints
            .iter()
            .find(|checkpoint| checkpoint.section == section)
            .map(|checkpoint| checkpoint.label.as_str())
    }

    /// Index and planar distance of the checkpoint closest to `position`.
    /// Exact ties resolve to the lower index.
    pub fn nearest(&self, position: &Vector3<f64>) -> (usize, f64) {
        let mut best = (0, self.checkpoints[0].planar_distance(position));
        for (index, checkpoint) in self.checkpoints.iter().enumerate().skip(1) {
            let distance = checkpoint.planar_distance(position);
            if distance < best.1 {
                best = (index, distance);
            }
        }
        best
    }

    /// The checkpoint whose trigger radius contains `position`, if any.
    ///
    /// When several radii overlap at the position, the nearest center wins.
    /// That tie-break is deliberate and deterministic rather than an accident
    /// of list order.
    pub fn containing(&self, position: &Vector3<f64>) -> Option<usize> {
        self.checkpoints
            .iter()
            .enumerate()
            .filter(|(_, checkpoint)| checkpoint.contains(position))
            .min_by(|(_, a), (_, b)| {
                a.planar_distance(position)
                    .total_cmp(&b.planar_distance(position))
            })
            .map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn checkpoint(section: usize, x: f64, z: f64, radius: f64) -> Checkpoint {
        Checkpoint {
            section,
            label: format!("ZONE {section}"),
            color: default_color(),
            center: Vector2::new(x, z),
            trigger_radius: radius,
        }
    }

    fn square_map() -> CheckpointMap {
        CheckpointMap::new(vec![
            checkpoint(0, 0.0, 0.0, 4.0),
            checkpoint(1, 0.0, -20.0, 4.0),
            checkpoint(2, 20.0, -20.0, 4.0),
            checkpoint(3, 20.0, 0.0, 4.0),
        ])
        .expect("valid map")
    }

    #[test]
    fn rejects_empty_set() {
        let err = CheckpointMap::new(Vec::new()).unwrap_err();
        assert_eq!(err, TrackError::Empty);
    }

    #[test]
    fn rejects_bad_radius() {
        let err = CheckpointMap::new(vec![checkpoint(0, 0.0, 0.0, 0.0)]).unwrap_err();
        assert_eq!(
            err,
            TrackError::InvalidRadius {
                index: 0,
                radius: 0.0
            }
        );
    }

    #[test]
    fn rejects_duplicate_and_out_of_range_sections() {
        let dup = CheckpointMap::new(vec![
            checkpoint(0, 0.0, 0.0, 4.0),
            checkpoint(0, 10.0, 0.0, 4.0),
        ])
        .unwrap_err();
        assert_eq!(dup, TrackError::DuplicateSection { section: 0 });

        let gap = CheckpointMap::new(vec![
            checkpoint(0, 0.0, 0.0, 4.0),
            checkpoint(2, 10.0, 0.0, 4.0),
        ])
        .unwrap_err();
        assert_eq!(gap, TrackError::SectionOutOfRange { section: 2, len: 2 });
    }

    #[test]
    fn nearest_ignores_height() {
        let map = square_map();
        let (index, distance) = map.nearest(&Vector3::new(1.0, 57.0, 0.0));
        assert_eq!(index, 0);
        assert_abs_diff_eq!(distance, 1.0, epsilon = 1e-9);

        let (index, distance) = map.nearest(&Vector3::new(19.0, -3.0, -18.0));
        assert_eq!(index, 2);
        assert_abs_diff_eq!(distance, (1.0f64 + 4.0).sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn containment_requires_the_radius() {
        let map = square_map();
        assert_eq!(map.containing(&Vector3::new(0.0, 0.0, 3.9)), Some(0));
        assert_eq!(map.containing(&Vector3::new(0.0, 0.0, 4.0)), None);
        assert_eq!(map.containing(&Vector3::new(10.0, 0.0, -10.0)), None);
    }

    #[test]
    fn overlap_resolves_to_nearest_center() {
        let map = CheckpointMap::new(vec![
            checkpoint(0, 0.0, 0.0, 10.0),
            checkpoint(1, 6.0, 0.0, 10.0),
        ])
        .expect("valid map");

        // Inside both radii, closer to checkpoint 1.
        assert_eq!(map.containing(&Vector3::new(4.0, 0.0, 0.0)), Some(1));
        // Inside both radii, closer to checkpoint 0.
        assert_eq!(map.containing(&Vector3::new(2.0, 0.0, 0.0)), Some(0));
    }

    #[test]
    fn labels_resolve_by_section_id() {
        let map = square_map();
        assert_eq!(map.label(2), Some("ZONE 2"));
        assert_eq!(map.label(9), None);
    }
}
