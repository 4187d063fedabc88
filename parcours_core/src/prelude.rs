// parcours_core/src/prelude.rs

pub use crate::camera::{CameraError, FollowCamera};
pub use crate::input::DriveIntent;
pub use crate::sections::{SectionChange, SectionTracker};
pub use crate::telemetry::{display_gear, display_speed};
pub use crate::track::{Checkpoint, CheckpointMap, TrackError};
pub use crate::vehicle::{ArcadeDriveModel, BodyCommand, ChassisSnapshot};
