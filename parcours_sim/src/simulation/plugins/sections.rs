// parcours_sim/src/simulation/plugins/sections.rs

//! Section tracking: checkpoint polling while driving, scroll/swipe paging
//! while in free mode. Both paths funnel through the one `SectionTracker`
//! so de-duplication policy lives in a single place.

use crate::prelude::*;
use crate::simulation::core::convert::point_from_bevy;
use crate::simulation::core::events::SectionChanged;
use crate::simulation::plugins::track::TrackMap;
use crate::simulation::plugins::vehicle::PlayerVehicle;
use bevy::input::mouse::MouseWheel;
use bevy::input::touch::Touches;

/// The authoritative "which section is current" state.
#[derive(Resource, Debug)]
pub struct SectionState(pub parcours_core::sections::SectionTracker);

impl Default for SectionState {
    fn default() -> Self {
        Self(parcours_core::sections::SectionTracker::new(0))
    }
}

/// Rate limiter for free-mode paging. One page per second, regardless of
/// how fast the wheel spins.
#[derive(Resource, Debug)]
struct ScrollCooldown(Timer);

impl Default for ScrollCooldown {
    fn default() -> Self {
        let mut timer = Timer::from_seconds(1.0, TimerMode::Once);
        // Start expired so the very first scroll pages immediately.
        timer.tick(timer.duration());
        Self(timer)
    }
}

/// Minimum vertical travel, in logical pixels, for a touch drag to count as
/// a page swipe.
const SWIPE_THRESHOLD: f32 = 50.0;

pub struct SectionsPlugin;

impl Plugin for SectionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SectionState>()
            .init_resource::<ScrollCooldown>()
            .add_systems(
                FixedUpdate,
                poll_checkpoints
                    .in_set(SimulationSet::Sections)
                    .run_if(in_state(AppState::Running).and(in_state(InteractionMode::Drive))),
            )
            .add_systems(
                Update,
                page_sections
                    .run_if(in_state(AppState::Running).and(in_state(InteractionMode::Free))),
            )
            .add_systems(Update, log_section_changes);
    }
}

/// DRIVE PATH: containment poll against the fresh post-physics position.
fn poll_checkpoints(
    map: Res<TrackMap>,
    mut state: ResMut<SectionState>,
    mut events: EventWriter<SectionChanged>,
    query: Query<&Transform, With<PlayerVehicle>>,
) {
    let Ok(transform) = query.single() else {
        return;
    };

    let position = point_from_bevy(transform.translation);
    if let Some(change) = state.0.observe(&map.0, &position) {
        events.write(SectionChanged {
            from: change.from,
            section: change.to,
        });
    }
}

/// FREE PATH: wheel, arrow keys, or touch swipe step through sections in
/// order, clamped at both ends. Scroll down / swipe up advances.
fn page_sections(
    time: Res<Time>,
    map: Res<TrackMap>,
    mut cooldown: ResMut<ScrollCooldown>,
    mut state: ResMut<SectionState>,
    mut events: EventWriter<SectionChanged>,
    mut wheel_events: EventReader<MouseWheel>,
    keys: Res<ButtonInput<KeyCode>>,
    touches: Res<Touches>,
) {
    cooldown.0.tick(time.delta());

    let mut step: i64 = 0;
    for wheel in wheel_events.read() {
        if wheel.y < 0.0 {
            step = 1;
        } else if wheel.y > 0.0 {
            step = -1;
        }
    }
    if keys.just_pressed(KeyCode::ArrowDown) || keys.just_pressed(KeyCode::PageDown) {
        step = 1;
    }
    if keys.just_pressed(KeyCode::ArrowUp) || keys.just_pressed(KeyCode::PageUp) {
        step = -1;
    }
    for touch in touches.iter_just_released() {
        let travel = touch.position().y - touch.start_position().y;
        if travel <= -SWIPE_THRESHOLD {
            step = 1;
        } else if travel >= SWIPE_THRESHOLD {
            step = -1;
        }
    }

    if step == 0 || !cooldown.0.finished() {
        return;
    }

    let target = paged_target(state.0.current(), step, map.0.len());
    if let Some(change) = state.0.select(target) {
        cooldown.0.reset();
        events.write(SectionChanged {
            from: change.from,
            section: change.to,
        });
    }
}

/// Steps the section index, clamped to [0, len-1]. Paging never wraps.
fn paged_target(current: usize, step: i64, len: usize) -> usize {
    let last = len as i64 - 1;
    (current as i64 + step).clamp(0, last) as usize
}

fn log_section_changes(map: Option<Res<TrackMap>>, mut events: EventReader<SectionChanged>) {
    let Some(map) = map else {
        return;
    };
    for event in events.read() {
        let label = map.0.label(event.section).unwrap_or("?");
        info!(
            "[SECTION] {} -> {} ({})",
            event.from, event.section, label
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paging_clamps_at_both_ends() {
        assert_eq!(paged_target(0, -1, 8), 0);
        assert_eq!(paged_target(0, 1, 8), 1);
        assert_eq!(paged_target(7, 1, 8), 7);
        assert_eq!(paged_target(7, -1, 8), 6);
        // Degenerate one-section track never moves.
        assert_eq!(paged_target(0, 1, 1), 0);
        assert_eq!(paged_target(0, -1, 1), 0);
    }

    #[test]
    fn fresh_cooldown_allows_an_immediate_page() {
        let cooldown = ScrollCooldown::default();
        assert!(cooldown.0.finished());
    }
}
