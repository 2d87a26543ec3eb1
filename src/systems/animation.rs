use bevy::prelude::*;
use bevy_inspector_egui::prelude::*;

use crate::core::components::{OrbitLabel, WorldLabel};
use crate::core::curve::{instance_phase, wrap_phase, ClosedCurve};
use crate::core::heart;
use crate::core::oscillator::{Bouncing, Pulsing};
use crate::serialization::scene_config::CardConfig;

/// Base phase of the text train. Single writer (`advance_path_clock`);
/// every other system only reads within the same frame.
#[derive(Resource, Reflect, InspectorOptions, Debug, Clone)]
#[reflect(Resource, InspectorOptions)]
pub struct PathClock {
    pub phase: f32,
    /// Cycles per second.
    pub speed: f32,
}

impl Default for PathClock {
    fn default() -> Self {
        PathClock {
            phase: 0.0,
            speed: 0.05,
        }
    }
}

/// The closed path the text train rides, plus the vertical flip the card
/// layout applies to sampled points.
#[derive(Resource, Clone, Debug)]
pub struct TextPath {
    pub curve: ClosedCurve,
    pub flip_height: f32,
}

impl TextPath {
    /// World-space anchor for the path point at `phase`.
    pub fn anchor(&self, phase: f32) -> Vec3 {
        let p = self.curve.sample(phase);
        Vec3::new(p.x, self.flip_height - p.y, p.z)
    }
}

pub fn setup_animation_resources(mut commands: Commands, config: Res<CardConfig>) {
    commands.insert_resource(PathClock {
        phase: 0.0,
        speed: config.text_ring.speed,
    });
    commands.insert_resource(TextPath {
        curve: heart::heart_curve(config.text_ring.path_scale, config.text_ring.path_height),
        flip_height: config.text_ring.flip_height,
    });
}

pub fn advance_path_clock(time: Res<Time>, mut clock: ResMut<PathClock>) {
    clock.phase = wrap_phase(clock.phase + time.delta_secs() * clock.speed);
}

pub fn bounce_system(time: Res<Time>, mut bouncers: Query<(&Bouncing, &mut Transform)>) {
    let t = time.elapsed_secs();
    for (bouncing, mut transform) in bouncers.iter_mut() {
        transform.translation.y = bouncing.0.value(t);
    }
}

pub fn pulse_system(time: Res<Time>, mut pulsers: Query<(&Pulsing, &mut Transform)>) {
    let t = time.elapsed_secs();
    for (pulsing, mut transform) in pulsers.iter_mut() {
        transform.scale = Vec3::splat(pulsing.0.value(t));
    }
}

/// Move every orbit label's anchor to its phase-offset point on the path.
pub fn flow_labels_system(
    clock: Res<PathClock>,
    path: Res<TextPath>,
    mut labels: Query<(&OrbitLabel, &mut WorldLabel)>,
) {
    for (label, mut world) in labels.iter_mut() {
        let phase = instance_phase(clock.phase, label.index, label.count);
        world.world_position = path.anchor(phase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_applies_the_vertical_flip() {
        let path = TextPath {
            curve: heart::heart_curve(25.0, 10.0),
            flip_height: 25.0,
        };
        // phase 0 samples the notch at (12.5, 12.5, 10)
        let anchor = path.anchor(0.0);
        assert!(anchor.abs_diff_eq(Vec3::new(12.5, 12.5, 10.0), 1.0e-4));
        // the apex (phase 0.5, y = 47.5) flips below the flip line
        let apex = path.anchor(0.5);
        assert!((apex.y - (25.0 - 47.5)).abs() < 1.0e-3);
    }

    #[test]
    fn clock_phase_would_wrap_after_a_full_cycle() {
        let advanced = wrap_phase(0.98 + 0.05);
        assert!((advanced - 0.03).abs() < 1.0e-6);
        assert!((0.0..1.0).contains(&advanced));
    }
}
