use bevy::prelude::*;
use std::f32::consts::{PI, TAU};

use crate::core::components::RingHeart;
use crate::core::oscillator::Pulsing;
use crate::serialization::caching::MaterialPalette;
use crate::serialization::scene_config::HeartRingConfig;
use crate::spawning::heart_mesh::build_heart_mesh;
use crate::spawning::mesh_spawning::spawn_mesh;

/// Ring of pulsing hearts parented to the cat rig. Heart `i` sits at angle
/// `i/count · 2π` and pulses `i` radians out of phase with its neighbors.
/// The mesh apex points +y, so each heart is flipped about X.
pub fn spawn_heart_ring(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    palette: &MaterialPalette,
    config: &HeartRingConfig,
    parent: Entity,
) {
    let mesh = meshes.add(build_heart_mesh(
        1.0,
        config.extrude_depth,
        config.samples_per_arc,
    ));

    for index in 0..config.count {
        let angle = index as f32 / config.count as f32 * TAU;
        let pulse = config.pulse.with_phase(index as f32);
        let transform =
            Transform::from_xyz(angle.cos() * config.radius, angle.sin() * config.radius, 0.0)
                .with_rotation(Quat::from_rotation_x(PI))
                .with_scale(Vec3::splat(pulse.value(0.0)));

        let Some(entity) = spawn_mesh(
            commands,
            palette,
            mesh.clone(),
            transform,
            &config.material,
            &format!("Heart {index}"),
            Some(parent),
        ) else {
            continue;
        };
        commands.entity(entity).insert(RingHeart).insert(Pulsing(pulse));
    }
}
