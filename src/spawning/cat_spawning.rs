use bevy::prelude::*;

use crate::core::components::CatRig;
use crate::core::oscillator::Bouncing;
use crate::serialization::caching::MaterialPalette;
use crate::serialization::scene_config::CatConfig;
use crate::spawning::mesh_spawning::{primitive_mesh, spawn_mesh};

/// Spawn the cat rig: a root entity carrying the bounce oscillator, with
/// every body part a child so the parts and the heart ring follow the
/// bounce together.
pub fn spawn_cat(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    palette: &MaterialPalette,
    config: &CatConfig,
) -> Entity {
    let root = commands
        .spawn_empty()
        .insert(Transform::from(config.transform.clone()))
        .insert(Visibility::default())
        .insert(Name::new("Cat"))
        .insert(CatRig)
        .insert(Bouncing(config.bounce))
        .id();

    for part in &config.parts {
        let mesh = primitive_mesh(&part.shape, meshes);
        spawn_mesh(
            commands,
            palette,
            mesh,
            Transform::from(part.transform.clone()),
            &part.material,
            &part.name,
            Some(root),
        );
    }

    root
}
