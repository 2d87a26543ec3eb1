use bevy::app::{App, Plugin};
use bevy::prelude::*;

use crate::core::components::{OrbitLabel, WorldLabel};
use crate::core::oscillator::{Bouncing, Oscillator, Pulsing};
use crate::serialization::caching::build_material_palette;
use crate::systems::animation::{
    advance_path_clock, bounce_system, flow_labels_system, pulse_system,
    setup_animation_resources, PathClock,
};
use crate::systems::events::{light_spawn_reader_system, LightSpawnEvent};
use crate::systems::overlay::project_labels_system;

/// Everything the card needs on top of `DefaultPlugins`. Expects a
/// `CardConfig` resource to be inserted before the app runs.
pub struct CardPlugin;

impl Plugin for CardPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<LightSpawnEvent>()
            .register_type::<Oscillator>()
            .register_type::<Bouncing>()
            .register_type::<Pulsing>()
            .register_type::<PathClock>()
            .register_type::<WorldLabel>()
            .register_type::<OrbitLabel>()
            .add_systems(
                Startup,
                (
                    build_material_palette,
                    setup_animation_resources,
                    crate::spawning::scene_spawning::spawn_card_scene,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    light_spawn_reader_system,
                    bounce_system,
                    pulse_system,
                    (advance_path_clock, flow_labels_system, project_labels_system).chain(),
                ),
            );
    }
}
