use bevy::prelude::*;

use crate::serialization::scene_config::{
    DirectionalLightConfig, PointLightConfig, SpotLightConfig,
};
use crate::spawning::light_spawning::{
    spawn_directional_light, spawn_point_light, spawn_spot_light,
};

/// Declarative light requests. Scene assembly sends these; the reader
/// below resolves them into ECS writes. Colors are resolved before
/// sending so events carry ready-to-spawn data.
#[derive(Event)]
pub enum LightSpawnEvent {
    Ambient {
        color: Color,
        brightness: f32,
    },
    Directional {
        config: DirectionalLightConfig,
        color: Color,
    },
    Spot {
        config: SpotLightConfig,
        color: Color,
    },
    Point {
        config: PointLightConfig,
        color: Color,
    },
}

pub fn light_spawn_reader_system(
    mut light_reader: EventReader<LightSpawnEvent>,
    mut commands: Commands,
) {
    for light_event in light_reader.read() {
        match light_event {
            LightSpawnEvent::Ambient { color, brightness } => {
                commands.insert_resource(AmbientLight {
                    color: *color,
                    brightness: *brightness,
                });
            }
            LightSpawnEvent::Directional { config, color } => {
                spawn_directional_light(&mut commands, config, *color);
            }
            LightSpawnEvent::Spot { config, color } => {
                spawn_spot_light(&mut commands, config, *color);
            }
            LightSpawnEvent::Point { config, color } => {
                spawn_point_light(&mut commands, config, *color);
            }
        }
    }
}
