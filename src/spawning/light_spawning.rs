use bevy::prelude::*;

use crate::core::components::MainDirectionalLight;
use crate::serialization::scene_config::{
    DirectionalLightConfig, PointLightConfig, SpotLightConfig,
};

pub(crate) fn spawn_point_light(
    commands: &mut Commands,
    config: &PointLightConfig,
    color: Color,
) -> Entity {
    let (x, y, z) = config.translation;
    commands
        .spawn_empty()
        .insert(PointLight {
            color,
            intensity: config.intensity,
            range: config.range,
            ..Default::default()
        })
        .insert(Transform::from_xyz(x, y, z))
        .insert(Name::new("Pointlight".to_string()))
        .insert(InheritedVisibility::default())
        .id()
}

pub(crate) fn spawn_spot_light(
    commands: &mut Commands,
    config: &SpotLightConfig,
    color: Color,
) -> Entity {
    let (x, y, z) = config.translation;
    commands
        .spawn_empty()
        .insert(SpotLight {
            color,
            intensity: config.intensity,
            range: config.range,
            outer_angle: config.outer_angle,
            inner_angle: config.inner_angle,
            ..Default::default()
        })
        .insert(Transform::from_xyz(x, y, z).looking_at(Vec3::ZERO, Vec3::Y))
        .insert(Name::new("Spotlight".to_string()))
        .insert(InheritedVisibility::default())
        .id()
}

pub(crate) fn spawn_directional_light(
    commands: &mut Commands,
    config: &DirectionalLightConfig,
    color: Color,
) -> Entity {
    let (x, y, z) = config.translation;
    commands
        .spawn_empty()
        .insert(DirectionalLight {
            color,
            illuminance: config.illuminance,
            ..Default::default()
        })
        .insert(Transform::from_xyz(x, y, z).looking_at(Vec3::ZERO, Vec3::Y))
        .insert(Name::new("Directionallight".to_string()))
        .insert(MainDirectionalLight)
        .insert(InheritedVisibility::default())
        .id()
}
