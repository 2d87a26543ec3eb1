use bevy::prelude::*;

use crate::core::components::{GreetingBanner, OrbitLabel, WorldLabel};
use crate::serialization::scene_config::{GreetingConfig, TextRingConfig};

/// Spawn the train of labels that ride the heart path. All card text is
/// `Text2d` under the overlay camera; the projection system resolves each
/// `WorldLabel` anchor against the main camera every frame.
pub fn spawn_text_ring(commands: &mut Commands, config: &TextRingConfig, color: Color) {
    for index in 0..config.count {
        commands
            .spawn_empty()
            .insert(Text2d::new(config.text.clone()))
            .insert(TextFont::default())
            .insert(TextColor(color))
            .insert(Transform::default())
            .insert(Name::new(format!("Label {index}")))
            .insert(OrbitLabel {
                index,
                count: config.count,
            })
            .insert(WorldLabel {
                world_position: Vec3::ZERO,
                world_size: config.world_size,
            });
    }
}

pub fn spawn_greeting(commands: &mut Commands, config: &GreetingConfig, color: Color) {
    let (x, y, z) = config.translation;
    commands
        .spawn_empty()
        .insert(Text2d::new(config.text.clone()))
        .insert(TextFont::default())
        .insert(TextColor(color))
        .insert(Transform::default())
        .insert(Name::new("Greeting"))
        .insert(GreetingBanner)
        .insert(WorldLabel {
            world_position: Vec3::new(x, y, z),
            world_size: config.world_size,
        });
}
