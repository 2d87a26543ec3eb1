use bevy::prelude::*;
use bevy::render::camera::ClearColorConfig;

use crate::core::components::{MainCamera, OverlayCamera};
use crate::serialization::caching::MaterialPalette;
use crate::serialization::scene_config::CardConfig;
use crate::spawning::cat_spawning::spawn_cat;
use crate::spawning::heart_spawning::spawn_heart_ring;
use crate::spawning::text_spawning::{spawn_greeting, spawn_text_ring};
use crate::systems::events::LightSpawnEvent;

/// Assemble the whole card at startup: cameras, lights (via spawn events),
/// the cat with its heart ring, and the overlay text.
pub fn spawn_card_scene(
    mut commands: Commands,
    config: Res<CardConfig>,
    palette: Res<MaterialPalette>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut light_writer: EventWriter<LightSpawnEvent>,
) {
    commands.insert_resource(ClearColor(hex_or_white(&config.background)));

    spawn_cameras(&mut commands, &config);
    send_light_events(&mut light_writer, &config);

    let cat = spawn_cat(&mut commands, &mut meshes, &palette, &config.cat);
    spawn_heart_ring(&mut commands, &mut meshes, &palette, &config.heart_ring, cat);

    spawn_text_ring(
        &mut commands,
        &config.text_ring,
        palette_color(&config, &config.text_ring.color),
    );
    spawn_greeting(
        &mut commands,
        &config.greeting,
        palette_color(&config, &config.greeting.color),
    );

    info!(
        "card scene spawned: {} cat parts, {} hearts, {} labels",
        config.cat.parts.len(),
        config.heart_ring.count,
        config.text_ring.count
    );
}

fn spawn_cameras(commands: &mut Commands, config: &CardConfig) {
    let (x, y, z) = config.camera.translation;
    commands
        .spawn_empty()
        .insert(Camera3d::default())
        .insert(Projection::Perspective(PerspectiveProjection {
            fov: config.camera.fov_degrees.to_radians(),
            ..Default::default()
        }))
        .insert(Transform::from_xyz(x, y, z).looking_at(Vec3::ZERO, Vec3::Y))
        .insert(Name::new("MainCamera"))
        .insert(MainCamera);

    // overlay camera for the label layer; draws over the 3D view
    commands
        .spawn_empty()
        .insert(Camera2d)
        .insert(Camera {
            order: 1,
            clear_color: ClearColorConfig::None,
            ..Default::default()
        })
        .insert(Name::new("OverlayCamera"))
        .insert(OverlayCamera);
}

fn send_light_events(writer: &mut EventWriter<LightSpawnEvent>, config: &CardConfig) {
    let lighting = &config.lighting;
    writer.send(LightSpawnEvent::Ambient {
        color: hex_or_white(&lighting.ambient.color),
        brightness: lighting.ambient.brightness,
    });
    writer.send(LightSpawnEvent::Directional {
        config: lighting.directional.clone(),
        color: hex_or_white(&lighting.directional.color),
    });
    writer.send(LightSpawnEvent::Spot {
        config: lighting.spot.clone(),
        color: hex_or_white(&lighting.spot.color),
    });
    writer.send(LightSpawnEvent::Point {
        config: lighting.point.clone(),
        color: hex_or_white(&lighting.point.color),
    });
}

fn palette_color(config: &CardConfig, name: &str) -> Color {
    match config.color(name) {
        Ok(color) => color,
        Err(error) => {
            warn!("{error}; using white");
            Color::WHITE
        }
    }
}

fn hex_or_white(hex: &str) -> Color {
    match crate::serialization::scene_config::parse_hex_color(hex) {
        Ok(color) => color,
        Err(error) => {
            warn!("{error}; using white");
            Color::WHITE
        }
    }
}
