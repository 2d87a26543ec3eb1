use bevy::prelude::*;
use std::collections::HashMap;

use crate::serialization::scene_config::CardConfig;

/// Named `StandardMaterial` handles, built once at startup from the
/// config palette and looked up by the spawning code.
#[derive(Resource, Default)]
pub struct MaterialPalette {
    map: HashMap<String, Handle<StandardMaterial>>,
}

impl MaterialPalette {
    pub fn insert(&mut self, name: String, handle: Handle<StandardMaterial>) {
        self.map.insert(name, handle);
    }

    pub fn get(&self, name: &str) -> Option<&Handle<StandardMaterial>> {
        self.map.get(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

pub fn build_material_palette(
    mut commands: Commands,
    config: Res<CardConfig>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut palette = MaterialPalette::default();

    for entry in &config.palette {
        let color = match config.color(&entry.name) {
            Ok(color) => color,
            Err(error) => {
                warn!("skipping palette entry: {error}");
                continue;
            }
        };
        let handle = materials.add(StandardMaterial {
            base_color: color,
            metallic: 0.1,
            perceptual_roughness: 0.9,
            ..Default::default()
        });
        palette.insert(entry.name.clone(), handle);
    }

    debug!("built {} palette materials", palette.len());
    commands.insert_resource(palette);
}
