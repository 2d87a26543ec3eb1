use bevy::prelude::*;
use bevy::render::mesh::MeshBuilder;

use crate::serialization::caching::MaterialPalette;
use crate::serialization::scene_config::PartShape;

/// Spawn a mesh entity drawing its material from the palette. Spawns
/// nothing when the material name is unknown.
pub fn spawn_mesh(
    commands: &mut Commands,
    palette: &MaterialPalette,
    mesh: Handle<Mesh>,
    transform: Transform,
    material_name: &str,
    name: &str,
    parent: Option<Entity>,
) -> Option<Entity> {
    let Some(material_handle) = palette.get(material_name) else {
        warn!("Material not found: {}", material_name);
        return None;
    };

    let entity = commands
        .spawn_empty()
        .insert(Mesh3d(mesh))
        .insert(MeshMaterial3d(material_handle.clone()))
        .insert(transform)
        .insert(Name::new(name.to_string()))
        .insert(InheritedVisibility::default())
        .id();

    if let Some(parent) = parent {
        commands.entity(entity).set_parent(parent);
    }

    Some(entity)
}

/// Build the mesh for one declarative primitive shape.
pub fn primitive_mesh(shape: &PartShape, meshes: &mut Assets<Mesh>) -> Handle<Mesh> {
    match *shape {
        PartShape::Sphere { radius, segments } => {
            meshes.add(Sphere::new(radius).mesh().uv(segments as u32, segments as u32))
        }
        PartShape::Cone {
            radius,
            height,
            segments,
        } => meshes.add(Cone { radius, height }.mesh().resolution(segments).build()),
        PartShape::Capsule { radius, length } => meshes.add(Capsule3d::new(radius, length)),
    }
}
