use bevy::prelude::*;

use crate::core::components::{MainCamera, WorldLabel};

/// Pin overlay text to its 3D anchor. The anchor is projected through the
/// main camera into NDC, then into overlay-camera coordinates (logical
/// pixels, origin at screen center). Font size tracks the projected height
/// of one world unit at the anchor, so text shrinks with distance the way
/// world geometry does.
pub fn project_labels_system(
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut labels: Query<(&WorldLabel, &mut Transform, &mut TextFont, &mut Visibility)>,
) {
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };
    let Some(viewport) = camera.logical_viewport_size() else {
        return;
    };

    for (label, mut transform, mut font, mut visibility) in labels.iter_mut() {
        let Some(ndc) = camera.world_to_ndc(camera_transform, label.world_position) else {
            *visibility = Visibility::Hidden;
            continue;
        };
        if ndc.z < 0.0 || ndc.z > 1.0 {
            *visibility = Visibility::Hidden;
            continue;
        }
        *visibility = Visibility::Inherited;
        transform.translation = Vec3::new(ndc.x * viewport.x / 2.0, ndc.y * viewport.y / 2.0, 0.0);

        let half_unit = 0.5 * Vec3::Y;
        if let (Some(top), Some(bottom)) = (
            camera.world_to_ndc(camera_transform, label.world_position + half_unit),
            camera.world_to_ndc(camera_transform, label.world_position - half_unit),
        ) {
            let pixels_per_unit = ((top.y - bottom.y) * viewport.y / 2.0).abs();
            font.font_size = (label.world_size * pixels_per_unit).max(1.0);
        }
    }
}
