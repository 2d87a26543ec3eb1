use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Serde-friendly transform: plain tuples so scene files stay readable.
/// Rotation is an XYZ Euler in radians.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EulerTransform {
    pub translation: (f32, f32, f32),
    pub rotation: (f32, f32, f32),
    pub scale: (f32, f32, f32),
}

impl Default for EulerTransform {
    fn default() -> Self {
        EulerTransform {
            translation: (0.0, 0.0, 0.0),
            rotation: (0.0, 0.0, 0.0),
            scale: (1.0, 1.0, 1.0),
        }
    }
}

impl EulerTransform {
    pub fn from_translation(x: f32, y: f32, z: f32) -> Self {
        EulerTransform {
            translation: (x, y, z),
            ..Default::default()
        }
    }

    pub fn with_rotation(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation = (x, y, z);
        self
    }

    pub fn with_scale(mut self, x: f32, y: f32, z: f32) -> Self {
        self.scale = (x, y, z);
        self
    }
}

impl From<EulerTransform> for Transform {
    fn from(value: EulerTransform) -> Self {
        Transform {
            translation: Vec3::new(value.translation.0, value.translation.1, value.translation.2),
            rotation: Quat::from_euler(
                EulerRot::XYZ,
                value.rotation.0,
                value.rotation.1,
                value.rotation.2,
            ),
            scale: Vec3::new(value.scale.0, value.scale.1, value.scale.2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity() {
        let transform = Transform::from(EulerTransform::default());
        assert_eq!(transform, Transform::IDENTITY);
    }

    #[test]
    fn builders_compose() {
        let euler = EulerTransform::from_translation(1.0, 2.0, 3.0).with_scale(2.0, 2.0, 2.0);
        let transform = Transform::from(euler);
        assert_eq!(transform.translation, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(transform.scale, Vec3::splat(2.0));
        assert_eq!(transform.rotation, Quat::IDENTITY);
    }

    #[test]
    fn rotation_is_applied_as_xyz_euler_radians() {
        let euler = EulerTransform::default().with_rotation(0.0, 0.0, std::f32::consts::FRAC_PI_2);
        let transform = Transform::from(euler);
        let rotated = transform.rotation * Vec3::X;
        assert!(rotated.abs_diff_eq(Vec3::Y, 1.0e-6));
    }
}
