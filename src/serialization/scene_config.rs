use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::fs;
use std::path::Path;

use crate::core::card_error::CardError;
use crate::core::oscillator::Oscillator;
use crate::spawning::euler_transform::EulerTransform;

/// The whole declarative scene: camera, lights, palette, cat parts, heart
/// ring, text train, greeting. Loaded from RON once at startup; the
/// `Default` impl mirrors the shipped `assets/card_scene.ron` so the binary
/// also runs without assets on disk.
#[derive(Serialize, Deserialize, Resource, Debug, Clone, PartialEq)]
pub struct CardConfig {
    pub background: String,
    pub camera: CameraConfig,
    pub lighting: LightingConfig,
    pub palette: Vec<PaletteEntry>,
    pub cat: CatConfig,
    pub heart_ring: HeartRingConfig,
    pub text_ring: TextRingConfig,
    pub greeting: GreetingConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CameraConfig {
    pub translation: (f32, f32, f32),
    pub fov_degrees: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LightingConfig {
    pub ambient: AmbientLightConfig,
    pub directional: DirectionalLightConfig,
    pub spot: SpotLightConfig,
    pub point: PointLightConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AmbientLightConfig {
    pub color: String,
    pub brightness: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DirectionalLightConfig {
    pub color: String,
    pub illuminance: f32,
    pub translation: (f32, f32, f32),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpotLightConfig {
    pub color: String,
    pub intensity: f32,
    pub range: f32,
    pub translation: (f32, f32, f32),
    /// Cone half-angles in radians.
    pub outer_angle: f32,
    pub inner_angle: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PointLightConfig {
    pub color: String,
    pub intensity: f32,
    pub range: f32,
    pub translation: (f32, f32, f32),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    pub name: String,
    pub hex: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CatConfig {
    pub transform: EulerTransform,
    pub bounce: Oscillator,
    pub parts: Vec<CatPart>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CatPart {
    pub name: String,
    pub shape: PartShape,
    pub material: String,
    pub transform: EulerTransform,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum PartShape {
    Sphere { radius: f32, segments: u32 },
    Cone { radius: f32, height: f32, segments: u32 },
    Capsule { radius: f32, length: f32 },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HeartRingConfig {
    pub count: usize,
    pub radius: f32,
    pub material: String,
    /// Per-heart phase is this oscillator shifted by the heart's index.
    pub pulse: Oscillator,
    pub extrude_depth: f32,
    pub samples_per_arc: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TextRingConfig {
    pub text: String,
    pub count: usize,
    /// Cycles per second along the path.
    pub speed: f32,
    pub path_scale: f32,
    pub path_height: f32,
    /// Sampled points are placed at y = flip_height - p.y.
    pub flip_height: f32,
    pub world_size: f32,
    pub color: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GreetingConfig {
    pub text: String,
    pub translation: (f32, f32, f32),
    pub world_size: f32,
    pub color: String,
}

impl CardConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<CardConfig, CardError> {
        let text = fs::read_to_string(path)?;
        Ok(ron::from_str(&text)?)
    }

    /// Load the scene file, falling back to the built-in scene when the
    /// file is missing or malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> CardConfig {
        match CardConfig::load(&path) {
            Ok(config) => config,
            Err(error) => {
                warn!(
                    "{}: {error}; using the built-in scene",
                    path.as_ref().display()
                );
                CardConfig::default()
            }
        }
    }

    /// Resolve a palette name to a color.
    pub fn color(&self, name: &str) -> Result<Color, CardError> {
        let entry = self
            .palette
            .iter()
            .find(|entry| entry.name == name)
            .ok_or_else(|| CardError::UnknownColor(name.to_string()))?;
        parse_hex_color(&entry.hex)
    }
}

pub fn parse_hex_color(hex: &str) -> Result<Color, CardError> {
    Srgba::hex(hex.trim_start_matches('#'))
        .map(Color::from)
        .map_err(|error| CardError::BadColor(format!("{hex}: {error:?}")))
}

impl Default for CardConfig {
    fn default() -> Self {
        CardConfig {
            background: "#2b0a14".to_string(),
            camera: CameraConfig {
                translation: (0.0, 0.0, 90.0),
                fov_degrees: 50.0,
            },
            lighting: LightingConfig {
                ambient: AmbientLightConfig {
                    color: "#ffffff".to_string(),
                    brightness: 300.0,
                },
                directional: DirectionalLightConfig {
                    color: "#ffffff".to_string(),
                    illuminance: 3000.0,
                    translation: (-50.0, 10.0, 5.0),
                },
                spot: SpotLightConfig {
                    color: "#ffffff".to_string(),
                    intensity: 1000000.0,
                    range: 200.0,
                    translation: (10.0, 10.0, 10.0),
                    outer_angle: 0.15,
                    inner_angle: 0.0,
                },
                point: PointLightConfig {
                    color: "#ffffff".to_string(),
                    intensity: 300000.0,
                    range: 200.0,
                    translation: (-10.0, -10.0, -10.0),
                },
            },
            palette: vec![
                PaletteEntry {
                    name: "white".to_string(),
                    hex: "#ffffff".to_string(),
                },
                PaletteEntry {
                    name: "black".to_string(),
                    hex: "#000000".to_string(),
                },
                PaletteEntry {
                    name: "ear_pink".to_string(),
                    hex: "#ffb6c1".to_string(),
                },
                PaletteEntry {
                    name: "nose_pink".to_string(),
                    hex: "#ff9999".to_string(),
                },
                PaletteEntry {
                    name: "whisker_gray".to_string(),
                    hex: "#444444".to_string(),
                },
                PaletteEntry {
                    name: "heart_red".to_string(),
                    hex: "#ff1744".to_string(),
                },
            ],
            cat: CatConfig {
                transform: EulerTransform::from_translation(-45.0, -15.0, 0.0),
                bounce: Oscillator::new(1.5, 2.0, 0.0, -15.0),
                parts: default_cat_parts(),
            },
            heart_ring: HeartRingConfig {
                count: 8,
                radius: 20.0,
                material: "heart_red".to_string(),
                pulse: Oscillator::new(0.5, 3.0, 0.0, 1.5),
                extrude_depth: 0.5,
                samples_per_arc: 8,
            },
            text_ring: TextRingConfig {
                text: "I LOVE YOU".to_string(),
                count: 20,
                speed: 0.05,
                path_scale: 25.0,
                path_height: 10.0,
                flip_height: 25.0,
                world_size: 1.0,
                color: "heart_red".to_string(),
            },
            greeting: GreetingConfig {
                text: "Happy Valentine's Day!".to_string(),
                translation: (15.0, 0.0, 0.0),
                world_size: 2.0,
                color: "heart_red".to_string(),
            },
        }
    }
}

fn default_cat_parts() -> Vec<CatPart> {
    let sphere = |name: &str, radius: f32, segments: u32, material: &str, t: EulerTransform| CatPart {
        name: name.to_string(),
        shape: PartShape::Sphere { radius, segments },
        material: material.to_string(),
        transform: t,
    };
    let cone = |name: &str, radius: f32, height: f32, material: &str, t: EulerTransform| CatPart {
        name: name.to_string(),
        shape: PartShape::Cone {
            radius,
            height,
            segments: 3,
        },
        material: material.to_string(),
        transform: t,
    };
    let capsule = |name: &str, radius: f32, length: f32, material: &str, t: EulerTransform| CatPart {
        name: name.to_string(),
        shape: PartShape::Capsule { radius, length },
        material: material.to_string(),
        transform: t,
    };

    vec![
        sphere(
            "Body",
            5.0,
            16,
            "white",
            EulerTransform::from_translation(0.0, -2.0, 0.0).with_scale(1.0, 1.2, 0.9),
        ),
        sphere(
            "Head",
            4.5,
            16,
            "white",
            EulerTransform::from_translation(0.0, 5.0, 0.0).with_scale(1.1, 1.0, 1.0),
        ),
        sphere("Left Cheek", 1.5, 12, "white", EulerTransform::from_translation(-3.0, 4.0, 3.0)),
        sphere("Right Cheek", 1.5, 12, "white", EulerTransform::from_translation(3.0, 4.0, 3.0)),
        cone(
            "Left Ear",
            2.0,
            3.5,
            "white",
            EulerTransform::from_translation(-3.0, 8.5, 0.0).with_rotation(0.2, 0.0, -0.4),
        ),
        cone(
            "Right Ear",
            2.0,
            3.5,
            "white",
            EulerTransform::from_translation(3.0, 8.5, 0.0).with_rotation(0.2, 0.0, 0.4),
        ),
        cone(
            "Left Inner Ear",
            1.2,
            2.5,
            "ear_pink",
            EulerTransform::from_translation(-3.0, 8.3, 1.0).with_rotation(0.2, 0.0, -0.4),
        ),
        cone(
            "Right Inner Ear",
            1.2,
            2.5,
            "ear_pink",
            EulerTransform::from_translation(3.0, 8.3, 1.0).with_rotation(0.2, 0.0, 0.4),
        ),
        sphere("Left Eye", 0.6, 12, "black", EulerTransform::from_translation(-1.8, 5.8, 4.0)),
        sphere("Right Eye", 0.6, 12, "black", EulerTransform::from_translation(1.8, 5.8, 4.0)),
        sphere(
            "Left Eye Highlight",
            0.2,
            8,
            "white",
            EulerTransform::from_translation(-1.6, 6.1, 4.5),
        ),
        sphere(
            "Right Eye Highlight",
            0.2,
            8,
            "white",
            EulerTransform::from_translation(2.0, 6.1, 4.5),
        ),
        cone(
            "Nose",
            0.4,
            0.5,
            "nose_pink",
            EulerTransform::from_translation(0.0, 4.5, 4.5).with_rotation(PI, 0.0, 0.0),
        ),
        capsule(
            "Left Mouth",
            0.1,
            0.8,
            "black",
            EulerTransform::from_translation(-0.5, 3.5, 4.5).with_rotation(0.0, 0.0, 0.6),
        ),
        capsule(
            "Right Mouth",
            0.1,
            0.8,
            "black",
            EulerTransform::from_translation(0.5, 3.5, 4.5).with_rotation(0.0, 0.0, -0.6),
        ),
        capsule(
            "Left Upper Whisker",
            0.08,
            3.0,
            "whisker_gray",
            EulerTransform::from_translation(-2.0, 5.0, 5.0).with_rotation(0.0, 0.0, -2.0),
        ),
        capsule(
            "Left Lower Whisker",
            0.08,
            3.0,
            "whisker_gray",
            EulerTransform::from_translation(-2.0, 3.5, 5.0).with_rotation(0.0, 0.0, -1.0),
        ),
        capsule(
            "Right Upper Whisker",
            0.08,
            3.0,
            "whisker_gray",
            EulerTransform::from_translation(3.5, 5.0, 5.0).with_rotation(0.0, 0.0, 2.0),
        ),
        capsule(
            "Right Lower Whisker",
            0.08,
            3.0,
            "whisker_gray",
            EulerTransform::from_translation(3.5, 3.5, 5.0).with_rotation(0.0, 0.0, 1.0),
        ),
        capsule(
            "Left Arm",
            1.2,
            4.5,
            "white",
            EulerTransform::from_translation(-5.5, 1.0, 1.0).with_rotation(0.3, 0.0, -0.9),
        ),
        capsule(
            "Right Arm",
            1.2,
            4.5,
            "white",
            EulerTransform::from_translation(5.5, 1.0, 1.0).with_rotation(0.3, 0.0, 0.9),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_scene_file_matches_the_built_in_scene() {
        let shipped: CardConfig =
            ron::from_str(include_str!("../../assets/card_scene.ron")).expect("asset parses");
        assert_eq!(shipped, CardConfig::default());
    }

    #[test]
    fn default_scene_round_trips_through_ron() {
        let config = CardConfig::default();
        let text = ron::ser::to_string(&config).expect("serializes");
        let back: CardConfig = ron::from_str(&text).expect("parses");
        assert_eq!(back, config);
    }

    #[test]
    fn every_referenced_material_is_in_the_palette() {
        let config = CardConfig::default();
        for part in &config.cat.parts {
            assert!(config.color(&part.material).is_ok(), "{}", part.name);
        }
        assert!(config.color(&config.heart_ring.material).is_ok());
        assert!(config.color(&config.text_ring.color).is_ok());
        assert!(config.color(&config.greeting.color).is_ok());
    }

    #[test]
    fn hex_colors_parse_with_or_without_hash() {
        assert!(parse_hex_color("#ff1744").is_ok());
        assert!(parse_hex_color("ff1744").is_ok());
        assert!(parse_hex_color("#nothex").is_err());
    }

    #[test]
    fn unknown_palette_names_are_an_error() {
        let config = CardConfig::default();
        assert!(matches!(
            config.color("chartreuse"),
            Err(crate::core::card_error::CardError::UnknownColor(_))
        ));
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let config = CardConfig::load_or_default("no/such/file.ron");
        assert_eq!(config, CardConfig::default());
    }
}
