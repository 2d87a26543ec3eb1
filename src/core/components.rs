use bevy::prelude::*;

#[derive(Component)]
pub struct MainCamera;

#[derive(Component)]
pub struct OverlayCamera;

#[derive(Component)]
pub struct MainDirectionalLight;

/// Root of the cat figure. The bounce oscillator lives here so every body
/// part and the heart ring follow it.
#[derive(Component)]
pub struct CatRig;

/// One heart of the orbit ring.
#[derive(Component)]
pub struct RingHeart;

/// The static greeting banner.
#[derive(Component)]
pub struct GreetingBanner;

/// Overlay text pinned to a 3D point: repositioned every frame by
/// projecting `world_position` through the main camera. `world_size` is the
/// text height in world units at that point.
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct WorldLabel {
    pub world_position: Vec3,
    pub world_size: f32,
}

impl Default for WorldLabel {
    fn default() -> Self {
        WorldLabel {
            world_position: Vec3::ZERO,
            world_size: 1.0,
        }
    }
}

/// Label riding the heart path; updates its `WorldLabel` anchor from the
/// shared path clock.
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component)]
pub struct OrbitLabel {
    pub index: usize,
    pub count: usize,
}
