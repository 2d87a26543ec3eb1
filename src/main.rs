use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;

use valentine_card::core::card_plugin::CardPlugin;
use valentine_card::serialization::scene_config::CardConfig;

fn main() {
    let mut app = App::new();

    // Setup default plugins
    app.add_plugins(
        DefaultPlugins
            .set(bevy::log::LogPlugin {
                filter: "warn,valentine_card=info".to_string(),
                level: bevy::log::Level::INFO,
                ..default()
            })
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Happy Valentine's Day".into(),
                    resolution: (1024.0, 768.0).into(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            })
            .build(),
    );

    // Scene data; falls back to the built-in scene when the file is absent
    app.insert_resource(CardConfig::load_or_default("assets/card_scene.ron"));

    // Setup inspector plugins
    app.add_plugins(
        WorldInspectorPlugin::default().run_if(
            bevy::input::common_conditions::input_toggle_active(false, KeyCode::Escape),
        ),
    );

    // Setup the card
    app.add_plugins(CardPlugin);

    app.run();
}
