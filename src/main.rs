//! Echelon - unit-hierarchy × algebra teaching app.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Echelon".into(),
            resolution: (1280, 800).into(),
            ..default()
        }),
        ..default()
    }));

    echelon::build_app(&mut app);

    app.run();
}
