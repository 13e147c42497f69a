//! Echelon - interactive unit-hierarchy teaching app built on Bevy and egui.
//!
//! A fixed table of unit tiers (base headcount 10, ×3 per tier) drives three
//! independent panels: a clickable expansion tree, an algebra-expression
//! evaluator, and a camp-building arithmetic puzzle.

// ============================================================================
// MODULES
// ============================================================================

pub mod algebra;
pub mod camp;
pub mod constants;
pub mod expansion;
pub mod hierarchy;
pub mod resources;
pub mod settings;
pub mod ui;

// ============================================================================
// APP WIRING
// ============================================================================

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use resources::*;

/// Build the Bevy application. Called once at startup by main().
pub fn build_app(app: &mut App) {
    let user_settings = settings::load_settings();
    let scheme = user_settings.scheme.scheme();
    info!("Starting with unit scheme '{}'", scheme.label);

    app.add_plugins(EguiPlugin::default());

    app.insert_resource(UiState::from_settings(&user_settings));
    app.insert_resource(ActiveScheme(scheme));
    app.insert_resource(HierarchyView::for_scheme(scheme));
    app.insert_resource(AlgebraSession::for_scheme(scheme));
    app.insert_resource(CampSession::default());
    app.insert_resource(user_settings);

    app.add_systems(Startup, spawn_ui_camera);

    ui::register_ui(app);
}

/// Egui renders through a camera; nothing else is drawn.
fn spawn_ui_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
