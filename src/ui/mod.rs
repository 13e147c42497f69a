//! UI module - top bar, hierarchy tree, algebra and camp windows, recap panel.

pub mod algebra_panel;
pub mod camp_panel;
pub mod hierarchy_panel;
pub mod recap_panel;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass, egui};

use crate::hierarchy::SchemeId;
use crate::resources::*;
use crate::settings::{self, UserSettings};

/// Register all UI systems.
pub fn register_ui(app: &mut App) {
    // Egui panels - ordered so the top bar and side panel claim their space
    // before the bottom panel and the floating windows.
    app.add_systems(EguiPrimaryContextPass, (
        top_bar_system,
        hierarchy_panel::hierarchy_panel_system,
        recap_panel::recap_panel_system,
        algebra_panel::algebra_panel_system,
        camp_panel::camp_panel_system,
        sync_settings_system,
    ).chain());

    // Panel toggle keyboard shortcuts
    app.add_systems(Update, ui_toggle_system);
}

/// Top bar: scheme picker + panel visibility toggles.
fn top_bar_system(
    mut contexts: EguiContexts,
    mut ui_state: ResMut<UiState>,
    mut user_settings: ResMut<UserSettings>,
    mut scheme: ResMut<ActiveScheme>,
    mut view: ResMut<HierarchyView>,
    mut algebra: ResMut<AlgebraSession>,
    mut camp: ResMut<CampSession>,
) -> Result {
    let ctx = contexts.ctx_mut()?;

    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Echelon").strong().size(16.0));
            ui.label(egui::RichText::new("structure × algebra × decomposition").weak());
            ui.separator();

            ui.label("Units:");
            let mut chosen = scheme.0.id;
            egui::ComboBox::from_id_salt("scheme_picker")
                .selected_text(chosen.scheme().label)
                .show_ui(ui, |ui| {
                    for id in SchemeId::ALL {
                        ui.selectable_value(&mut chosen, id, id.scheme().label);
                    }
                });
            if chosen != scheme.0.id {
                // Sessions are scheme-scoped: switching resets every panel.
                let next = chosen.scheme();
                scheme.0 = next;
                *view = HierarchyView::for_scheme(next);
                *algebra = AlgebraSession::for_scheme(next);
                *camp = CampSession::default();
                user_settings.scheme = chosen;
                settings::save_settings(&user_settings);
                info!("Switched to unit scheme '{}'", next.label);
            }

            ui.separator();
            ui.checkbox(&mut ui_state.algebra_open, "Algebra");
            ui.checkbox(&mut ui_state.camp_open, "Camp");
            ui.checkbox(&mut ui_state.recap_open, "Recap");
        });
    });

    Ok(())
}

/// Keyboard shortcuts for toggling UI panels. R resets the camp puzzle.
fn ui_toggle_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut egui_contexts: EguiContexts,
    mut ui_state: ResMut<UiState>,
    mut camp: ResMut<CampSession>,
) {
    // Don't react while a text field owns the keyboard.
    if let Ok(ctx) = egui_contexts.ctx_mut() {
        if ctx.wants_keyboard_input() {
            return;
        }
    }

    if keys.just_pressed(KeyCode::KeyA) {
        ui_state.algebra_open = !ui_state.algebra_open;
    }
    if keys.just_pressed(KeyCode::KeyC) {
        ui_state.camp_open = !ui_state.camp_open;
    }
    if keys.just_pressed(KeyCode::KeyE) {
        ui_state.recap_open = !ui_state.recap_open;
    }
    if keys.just_pressed(KeyCode::KeyR) {
        camp.puzzle.reset();
    }
}

/// Persist panel visibility whenever it changes (close buttons included).
fn sync_settings_system(ui_state: Res<UiState>, mut user_settings: ResMut<UserSettings>) {
    if ui_state.algebra_open == user_settings.algebra_open
        && ui_state.camp_open == user_settings.camp_open
        && ui_state.recap_open == user_settings.recap_open
    {
        return;
    }
    user_settings.algebra_open = ui_state.algebra_open;
    user_settings.camp_open = ui_state.camp_open;
    user_settings.recap_open = ui_state.recap_open;
    settings::save_settings(&user_settings);
}
