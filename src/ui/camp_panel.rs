//! Camp panel - target input, tier counters, and the suggestion line.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::camp::{CampPuzzle, tier_weight};
use crate::constants::{CAMP_TIER_COUNT, MIN_TARGET_HINT};
use crate::resources::{ActiveScheme, CampSession, UiState};

pub fn camp_panel_system(
    mut contexts: EguiContexts,
    mut ui_state: ResMut<UiState>,
    scheme: Res<ActiveScheme>,
    mut session: ResMut<CampSession>,
) -> Result {
    if !ui_state.camp_open {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;
    let scheme = scheme.0;

    let mut open = true;
    egui::Window::new("Camp builder")
        .open(&mut open)
        .default_width(300.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Target headcount:");
                let response =
                    ui.add(egui::TextEdit::singleline(&mut session.target_text).desired_width(80.0));
                if response.changed() {
                    // Empty or non-numeric input counts as 0, nothing is rejected.
                    session.puzzle.target = session.target_text.trim().parse().unwrap_or(0);
                }
                ui.label(egui::RichText::new(format!("(try {} or more)", MIN_TARGET_HINT)).weak());
            });
            ui.separator();

            // Largest tier first, the way a camp would be planned.
            for slot in (0..CAMP_TIER_COUNT).rev() {
                counter_row(ui, scheme.tiers[slot], scheme.people_word, slot, &mut session.puzzle);
            }
            ui.separator();

            ui.label(format!(
                "Current total: {} {}",
                session.puzzle.people(),
                scheme.people_word
            ));

            let diff = session.puzzle.diff();
            let color = if diff == 0 {
                egui::Color32::from_rgb(80, 200, 80)
            } else if diff > 0 {
                egui::Color32::from_rgb(220, 160, 40)
            } else {
                egui::Color32::from_rgb(80, 180, 255)
            };
            ui.colored_label(color, session.puzzle.suggestion().message(scheme));

            ui.add_space(4.0);
            if ui.button("Reset").clicked() {
                session.puzzle.reset();
            }
        });

    if !open {
        ui_state.camp_open = false;
    }

    Ok(())
}

fn counter_row(
    ui: &mut egui::Ui,
    name: &str,
    people_word: &str,
    slot: usize,
    puzzle: &mut CampPuzzle,
) {
    ui.horizontal(|ui| {
        ui.label(format!("{} ({} {} each)", name, tier_weight(slot), people_word));
        if ui.button("-").clicked() {
            puzzle.adjust(slot, -1);
        }
        ui.label(egui::RichText::new(format!("{}", puzzle.count(slot))).strong());
        if ui.button("+").clicked() {
            puzzle.adjust(slot, 1);
        }
    });
}
