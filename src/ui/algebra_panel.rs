//! Algebra panel - identity equations, the expression input, and marker boxes.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::algebra;
use crate::constants::{MARKER_DISPLAY_CAP, MARKER_SIZE};
use crate::resources::{ActiveScheme, AlgebraSession, UiState};

pub fn algebra_panel_system(
    mut contexts: EguiContexts,
    mut ui_state: ResMut<UiState>,
    scheme: Res<ActiveScheme>,
    mut session: ResMut<AlgebraSession>,
) -> Result {
    if !ui_state.algebra_open {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;
    let scheme = scheme.0;
    let (r, g, b) = scheme.accent;
    let accent = egui::Color32::from_rgb(r, g, b);

    let mut open = true;
    egui::Window::new("Algebra view")
        .open(&mut open)
        .default_width(330.0)
        .show(ctx, |ui| {
            // Per-tier identities, base tier first.
            for index in 0..scheme.tier_count() {
                if let Ok(line) = scheme.equation_line(index) {
                    ui.label(line);
                }
            }
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Expression:");
                ui.add(
                    egui::TextEdit::singleline(&mut session.expr)
                        .desired_width(200.0)
                        .hint_text(scheme.default_expr),
                );
            });

            let result = session.evaluator.evaluate(&session.expr);
            ui.label(format!(
                "= {sum} X = {sum} {base} = {people} {word}",
                sum = result.sum_x,
                base = scheme.tiers[0],
                people = result.people,
                word = scheme.people_word,
            ));
            ui.add_space(4.0);

            // One box per base unit, capped. The count itself is never capped.
            let row = algebra::marker_row(result.sum_x);
            ui.horizontal_wrapped(|ui| {
                for _ in 0..row.shown {
                    let (response, painter) =
                        ui.allocate_painter(egui::Vec2::splat(MARKER_SIZE), egui::Sense::hover());
                    painter.rect_filled(response.rect.shrink(1.0), 2.0, accent);
                }
            });
            if row.overflow {
                ui.small(format!(
                    "… only the first {} {} shown",
                    MARKER_DISPLAY_CAP,
                    scheme.tiers[0]
                ));
            }
        });

    if !open {
        ui_state.algebra_open = false;
    }

    Ok(())
}
