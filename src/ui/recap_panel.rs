//! Recap panel - the structure/algebra mapping and build footer.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::resources::{ActiveScheme, UiState};

pub fn recap_panel_system(
    mut contexts: EguiContexts,
    ui_state: Res<UiState>,
    scheme: Res<ActiveScheme>,
) -> Result {
    if !ui_state.recap_open {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;
    let scheme = scheme.0;

    egui::TopBottomPanel::bottom("recap_panel").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.label(egui::RichText::new("Recap").strong());
        ui.small(
            "Every tier is groups of groups. Algebra names the relation, \
             and a big problem splits into small units that recombine.",
        );
        ui.horizontal(|ui| {
            ui.label(format!("Structure: {}", scheme.structure_chain()));
            ui.separator();
            ui.label(format!("Algebra: {}", scheme.algebra_chain()));
        });
        ui.small(
            egui::RichText::new(format!(
                "build {} ({})",
                env!("BUILD_COMMIT"),
                env!("BUILD_DATE")
            ))
            .weak(),
        );
        ui.add_space(4.0);
    });

    Ok(())
}
