//! Hierarchy panel - the clickable tier tree with per-tier formula lines.
//!
//! Nesting is rendered as an iterative indent over `0..depth` rather than
//! actual recursion; the table has fixed depth and nothing is gained from
//! recursing.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::constants::TIER_INDENT;
use crate::expansion::ExpansionMode;
use crate::hierarchy::UnitScheme;
use crate::resources::{ActiveScheme, HierarchyView};

pub fn hierarchy_panel_system(
    mut contexts: EguiContexts,
    scheme: Res<ActiveScheme>,
    mut view: ResMut<HierarchyView>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    let scheme = scheme.0;
    let tier_count = scheme.tier_count();

    // Collect the click during rendering, apply it after.
    let mut clicked: Option<usize> = None;

    egui::SidePanel::left("hierarchy_panel").default_width(340.0).show(ctx, |ui| {
        ui.heading("Structure (bottom up)");
        ui.small(match view.expansion.mode() {
            ExpansionMode::Cascade => {
                "Click a tier to reveal the next one; click an upper tier to collapse back to it."
            }
            ExpansionMode::Single => "Click a tier to open it; click again to close.",
        });
        ui.separator();

        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            match view.expansion.mode() {
                ExpansionMode::Cascade => {
                    let depth = view.expansion.depth().min(tier_count);
                    for index in 0..depth {
                        ui.horizontal(|ui| {
                            ui.add_space(index as f32 * TIER_INDENT);
                            ui.vertical(|ui| {
                                if tier_node(ui, scheme, index, true) {
                                    clicked = Some(index);
                                }
                            });
                        });
                    }
                }
                ExpansionMode::Single => {
                    for index in 0..tier_count {
                        let open = view.expansion.is_expanded(index);
                        if tier_node(ui, scheme, index, open) {
                            clicked = Some(index);
                        }
                    }
                }
            }
        });
    });

    if let Some(index) = clicked {
        view.expansion.click(index, tier_count);
    }

    Ok(())
}

/// One tier node: clickable header, factor annotation, and (when expanded)
/// the formula line plus the total badge on the deepest tier.
fn tier_node(ui: &mut egui::Ui, scheme: &UnitScheme, index: usize, expanded: bool) -> bool {
    let (r, g, b) = scheme.accent;
    let fill = if expanded {
        egui::Color32::from_rgba_unmultiplied(r, g, b, 70)
    } else {
        egui::Color32::from_rgba_unmultiplied(r, g, b, 20)
    };

    let mut clicked = false;
    ui.horizontal(|ui| {
        let header = egui::Button::new(egui::RichText::new(scheme.tiers[index]).strong().size(15.0))
            .fill(fill)
            .min_size(egui::vec2(130.0, 24.0));
        if ui.add(header).clicked() {
            clicked = true;
        }
        ui.label(egui::RichText::new(scheme.factor_label(index)).weak().size(12.0));
    });

    if expanded {
        if let Ok(line) = scheme.formula_line(index) {
            ui.small(line);
        }
        if index == scheme.tier_count() - 1 {
            ui.colored_label(egui::Color32::from_rgb(80, 200, 80), scheme.summary_line());
        }
    }
    ui.add_space(4.0);

    clicked
}
