use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::constants::INSPECTOR_PANEL_WIDTH;
use crate::hierarchy::HierarchyList;
use crate::theme::ActiveTheme;

use super::widgets::section_heading;

/// Right-side panel describing the selected hierarchy object
pub fn inspector_ui(
    mut contexts: EguiContexts,
    theme: Res<ActiveTheme>,
    hierarchy: Res<HierarchyList>,
) -> Result {
    let colors = theme.colors;

    egui::SidePanel::right("inspector_panel")
        .default_width(INSPECTOR_PANEL_WIDTH)
        .frame(egui::Frame::new().fill(colors.panel_bg))
        .show(contexts.ctx_mut()?, |ui| {
            section_heading(ui, "Inspector", &colors);
            ui.add_space(10.0);

            ui.vertical_centered(|ui| match hierarchy.selected_item() {
                Some(name) => {
                    ui.label(egui::RichText::new(name).strong().color(colors.label_fg));
                    ui.add_space(4.0);
                    ui.label(egui::RichText::new("No properties").weak());
                }
                None => {
                    ui.label(egui::RichText::new("No object selected").color(colors.label_fg));
                }
            });
        });
    Ok(())
}
