//! Collapsible asset folder list.

use bevy::prelude::*;
use bevy_egui::egui;

use crate::assets::AssetTree;
use crate::theme::ColorScheme;
use crate::ui::widgets::{list_row, section_heading};

/// Renders the assets section. Double-clicking a folder header toggles it.
pub fn render_assets(ui: &mut egui::Ui, tree: &mut AssetTree, colors: &ColorScheme) {
    section_heading(ui, "Assets", colors);

    let rows = tree.render();
    let spacing = tree.folder_spacing();
    let mut toggled = None;

    egui::Frame::new().fill(colors.list_bg).show(ui, |ui| {
        egui::ScrollArea::vertical()
            .id_salt("asset_rows")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = 0.0;
                for row in &rows {
                    let response =
                        list_row(ui, &row.text(spacing), colors.list_bg, colors, egui::Sense::click());
                    if row.is_header() && response.double_clicked() {
                        toggled = Some(row.name().to_string());
                    }
                }
            });
    });

    if let Some(folder) = toggled
        && tree.toggle_folder(&folder)
    {
        debug!("Toggled asset folder {:?}", folder);
    }
}
