//! Left panel UI module.
//!
//! ## Module Structure
//!
//! - [`hierarchy`] - Scene hierarchy list with drag-to-reorder
//! - [`assets`] - Asset folders with expand/collapse
//!
//! ## Systems
//!
//! - [`left_panel_ui`]: Renders both lists, hierarchy on top
//! - [`handle_hierarchy_delete_shortcut`]: Delete key removes the selected object

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::assets::AssetTree;
use crate::constants::LEFT_PANEL_WIDTH;
use crate::hierarchy::{HierarchyList, ReorderDrag};
use crate::theme::ActiveTheme;

mod assets;
mod hierarchy;

pub use hierarchy::handle_hierarchy_delete_shortcut;

/// Main left panel UI system.
pub fn left_panel_ui(
    mut contexts: EguiContexts,
    theme: Res<ActiveTheme>,
    mut hierarchy_list: ResMut<HierarchyList>,
    mut drag: ResMut<ReorderDrag>,
    mut asset_tree: ResMut<AssetTree>,
) -> Result {
    let colors = theme.colors;

    egui::SidePanel::left("left_panel")
        .default_width(LEFT_PANEL_WIDTH)
        .frame(egui::Frame::new().fill(colors.panel_bg))
        .show(contexts.ctx_mut()?, |ui| {
            // Split the height evenly between the two lists
            let size = egui::vec2(ui.available_width(), ui.available_height() / 2.0);
            ui.allocate_ui(size, |ui| {
                hierarchy::render_hierarchy(ui, &mut hierarchy_list, &mut drag, &colors);
            });

            assets::render_assets(ui, &mut asset_tree, &colors);
        });
    Ok(())
}
