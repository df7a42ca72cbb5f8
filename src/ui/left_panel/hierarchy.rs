//! Hierarchy list with drag-to-reorder.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::constants::LIST_ROW_HEIGHT;
use crate::hierarchy::{HierarchyList, ReorderDrag, ReorderTarget, RowLocator, UniformRows};
use crate::theme::ColorScheme;
use crate::ui::widgets::{list_row, paint_ghost_label, section_heading};
use crate::ui::DialogState;

/// Renders the hierarchy section and drives the reorder gesture.
pub fn render_hierarchy(
    ui: &mut egui::Ui,
    list: &mut HierarchyList,
    drag: &mut ReorderDrag,
    colors: &ColorScheme,
) {
    section_heading(ui, "Hierarchy", colors);

    let mut rows_top = 0.0;
    let mut drag_started = false;
    let mut clicked = None;
    let mut remove = None;

    egui::Frame::new().fill(colors.list_bg).show(ui, |ui| {
        egui::ScrollArea::vertical()
            .id_salt("hierarchy_rows")
            .auto_shrink([false, false])
            .drag_to_scroll(false)
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = 0.0;
                rows_top = ui.cursor().top();

                for (index, name) in list.items().iter().enumerate() {
                    let highlighted = if drag.is_dragging() {
                        drag.highlighted() == Some(index)
                    } else {
                        list.selected() == Some(index)
                    };
                    let fill = if highlighted {
                        colors.select_bg
                    } else {
                        colors.list_bg
                    };

                    let response =
                        list_row(ui, name, fill, colors, egui::Sense::click_and_drag());
                    if response.clicked() {
                        clicked = Some(index);
                    }
                    if response.drag_started() {
                        drag_started = true;
                    }
                    response.context_menu(|ui| {
                        if ui.button("Remove").clicked() {
                            remove = Some(index);
                            ui.close();
                        }
                    });
                }
            });
    });

    if let Some(index) = clicked {
        list.select(Some(index));
    }
    if let Some(index) = remove {
        list.select(Some(index));
        if let Some(name) = list.remove_selected() {
            info!("Removed {:?} from hierarchy", name);
        }
    }

    let rows = UniformRows {
        top: rows_top,
        row_height: LIST_ROW_HEIGHT,
        len: list.len(),
    };
    let (press_origin, pointer, released) = ui.input(|i| {
        (
            i.pointer.press_origin(),
            i.pointer.interact_pos(),
            i.pointer.primary_released(),
        )
    });

    if drag_started
        && let Some(origin) = press_origin
        && drag.begin(&rows, list, origin.y)
    {
        list.select(rows.row_at(origin.y));
    }

    if !drag.is_dragging() {
        return;
    }

    if let Some(pos) = pointer {
        drag.drag_to(&rows, Vec2::new(pos.x, pos.y));
    }

    if released {
        let y = pointer.map(|p| p.y).or_else(|| {
            drag.session()
                .map(|s| rows.row_center(s.hover_index.unwrap_or(s.source_index)))
        });
        if let Some(y) = y
            && let Some(outcome) = drag.release(&rows, list, y)
            && let Some(reorder) = outcome.reorder
        {
            list.select(Some(reorder.to));
        }
    } else if let Some(ghost) = drag.ghost() {
        paint_ghost_label(
            ui.ctx(),
            egui::pos2(ghost.position.x, ghost.position.y),
            &ghost.label,
            colors,
        );
    }
}

/// Delete removes the selected hierarchy row
pub fn handle_hierarchy_delete_shortcut(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    dialog_state: Res<DialogState>,
    drag: Res<ReorderDrag>,
    mut list: ResMut<HierarchyList>,
) {
    if dialog_state.any_modal_open || drag.is_dragging() {
        return;
    }

    // Don't trigger if typing in UI
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    if keyboard.just_pressed(KeyCode::Delete)
        && let Some(name) = list.remove_selected()
    {
        info!("Removed {:?} from hierarchy", name);
    }
}
