use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::AppConfig;
use crate::editor::{EditorAction, EditorActionRequest};

use super::settings_dialog::SettingsDialogState;

/// Renders the File / Edit / Window menu bar
pub fn menu_bar_ui(
    mut contexts: EguiContexts,
    mut actions: MessageWriter<EditorActionRequest>,
    mut settings: ResMut<SettingsDialogState>,
    config: Res<AppConfig>,
) -> Result {
    egui::TopBottomPanel::top("menu_bar").show(contexts.ctx_mut()?, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                action_button(ui, &mut actions, EditorAction::NewProject);
                action_button(ui, &mut actions, EditorAction::OpenProject);
                ui.separator();
                action_button(ui, &mut actions, EditorAction::Save);
                action_button(ui, &mut actions, EditorAction::SaveAs);
                ui.separator();
                action_button(ui, &mut actions, EditorAction::ExitAndSave);
                action_button(ui, &mut actions, EditorAction::Exit);
            });

            ui.menu_button("Edit", |ui| {
                action_button(ui, &mut actions, EditorAction::Undo);
                action_button(ui, &mut actions, EditorAction::Redo);
            });

            ui.menu_button("Window", |ui| {
                action_button(ui, &mut actions, EditorAction::Console);
                ui.separator();
                if ui.button("Settings...").clicked() {
                    settings.load_from_config(&config);
                    settings.is_open = true;
                    ui.close();
                }
            });
        });
    });
    Ok(())
}

fn action_button(
    ui: &mut egui::Ui,
    actions: &mut MessageWriter<EditorActionRequest>,
    action: EditorAction,
) {
    let mut button = egui::Button::new(action.label());
    if let Some(shortcut) = action.shortcut_text() {
        button = button.shortcut_text(shortcut);
    }
    if ui.add(button).clicked() {
        actions.write(EditorActionRequest(action));
        ui.close();
    }
}
