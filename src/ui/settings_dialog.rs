use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::{AppConfig, ConfigResetNotification, SetColorSchemeRequest};
use crate::theme::ColorSchemeName;

/// State for the settings dialog
#[derive(Resource, Default)]
pub struct SettingsDialogState {
    /// Whether the dialog is open
    pub is_open: bool,
    /// Color scheme picked in the dialog (applied on "Apply")
    pub color_scheme: ColorSchemeName,
}

impl SettingsDialogState {
    /// Initialize the dialog state from current config
    pub fn load_from_config(&mut self, config: &AppConfig) {
        self.color_scheme = config.data.color_scheme;
    }
}

/// Renders the settings dialog
pub fn settings_dialog_ui(
    mut contexts: EguiContexts,
    mut dialog_state: ResMut<SettingsDialogState>,
    config: Res<AppConfig>,
    mut scheme_events: MessageWriter<SetColorSchemeRequest>,
) -> Result {
    if !dialog_state.is_open {
        return Ok(());
    }

    let mut should_apply = false;
    let mut should_close = false;
    let has_changes = dialog_state.color_scheme != config.data.color_scheme;

    egui::Window::new("Settings")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.heading("Appearance");
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("Color scheme:");
                egui::ComboBox::from_id_salt("color_scheme")
                    .selected_text(dialog_state.color_scheme.display_name())
                    .show_ui(ui, |ui| {
                        for scheme in ColorSchemeName::all() {
                            ui.selectable_value(
                                &mut dialog_state.color_scheme,
                                scheme,
                                scheme.display_name(),
                            );
                        }
                    });
            });

            ui.add_space(12.0);
            ui.separator();

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(has_changes, egui::Button::new("Apply"))
                    .clicked()
                {
                    should_apply = true;
                }
                if ui.button("Close").clicked() {
                    should_close = true;
                }
            });
        });

    if should_apply {
        scheme_events.write(SetColorSchemeRequest {
            scheme: dialog_state.color_scheme,
        });
    }
    if should_close {
        dialog_state.is_open = false;
    }

    Ok(())
}

/// Tells the user the config file could not be used and defaults were loaded
pub fn config_reset_notification_ui(
    mut contexts: EguiContexts,
    mut notification: ResMut<ConfigResetNotification>,
) -> Result {
    if !notification.show {
        return Ok(());
    }

    let mut dismissed = false;

    egui::Window::new("Settings Reset")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("Your settings could not be loaded and were reset to defaults.");
            if let Some(ref reason) = notification.reason {
                ui.add_space(5.0);
                ui.label(egui::RichText::new(reason).weak());
            }
            ui.add_space(10.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    if dismissed {
        notification.show = false;
        notification.reason = None;
    }

    Ok(())
}
