mod inspector;
mod left_panel;
mod menu_bar;
mod settings_dialog;
mod widgets;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass};

use crate::config::ConfigResetNotification;
use crate::theme::ActiveTheme;

/// Resource that tracks whether any modal dialog is currently open.
/// Editor input handlers should check this to avoid processing input
/// when the user is interacting with a dialog.
#[derive(Resource, Default)]
pub struct DialogState {
    /// True when any modal dialog is open that should block editor input
    pub any_modal_open: bool,
}

/// System to aggregate all dialog open states into a single resource.
/// Runs in First schedule before input handlers.
fn update_dialog_state(
    settings: Res<settings_dialog::SettingsDialogState>,
    config_reset: Res<ConfigResetNotification>,
    mut dialog_state: ResMut<DialogState>,
) {
    dialog_state.any_modal_open = settings.is_open || config_reset.show;
}

/// Push the active color scheme into egui whenever it changes
fn apply_theme(mut contexts: EguiContexts, theme: Res<ActiveTheme>) -> Result {
    if theme.is_changed() {
        contexts.ctx_mut()?.set_visuals(theme.visuals());
    }
    Ok(())
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogState>()
            .init_resource::<settings_dialog::SettingsDialogState>()
            // Menu bar first so it spans the full window width,
            // then the side panels
            .add_systems(
                EguiPrimaryContextPass,
                (
                    apply_theme,
                    menu_bar::menu_bar_ui,
                    left_panel::left_panel_ui,
                    inspector::inspector_ui,
                )
                    .chain(),
            )
            // Last: dialogs/overlays
            .add_systems(
                EguiPrimaryContextPass,
                (
                    settings_dialog::settings_dialog_ui,
                    settings_dialog::config_reset_notification_ui,
                )
                    .after(inspector::inspector_ui),
            )
            .add_systems(Update, left_panel::handle_hierarchy_delete_shortcut)
            // Update dialog state at the start of each frame
            .add_systems(First, update_dialog_state);
    }
}
