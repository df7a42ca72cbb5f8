//! Menu and keyboard actions of the editor.
//!
//! Project management (new/open/save) and undo/redo are placeholders that
//! only log; the exit actions close the application.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::ui::DialogState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    NewProject,
    OpenProject,
    Save,
    SaveAs,
    ExitAndSave,
    Exit,
    Undo,
    Redo,
    Console,
}

impl EditorAction {
    pub fn label(&self) -> &'static str {
        match self {
            EditorAction::NewProject => "New",
            EditorAction::OpenProject => "Open",
            EditorAction::Save => "Save",
            EditorAction::SaveAs => "Save as",
            EditorAction::ExitAndSave => "Exit & Save",
            EditorAction::Exit => "Exit",
            EditorAction::Undo => "Undo",
            EditorAction::Redo => "Redo",
            EditorAction::Console => "Console",
        }
    }

    pub fn shortcut_text(&self) -> Option<&'static str> {
        match self {
            EditorAction::NewProject => Some("Ctrl+N"),
            EditorAction::OpenProject => Some("Ctrl+O"),
            EditorAction::Save => Some("Ctrl+S"),
            EditorAction::SaveAs => Some("Ctrl+Shift+S"),
            EditorAction::Undo => Some("Ctrl+Z"),
            EditorAction::Redo => Some("Ctrl+Y"),
            _ => None,
        }
    }
}

/// Message emitted by the menu bar and keyboard shortcuts
#[derive(Message, Debug, Clone, Copy)]
pub struct EditorActionRequest(pub EditorAction);

/// Action bound to a key pressed with Ctrl held.
pub fn shortcut_action(shift: bool, key: KeyCode) -> Option<EditorAction> {
    match (shift, key) {
        (false, KeyCode::KeyN) => Some(EditorAction::NewProject),
        (false, KeyCode::KeyO) => Some(EditorAction::OpenProject),
        (false, KeyCode::KeyS) => Some(EditorAction::Save),
        (true, KeyCode::KeyS) => Some(EditorAction::SaveAs),
        (false, KeyCode::KeyZ) => Some(EditorAction::Undo),
        (false, KeyCode::KeyY) | (true, KeyCode::KeyZ) => Some(EditorAction::Redo),
        _ => None,
    }
}

/// Translate Ctrl shortcuts into action requests
pub fn handle_action_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    dialog_state: Res<DialogState>,
    mut actions: MessageWriter<EditorActionRequest>,
) {
    if dialog_state.any_modal_open {
        return;
    }

    // Don't trigger if typing in UI
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }
    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    for key in keyboard.get_just_pressed() {
        if let Some(action) = shortcut_action(shift, *key) {
            actions.write(EditorActionRequest(action));
        }
    }
}

fn not_implemented(action: EditorAction) {
    info!("{} is not implemented yet", action.label());
}

/// Carry out requested actions
pub fn handle_editor_actions(
    mut events: MessageReader<EditorActionRequest>,
    mut exit: MessageWriter<AppExit>,
) {
    for EditorActionRequest(action) in events.read() {
        match action {
            EditorAction::ExitAndSave => {
                not_implemented(EditorAction::Save);
                info!("Exiting editor");
                exit.write(AppExit::Success);
            }
            EditorAction::Exit => {
                info!("Exiting editor");
                exit.write(AppExit::Success);
            }
            other => not_implemented(*other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_actions() {
        assert_eq!(shortcut_action(false, KeyCode::KeyS), Some(EditorAction::Save));
        assert_eq!(shortcut_action(true, KeyCode::KeyS), Some(EditorAction::SaveAs));
        assert_eq!(shortcut_action(false, KeyCode::KeyZ), Some(EditorAction::Undo));
        assert_eq!(shortcut_action(true, KeyCode::KeyZ), Some(EditorAction::Redo));
        assert_eq!(shortcut_action(false, KeyCode::KeyY), Some(EditorAction::Redo));
        assert_eq!(shortcut_action(false, KeyCode::KeyQ), None);
    }

    #[test]
    fn test_shortcut_text_matches_bindings() {
        assert_eq!(EditorAction::SaveAs.shortcut_text(), Some("Ctrl+Shift+S"));
        assert_eq!(EditorAction::Console.shortcut_text(), None);
        assert_eq!(EditorAction::Exit.shortcut_text(), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(EditorAction::ExitAndSave.label(), "Exit & Save");
        assert_eq!(EditorAction::SaveAs.label(), "Save as");
    }
}
