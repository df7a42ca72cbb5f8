use bevy::prelude::*;

/// Camera the egui panels are rendered through
#[derive(Component)]
pub struct EditorCamera;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, EditorCamera));
}
