mod actions;
mod camera;

pub use actions::{EditorAction, EditorActionRequest};

use bevy::prelude::*;

use crate::assets::AssetTree;
use crate::hierarchy::HierarchyList;

/// Fill the panels with the sample scene
fn seed_demo_content(mut hierarchy: ResMut<HierarchyList>, mut assets: ResMut<AssetTree>) {
    for name in ["Camera", "Player", "Light"] {
        hierarchy.add_item(name);
    }

    assets.add_item("Gun.asset", Some("Prefabs"));
    assets.add_item("Enemy.asset", Some("Prefabs"));
    assets.add_item("Skybox.png", Some("Textures"));
    assets.add_item("README.md", None);
}

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<EditorActionRequest>()
            .add_systems(Startup, (camera::spawn_camera, seed_demo_content))
            .add_systems(
                Update,
                (
                    actions::handle_action_shortcuts,
                    actions::handle_editor_actions,
                )
                    .chain(),
            );
    }
}
