//! Asset folders shown in the left panel.
//!
//! ## Module Structure
//!
//! - [`tree`] - AssetTree resource, folders and the flattened row model
//!
//! ## Key Types
//!
//! - [`AssetTree`]: Resource holding folders and loose items
//! - [`DisplayRow`]: One line of the rendered assets list

mod tree;


use bevy::prelude::*;

pub use tree::{AssetTree, DisplayRow};

pub struct AssetTreePlugin;

impl Plugin for AssetTreePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AssetTree>();
    }
}
