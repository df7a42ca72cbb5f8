//! Scene hierarchy list and its drag-to-reorder gesture.
//!
//! ## Module Structure
//!
//! - [`list`] - HierarchyList resource (ordered names + selection)
//! - [`reorder`] - ReorderDrag state machine and the row geometry traits
//!
//! ## Key Types
//!
//! - [`HierarchyList`]: Resource with the scene objects in display order
//! - [`ReorderDrag`]: Resource tracking an in-progress drag of a row

mod list;
mod reorder;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use list::HierarchyList;
pub use reorder::{ReorderDrag, ReorderTarget, RowLocator, UniformRows};

// Exposed for callers that drive the gesture with their own geometry
#[allow(unused_imports)]
pub use reorder::{DragSession, DropOutcome, GhostToken, Reorder};

pub struct HierarchyPlugin;

impl Plugin for HierarchyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HierarchyList>()
            .init_resource::<ReorderDrag>();
    }
}
