//! Centralized constants used across the application.
//!
//! This module contains magic numbers and layout values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 800.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 600.0;

/// Title of the main editor window
pub const WINDOW_TITLE: &str = "S.U.P.E FPS";

/// Default width of the left (hierarchy + assets) panel
pub const LEFT_PANEL_WIDTH: f32 = 200.0;

/// Default width of the inspector panel
pub const INSPECTOR_PANEL_WIDTH: f32 = 250.0;

/// Height of a single row in the hierarchy and assets lists
pub const LIST_ROW_HEIGHT: f32 = 18.0;

/// Number of spaces per indent level for items inside an asset folder
pub const FOLDER_SPACING: usize = 5;

/// Indent level of items inside a folder. Folders never nest.
pub const FOLDER_ITEM_DEPTH: usize = 1;

/// Offset of the drag ghost label from the cursor, in points
pub const DRAG_GHOST_OFFSET: (f32, f32) = (10.0, 10.0);
