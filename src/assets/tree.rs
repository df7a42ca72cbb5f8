//! Folder/item membership of the assets panel and its flattened rendering.

use bevy::prelude::*;

use crate::constants::{FOLDER_ITEM_DEPTH, FOLDER_SPACING};

/// Glyph prefix of an expanded folder header
pub const EXPANDED_GLYPH: &str = "▼ ";

/// Glyph prefix of a collapsed folder header
pub const COLLAPSED_GLYPH: &str = "▶ ";

/// A named, collapsible group of asset names. Folders never nest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub name: String,
    pub expanded: bool,
    pub items: Vec<String>,
}

impl Folder {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            expanded: true,
            items: Vec::new(),
        }
    }
}

/// One line of the flattened assets list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayRow {
    FolderHeader { name: String, expanded: bool },
    FolderItem { name: String, depth: usize },
    LooseItem { name: String },
}

impl DisplayRow {
    pub fn name(&self) -> &str {
        match self {
            DisplayRow::FolderHeader { name, .. }
            | DisplayRow::FolderItem { name, .. }
            | DisplayRow::LooseItem { name } => name,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, DisplayRow::FolderHeader { .. })
    }

    /// Text shown for this row, indenting folder items by `depth * spacing`.
    pub fn text(&self, spacing: usize) -> String {
        match self {
            DisplayRow::FolderHeader { name, expanded } => {
                let glyph = if *expanded {
                    EXPANDED_GLYPH
                } else {
                    COLLAPSED_GLYPH
                };
                format!("{glyph}{name}")
            }
            DisplayRow::FolderItem { name, depth } => {
                format!("{}- {name}", " ".repeat(depth * spacing))
            }
            DisplayRow::LooseItem { name } => name.clone(),
        }
    }
}

/// Asset folders and loose items, in insertion order.
///
/// Names are not checked for uniqueness: adding the same name twice shows
/// it twice.
#[derive(Resource, Debug, Clone)]
pub struct AssetTree {
    folders: Vec<Folder>,
    loose_items: Vec<String>,
    folder_spacing: usize,
}

impl Default for AssetTree {
    fn default() -> Self {
        Self::with_folder_spacing(FOLDER_SPACING)
    }
}

impl AssetTree {
    pub fn with_folder_spacing(folder_spacing: usize) -> Self {
        Self {
            folders: Vec::new(),
            loose_items: Vec::new(),
            folder_spacing,
        }
    }

    pub fn folder_spacing(&self) -> usize {
        self.folder_spacing
    }

    #[allow(dead_code)]
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    #[allow(dead_code)]
    pub fn folder(&self, name: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.name == name)
    }

    #[allow(dead_code)]
    pub fn loose_items(&self) -> &[String] {
        &self.loose_items
    }

    /// Add an asset, creating its folder (expanded) on first use.
    ///
    /// `None` or an empty folder name puts the item at the top level.
    pub fn add_item(&mut self, name: impl Into<String>, folder: Option<&str>) {
        let name = name.into();
        match folder.filter(|f| !f.is_empty()) {
            None => self.loose_items.push(name),
            Some(folder_name) => {
                let index = match self.folders.iter().position(|f| f.name == folder_name) {
                    Some(index) => index,
                    None => {
                        debug!("Created asset folder {:?}", folder_name);
                        self.folders.push(Folder::new(folder_name));
                        self.folders.len() - 1
                    }
                };
                self.folders[index].items.push(name);
            }
        }
    }

    /// Flip a folder between expanded and collapsed.
    ///
    /// Returns false, and changes nothing, for an unknown folder.
    pub fn toggle_folder(&mut self, name: &str) -> bool {
        match self.folders.iter_mut().find(|f| f.name == name) {
            Some(folder) => {
                folder.expanded = !folder.expanded;
                true
            }
            None => false,
        }
    }

    /// Flatten the tree into display rows.
    pub fn render(&self) -> Vec<DisplayRow> {
        let mut rows = Vec::new();
        for folder in &self.folders {
            rows.push(DisplayRow::FolderHeader {
                name: folder.name.clone(),
                expanded: folder.expanded,
            });
            if folder.expanded {
                rows.extend(folder.items.iter().map(|item| DisplayRow::FolderItem {
                    name: item.clone(),
                    depth: FOLDER_ITEM_DEPTH,
                }));
            }
        }
        rows.extend(
            self.loose_items
                .iter()
                .map(|item| DisplayRow::LooseItem { name: item.clone() }),
        );
        rows
    }
}
