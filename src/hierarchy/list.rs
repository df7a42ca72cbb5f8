//! Ordered scene objects shown in the hierarchy panel.

use bevy::prelude::*;

use super::reorder::ReorderTarget;

/// Scene object names in display order, with an optional selected row.
#[derive(Resource, Debug, Clone, Default)]
pub struct HierarchyList {
    items: Vec<String>,
    selected: Option<usize>,
}

impl HierarchyList {
    pub fn add_item(&mut self, name: impl Into<String>) {
        self.items.push(name.into());
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.items.get(i))
            .map(String::as_str)
    }

    /// Select a row. Out-of-range indices clear the selection.
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.items.len());
    }

    /// Remove the selected row, if any.
    pub fn remove_selected(&mut self) -> Option<String> {
        let index = self.selected?;
        self.remove_at(index)
    }
}

impl ReorderTarget for HierarchyList {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn row_label(&self, index: usize) -> Option<String> {
        self.items.get(index).cloned()
    }

    fn remove_at(&mut self, index: usize) -> Option<String> {
        if index >= self.items.len() {
            return None;
        }
        self.selected = match self.selected {
            Some(s) if s == index => None,
            Some(s) if s > index => Some(s - 1),
            other => other,
        };
        Some(self.items.remove(index))
    }

    fn insert_at(&mut self, index: usize, label: String) {
        let index = index.min(self.items.len());
        if let Some(s) = self.selected
            && s >= index
        {
            self.selected = Some(s + 1);
        }
        self.items.insert(index, label);
    }
}
