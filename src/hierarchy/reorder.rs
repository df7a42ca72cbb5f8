//! Drag-to-reorder gesture for a vertical list.
//!
//! [`ReorderDrag`] is driven by three pointer events:
//!
//! - [`ReorderDrag::begin`] on press over a row
//! - [`ReorderDrag::drag_to`] while the button is held
//! - [`ReorderDrag::release`] on button up, which commits the move
//!
//! The list geometry comes from a [`RowLocator`] and the list contents from a
//! [`ReorderTarget`], so the gesture can be exercised without a window.

use bevy::prelude::*;

use crate::constants::DRAG_GHOST_OFFSET;

/// Maps vertical positions to row indices.
pub trait RowLocator {
    /// Row directly under `y`, or `None` when `y` misses every row.
    fn row_at(&self, y: f32) -> Option<usize>;

    /// Row closest to `y`, clamped to the first/last row.
    /// `None` only when there are no rows.
    fn nearest_row(&self, y: f32) -> Option<usize>;
}

/// Equal-height rows stacked downward from `top`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformRows {
    pub top: f32,
    pub row_height: f32,
    pub len: usize,
}

impl UniformRows {
    /// Vertical center of row `index`.
    pub fn row_center(&self, index: usize) -> f32 {
        self.top + (index as f32 + 0.5) * self.row_height
    }

    fn offset_rows(&self, y: f32) -> f32 {
        if self.row_height <= 0.0 {
            return 0.0;
        }
        ((y - self.top) / self.row_height).floor()
    }
}

impl RowLocator for UniformRows {
    fn row_at(&self, y: f32) -> Option<usize> {
        if self.len == 0 || y < self.top {
            return None;
        }
        let row = self.offset_rows(y) as usize;
        (row < self.len).then_some(row)
    }

    fn nearest_row(&self, y: f32) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let row = self.offset_rows(y).max(0.0) as usize;
        Some(row.min(self.len - 1))
    }
}

/// Ordered labels that a drag can rearrange.
pub trait ReorderTarget {
    fn len(&self) -> usize;
    fn row_label(&self, index: usize) -> Option<String>;
    fn remove_at(&mut self, index: usize) -> Option<String>;
    /// Insert `label` at `index`; `index == len()` appends.
    fn insert_at(&mut self, index: usize, label: String);
}

/// The row picked up by an in-progress drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub source_index: usize,
    pub source_label: String,
    pub hover_index: Option<usize>,
}

/// Floating label that follows the cursor while dragging.
#[derive(Debug, Clone, PartialEq)]
pub struct GhostToken {
    pub label: String,
    pub position: Vec2,
}

/// A committed move of one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reorder {
    pub from: usize,
    pub to: usize,
    pub label: String,
}

/// What a release did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropOutcome {
    /// The move, or `None` when dropped back on the source row
    pub reorder: Option<Reorder>,
    /// Whether a ghost existed and was destroyed by this release
    #[allow(dead_code)]
    pub ghost_released: bool,
}

/// Drag-to-reorder state for one list.
#[derive(Resource, Debug, Clone)]
pub struct ReorderDrag {
    session: Option<DragSession>,
    highlighted: Option<usize>,
    ghost: Option<GhostToken>,
    ghost_offset: Vec2,
}

impl Default for ReorderDrag {
    fn default() -> Self {
        Self::with_ghost_offset(Vec2::new(DRAG_GHOST_OFFSET.0, DRAG_GHOST_OFFSET.1))
    }
}

impl ReorderDrag {
    pub fn with_ghost_offset(ghost_offset: Vec2) -> Self {
        Self {
            session: None,
            highlighted: None,
            ghost: None,
            ghost_offset,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Row currently painted as the drop target.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn ghost(&self) -> Option<&GhostToken> {
        self.ghost.as_ref()
    }

    /// Pick up the row under `y`.
    ///
    /// Ignored while a drag is already in progress. Returns whether a new
    /// session started.
    pub fn begin(
        &mut self,
        rows: &impl RowLocator,
        list: &impl ReorderTarget,
        y: f32,
    ) -> bool {
        if self.session.is_some() {
            return false;
        }
        let Some(source_index) = rows.row_at(y) else {
            return false;
        };
        let Some(source_label) = list.row_label(source_index) else {
            return false;
        };

        debug!("Drag started on row {} ({:?})", source_index, source_label);
        self.session = Some(DragSession {
            source_index,
            source_label,
            hover_index: None,
        });
        true
    }

    /// Track the cursor: update the hover row, its highlight and the ghost.
    pub fn drag_to(&mut self, rows: &impl RowLocator, cursor: Vec2) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        if let Some(hover) = rows.nearest_row(cursor.y)
            && session.hover_index != Some(hover)
        {
            session.hover_index = Some(hover);
            self.highlighted = (hover != session.source_index).then_some(hover);
        }

        let position = cursor + self.ghost_offset;
        match self.ghost.as_mut() {
            Some(ghost) => ghost.position = position,
            None => {
                self.ghost = Some(GhostToken {
                    label: session.source_label.clone(),
                    position,
                });
            }
        }
    }

    /// Drop the dragged row at the row nearest `y` and end the session.
    ///
    /// Returns `None` when no drag was in progress.
    pub fn release(
        &mut self,
        rows: &impl RowLocator,
        list: &mut impl ReorderTarget,
        y: f32,
    ) -> Option<DropOutcome> {
        let session = self.session.take()?;
        self.highlighted = None;
        let ghost_released = self.ghost.take().is_some();

        let target = rows.nearest_row(y).or(session.hover_index);
        let reorder = match target {
            Some(to) if to != session.source_index => {
                list.remove_at(session.source_index).map(|_| {
                    let to = to.min(list.len());
                    list.insert_at(to, session.source_label.clone());
                    Reorder {
                        from: session.source_index,
                        to,
                        label: session.source_label,
                    }
                })
            }
            _ => None,
        };

        if let Some(reorder) = &reorder {
            debug!(
                "Moved {:?} from row {} to row {}",
                reorder.label, reorder.from, reorder.to
            );
        }

        Some(DropOutcome {
            reorder,
            ghost_released,
        })
    }
}
