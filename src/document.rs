use egui::{Color32, Pos2};

use crate::error::StoreError;
use crate::id_generator::StrokeId;
use crate::stroke::{MutableStroke, Stroke, StrokeRef};

/// Authoritative holder of the canvas state.
///
/// Committed strokes are kept in drawing order, which is also their z-order.
/// The pending stroke is never part of the committed sequence until
/// [`Document::commit_pending`] moves it there.
#[derive(Debug, Default)]
pub struct Document {
    strokes: Vec<StrokeRef>,
    pending: Option<MutableStroke>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a pending stroke seeded with `first_point`
    pub fn begin_stroke(
        &mut self,
        first_point: Pos2,
        color: Color32,
        thickness: f32,
    ) -> Result<StrokeId, StoreError> {
        if self.pending.is_some() {
            return Err(StoreError::PendingStrokeExists);
        }
        let stroke = MutableStroke::new(first_point, color, thickness);
        let id = stroke.id();
        self.pending = Some(stroke);
        Ok(id)
    }

    pub fn append_point(&mut self, point: Pos2) -> Result<(), StoreError> {
        let stroke = self.pending.as_mut().ok_or(StoreError::NoPendingStroke)?;
        stroke.add_point(point);
        Ok(())
    }

    /// Move the pending stroke to the end of the committed sequence.
    /// Returns `None` when nothing was pending.
    pub fn commit_pending(&mut self) -> Option<StrokeId> {
        let stroke = self.pending.take()?;
        let id = stroke.id();
        self.strokes.push(stroke.into_stroke_ref());
        Some(id)
    }

    /// Drop the pending stroke without committing it
    pub fn discard_pending(&mut self) -> Option<StrokeId> {
        self.pending.take().map(|stroke| stroke.id())
    }

    /// Remove every committed stroke matching `predicate`, keeping the
    /// relative order of the rest. The pending stroke is untouched.
    pub fn remove_strokes<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&Stroke) -> bool,
    {
        let before = self.strokes.len();
        self.strokes.retain(|stroke| !predicate(stroke));
        before - self.strokes.len()
    }

    pub fn strokes(&self) -> &[StrokeRef] {
        &self.strokes
    }

    pub fn pending(&self) -> Option<&MutableStroke> {
        self.pending.as_ref()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Reset to an empty canvas, dropping the pending stroke as well
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.pending = None;
    }
}
