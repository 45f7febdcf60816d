use egui::{Color32, Pos2};

use crate::document::Document;
use crate::error::StoreError;

/// Mutations a tool asks the engine to apply to the document
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Start a pending stroke at the gesture's first point
    BeginStroke {
        at: Pos2,
        color: Color32,
        thickness: f32,
    },
    /// Extend the pending stroke
    AppendPoint { to: Pos2 },
    /// Move the pending stroke into the committed sequence
    CommitStroke,
    DiscardStroke,
    /// Remove every committed stroke with a vertex inside the eraser square
    EraseAt { center: Pos2, half_extent: f32 },
}

/// What the surface needs after a command ran
#[derive(Debug, Clone, PartialEq)]
pub enum PaintRequest {
    None,
    /// Draw one incremental segment; `from == to` is a dot
    Segment {
        from: Pos2,
        to: Pos2,
        color: Color32,
        thickness: f32,
    },
    /// Clear and redraw every committed stroke
    Full,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::BeginStroke { .. } => "BeginStroke",
            Command::AppendPoint { .. } => "AppendPoint",
            Command::CommitStroke => "CommitStroke",
            Command::DiscardStroke => "DiscardStroke",
            Command::EraseAt { .. } => "EraseAt",
        }
    }

    pub fn execute(&self, document: &mut Document) -> Result<PaintRequest, StoreError> {
        match self {
            Command::BeginStroke {
                at,
                color,
                thickness,
            } => {
                let id = document.begin_stroke(*at, *color, *thickness)?;
                log::debug!("Began stroke {id} at {at:?}");
                Ok(PaintRequest::Segment {
                    from: *at,
                    to: *at,
                    color: *color,
                    thickness: *thickness,
                })
            }
            Command::AppendPoint { to } => {
                let from = document
                    .pending()
                    .map(|stroke| stroke.last_point())
                    .ok_or(StoreError::NoPendingStroke)?;
                document.append_point(*to)?;
                let (color, thickness) = document
                    .pending()
                    .map(|stroke| (stroke.color(), stroke.thickness()))
                    .ok_or(StoreError::NoPendingStroke)?;
                Ok(PaintRequest::Segment {
                    from,
                    to: *to,
                    color,
                    thickness,
                })
            }
            Command::CommitStroke => {
                if let Some(id) = document.commit_pending() {
                    log::debug!("Committed stroke {id} ({} on canvas)", document.len());
                }
                Ok(PaintRequest::None)
            }
            Command::DiscardStroke => {
                if let Some(id) = document.discard_pending() {
                    log::debug!("Discarded stroke {id}");
                }
                Ok(PaintRequest::None)
            }
            Command::EraseAt {
                center,
                half_extent,
            } => {
                let removed =
                    document.remove_strokes(|stroke| stroke.hit_by_eraser(*center, *half_extent));
                if removed == 0 {
                    Ok(PaintRequest::None)
                } else {
                    log::debug!("Erased {removed} stroke(s) at {center:?}");
                    Ok(PaintRequest::Full)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_begin_requests_a_dot() {
        let mut doc = Document::new();
        let request = Command::BeginStroke {
            at: pos2(4.0, 4.0),
            color: Color32::BLACK,
            thickness: 3.0,
        }
        .execute(&mut doc)
        .unwrap();

        assert_eq!(
            request,
            PaintRequest::Segment {
                from: pos2(4.0, 4.0),
                to: pos2(4.0, 4.0),
                color: Color32::BLACK,
                thickness: 3.0,
            }
        );
        assert!(doc.has_pending());
    }

    #[test]
    fn test_append_requests_segment_from_previous_point() {
        let mut doc = Document::new();
        doc.begin_stroke(pos2(0.0, 0.0), Color32::RED, 5.0).unwrap();
        doc.append_point(pos2(10.0, 0.0)).unwrap();

        let request = Command::AppendPoint { to: pos2(10.0, 10.0) }
            .execute(&mut doc)
            .unwrap();
        assert_eq!(
            request,
            PaintRequest::Segment {
                from: pos2(10.0, 0.0),
                to: pos2(10.0, 10.0),
                color: Color32::RED,
                thickness: 5.0,
            }
        );
    }

    #[test]
    fn test_append_without_pending_fails() {
        let mut doc = Document::new();
        assert_eq!(
            Command::AppendPoint { to: pos2(1.0, 1.0) }.execute(&mut doc),
            Err(StoreError::NoPendingStroke)
        );
    }

    #[test]
    fn test_erase_miss_requests_nothing() {
        let mut doc = Document::new();
        doc.begin_stroke(pos2(0.0, 0.0), Color32::BLACK, 1.0).unwrap();
        doc.commit_pending();

        let request = Command::EraseAt {
            center: pos2(500.0, 500.0),
            half_extent: 20.0,
        }
        .execute(&mut doc)
        .unwrap();
        assert_eq!(request, PaintRequest::None);
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_erase_hit_requests_full_repaint() {
        let mut doc = Document::new();
        doc.begin_stroke(pos2(0.0, 0.0), Color32::BLACK, 1.0).unwrap();
        doc.commit_pending();

        let request = Command::EraseAt {
            center: pos2(5.0, 5.0),
            half_extent: 20.0,
        }
        .execute(&mut doc)
        .unwrap();
        assert_eq!(request, PaintRequest::Full);
        assert!(doc.is_empty());
    }
}
