use egui::{Color32, Pos2};
use std::sync::Arc;

use crate::id_generator::{self, StrokeId};

// Immutable stroke for sharing
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    id: StrokeId,
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
}

// Mutable stroke for the gesture in progress
#[derive(Debug, Clone, PartialEq)]
pub struct MutableStroke {
    id: StrokeId,
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
}

// Define a reference-counted type alias for Stroke
pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    pub fn id(&self) -> StrokeId {
        self.id
    }

    /// Points in drawing order; never empty
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// A stroke whose points all coincide has no extent and renders as a dot
    pub fn is_dot(&self) -> bool {
        let first = self.points[0];
        self.points.iter().all(|p| *p == first)
    }

    /// Square eraser test against the stroke's vertices.
    ///
    /// Only vertices are considered, so an eraser placed between two
    /// far-apart points of a fast stroke does not hit it.
    pub fn hit_by_eraser(&self, center: Pos2, half_extent: f32) -> bool {
        self.points.iter().any(|p| {
            (p.x - center.x).abs() < half_extent && (p.y - center.y).abs() < half_extent
        })
    }
}

impl MutableStroke {
    /// Start a new stroke at `first_point`
    pub fn new(first_point: Pos2, color: Color32, thickness: f32) -> Self {
        let mut points = Vec::with_capacity(64);
        points.push(first_point);
        Self {
            id: id_generator::generate_id(),
            points,
            color,
            thickness,
        }
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    // Add a point to the mutable stroke
    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    /// The most recently added point
    pub fn last_point(&self) -> Pos2 {
        // `new` always seeds one point and points are never removed
        self.points[self.points.len() - 1]
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Freeze into an immutable stroke, moving the point buffer
    pub fn into_stroke_ref(self) -> StrokeRef {
        Arc::new(Stroke {
            id: self.id,
            points: self.points,
            color: self.color,
            thickness: self.thickness,
        })
    }
}

#[cfg(test)]
pub(crate) fn stroke_from_points(points: &[Pos2], color: Color32, thickness: f32) -> StrokeRef {
    let mut stroke = MutableStroke::new(points[0], color, thickness);
    for point in &points[1..] {
        stroke.add_point(*point);
    }
    stroke.into_stroke_ref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_new_stroke_has_first_point() {
        let stroke = MutableStroke::new(pos2(1.0, 2.0), Color32::BLACK, 3.0);
        assert_eq!(stroke.points(), &[pos2(1.0, 2.0)]);
        assert_eq!(stroke.last_point(), pos2(1.0, 2.0));
    }

    #[test]
    fn test_freeze_keeps_style_and_points() {
        let mut stroke = MutableStroke::new(pos2(0.0, 0.0), Color32::RED, 4.5);
        stroke.add_point(pos2(5.0, 5.0));
        let id = stroke.id();

        let frozen = stroke.into_stroke_ref();
        assert_eq!(frozen.id(), id);
        assert_eq!(frozen.points(), &[pos2(0.0, 0.0), pos2(5.0, 5.0)]);
        assert_eq!(frozen.color(), Color32::RED);
        assert_eq!(frozen.thickness(), 4.5);
        assert!(!frozen.is_dot());
    }

    #[test]
    fn test_repeated_point_is_still_a_dot() {
        let single = stroke_from_points(&[pos2(50.0, 50.0)], Color32::BLACK, 3.0);
        let repeated = stroke_from_points(&[pos2(50.0, 50.0), pos2(50.0, 50.0)], Color32::BLACK, 3.0);
        let moved = stroke_from_points(&[pos2(50.0, 50.0), pos2(50.0, 51.0)], Color32::BLACK, 3.0);
        assert!(single.is_dot());
        assert!(repeated.is_dot());
        assert!(!moved.is_dot());
    }

    #[test]
    fn test_eraser_hit_is_strict_square() {
        let stroke = stroke_from_points(&[pos2(100.0, 100.0)], Color32::BLACK, 2.0);

        // Corner of the square, farther than E by euclidean distance
        assert!(stroke.hit_by_eraser(pos2(119.0, 119.0), 20.0));
        // Exactly E away on one axis is outside
        assert!(!stroke.hit_by_eraser(pos2(120.0, 100.0), 20.0));
        assert!(!stroke.hit_by_eraser(pos2(100.0, 80.0), 20.0));
    }

    #[test]
    fn test_eraser_ignores_segment_interiors() {
        let stroke = stroke_from_points(
            &[pos2(0.0, 0.0), pos2(200.0, 0.0)],
            Color32::BLACK,
            2.0,
        );
        // Midpoint of the segment lies on the ink but not near a vertex
        assert!(!stroke.hit_by_eraser(pos2(100.0, 0.0), 20.0));
    }
}
