// src/renderer.rs
use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke as EguiStroke, Vec2};

use crate::error::RenderError;
use crate::stroke::StrokeRef;
use crate::util::time;

/// Backing store the renderer paints into.
///
/// Coordinates are surface-local. A zero-length segment must still leave a
/// visible dot of the given thickness.
pub trait Surface {
    /// Whether the drawable context can accept paint operations right now
    fn is_available(&self) -> bool;

    fn size(&self) -> Vec2;

    /// Recreate the backing store at `size`, dropping its contents.
    ///
    /// Must work on an unavailable surface: a zero-sized store only becomes
    /// available through this call.
    fn resize(&mut self, size: Vec2);

    fn clear(&mut self);

    fn draw_segment(&mut self, from: Pos2, to: Pos2, color: Color32, thickness: f32);

    fn draw_polyline(&mut self, points: &[Pos2], color: Color32, thickness: f32);
}

/// Issues paint operations for strokes against a [`Surface`]
#[derive(Debug, Default)]
pub struct Renderer {
    full_repaints: u64,
    last_repaint_secs: f64,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint one incremental segment without touching the rest of the surface
    pub fn paint_segment(
        &mut self,
        surface: &mut dyn Surface,
        from: Pos2,
        to: Pos2,
        color: Color32,
        thickness: f32,
    ) -> Result<(), RenderError> {
        ensure_available(surface)?;
        surface.draw_segment(from, to, color, thickness);
        Ok(())
    }

    /// Clear the surface and redraw every stroke in order with its own style.
    ///
    /// Returns the number of strokes drawn.
    pub fn full_repaint(
        &mut self,
        surface: &mut dyn Surface,
        strokes: &[StrokeRef],
    ) -> Result<usize, RenderError> {
        ensure_available(surface)?;
        let started = time::current_time_secs();

        surface.clear();
        for stroke in strokes {
            let points = stroke.points();
            if stroke.is_dot() {
                surface.draw_segment(points[0], points[0], stroke.color(), stroke.thickness());
            } else {
                surface.draw_polyline(points, stroke.color(), stroke.thickness());
            }
        }

        self.full_repaints += 1;
        self.last_repaint_secs = time::current_time_secs() - started;
        log::debug!(
            "Full repaint #{}: {} strokes in {:.3} ms",
            self.full_repaints,
            strokes.len(),
            self.last_repaint_secs * 1000.0
        );
        Ok(strokes.len())
    }

    /// Recreate the backing store and repaint the committed strokes into it.
    ///
    /// Recreating the store is the host's job and not a paint operation, so it
    /// happens even when the surface is unavailable. The repaint that follows
    /// still fails fast if the new store cannot be drawn into.
    pub fn resize(
        &mut self,
        surface: &mut dyn Surface,
        size: Vec2,
        strokes: &[StrokeRef],
    ) -> Result<usize, RenderError> {
        surface.resize(size);
        self.full_repaint(surface, strokes)
    }

    pub fn full_repaint_count(&self) -> u64 {
        self.full_repaints
    }

    /// Wall time of the most recent full repaint
    pub fn last_repaint_secs(&self) -> f64 {
        self.last_repaint_secs
    }
}

fn ensure_available(surface: &dyn Surface) -> Result<(), RenderError> {
    if surface.is_available() {
        Ok(())
    } else {
        Err(RenderError::SurfaceUnavailable)
    }
}

/// One retained primitive of the [`ShapeBuffer`], in surface-local coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum InkShape {
    Dot {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    Line {
        points: Vec<Pos2>,
        stroke: EguiStroke,
    },
}

impl InkShape {
    /// Convert to an egui shape positioned at `offset`
    fn to_shape(&self, offset: Vec2) -> Shape {
        match self {
            InkShape::Dot {
                center,
                radius,
                color,
            } => Shape::circle_filled(*center + offset, *radius, *color),
            InkShape::Line { points, stroke } if points.len() == 2 => {
                Shape::line_segment([points[0] + offset, points[1] + offset], *stroke)
            }
            InkShape::Line { points, stroke } => {
                Shape::line(points.iter().map(|p| *p + offset).collect(), *stroke)
            }
        }
    }
}

/// Retained ink acting as the canvas backing store.
///
/// egui redraws every frame, so incremental paint appends to this list and a
/// full repaint rebuilds it. The list is submitted each frame by [`ShapeBuffer::paint`].
#[derive(Debug, Clone)]
pub struct ShapeBuffer {
    shapes: Vec<InkShape>,
    size: Vec2,
    background: Color32,
}

impl ShapeBuffer {
    pub fn new(background: Color32) -> Self {
        Self {
            shapes: Vec::new(),
            size: Vec2::ZERO,
            background,
        }
    }

    pub fn shapes(&self) -> &[InkShape] {
        &self.shapes
    }

    /// Submit the backing store with its top-left corner at `origin`
    pub fn paint(&self, painter: &Painter, origin: Pos2) {
        let rect = Rect::from_min_size(origin, self.size);
        painter.rect_filled(rect, 0.0, self.background);
        let offset = origin.to_vec2();
        painter.extend(self.shapes.iter().map(|shape| shape.to_shape(offset)));
    }
}

impl Surface for ShapeBuffer {
    fn is_available(&self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn resize(&mut self, size: Vec2) {
        self.size = size;
        self.shapes = Vec::new();
    }

    fn clear(&mut self) {
        self.shapes.clear();
    }

    fn draw_segment(&mut self, from: Pos2, to: Pos2, color: Color32, thickness: f32) {
        if from == to {
            self.shapes.push(InkShape::Dot {
                center: from,
                radius: thickness / 2.0,
                color,
            });
        } else {
            self.shapes.push(InkShape::Line {
                points: vec![from, to],
                stroke: EguiStroke::new(thickness, color),
            });
        }
    }

    fn draw_polyline(&mut self, points: &[Pos2], color: Color32, thickness: f32) {
        // egui tessellates a zero-length line to nothing
        if !points.is_empty() && points.iter().all(|p| *p == points[0]) {
            self.draw_segment(points[0], points[0], color, thickness);
            return;
        }
        self.shapes.push(InkShape::Line {
            points: points.to_vec(),
            stroke: EguiStroke::new(thickness, color),
        });
    }
}

/// One operation recorded by [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    Resize(Vec2),
    Clear,
    Segment {
        from: Pos2,
        to: Pos2,
        color: Color32,
        thickness: f32,
    },
    Polyline {
        points: Vec<Pos2>,
        color: Color32,
        thickness: f32,
    },
}

/// Surface that records every operation instead of drawing.
///
/// Useful for headless hosts and for asserting on what was painted.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    ops: Vec<PaintOp>,
    size: Vec2,
    available: bool,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(Vec2::new(800.0, 600.0))
    }
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            ops: Vec::new(),
            size,
            available: true,
        }
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<PaintOp> {
        std::mem::take(&mut self.ops)
    }

    /// Operations issued after the most recent clear (or all of them)
    pub fn visible_ops(&self) -> &[PaintOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, PaintOp::Clear | PaintOp::Resize(_)))
            .map_or(0, |i| i + 1);
        &self.ops[start..]
    }

    pub fn clear_count(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, PaintOp::Clear)).count()
    }
}

impl Surface for RecordingSurface {
    fn is_available(&self) -> bool {
        self.available
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn resize(&mut self, size: Vec2) {
        self.size = size;
        self.ops.push(PaintOp::Resize(size));
    }

    fn clear(&mut self) {
        self.ops.push(PaintOp::Clear);
    }

    fn draw_segment(&mut self, from: Pos2, to: Pos2, color: Color32, thickness: f32) {
        self.ops.push(PaintOp::Segment {
            from,
            to,
            color,
            thickness,
        });
    }

    fn draw_polyline(&mut self, points: &[Pos2], color: Color32, thickness: f32) {
        self.ops.push(PaintOp::Polyline {
            points: points.to_vec(),
            color,
            thickness,
        });
    }
}
