use eframe_sketch::{CanvasConfig, DrawingEngine, RecordingSurface, StrokeId, ToolMode};
use egui::pos2;
use proptest::prelude::*;

proptest! {
    #[test]
    fn erase_pass_keeps_order_of_untouched_strokes(
        points in prop::collection::vec((0.0f32..400.0, 0.0f32..400.0), 1..30),
        eraser in (0.0f32..400.0, 0.0f32..400.0),
    ) {
        let mut engine = DrawingEngine::new(CanvasConfig::default());
        let mut surface = RecordingSurface::default();

        // One dot stroke per point
        let mut ids: Vec<StrokeId> = Vec::new();
        for &(x, y) in &points {
            engine.pointer_down(pos2(x, y), &mut surface).unwrap();
            engine.pointer_up(&mut surface).unwrap();
            ids.push(engine.document().strokes().last().unwrap().id());
        }

        let (ex, ey) = eraser;
        let expected: Vec<StrokeId> = ids
            .iter()
            .zip(&points)
            .filter(|(_, (x, y))| !((x - ex).abs() < 20.0 && (y - ey).abs() < 20.0))
            .map(|(id, _)| *id)
            .collect();

        engine.set_tool_mode(ToolMode::Erase).unwrap();
        engine.pointer_down(pos2(ex, ey), &mut surface).unwrap();
        engine.pointer_up(&mut surface).unwrap();

        let remaining: Vec<StrokeId> = engine.document().strokes().iter().map(|s| s.id()).collect();
        prop_assert_eq!(remaining, expected);
    }
}
