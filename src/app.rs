use crate::config::CanvasConfig;
use crate::engine::DrawingEngine;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::ShapeBuffer;
use crate::tools::ToolMode;

/// Host application: toolbar on the left, drawing surface in the middle.
///
/// Only the settings are persisted on shutdown; strokes are not.
pub struct SketchApp {
    engine: DrawingEngine,
    surface: ShapeBuffer,
    input: InputHandler,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_config(CanvasConfig::default())
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = cc
            .storage
            .and_then(|storage| eframe::get_value::<CanvasConfig>(storage, eframe::APP_KEY))
            .unwrap_or_default();

        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                log::warn!("Ignoring stored settings: {err}");
                CanvasConfig::default()
            }
        };

        Self::with_config(config)
    }

    pub fn with_config(config: CanvasConfig) -> Self {
        Self {
            surface: ShapeBuffer::new(config.background),
            engine: DrawingEngine::new(config),
            input: InputHandler::new(),
        }
    }

    pub fn engine(&self) -> &DrawingEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut DrawingEngine {
        &mut self.engine
    }

    pub fn surface(&self) -> &ShapeBuffer {
        &self.surface
    }

    pub fn select_tool(&mut self, mode: ToolMode) {
        if let Err(err) = self.engine.set_tool_mode(mode) {
            log::warn!("Tool selection ignored: {err}");
        }
    }

    pub fn clear_canvas(&mut self) {
        if let Err(err) = self.engine.clear(&mut self.surface) {
            log::warn!("Canvas cleared but not repainted: {err}");
        }
    }

    /// Feed this frame's input for the canvas at `canvas_rect` to the engine
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        let mut events = Vec::new();
        events.extend(self.input.set_canvas_rect(canvas_rect));
        events.extend(self.input.process_input(ctx));

        for event in &events {
            if let Err(err) = self.engine.handle_event(event, &mut self.surface) {
                log::warn!("Could not paint {event:?}: {err}");
            }
        }
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.engine.settings());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
