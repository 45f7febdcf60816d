use egui::{Color32, Pos2, Vec2};

use crate::command::{Command, PaintRequest};
use crate::config::CanvasConfig;
use crate::document::Document;
use crate::error::{EngineError, RenderError, StoreError};
use crate::input::InputEvent;
use crate::renderer::{Renderer, Surface};
use crate::state::EditorState;
use crate::tools::{Tool, ToolMode, ToolType};

/// Turns pointer gestures into stroke store updates and paint operations.
///
/// Pen moves paint one segment each. A full repaint only happens on mount,
/// resize, reset, aborted pen gestures, and erase passes that removed ink.
///
/// Render failures never roll back document changes: the canvas state stays
/// authoritative and the next full repaint catches the surface up.
#[derive(Debug)]
pub struct DrawingEngine {
    document: Document,
    state: EditorState,
    tool_mode: ToolMode,
    config: CanvasConfig,
    renderer: Renderer,
}

impl Default for DrawingEngine {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl DrawingEngine {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            document: Document::new(),
            state: EditorState::Idle,
            tool_mode: config.initial_tool,
            config,
            renderer: Renderer::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Settings to persist, with the current toolbar selection as the initial tool
    pub fn settings(&self) -> CanvasConfig {
        CanvasConfig {
            initial_tool: self.tool_mode,
            ..self.config.clone()
        }
    }

    pub fn tool_mode(&self) -> ToolMode {
        self.tool_mode
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing()
    }

    /// Tool switches are only allowed between gestures
    pub fn can_switch_tool(&self) -> bool {
        self.state.is_idle()
    }

    pub fn set_tool_mode(&mut self, mode: ToolMode) -> Result<(), EngineError> {
        if let Some(active) = self.state.gesture_mode() {
            if active != mode {
                return Err(EngineError::ToolBusy {
                    active: active.name(),
                });
            }
        }
        if self.tool_mode != mode {
            log::info!("Tool changed: {} -> {}", self.tool_mode.name(), mode.name());
            self.tool_mode = mode;
        }
        Ok(())
    }

    /// Applies to strokes started after the change
    pub fn set_pen_color(&mut self, color: Color32) {
        self.config.pen_color = color;
    }

    /// Applies to strokes started after the change
    pub fn set_pen_width(&mut self, width: f32) {
        if width.is_finite() && width > 0.0 {
            self.config.pen_width = width;
        }
    }

    pub fn set_eraser_half_extent(&mut self, half_extent: f32) {
        if half_extent.is_finite() && half_extent > 0.0 {
            self.config.eraser_half_extent = half_extent;
        }
    }

    /// Dispatch one host event
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        surface: &mut dyn Surface,
    ) -> Result<(), RenderError> {
        match *event {
            InputEvent::PointerDown { pos } => self.pointer_down(pos, surface),
            InputEvent::PointerMove { pos } => self.pointer_move(pos, surface),
            InputEvent::PointerUp { .. } | InputEvent::PointerLeave => {
                self.pointer_up(surface)
            }
            InputEvent::Resize { size } => self.resize(size, surface),
            InputEvent::Abort => self.abort_gesture(surface),
        }
    }

    /// Initial paint of the committed strokes
    pub fn mount(&mut self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        self.repaint(surface)
    }

    pub fn pointer_down(&mut self, pos: Pos2, surface: &mut dyn Surface) -> Result<(), RenderError> {
        if self.state.is_drawing() {
            log::debug!("Ignoring pointer down at {pos:?}: gesture already active");
            return Ok(());
        }

        let mut tool = ToolType::for_mode(self.tool_mode, &self.config);
        log::debug!("Gesture started with {} at {pos:?}", tool.name());
        let command = tool.on_pointer_down(pos);
        self.state = EditorState::Drawing { tool };
        self.run(command, surface)
    }

    pub fn pointer_move(&mut self, pos: Pos2, surface: &mut dyn Surface) -> Result<(), RenderError> {
        let Some(tool) = self.state.active_tool_mut() else {
            return Ok(());
        };
        let command = tool.on_pointer_move(pos);
        self.run(command, surface)
    }

    /// Ends the gesture on pointer release or when the pointer leaves the surface
    pub fn pointer_up(&mut self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        let Some(mut tool) = self.state.finish() else {
            return Ok(());
        };
        log::debug!("Gesture finished with {}", tool.name());
        let command = tool.on_pointer_up();
        self.run(command, surface)
    }

    /// Drop the gesture in progress without committing anything.
    ///
    /// Ink already painted for a discarded stroke is wiped by a full repaint.
    pub fn abort_gesture(&mut self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        let Some(mut tool) = self.state.finish() else {
            return Ok(());
        };
        log::debug!("Gesture aborted with {}", tool.name());
        match tool.on_abort() {
            Some(command) => {
                self.run(Some(command), surface)?;
                self.repaint(surface)
            }
            None => Ok(()),
        }
    }

    /// Recreate the backing store at `size` and repaint committed strokes.
    ///
    /// A pending stroke keeps its points and the gesture carries on; only its
    /// already painted ink is lost with the old backing store.
    pub fn resize(&mut self, size: Vec2, surface: &mut dyn Surface) -> Result<(), RenderError> {
        log::debug!("Surface resized to {size:?}");
        self.renderer
            .resize(surface, size, self.document.strokes())
            .map(|_| ())
            .inspect_err(|err| log::warn!("Repaint after resize failed: {err}"))
    }

    /// Reset the canvas to empty, ending any gesture
    pub fn clear(&mut self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        self.state = EditorState::Idle;
        self.document.clear();
        log::info!("Canvas cleared");
        self.repaint(surface)
    }

    pub fn repaint(&mut self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        self.renderer
            .full_repaint(surface, self.document.strokes())
            .map(|_| ())
            .inspect_err(|err| log::warn!("Full repaint failed: {err}"))
    }

    fn run(&mut self, command: Option<Command>, surface: &mut dyn Surface) -> Result<(), RenderError> {
        let Some(command) = command else {
            return Ok(());
        };

        let request = match command.execute(&mut self.document) {
            Ok(request) => request,
            Err(err) => {
                invariant_violation(command.name(), err);
                return Ok(());
            }
        };

        match request {
            PaintRequest::None => Ok(()),
            PaintRequest::Segment {
                from,
                to,
                color,
                thickness,
            } => self
                .renderer
                .paint_segment(surface, from, to, color, thickness)
                .inspect_err(|err| log::warn!("Incremental paint failed: {err}")),
            PaintRequest::Full => self.repaint(surface),
        }
    }
}

/// Store invariant breaches are state machine bugs: loud in debug builds,
/// logged and skipped in release builds.
fn invariant_violation(command: &str, err: StoreError) {
    log::error!("{command} violated a stroke store invariant: {err}");
    if cfg!(debug_assertions) {
        panic!("{command} violated a stroke store invariant: {err}");
    }
}
