use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::config::CanvasConfig;

/// Tool selected on the toolbar; exactly one is active at a time
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolMode {
    #[default]
    Pen,
    Erase,
}

impl ToolMode {
    pub fn name(self) -> &'static str {
        match self {
            ToolMode::Pen => "Pen",
            ToolMode::Erase => "Erase",
        }
    }
}

/// Tool trait translates one gesture's pointer events into document commands.
///
/// A tool instance lives for a single gesture: it is created from the
/// toolbar selection at pointer-down and dropped when the gesture ends.
pub trait Tool {
    fn name(&self) -> &'static str;

    /// Handle pointer press on the canvas; this starts the gesture.
    fn on_pointer_down(&mut self, pos: Pos2) -> Option<Command>;

    /// Handle pointer movement while the gesture is active.
    fn on_pointer_move(&mut self, pos: Pos2) -> Option<Command>;

    /// Handle pointer release or the pointer leaving the surface.
    fn on_pointer_up(&mut self) -> Option<Command>;

    /// The gesture was interrupted; undo any provisional document state.
    fn on_abort(&mut self) -> Option<Command>;
}

// Tool implementations
mod eraser_tool;
mod pen_tool;

pub use eraser_tool::EraserTool;
pub use pen_tool::PenTool;

/// Enum representing all available tool types
/// This allows us to avoid using Box<dyn Tool> and simplifies memory management
#[derive(Debug, Clone, PartialEq)]
pub enum ToolType {
    Pen(PenTool),
    Eraser(EraserTool),
}

impl ToolType {
    /// Instantiate the tool for `mode` using the current settings
    pub fn for_mode(mode: ToolMode, config: &CanvasConfig) -> Self {
        match mode {
            ToolMode::Pen => Self::Pen(PenTool::new(config.pen_color, config.pen_width)),
            ToolMode::Erase => Self::Eraser(EraserTool::new(config.eraser_half_extent)),
        }
    }

    pub fn mode(&self) -> ToolMode {
        match self {
            Self::Pen(_) => ToolMode::Pen,
            Self::Eraser(_) => ToolMode::Erase,
        }
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Pen(tool) => tool.name(),
            Self::Eraser(tool) => tool.name(),
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2) -> Option<Command> {
        match self {
            Self::Pen(tool) => tool.on_pointer_down(pos),
            Self::Eraser(tool) => tool.on_pointer_down(pos),
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2) -> Option<Command> {
        match self {
            Self::Pen(tool) => tool.on_pointer_move(pos),
            Self::Eraser(tool) => tool.on_pointer_move(pos),
        }
    }

    fn on_pointer_up(&mut self) -> Option<Command> {
        match self {
            Self::Pen(tool) => tool.on_pointer_up(),
            Self::Eraser(tool) => tool.on_pointer_up(),
        }
    }

    fn on_abort(&mut self) -> Option<Command> {
        match self {
            Self::Pen(tool) => tool.on_abort(),
            Self::Eraser(tool) => tool.on_abort(),
        }
    }
}
