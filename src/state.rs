//! Per-gesture state machine of the drawing engine.
//!
//! ```text
//!   ┌──────────┐  pointer down   ┌───────────────────┐
//!   │   Idle   ├─────────────────►  Drawing { tool }  │
//!   │          ◄─────────────────┤                   │
//!   └──────────┘  up/leave/abort └───────────────────┘
//! ```
//!
//! The tool is captured when the gesture starts, so the toolbar selection
//! cannot change the behavior of a gesture that is already running.

use crate::tools::{Tool, ToolMode, ToolType};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditorState {
    /// No active gesture
    #[default]
    Idle,
    /// A pointer gesture is in progress with `tool`
    Drawing { tool: ToolType },
}

impl EditorState {
    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, EditorState::Drawing { .. })
    }

    /// Tool mode of the running gesture, if any
    pub fn gesture_mode(&self) -> Option<ToolMode> {
        match self {
            EditorState::Drawing { tool } => Some(tool.mode()),
            EditorState::Idle => None,
        }
    }

    pub fn active_tool_mut(&mut self) -> Option<&mut ToolType> {
        match self {
            EditorState::Drawing { tool } => Some(tool),
            EditorState::Idle => None,
        }
    }

    /// Leave the drawing state, handing back the gesture's tool
    pub fn finish(&mut self) -> Option<ToolType> {
        match std::mem::take(self) {
            EditorState::Drawing { tool } => Some(tool),
            EditorState::Idle => None,
        }
    }

    pub fn current_state_name(&self) -> &'static str {
        match self {
            EditorState::Idle => "Idle",
            EditorState::Drawing { tool } => tool.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::EraserTool;

    #[test]
    fn test_finish_returns_tool_and_goes_idle() {
        let mut state = EditorState::Drawing {
            tool: ToolType::Eraser(EraserTool::new(20.0)),
        };
        assert!(state.is_drawing());
        assert_eq!(state.gesture_mode(), Some(ToolMode::Erase));
        assert_eq!(state.current_state_name(), "Eraser");

        let tool = state.finish();
        assert!(matches!(tool, Some(ToolType::Eraser(_))));
        assert!(state.is_idle());
        assert_eq!(state.finish(), None);
    }
}
