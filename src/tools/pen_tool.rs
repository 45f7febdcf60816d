use egui::{Color32, Pos2};

use crate::command::Command;
use crate::tools::Tool;

/// Freehand ink; style is fixed for the whole gesture
#[derive(Debug, Clone, PartialEq)]
pub struct PenTool {
    color: Color32,
    thickness: f32,
}

impl PenTool {
    pub fn new(color: Color32, thickness: f32) -> Self {
        Self { color, thickness }
    }
}

impl Tool for PenTool {
    fn name(&self) -> &'static str {
        "Pen"
    }

    fn on_pointer_down(&mut self, pos: Pos2) -> Option<Command> {
        Some(Command::BeginStroke {
            at: pos,
            color: self.color,
            thickness: self.thickness,
        })
    }

    fn on_pointer_move(&mut self, pos: Pos2) -> Option<Command> {
        Some(Command::AppendPoint { to: pos })
    }

    fn on_pointer_up(&mut self) -> Option<Command> {
        Some(Command::CommitStroke)
    }

    fn on_abort(&mut self) -> Option<Command> {
        Some(Command::DiscardStroke)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_pen_gesture_commands() {
        let mut pen = PenTool::new(Color32::BLACK, 3.0);
        assert_eq!(
            pen.on_pointer_down(pos2(1.0, 2.0)),
            Some(Command::BeginStroke {
                at: pos2(1.0, 2.0),
                color: Color32::BLACK,
                thickness: 3.0,
            })
        );
        assert_eq!(
            pen.on_pointer_move(pos2(3.0, 4.0)),
            Some(Command::AppendPoint { to: pos2(3.0, 4.0) })
        );
        assert_eq!(pen.on_pointer_up(), Some(Command::CommitStroke));
        assert_eq!(pen.on_abort(), Some(Command::DiscardStroke));
    }
}
