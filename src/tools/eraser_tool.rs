use egui::Pos2;

use crate::command::Command;
use crate::tools::Tool;

/// Removes whole strokes that have a vertex under the eraser square
#[derive(Debug, Clone, PartialEq)]
pub struct EraserTool {
    half_extent: f32,
}

impl EraserTool {
    pub fn new(half_extent: f32) -> Self {
        Self { half_extent }
    }

    fn erase_at(&self, center: Pos2) -> Command {
        Command::EraseAt {
            center,
            half_extent: self.half_extent,
        }
    }
}

impl Tool for EraserTool {
    fn name(&self) -> &'static str {
        "Eraser"
    }

    fn on_pointer_down(&mut self, pos: Pos2) -> Option<Command> {
        Some(self.erase_at(pos))
    }

    fn on_pointer_move(&mut self, pos: Pos2) -> Option<Command> {
        Some(self.erase_at(pos))
    }

    // Erasing edits the committed strokes directly, nothing to finalize
    fn on_pointer_up(&mut self) -> Option<Command> {
        None
    }

    fn on_abort(&mut self) -> Option<Command> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_every_pointer_position_is_an_erase_pass() {
        let mut eraser = EraserTool::new(20.0);
        let expected = |x, y| {
            Some(Command::EraseAt {
                center: pos2(x, y),
                half_extent: 20.0,
            })
        };
        assert_eq!(eraser.on_pointer_down(pos2(1.0, 1.0)), expected(1.0, 1.0));
        assert_eq!(eraser.on_pointer_move(pos2(2.0, 3.0)), expected(2.0, 3.0));
        assert_eq!(eraser.on_pointer_up(), None);
        assert_eq!(eraser.on_abort(), None);
    }
}
