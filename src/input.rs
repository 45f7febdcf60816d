use egui::{Context, PointerButton, Pos2, Rect, Vec2};

/// Events the drawing engine consumes from its host.
///
/// Positions are in surface-local coordinates: (0, 0) is the top-left
/// corner of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown { pos: Pos2 },
    /// Pointer moved over the canvas
    PointerMove { pos: Pos2 },
    /// Primary button released
    PointerUp { pos: Pos2 },
    /// Pointer left the canvas
    PointerLeave,
    /// Canvas changed size; the backing store must be recreated
    Resize { size: Vec2 },
    /// The host invalidated the gesture (e.g. the window lost focus)
    Abort,
}

impl InputEvent {
    /// Helper for events that carry a pointer position
    pub fn position(&self) -> Option<Pos2> {
        match self {
            InputEvent::PointerDown { pos }
            | InputEvent::PointerMove { pos }
            | InputEvent::PointerUp { pos } => Some(*pos),
            _ => None,
        }
    }
}

/// Handles converting raw egui input into our domain-specific InputEvents
#[derive(Debug)]
pub struct InputHandler {
    canvas_rect: Rect,
    pointer_inside: bool,
    last_size: Option<Vec2>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            canvas_rect: Rect::NOTHING,
            pointer_inside: false,
            last_size: None,
        }
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    /// Update the canvas rectangle, returning a resize event when its size changed
    pub fn set_canvas_rect(&mut self, rect: Rect) -> Option<InputEvent> {
        self.canvas_rect = rect;
        let size = rect.size();
        if self.last_size == Some(size) {
            return None;
        }
        self.last_size = Some(size);
        Some(InputEvent::Resize { size })
    }

    fn to_local(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Process this frame's egui input
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        ctx.input(|input| self.process_events(&input.events))
    }

    /// Convert raw events in delivery order.
    ///
    /// Every `PointerMoved` is forwarded, not just the final hover position
    /// of the frame, so no intermediate point is dropped.
    pub fn process_events(&mut self, raw: &[egui::Event]) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in raw {
            match event {
                egui::Event::PointerMoved(pos) => {
                    if self.canvas_rect.contains(*pos) {
                        self.pointer_inside = true;
                        events.push(InputEvent::PointerMove {
                            pos: self.to_local(*pos),
                        });
                    } else if self.pointer_inside {
                        self.pointer_inside = false;
                        events.push(InputEvent::PointerLeave);
                    }
                }
                egui::Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    if *pressed {
                        if self.canvas_rect.contains(*pos) {
                            self.pointer_inside = true;
                            events.push(InputEvent::PointerDown {
                                pos: self.to_local(*pos),
                            });
                        }
                    } else {
                        events.push(InputEvent::PointerUp {
                            pos: self.to_local(*pos),
                        });
                    }
                }
                egui::Event::PointerGone => {
                    if self.pointer_inside {
                        self.pointer_inside = false;
                        events.push(InputEvent::PointerLeave);
                    }
                }
                egui::Event::WindowFocused(false) => {
                    events.push(InputEvent::Abort);
                }
                _ => {}
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2, Modifiers};

    fn handler() -> InputHandler {
        let mut handler = InputHandler::new();
        handler.set_canvas_rect(Rect::from_min_size(pos2(100.0, 50.0), vec2(400.0, 300.0)));
        handler
    }

    fn press(x: f32, y: f32, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos: pos2(x, y),
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn test_resize_only_when_size_changes() {
        let mut handler = InputHandler::new();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(640.0, 480.0));
        assert_eq!(
            handler.set_canvas_rect(rect),
            Some(InputEvent::Resize {
                size: vec2(640.0, 480.0)
            })
        );
        assert_eq!(handler.set_canvas_rect(rect), None);
        // Moving the canvas without resizing it is not a resize
        assert_eq!(handler.set_canvas_rect(rect.translate(vec2(10.0, 0.0))), None);
    }

    #[test]
    fn test_gesture_is_translated_to_local_coordinates() {
        let mut handler = handler();
        let events = handler.process_events(&[
            press(110.0, 60.0, true),
            egui::Event::PointerMoved(pos2(120.0, 60.0)),
            egui::Event::PointerMoved(pos2(120.0, 70.0)),
            press(120.0, 70.0, false),
        ]);

        assert_eq!(
            events,
            vec![
                InputEvent::PointerDown { pos: pos2(10.0, 10.0) },
                InputEvent::PointerMove { pos: pos2(20.0, 10.0) },
                InputEvent::PointerMove { pos: pos2(20.0, 20.0) },
                InputEvent::PointerUp { pos: pos2(20.0, 20.0) },
            ]
        );
    }

    #[test]
    fn test_leaving_the_canvas_emits_leave_once() {
        let mut handler = handler();
        let events = handler.process_events(&[
            egui::Event::PointerMoved(pos2(150.0, 100.0)),
            egui::Event::PointerMoved(pos2(10.0, 10.0)),
            egui::Event::PointerMoved(pos2(5.0, 5.0)),
            egui::Event::PointerGone,
        ]);

        assert_eq!(
            events,
            vec![
                InputEvent::PointerMove { pos: pos2(50.0, 50.0) },
                InputEvent::PointerLeave,
            ]
        );
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut handler = handler();
        let events = handler.process_events(&[press(5.0, 5.0, true)]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_focus_loss_aborts() {
        let mut handler = handler();
        let events = handler.process_events(&[egui::Event::WindowFocused(false)]);
        assert_eq!(events, vec![InputEvent::Abort]);
        assert_eq!(InputEvent::Abort.position(), None);
    }
}
