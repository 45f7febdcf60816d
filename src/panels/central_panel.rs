use crate::SketchApp;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        // The canvas fills the remaining space
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, egui::Sense::drag());
        let canvas_rect = response.rect;

        // Handle input before painting so this frame shows the latest ink
        app.handle_canvas_input(ctx, canvas_rect);

        app.surface().paint(&painter, canvas_rect.min);

        if app.engine().is_drawing() {
            ctx.request_repaint();
        }
    });
}
