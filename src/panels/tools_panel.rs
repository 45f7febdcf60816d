use crate::SketchApp;
use crate::tools::ToolMode;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            // Tool buttons are disabled while a gesture is running
            let can_switch = app.engine().can_switch_tool();
            let active = app.engine().tool_mode();
            ui.horizontal(|ui| {
                for (mode, label) in [(ToolMode::Pen, "🖊 Pen"), (ToolMode::Erase, "🧹 Erase")] {
                    let button = egui::SelectableLabel::new(active == mode, label);
                    if ui.add_enabled(can_switch, button).clicked() {
                        log::info!("Tool selected from UI: {}", mode.name());
                        app.select_tool(mode);
                    }
                }
            });

            ui.separator();

            let mut color = app.engine().config().pen_color;
            ui.horizontal(|ui| {
                ui.label("Color:");
                egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                );
            });
            if color != app.engine().config().pen_color {
                app.engine_mut().set_pen_color(color);
            }

            let mut width = app.engine().config().pen_width;
            ui.horizontal(|ui| {
                ui.label("Width:");
                ui.add(egui::Slider::new(&mut width, 1.0..=50.0));
            });
            app.engine_mut().set_pen_width(width);

            let mut half_extent = app.engine().config().eraser_half_extent;
            ui.horizontal(|ui| {
                ui.label("Eraser:");
                ui.add(egui::Slider::new(&mut half_extent, 2.0..=100.0));
            });
            app.engine_mut().set_eraser_half_extent(half_extent);

            ui.separator();

            if ui.add_enabled(can_switch, egui::Button::new("Clear")).clicked() {
                app.clear_canvas();
            }

            ui.label(format!("Strokes: {}", app.engine().document().len()));
            ui.label(format!("State: {}", app.engine().state().current_state_name()));
            ui.label(format!(
                "Last repaint: {:.2} ms",
                app.engine().renderer().last_repaint_secs() * 1000.0
            ));
        });
}
