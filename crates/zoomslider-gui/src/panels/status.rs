use crate::app::ZoomSliderApp;

pub fn show(ctx: &egui::Context, app: &mut ZoomSliderApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            ui.label(app.controller.phase().to_string());
            ui.separator();
            ui.label(format!("{} selected", app.controller.selection().len()));
            if let Some(view) = app.controller.comparison() {
                ui.separator();
                ui.label(view.size.to_string());
                ui.separator();
                ui.label(format!("Divider: {:.0}%", app.swipe.split * 100.0));
            }
            ui.separator();
            ui.label(format!("Sizing: {}", app.controller.settings().sizing));
        });

        ui.add_space(2.0);
    });
}
