use zoomslider_core::consts::{DEFAULT_RASTER_RESOLUTION, REQUIRED_SELECTION};
use zoomslider_core::settings::SizingPolicy;

use crate::actions::UiAction;
use crate::app::ZoomSliderApp;

const SIDEBAR_WIDTH: f32 = 260.0;
const RESET_FILL: egui::Color32 = egui::Color32::from_rgb(200, 50, 50);

pub fn show(ctx: &egui::Context, app: &mut ZoomSliderApp) {
    egui::SidePanel::left("sidebar")
        .default_width(SIDEBAR_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(SIDEBAR_WIDTH - 20.0);

                ui.heading("File Selection");
                ui.label(format!("Upload {REQUIRED_SELECTION} files to start."));
                ui.add_space(8.0);

                ui.group(|ui| settings_box(ui, app));
                ui.add_space(8.0);

                let reset = egui::Button::new(
                    egui::RichText::new("Reset").color(egui::Color32::WHITE),
                )
                .fill(RESET_FILL);
                if ui.add(reset).clicked() {
                    app.push_action(UiAction::Reset);
                }
            });
        });
}

fn settings_box(ui: &mut egui::Ui, app: &mut ZoomSliderApp) {
    super::section_header(ui, "Settings");
    let settings = app.controller.settings_mut();

    super::enum_combo(ui, "Sizing", &mut settings.sizing, &SizingPolicy::ALL);

    ui.horizontal(|ui| {
        ui.label("Display height:");
        ui.add(egui::DragValue::new(&mut settings.display_height).suffix(" px"));
    });

    if settings.sizing == SizingPolicy::IndependentDimensions {
        ui.horizontal(|ui| {
            ui.label("Display width:");
            ui.add(egui::DragValue::new(&mut settings.display_width).suffix(" px"));
        });
    }

    let mut rasterize = settings.raster_resolution.is_some();
    if ui.checkbox(&mut rasterize, "Raster resolution").changed() {
        settings.raster_resolution = rasterize.then_some(DEFAULT_RASTER_RESOLUTION);
    }
    if let Some(ref mut resolution) = settings.raster_resolution {
        ui.add(egui::DragValue::new(resolution).suffix(" px"));
    } else {
        ui.small("Source resolution");
    }
}
