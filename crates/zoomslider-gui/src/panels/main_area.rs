use std::path::Path;

use zoomslider_core::consts::APP_TITLE;
use zoomslider_core::controller::MainContent;

use crate::actions::UiAction;
use crate::app::ZoomSliderApp;

pub fn show(ctx: &egui::Context, app: &mut ZoomSliderApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(APP_TITLE);
        ui.add_space(8.0);

        match app.controller.content() {
            MainContent::Picker => {
                let actions = file_picker(ui, app);
                app.actions.extend(actions);
            }
            MainContent::Placeholder(text) => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(text);
                });
                app.ui_state.placeholder_shown = true;
                ctx.request_repaint();
            }
            MainContent::Comparison(view) => {
                egui::ScrollArea::both().show(ui, |ui| {
                    super::swipe::show(ui, view, &mut app.swipe);
                });
            }
        }
    });
}

fn file_picker(ui: &mut egui::Ui, app: &ZoomSliderApp) -> Vec<UiAction> {
    let mut actions = Vec::new();
    let dir = app.controller.images_dir();

    ui.horizontal(|ui| {
        ui.label(format!("Images in {}", dir.display()));
        if ui.small_button("Refresh").clicked() {
            actions.push(UiAction::RefreshFiles);
        }
        if ui.small_button("Browse...").clicked() {
            if let Some(paths) = rfd::FileDialog::new().set_directory(dir).pick_files() {
                actions.push(UiAction::Select(paths));
            }
        }
    });
    ui.add_space(4.0);

    if let Some(ref err) = app.ui_state.files_error {
        ui.colored_label(ui.visuals().error_fg_color, err);
    } else if app.ui_state.files.is_empty() {
        ui.weak("No files found.");
    }

    egui::Frame::group(ui.style()).show(ui, |ui| {
        egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
            for path in &app.ui_state.files {
                if let Some(action) = file_row(ui, app, path) {
                    actions.push(action);
                }
            }
        });
    });
    ui.add_space(8.0);

    if ui.button("Load images").clicked() {
        actions.push(UiAction::Load);
    }
    if let Some(err) = app.controller.last_error() {
        ui.colored_label(ui.visuals().error_fg_color, err);
    }

    actions
}

fn file_row(ui: &mut egui::Ui, app: &ZoomSliderApp, path: &Path) -> Option<UiAction> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let position = app.controller.selection().iter().position(|p| p == path);
    let mut checked = position.is_some();

    let mut action = None;
    ui.horizontal(|ui| {
        if ui.checkbox(&mut checked, name).changed() {
            action = Some(UiAction::Toggle(path.to_path_buf()));
        }
        match position {
            Some(0) => {
                ui.small("left");
            }
            Some(1) => {
                ui.small("right");
            }
            _ => {}
        }
    });
    action
}
