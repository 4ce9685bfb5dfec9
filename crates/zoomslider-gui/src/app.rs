use zoomslider_core::comparison::ComparisonView;
use zoomslider_core::controller::ViewerController;
use zoomslider_core::pane::Pane;

use crate::actions::UiAction;
use crate::convert::pane_to_color_image;
use crate::panels;
use crate::states::{ComparisonTextures, SwipeState, UIState};

pub struct ZoomSliderApp {
    pub controller: ViewerController,
    pub ui_state: UIState,
    pub swipe: SwipeState,
    pub actions: Vec<UiAction>,
}

impl ZoomSliderApp {
    pub fn new(controller: ViewerController) -> Self {
        let mut app = Self {
            controller,
            ui_state: UIState::default(),
            swipe: SwipeState::default(),
            actions: Vec::new(),
        };
        app.refresh_files();
        app
    }

    pub fn push_action(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    fn apply_actions(&mut self, ctx: &egui::Context) {
        for action in std::mem::take(&mut self.actions) {
            match action {
                UiAction::Toggle(path) => self.controller.toggle(&path),
                UiAction::Select(paths) => {
                    let rejected = self.controller.select_in_dir(paths);
                    for path in rejected {
                        self.ui_state.add_log(format!(
                            "Ignored {}: not a file in {}",
                            path.display(),
                            self.controller.images_dir().display()
                        ));
                    }
                }
                UiAction::RefreshFiles => self.refresh_files(),
                UiAction::Load => {
                    self.swipe.clear();
                    self.controller.begin_load();
                    self.ui_state.pending_load = true;
                    self.ui_state.placeholder_shown = false;
                    ctx.request_repaint();
                }
                UiAction::Reset => {
                    self.controller.reset();
                    self.swipe.clear();
                    self.ui_state.pending_load = false;
                    self.ui_state.placeholder_shown = false;
                }
            }
        }
    }

    /// Run the conversion once the placeholder has been on screen for a frame.
    fn finish_pending_load(&mut self, ctx: &egui::Context) {
        if !(self.ui_state.pending_load && self.ui_state.placeholder_shown) {
            return;
        }
        self.ui_state.pending_load = false;
        self.ui_state.placeholder_shown = false;

        match self.controller.finish_load() {
            Ok(view) => {
                self.ui_state.add_log(format!(
                    "Loaded {} | {} ({})",
                    view.left.label, view.right.label, view.size
                ));
                self.swipe.textures = upload_textures(ctx, view);
            }
            Err(e) => {
                self.ui_state.add_log(format!("ERROR: {e}"));
            }
        }
    }

    fn refresh_files(&mut self) {
        match self.controller.available_files() {
            Ok(files) => {
                self.ui_state.files = files;
                self.ui_state.files_error = None;
            }
            Err(e) => {
                tracing::warn!(
                    dir = %self.controller.images_dir().display(),
                    "cannot list images: {e}"
                );
                self.ui_state.files.clear();
                self.ui_state.files_error = Some(e.to_string());
            }
        }
    }
}

fn upload_textures(ctx: &egui::Context, view: &ComparisonView) -> Option<ComparisonTextures> {
    Some(ComparisonTextures {
        left: upload_pane(ctx, "swipe-left", &view.left)?,
        right: upload_pane(ctx, "swipe-right", &view.right)?,
    })
}

fn upload_pane(ctx: &egui::Context, name: &str, pane: &Pane) -> Option<egui::TextureHandle> {
    let image = pane_to_color_image(pane);
    if image.size[0] == 0 || image.size[1] == 0 {
        return None;
    }
    Some(ctx.load_texture(name, image, egui::TextureOptions::NEAREST))
}

impl eframe::App for ZoomSliderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.finish_pending_load(ctx);

        panels::sidebar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::main_area::show(ctx, self);

        self.apply_actions(ctx);
    }
}
