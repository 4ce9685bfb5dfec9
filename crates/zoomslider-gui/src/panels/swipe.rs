use zoomslider_core::comparison::ComparisonView;
use zoomslider_core::consts::{BACKGROUND_COLOR, SLIDER_THICKNESS};
use zoomslider_core::pane::Pane;

use crate::states::SwipeState;

const HANDLE_RADIUS: f32 = 7.0;

/// Draw the two panes overlaid, each at its own display size, with a draggable divider.
pub fn show(ui: &mut egui::Ui, view: &ComparisonView, swipe: &mut SwipeState) {
    ui.horizontal(|ui| {
        ui.small(&view.left.label);
        ui.small("|");
        ui.small(&view.right.label);
    });

    let (w, h) = view.size.pixels();
    if w == 0 || h == 0 {
        ui.weak(format!("Empty view ({})", view.size));
        return;
    }

    let size = egui::vec2(w as f32, h as f32);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
    let response = response.on_hover_cursor(egui::CursorIcon::ResizeHorizontal);

    if response.dragged() || response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            swipe.split = ((pos.x - rect.left()) / rect.width()).clamp(0.0, 1.0);
        }
    }

    let Some(ref textures) = swipe.textures else {
        return;
    };

    let split = swipe.split;
    let divider_x = rect.left() + rect.width() * split;
    let painter = ui.painter_at(rect);
    let [br, bg, bb] = BACKGROUND_COLOR;
    painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(br, bg, bb));

    let left_side = egui::Rect::from_min_max(rect.min, egui::pos2(divider_x, rect.max.y));
    let right_side = egui::Rect::from_min_max(egui::pos2(divider_x, rect.min.y), rect.max);
    paint_pane(&painter, textures.left.id(), pane_rect(rect, &view.left), left_side);
    paint_pane(&painter, textures.right.id(), pane_rect(rect, &view.right), right_side);

    let [r, g, b] = view.slider_color;
    let color = egui::Color32::from_rgb(r, g, b);
    painter.vline(
        divider_x,
        rect.y_range(),
        egui::Stroke::new(SLIDER_THICKNESS as f32, color),
    );
    painter.circle_filled(egui::pos2(divider_x, rect.center().y), HANDLE_RADIUS, color);
}

/// Screen rect of a pane at its own display size, anchored at the view's top-left.
fn pane_rect(view_rect: egui::Rect, pane: &Pane) -> egui::Rect {
    let (w, h) = pane.display.pixels();
    egui::Rect::from_min_size(view_rect.min, egui::vec2(w as f32, h as f32))
}

/// Paint the part of a pane texture that falls inside `visible`.
fn paint_pane(
    painter: &egui::Painter,
    texture: egui::TextureId,
    pane_rect: egui::Rect,
    visible: egui::Rect,
) {
    let shown = pane_rect.intersect(visible);
    if shown.width() <= 0.0 || shown.height() <= 0.0 {
        return;
    }
    let uv = egui::Rect::from_min_max(
        egui::pos2(
            (shown.left() - pane_rect.left()) / pane_rect.width(),
            (shown.top() - pane_rect.top()) / pane_rect.height(),
        ),
        egui::pos2(
            (shown.right() - pane_rect.left()) / pane_rect.width(),
            (shown.bottom() - pane_rect.top()) / pane_rect.height(),
        ),
    );
    painter.image(texture, shown, uv, egui::Color32::WHITE);
}
