use zoomslider_core::pane::Pane;

/// Convert a pane's raster to an egui ColorImage at raster resolution.
pub fn pane_to_color_image(pane: &Pane) -> egui::ColorImage {
    let rgba = pane.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}
