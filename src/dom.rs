use glam::Vec2;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|dpr| *dpr > 0.0)
        .unwrap_or(1.0)
}

/// Match the canvas backing store to its CSS box at device pixel ratio.
/// Returns the logical (CSS pixel) size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let dpr = device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    Vec2::new(rect.width() as f32, rect.height() as f32)
}

#[inline]
pub fn element_top_left(el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(rect.left() as f32, rect.top() as f32)
}

#[inline]
pub fn element_center(el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(
        (rect.left() + rect.width() / 2.0) as f32,
        (rect.top() + rect.height() / 2.0) as f32,
    )
}
