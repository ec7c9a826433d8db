use glam::Vec2;
use web_sys as web;

/// Convert viewport (client) coordinates into coordinates local to an element
/// whose top-left corner sits at `origin`.
#[inline]
pub fn client_to_local(client: Vec2, origin: Vec2) -> Vec2 {
    client - origin
}

#[inline]
pub fn mouse_client(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Client position of the first active touch, if any.
#[inline]
pub fn first_touch_client(ev: &web::TouchEvent) -> Option<Vec2> {
    ev.touches()
        .get(0)
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

/// Parse a numeric `data-*` attribute value, falling back when missing or malformed.
#[inline]
pub fn parse_attr_f32(raw: Option<&str>, fallback: f32) -> f32 {
    raw.and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(fallback)
}
