//! Pointer input handling

use pitch_core::ScreenPoint;

/// Top-left corner of the canvas bounding box, if the canvas can report one
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
}

/// Bounding box usable as a transform origin, if any
pub fn usable_bounds(bounds: Option<Bounds>) -> Option<Bounds> {
    bounds.filter(|b| b.left.is_finite() && b.top.is_finite())
}

/// Origin offset for the pitch transform.
///
/// Falls back to the zero point while the canvas has no usable bounding box
/// (e.g. it is not attached to the document yet).
pub fn origin_offset(bounds: Option<Bounds>) -> ScreenPoint {
    match usable_bounds(bounds) {
        Some(b) => ScreenPoint::new(b.left, b.top),
        None => ScreenPoint::ZERO,
    }
}

/// Screen point for a pointer event's client coordinates
pub fn click_point(client_x: f64, client_y: f64) -> ScreenPoint {
    ScreenPoint::new(client_x, client_y)
}

/// Read the canvas bounding box
#[cfg(target_arch = "wasm32")]
pub fn canvas_bounds(canvas: Option<&web_sys::HtmlCanvasElement>) -> Option<Bounds> {
    let canvas = canvas?;
    if !canvas.is_connected() {
        return None;
    }
    let rect = canvas.get_bounding_client_rect();
    Some(Bounds {
        left: rect.left(),
        top: rect.top(),
    })
}
