use web_sys::{HtmlCanvasElement, PointerEvent};

use crate::types::Point;

/// Convert a pointer event's client coordinates into canvas-local ones
pub fn client_to_canvas_coords(event: &PointerEvent, canvas: &HtmlCanvasElement) -> Point {
    let rect = canvas.get_bounding_client_rect();
    let x = (event.client_x() as f64 - rect.left()).round();
    let y = (event.client_y() as f64 - rect.top()).round();
    Point::new(x, y)
}

/// Clamp a popup's top-left corner so a popup of the given size stays fully
/// inside the viewport
pub fn clamp_to_viewport(anchor: Point, width: f64, height: f64) -> Point {
    let window = web_sys::window().expect("no window");
    let max_x = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
        - width;
    let max_y = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
        - height;
    Point::new(
        anchor.x.clamp(0.0, max_x.max(0.0)),
        anchor.y.clamp(0.0, max_y.max(0.0)),
    )
}
