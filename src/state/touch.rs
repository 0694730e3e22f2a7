// Pointer-drag state for the scratch card, owned by the card instance.
use crate::scratch::{GesturePhase, PointerSample};

#[derive(Default, Debug, Clone)]
pub struct TouchState {
    pub dragging: bool,
    pub last_x: f64,
    pub last_y: f64,
}

impl TouchState {
    pub fn begin(&mut self, x: f64, y: f64) -> PointerSample {
        self.dragging = true;
        self.last_x = x;
        self.last_y = y;
        PointerSample { x, y, phase: GesturePhase::Start }
    }

    /// Move sample while a drag is active; hover without a press yields nothing.
    pub fn advance(&mut self, x: f64, y: f64) -> Option<PointerSample> {
        if !self.dragging {
            return None;
        }
        self.last_x = x;
        self.last_y = y;
        Some(PointerSample { x, y, phase: GesturePhase::Move })
    }

    pub fn finish(&mut self) -> Option<PointerSample> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        Some(PointerSample { x: self.last_x, y: self.last_y, phase: GesturePhase::End })
    }
}

/// Client coordinates to surface-local ones. `rect` is the element's
/// bounding box `(left, top, width, height)` in CSS pixels; the surface may be
/// laid out at a different size than its logical `surface_w x surface_h`.
pub fn to_local(
    client_x: f64,
    client_y: f64,
    rect: (f64, f64, f64, f64),
    surface_w: f64,
    surface_h: f64,
) -> (f64, f64) {
    let (left, top, w, h) = rect;
    let sx = if w > 0.0 { surface_w / w } else { 1.0 };
    let sy = if h > 0.0 { surface_h / h } else { 1.0 };
    ((client_x - left) * sx, (client_y - top) * sy)
}
