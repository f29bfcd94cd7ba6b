// 3D tilt toward the pointer while it hovers a card.

use super::Bounds;
use crate::dom;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, MouseEvent};

pub const MAX_TILT_DEG: f64 = 10.0;
pub const PERSPECTIVE_PX: f64 = 1000.0;

/// `(rotate_x, rotate_y)` in degrees for a pointer over `bounds`. The top edge
/// leans toward the pointer when it is above center, the right edge when it
/// is right of center.
pub fn tilt_angles(bounds: &Bounds, pointer: [f64; 2]) -> (f64, f64) {
    let half_w = bounds.width / 2.0;
    let half_h = bounds.height / 2.0;
    if half_w <= 0.0 || half_h <= 0.0 {
        return (0.0, 0.0);
    }
    let [x, y] = bounds.local(pointer);
    let dx = ((x - half_w) / half_w).max(-1.0).min(1.0);
    let up = ((half_h - y) / half_h).max(-1.0).min(1.0);
    (up * MAX_TILT_DEG, dx * MAX_TILT_DEG)
}

pub fn tilt_transform(bounds: &Bounds, pointer: [f64; 2]) -> String {
    let (rotate_x, rotate_y) = tilt_angles(bounds, pointer);
    format!(
        "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg)",
        PERSPECTIVE_PX, rotate_x, rotate_y
    )
}

pub fn attach(document: &Document) -> Result<(), JsValue> {
    for card in dom::select_all_html(document, ".tilt") {
        let target = card.clone();
        dom::listen(&card, "mousemove", move |event| {
            let event = match event.dyn_ref::<MouseEvent>() {
                Some(event) => event,
                None => return,
            };
            let bounds = Bounds::from_dom(&target.get_bounding_client_rect());
            let pointer = [event.client_x() as f64, event.client_y() as f64];
            dom::ok_or_warn(
                "tilt",
                target
                    .style()
                    .set_property("transform", &tilt_transform(&bounds, pointer)),
            );
        })?;

        let target = card.clone();
        dom::listen(&card, "mouseleave", move |_| {
            dom::ok_or_warn("tilt reset", target.style().remove_property("transform"));
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Bounds = Bounds {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn flat_at_center() {
        let (rx, ry) = tilt_angles(&CARD, [200.0, 100.0]);
        assert_eq!(rx, 0.0);
        assert_eq!(ry, 0.0);
    }

    #[test]
    fn corners_reach_the_limit() {
        assert_eq!(tilt_angles(&CARD, [100.0, 50.0]), (MAX_TILT_DEG, -MAX_TILT_DEG));
        assert_eq!(tilt_angles(&CARD, [300.0, 150.0]), (-MAX_TILT_DEG, MAX_TILT_DEG));
    }

    #[test]
    fn outside_the_card_is_clamped() {
        assert_eq!(tilt_angles(&CARD, [1000.0, -1000.0]), (MAX_TILT_DEG, MAX_TILT_DEG));
    }

    #[test]
    fn zero_sized_element_does_not_tilt() {
        let flat = Bounds::new(0.0, 0.0, 0.0, 40.0);
        assert_eq!(tilt_angles(&flat, [5.0, 5.0]), (0.0, 0.0));
    }

    #[test]
    fn transform_string() {
        assert_eq!(
            tilt_transform(&CARD, [250.0, 100.0]),
            "perspective(1000px) rotateX(0.00deg) rotateY(5.00deg)"
        );
    }
}
