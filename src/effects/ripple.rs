// Click ripple on buttons: a circle centered on the click, as large as the
// button's longer side, removed once its CSS animation has played.

use super::Bounds;
use crate::{dom, schedule};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, MouseEvent};

pub const RIPPLE_MS: i32 = 600;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ripple {
    pub left: f64,
    pub top: f64,
    pub size: f64,
}

impl Ripple {
    pub fn at(bounds: &Bounds, click: [f64; 2]) -> Ripple {
        let size = bounds.width.max(bounds.height);
        let [x, y] = bounds.local(click);
        Ripple {
            left: x - size / 2.0,
            top: y - size / 2.0,
            size,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {left}px; top: {top}px;",
            size = self.size,
            left = self.left,
            top = self.top
        )
    }
}

fn spawn(document: &Document, button: &Element, event: &MouseEvent) -> Result<(), JsValue> {
    let bounds = Bounds::from_dom(&button.get_bounding_client_rect());
    let ripple = Ripple::at(&bounds, [event.client_x() as f64, event.client_y() as f64]);

    let span = document.create_element("span")?;
    span.set_class_name("ripple");
    span.set_attribute("style", &ripple.style())?;
    button.append_child(&span)?;
    schedule::after(RIPPLE_MS, move || span.remove())
}

pub fn attach(document: &Document) -> Result<(), JsValue> {
    for button in dom::select_all(document, ".btn") {
        let document = document.clone();
        let target = button.clone();
        dom::listen(&button, "click", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                if let Err(err) = spawn(&document, &target, event) {
                    log::warn!("ripple failed: {:?}", err);
                }
            }
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_on_click_and_sized_to_longer_side() {
        let button = Bounds::new(10.0, 20.0, 120.0, 40.0);
        let ripple = Ripple::at(&button, [70.0, 40.0]);
        assert_eq!(ripple.size, 120.0);
        assert_eq!(ripple.left, 0.0);
        assert_eq!(ripple.top, -40.0);
    }

    #[test]
    fn style_sets_box() {
        let ripple = Ripple {
            left: 5.5,
            top: -3.0,
            size: 48.0,
        };
        assert_eq!(
            ripple.style(),
            "width: 48px; height: 48px; left: 5.5px; top: -3px;"
        );
    }
}
