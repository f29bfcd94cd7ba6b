// Scroll-driven effects: parallax layers and the navbar that hides while
// scrolling down.

use crate::{dom, schedule};
use wasm_bindgen::JsValue;
use web_sys::Document;

pub const DEFAULT_SPEED: f64 = 0.5;
pub const HIDE_AFTER_PX: f64 = 100.0;

pub fn parallax_speed(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|s| s.is_finite())
        .unwrap_or(DEFAULT_SPEED)
}

pub fn parallax_transform(scroll_y: f64, speed: f64) -> String {
    format!("translateY({}px)", scroll_y * speed)
}

#[derive(Default)]
pub struct HeaderHider {
    last_y: f64,
}

impl HeaderHider {
    /// Whether the header should be hidden after scrolling to `y`.
    pub fn on_scroll(&mut self, y: f64) -> bool {
        let hidden = y > self.last_y && y > HIDE_AFTER_PX;
        self.last_y = y;
        hidden
    }
}

pub fn attach(document: &Document) -> Result<(), JsValue> {
    let layers: Vec<_> = dom::select_all_html(document, ".parallax")
        .into_iter()
        .map(|el| {
            let speed = parallax_speed(el.get_attribute("data-speed").as_deref());
            (el, speed)
        })
        .collect();
    let header = dom::select(document, ".navbar");
    if layers.is_empty() && header.is_none() {
        return Ok(());
    }

    let window = schedule::window()?;
    let mut hider = HeaderHider::default();
    let scrolled = window.clone();
    dom::listen(&window, "scroll", move |_| {
        let y = match dom::ok_or_warn("scroll offset", scrolled.scroll_y()) {
            Some(y) => y,
            None => return,
        };
        for (layer, speed) in &layers {
            dom::ok_or_warn(
                "parallax",
                layer
                    .style()
                    .set_property("transform", &parallax_transform(y, *speed)),
            );
        }
        if let Some(header) = &header {
            dom::ok_or_warn(
                "header hide",
                header.class_list().toggle_with_force("hide", hider.on_scroll(y)),
            );
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_from_attribute() {
        assert_eq!(parallax_speed(Some("0.2")), 0.2);
        assert_eq!(parallax_speed(Some("fast")), DEFAULT_SPEED);
        assert_eq!(parallax_speed(None), DEFAULT_SPEED);
    }

    #[test]
    fn translates_by_fraction_of_scroll() {
        assert_eq!(parallax_transform(400.0, 0.5), "translateY(200px)");
        assert_eq!(parallax_transform(0.0, 0.3), "translateY(0px)");
    }

    #[test]
    fn hides_only_when_scrolling_down_past_threshold() {
        let mut hider = HeaderHider::default();
        assert!(!hider.on_scroll(50.0));
        assert!(hider.on_scroll(150.0));
        assert!(hider.on_scroll(300.0));
        assert!(!hider.on_scroll(250.0));
        assert!(!hider.on_scroll(250.0));
        assert!(hider.on_scroll(260.0));
    }
}
