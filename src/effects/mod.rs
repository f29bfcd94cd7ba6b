// Decorative page behaviors around the particle field.
//
// Each module keeps its per-element state as a plain struct that can be
// driven without a browser, plus an `attach` function that finds its
// elements in the document and wires the state to timers and events.

pub mod counter;
pub mod ripple;
pub mod scroll;
pub mod terminal;
pub mod tilt;
pub mod typewriter;

use web_sys::DomRect;

/// Viewport-relative box of an element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Bounds { left, top, width, height }
    }

    pub fn from_dom(rect: &DomRect) -> Self {
        Bounds::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    /// Pointer position relative to the top-left corner.
    pub fn local(&self, point: [f64; 2]) -> [f64; 2] {
        [point[0] - self.left, point[1] - self.top]
    }
}
