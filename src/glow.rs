// Radial glow that follows the pointer. Runs on its own animation loop and
// draws wherever the pointer was last seen.

use crate::color::Color;
use crate::renderer::Surface;
use vecmath::Vector2;
use wasm_bindgen::JsValue;

pub struct PointerGlow {
    pub radius: f64,
}

impl PointerGlow {
    pub const INNER: Color = Color::rgba(0, 255, 255, 0.3);
    pub const OUTER: Color = Color::rgba(0, 255, 255, 0.0);

    pub fn new(radius: f64) -> Self {
        PointerGlow { radius }
    }

    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &S,
        pointer: Option<Vector2<f64>>,
    ) -> Result<(), JsValue> {
        match pointer {
            Some(center) => surface.radial_glow(center, self.radius, Self::INNER, Self::OUTER),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{Op, Recorder};

    #[test]
    fn draws_at_pointer() {
        let surface = Recorder::default();
        PointerGlow::new(50.0).draw(&surface, Some([12.0, 34.0])).unwrap();
        assert_eq!(surface.take(), vec![Op::Glow([12.0, 34.0], 50.0)]);
    }

    #[test]
    fn nothing_before_first_pointer_event() {
        let surface = Recorder::default();
        PointerGlow::new(50.0).draw(&surface, None).unwrap();
        assert!(surface.take().is_empty());
    }
}
