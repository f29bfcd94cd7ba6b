// Drawing surface the simulation renders into. The browser implementation wraps
// a 2d canvas context; tests substitute a recorder.

use crate::color::Color;
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub trait Surface {
    fn clear(&self, width: f64, height: f64);
    fn line(&self, from: [f64; 2], to: [f64; 2], line_width: f64, color: Color);
    fn disc(&self, center: [f64; 2], radius: f64, color: Color) -> Result<(), JsValue>;
    // Filled circle shading from `inner` at the center to `outer` at the rim
    fn radial_glow(
        &self,
        center: [f64; 2],
        radius: f64,
        inner: Color,
        outer: Color,
    ) -> Result<(), JsValue>;
}

pub struct Renderer {
    pub context: CanvasRenderingContext2d,
}

impl Renderer {
    // Grabs the 2d context of the given canvas
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or("2d canvas context unavailable")?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Renderer { context })
    }
}

impl Surface for Renderer {
    fn clear(&self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn line(&self, from: [f64; 2], to: [f64; 2], line_width: f64, color: Color) {
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.set_stroke_style_str(&color.to_css());
        self.context.set_line_width(line_width);
        self.context.stroke();
    }

    fn disc(&self, center: [f64; 2], radius: f64, color: Color) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context.arc(center[0], center[1], radius, 0.0, PI * 2.0)?;
        self.context.set_fill_style_str(&color.to_css());
        self.context.fill();
        Ok(())
    }

    fn radial_glow(
        &self,
        center: [f64; 2],
        radius: f64,
        inner: Color,
        outer: Color,
    ) -> Result<(), JsValue> {
        let [x, y] = center;
        let gradient = self
            .context
            .create_radial_gradient(x, y, 0.0, x, y, radius)?;
        gradient.add_color_stop(0.0, &inner.to_css())?;
        gradient.add_color_stop(1.0, &outer.to_css())?;
        self.context.set_fill_style_canvas_gradient(&gradient);
        self.context.begin_path();
        self.context.arc(x, y, radius, 0.0, PI * 2.0)?;
        self.context.fill();
        Ok(())
    }
}

#[cfg(test)]
pub mod recording {
    use super::*;
    use std::cell::RefCell;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Op {
        Clear(f64, f64),
        Line([f64; 2], [f64; 2], Color),
        Disc([f64; 2], f64, Color),
        Glow([f64; 2], f64),
    }

    #[derive(Default)]
    pub struct Recorder {
        pub ops: RefCell<Vec<Op>>,
    }

    impl Recorder {
        pub fn take(&self) -> Vec<Op> {
            self.ops.replace(Vec::new())
        }
    }

    impl Surface for Recorder {
        fn clear(&self, width: f64, height: f64) {
            self.ops.borrow_mut().push(Op::Clear(width, height));
        }

        fn line(&self, from: [f64; 2], to: [f64; 2], _line_width: f64, color: Color) {
            self.ops.borrow_mut().push(Op::Line(from, to, color));
        }

        fn disc(&self, center: [f64; 2], radius: f64, color: Color) -> Result<(), JsValue> {
            self.ops.borrow_mut().push(Op::Disc(center, radius, color));
            Ok(())
        }

        fn radial_glow(
            &self,
            center: [f64; 2],
            radius: f64,
            _inner: Color,
            _outer: Color,
        ) -> Result<(), JsValue> {
            self.ops.borrow_mut().push(Op::Glow(center, radius));
            Ok(())
        }
    }
}
