// RGBA color with byte channels and a fractional alpha, the way canvas fill
// and stroke styles expect it

use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Color {
        Color { r, g, b, a }
    }

    // Cool-toned particle color: red and green in [155, 255), full blue,
    // alpha in [0.5, 1.0)
    pub fn random_cool<R: Rng>(rng: &mut R) -> Color {
        let r = (rng.gen::<f64>() * 100.0 + 155.0) as u8;
        let g = (rng.gen::<f64>() * 100.0 + 155.0) as u8;
        let a = rng.gen::<f64>() * 0.5 + 0.5;

        Color { r, g, b: 0xff, a }
    }

    pub fn with_alpha(self, a: f64) -> Color {
        Color { a, ..self }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
