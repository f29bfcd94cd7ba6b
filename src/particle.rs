// Simple particle struct to keep track of individual position, velocity, size, and color.
// Size and color are fixed once the particle exists.

use crate::color::Color;
use crate::config::FieldConfig;
use rand::Rng;

#[derive(Copy, Clone, Debug)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    base_vel: [f64; 2],
    size: f64,
    color: Color,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, size: f64, color: Color) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            base_vel: [vel_x, vel_y],
            size,
            color,
        }
    }

    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64, cfg: &FieldConfig) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = rng.gen::<f64>() * (cfg.max_speed - cfg.min_speed) + cfg.min_speed;
        let vel_y = rng.gen::<f64>() * (cfg.max_speed - cfg.min_speed) + cfg.min_speed;
        let size = rng.gen::<f64>() * (cfg.max_radius - cfg.min_radius) + cfg.min_radius;
        let color = Color::random_cool(rng);
        Particle::new(pos_x, pos_y, vel_x, vel_y, size, color)
    }

    /// Velocity captured at creation, the target of relaxation.
    pub fn base_vel(&self) -> [f64; 2] {
        self.base_vel
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }
}
