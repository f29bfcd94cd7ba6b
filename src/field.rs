// Particle field simulation.
//
// A `ParticleField` is the whole simulation context: the fixed particle
// set, the surface bounds and the last known pointer position. Each call to
// `ParticleField::frame` runs one display refresh worth of work:
//
// 1. clear the surface,
// 2. draw connection lines between every pair closer than
//    `connect_distance` (O(n²), fine for about a hundred particles),
// 3. steer each particle toward the pointer or relax it back to its
//    creation velocity,
// 4. integrate and bounce off the edges,
// 5. draw the particles.
//
// Bouncing flips the sign of the offending velocity component and leaves the
// position alone, so a particle may sit slightly outside the bounds for a
// frame before it turns around.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::renderer::Surface;
use crate::color::Color;
use rand::Rng;
use vecmath::Vector2;
use wasm_bindgen::JsValue;

const CONNECTION_COLOR: Color = Color::rgba(100, 180, 255, 1.0);
const CONNECTION_WIDTH: f64 = 0.5;

/// Opacity of a connection line between two particles `distance` apart.
///
/// Falls linearly from `peak` at distance 0 to exactly 0 at `threshold`, and
/// stays 0 beyond it.
pub fn connection_alpha(distance: f64, threshold: f64, peak: f64) -> f64 {
    if distance >= threshold {
        0.0
    } else {
        peak * (threshold - distance) / threshold
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub alpha: f64,
}

pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    pointer: Option<Vector2<f64>>,
    cfg: FieldConfig,
}

impl ParticleField {
    pub fn new<R: Rng>(width: f64, height: f64, cfg: FieldConfig, rng: &mut R) -> Self {
        let particles = (0..cfg.particle_count)
            .map(|_| Particle::random(rng, width, height, &cfg))
            .collect();
        ParticleField::with_particles(width, height, cfg, particles)
    }

    pub fn with_particles(width: f64, height: f64, cfg: FieldConfig, particles: Vec<Particle>) -> Self {
        ParticleField {
            width,
            height,
            particles,
            pointer: None,
            cfg,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> Option<Vector2<f64>> {
        self.pointer
    }

    pub fn config(&self) -> &FieldConfig {
        &self.cfg
    }

    /// New surface bounds. Particles keep their positions; anything now
    /// outside turns around on its next bounce check.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Some([x, y]);
    }

    pub fn connections(&self) -> Vec<Connection> {
        let threshold = self.cfg.connect_distance;
        let mut out = Vec::new();
        for a in 0..self.particles.len() {
            for b in (a + 1)..self.particles.len() {
                let delta = vecmath::vec2_sub(self.particles[a].pos, self.particles[b].pos);
                let distance = vecmath::vec2_len(delta);
                if distance < threshold {
                    out.push(Connection {
                        a,
                        b,
                        alpha: connection_alpha(distance, threshold, self.cfg.connect_peak_alpha),
                    });
                }
            }
        }
        out
    }

    /// Advances every particle by one frame.
    pub fn step(&mut self) {
        let cfg = &self.cfg;
        let pointer = self.pointer;
        for particle in &mut self.particles {
            if cfg.attraction {
                steer(particle, pointer, cfg);
            }
            particle.pos = vecmath::vec2_add(particle.pos, particle.vel);
            if particle.pos[0] < 0.0 || particle.pos[0] > self.width {
                particle.vel[0] *= -1.0;
            }
            if particle.pos[1] < 0.0 || particle.pos[1] > self.height {
                particle.vel[1] *= -1.0;
            }
        }
    }

    /// One animation frame: clear, connect, step, draw.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &S) -> Result<(), JsValue> {
        surface.clear(self.width, self.height);
        if self.cfg.connections {
            self.draw_connections(surface);
        }
        self.step();
        self.draw_particles(surface)
    }

    fn draw_connections<S: Surface + ?Sized>(&self, surface: &S) {
        for c in self.connections() {
            surface.line(
                self.particles[c.a].pos,
                self.particles[c.b].pos,
                CONNECTION_WIDTH,
                CONNECTION_COLOR.with_alpha(c.alpha),
            );
        }
    }

    fn draw_particles<S: Surface + ?Sized>(&self, surface: &S) -> Result<(), JsValue> {
        for p in &self.particles {
            surface.disc(p.pos, p.size(), p.color())?;
        }
        Ok(())
    }
}

// Pull toward the pointer inside the attraction radius, otherwise ease back
// toward the creation velocity. A particle exactly on the pointer has no
// direction to be pulled in and is left as is.
fn steer(particle: &mut Particle, pointer: Option<Vector2<f64>>, cfg: &FieldConfig) {
    if let Some(pointer) = pointer {
        let to_pointer = vecmath::vec2_sub(pointer, particle.pos);
        let distance = vecmath::vec2_len(to_pointer);
        if distance < cfg.attract_radius {
            if distance > 0.0 {
                let force = (cfg.attract_radius - distance) / cfg.attract_radius * cfg.attract_strength;
                let dir = vecmath::vec2_scale(to_pointer, 1.0 / distance);
                particle.vel = vecmath::vec2_add(particle.vel, vecmath::vec2_scale(dir, force));
            }
            return;
        }
    }
    let error = vecmath::vec2_sub(particle.base_vel(), particle.vel);
    particle.vel = vecmath::vec2_add(particle.vel, vecmath::vec2_scale(error, cfg.relax_rate));
}
