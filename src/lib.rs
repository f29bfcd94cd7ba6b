mod utils;

pub mod color;
pub mod config;
pub mod dom;
pub mod effects;
pub mod field;
pub mod glow;
pub mod page;
pub mod particle;
pub mod renderer;
pub mod schedule;

pub use config::FieldConfig;
pub use field::{connection_alpha, ParticleField};

use wasm_bindgen::prelude::*;
use web_sys::console;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    // A second call finds the logger already installed
    console_log::init_with_level(log::Level::Info).ok();
}

/// Attaches the particle canvas and every page effect to the current
/// document. `config_json` overrides any of the particle field settings.
#[wasm_bindgen]
pub fn mount(config_json: Option<String>) -> Result<(), JsValue> {
    let _timer = Timer::new("landing::mount");
    let cfg = match config_json {
        Some(json) => FieldConfig::from_json(&json)
            .map_err(|err| JsValue::from_str(&format!("invalid particle config: {}", err)))?,
        None => FieldConfig::default(),
    };
    page::mount(cfg)
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}
