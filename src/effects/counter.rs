// Stat counters that count up to their `data-target` once scrolled into view.

use crate::{dom, schedule};
use wasm_bindgen::JsValue;
use web_sys::Document;

pub const TICK_MS: i32 = 30;
const STEPS: f64 = 100.0;

#[derive(Clone, Debug, PartialEq)]
pub enum CounterFrame {
    Running(String),
    Done(String),
}

pub struct Counter {
    target: f64,
    increment: f64,
    current: f64,
    suffix: char,
}

impl Counter {
    pub fn new(target: f64) -> Self {
        // -0 would print with its sign
        let target = target + 0.0;
        Counter {
            target,
            increment: target / STEPS,
            current: 0.0,
            suffix: Counter::suffix_for(target),
        }
    }

    // Missing, blank or non-numeric attributes count as 0
    pub fn from_attribute(raw: Option<&str>) -> Self {
        let target = raw
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|t| t.is_finite())
            .unwrap_or(0.0);
        Counter::new(target)
    }

    // Percentages are the two stats that read as shares
    pub fn suffix_for(target: f64) -> char {
        if target == 95.0 || target == 30.0 {
            '%'
        } else {
            '+'
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn tick(&mut self) -> CounterFrame {
        self.current += self.increment;
        if self.current >= self.target {
            CounterFrame::Done(format!("{}{}", self.target, self.suffix))
        } else {
            CounterFrame::Running(format!("{}{}", self.current.floor(), self.suffix))
        }
    }
}

pub fn attach(document: &Document) -> Result<(), JsValue> {
    let counters = dom::select_all(document, ".stat-number");
    log::debug!("{} counters", counters.len());
    dom::on_visible(&counters, 0.5, true, |element| {
        let mut counter = Counter::from_attribute(element.get_attribute("data-target").as_deref());
        let started = schedule::every(TICK_MS, move || match counter.tick() {
            CounterFrame::Running(text) => {
                element.set_text_content(Some(&text));
                true
            }
            CounterFrame::Done(text) => {
                element.set_text_content(Some(&text));
                false
            }
        });
        if let Err(err) = started {
            log::warn!("counter timer failed: {:?}", err);
        }
    })
}
