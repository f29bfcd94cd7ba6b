// Host timing: animation-frame loops and one-shot/repeating timers.
//
// Every closure handed to the browser is leaked with `forget`; loops and
// timers that never stop live as long as the page.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))
}

fn request_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window()?.request_animation_frame(callback.as_ref().unchecked_ref())
}

/// Runs `tick` once per display refresh, forever.
///
/// The closure reschedules itself through a shared slot, since it has to
/// exist before it can hand a reference to itself to `requestAnimationFrame`.
pub fn every_frame<F: FnMut() + 'static>(mut tick: F) -> Result<(), JsValue> {
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        tick();
        if let Some(callback) = f.borrow().as_ref() {
            if let Err(err) = request_frame(callback) {
                log::warn!("animation loop stopped: {:?}", err);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(callback) = g.borrow().as_ref() {
        request_frame(callback)?;
    }
    Ok(())
}

/// Calls `f` once after `delay_ms`.
pub fn after<F: FnOnce() + 'static>(delay_ms: i32, f: F) -> Result<(), JsValue> {
    let callback = Closure::once_into_js(f);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)?;
    Ok(())
}

/// Calls `tick` every `period_ms` until it returns `false`, then clears the
/// interval.
pub fn every<F: FnMut() -> bool + 'static>(period_ms: i32, mut tick: F) -> Result<(), JsValue> {
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let handle_in_tick = handle.clone();

    let callback = Closure::wrap(Box::new(move || {
        if tick() {
            return;
        }
        if let (Some(id), Ok(window)) = (handle_in_tick.take(), window()) {
            window.clear_interval_with_handle(id);
        }
    }) as Box<dyn FnMut()>);

    let id = window()?.set_interval_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        period_ms,
    )?;
    handle.set(Some(id));
    callback.forget();
    Ok(())
}
