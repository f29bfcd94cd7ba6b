// Attaches every behavior to the landing page.
//
// The particle field is shared between four callbacks through one
// `Rc<RefCell<ParticleField>>`: the pointer listener writes the pointer, the
// resize listener writes the bounds, and two independent animation loops
// (field and glow) read and step it. All of them run on the page's single
// event loop, so a borrow never outlives the callback that took it and the
// two loops interleave only between callbacks.

use crate::config::FieldConfig;
use crate::effects::{counter, ripple, scroll, terminal, tilt, typewriter};
use crate::field::ParticleField;
use crate::glow::PointerGlow;
use crate::renderer::Renderer;
use crate::{dom, schedule};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement, MouseEvent, Window};

pub fn mount(cfg: FieldConfig) -> Result<(), JsValue> {
    let window = schedule::window()?;
    let document = window
        .document()
        .ok_or("window has no document")?;

    mount_nav(&document)?;
    mount_reveal(&document)?;
    mount_year(&document);
    mount_theme(&window, &document)?;
    mount_progress(&document)?;
    typewriter::attach(&document)?;
    counter::attach(&document)?;
    terminal::attach(&document)?;
    ripple::attach(&document)?;
    tilt::attach(&document)?;
    scroll::attach(&document)?;
    mount_particles(&window, &document, cfg)
}

fn mount_nav(document: &Document) -> Result<(), JsValue> {
    let (toggle, links) = match (dom::select(document, ".nav-toggle"), dom::select(document, ".nav-links")) {
        (Some(toggle), Some(links)) => (toggle, links),
        _ => return Ok(()),
    };
    dom::listen(&toggle, "click", move |_| {
        dom::ok_or_warn("nav toggle", links.class_list().toggle("open"));
    })
}

fn mount_reveal(document: &Document) -> Result<(), JsValue> {
    let targets = dom::select_all(document, ".reveal");
    dom::on_visible(&targets, 0.1, true, |el| {
        dom::ok_or_warn("reveal", el.class_list().add_1("visible"));
    })
}

fn mount_year(document: &Document) {
    if let Some(el) = document.get_element_by_id("y") {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

fn mount_theme(window: &Window, document: &Document) -> Result<(), JsValue> {
    let root = match document.document_element() {
        Some(root) => root,
        None => return Ok(()),
    };
    if let Some(query) = window.match_media("(prefers-color-scheme: light)")? {
        if query.matches() {
            root.class_list().add_1("light")?;
        }
    }
    if let Some(button) = document.get_element_by_id("mode") {
        dom::listen(&button, "click", move |_| {
            dom::ok_or_warn("theme toggle", root.class_list().toggle("light"));
        })?;
    }
    Ok(())
}

// Bars hold their CSS fill animation until half visible, then run it toward
// their inline width
fn mount_progress(document: &Document) -> Result<(), JsValue> {
    let bars = dom::select_all_html(document, ".progress");
    for bar in &bars {
        bar.style().set_property("animation-play-state", "paused")?;
    }
    let targets: Vec<Element> = bars.into_iter().map(Element::from).collect();
    dom::on_visible(&targets, 0.5, false, |el| {
        if let Some(bar) = el.dyn_ref::<HtmlElement>() {
            let style = bar.style();
            let width = dom::ok_or_warn("progress width", style.get_property_value("width"))
                .unwrap_or_default();
            dom::ok_or_warn("progress fill", style.set_property("--width", &width));
            dom::ok_or_warn(
                "progress start",
                style.set_property("animation-play-state", "running"),
            );
        }
    })
}

fn viewport(window: &Window) -> Result<(f64, f64), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width, height))
}

fn fit_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

fn mount_particles(window: &Window, document: &Document, cfg: FieldConfig) -> Result<(), JsValue> {
    let canvas = match document.get_element_by_id("particle-canvas") {
        Some(el) => el.dyn_into::<HtmlCanvasElement>()?,
        None => {
            log::debug!("no #particle-canvas, particle field disabled");
            return Ok(());
        }
    };
    let (width, height) = viewport(window)?;
    fit_canvas(&canvas, width, height);

    let renderer = Rc::new(Renderer::new(&canvas)?);
    let glow = if cfg.glow {
        Some(PointerGlow::new(cfg.glow_radius))
    } else {
        None
    };
    log::info!(
        "particle field: {} particles on {}x{}",
        cfg.particle_count,
        width,
        height
    );
    let field = Rc::new(RefCell::new(ParticleField::new(
        width,
        height,
        cfg,
        &mut rand::thread_rng(),
    )));

    {
        let field = field.clone();
        dom::listen(window, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                field
                    .borrow_mut()
                    .set_pointer(event.client_x() as f64, event.client_y() as f64);
            }
        })?;
    }

    {
        let field = field.clone();
        let resized = window.clone();
        dom::listen(window, "resize", move |_| match viewport(&resized) {
            Ok((width, height)) => {
                fit_canvas(&canvas, width, height);
                field.borrow_mut().resize(width, height);
            }
            Err(err) => log::warn!("could not read viewport size: {:?}", err),
        })?;
    }

    {
        let field = field.clone();
        let renderer = renderer.clone();
        schedule::every_frame(move || {
            if let Err(err) = field.borrow_mut().frame(&*renderer) {
                log::warn!("particle frame failed: {:?}", err);
            }
        })?;
    }

    if let Some(glow) = glow {
        schedule::every_frame(move || {
            let pointer = field.borrow().pointer();
            if let Err(err) = glow.draw(&*renderer, pointer) {
                log::warn!("pointer glow failed: {:?}", err);
            }
        })?;
    }
    Ok(())
}
