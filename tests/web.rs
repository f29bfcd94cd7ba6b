// Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use landing_particles::effects::counter::{Counter, CounterFrame};
use landing_particles::{dom, mount};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlCanvasElement, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn mount_on_bare_page_is_a_no_op() {
    assert!(mount(None).is_ok());
}

#[wasm_bindgen_test]
fn mount_rejects_bad_config() {
    assert!(mount(Some("{\"particle_count\": -1}".to_string())).is_err());
}

#[wasm_bindgen_test]
fn mount_sizes_particle_canvas_to_viewport() {
    let document = document();
    let canvas = document.create_element("canvas").unwrap();
    canvas.set_id("particle-canvas");
    document.body().unwrap().append_child(&canvas).unwrap();

    mount(Some("{\"particle_count\": 10}".to_string())).unwrap();

    let window = web_sys::window().unwrap();
    let canvas: HtmlCanvasElement = canvas.dyn_into().unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap();
    assert_eq!(canvas.width(), width as u32);
    canvas.remove();
}

#[wasm_bindgen_test]
fn nav_toggle_opens_links() {
    let document = document();
    let body = document.body().unwrap();
    let toggle = document.create_element("button").unwrap();
    toggle.set_class_name("nav-toggle");
    let links = document.create_element("ul").unwrap();
    links.set_class_name("nav-links");
    body.append_child(&toggle).unwrap();
    body.append_child(&links).unwrap();

    mount(None).unwrap();
    toggle.unchecked_ref::<HtmlElement>().click();
    assert!(links.class_list().contains("open"));

    toggle.remove();
    links.remove();
}

#[wasm_bindgen_test]
fn select_all_skips_missing() {
    assert!(dom::select_all(&document(), ".does-not-exist").is_empty());
    assert!(dom::select(&document(), "#nope").is_none());
}

#[wasm_bindgen_test]
fn counter_text_matches_native_run() {
    let mut counter = Counter::from_attribute(Some("95"));
    let last = loop {
        if let CounterFrame::Done(text) = counter.tick() {
            break text;
        }
    };
    assert_eq!(last, "95%");
}

#[wasm_bindgen_test]
fn theme_button_toggles_light_on_root() {
    let document = document();
    let button = document.create_element("button").unwrap();
    button.set_id("mode");
    document.body().unwrap().append_child(&button).unwrap();

    mount(None).unwrap();
    let root = document.document_element().unwrap();
    let before = root.class_list().contains("light");
    button.unchecked_ref::<HtmlElement>().click();
    assert_eq!(root.class_list().contains("light"), !before);
    button.unchecked_ref::<HtmlElement>().click();
    assert_eq!(root.class_list().contains("light"), before);

    button.remove();
}

#[wasm_bindgen_test]
fn footer_year_is_current_year() {
    let document = document();
    let year = document.create_element("span").unwrap();
    year.set_id("y");
    document.body().unwrap().append_child(&year).unwrap();

    mount(None).unwrap();
    let expected = js_sys::Date::new_0().get_full_year().to_string();
    assert_eq!(year.text_content(), Some(expected));

    year.remove();
}

#[wasm_bindgen_test]
fn progress_bars_start_paused() {
    let document = document();
    let body = document.body().unwrap();
    let bars: Vec<HtmlElement> = (0..2)
        .map(|_| {
            let bar: HtmlElement = document.create_element("div").unwrap().unchecked_into();
            bar.set_class_name("progress");
            bar.style().set_property("width", "80%").unwrap();
            body.append_child(&bar).unwrap();
            bar
        })
        .collect();

    mount(None).unwrap();
    for bar in &bars {
        assert_eq!(
            bar.style().get_property_value("animation-play-state").unwrap(),
            "paused"
        );
        bar.remove();
    }
}

#[wasm_bindgen_test]
fn ok_or_warn_passes_values_and_swallows_errors() {
    assert_eq!(dom::ok_or_warn("ok", Ok::<_, JsValue>(3)), Some(3));
    assert_eq!(
        dom::ok_or_warn("failing", Err::<i32, _>(JsValue::from_str("boom"))),
        None
    );
}
