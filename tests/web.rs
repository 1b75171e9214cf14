#![cfg(target_arch = "wasm32")]

use affirm_web::AffirmationCanvas;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(width: u32, height: u32) -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas
        .set_attribute(
            "style",
            &format!("display:block;width:{width}px;height:{height}px"),
        )
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn activation_sizes_backing_store_and_fills_pool() {
    let canvas = mount(1000, 500);
    let handle = AffirmationCanvas::new(canvas.clone());
    handle.set_active(true);
    assert!(handle.is_active());
    assert_eq!(handle.particle_count(), 40);
    assert_eq!(handle.outstanding_frames(), 1);

    let dpr = web_sys::window().unwrap().device_pixel_ratio().min(3.0);
    assert_eq!(canvas.width(), (1000.0 * dpr).round() as u32);
    assert_eq!(canvas.height(), (500.0 * dpr).round() as u32);
    handle.dispose();
}

#[wasm_bindgen_test]
fn toggling_keeps_a_single_frame_request() {
    let handle = AffirmationCanvas::new(mount(350, 600));
    handle.set_active(true);
    assert_eq!(handle.particle_count(), 20);
    handle.set_active(false);
    assert_eq!(handle.outstanding_frames(), 0);
    handle.set_active(true);
    handle.set_active(true);
    assert_eq!(handle.outstanding_frames(), 1);
    handle.set_text("I am strong. You are capable.".to_string());
    assert_eq!(handle.outstanding_frames(), 1);
    handle.dispose();
    assert_eq!(handle.outstanding_frames(), 0);
}
