use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use tube_core::{Eased2, PaletteCycle, TubeEnsemble};
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub ensemble: Rc<RefCell<TubeEnsemble>>,
    pub palette: Rc<RefCell<PaletteCycle>>,
    pub parallax: Rc<RefCell<Eased2>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_palette_tap(&w, "pointerdown");
    wire_palette_tap(&w, "touchstart");
    wire_pointermove(&w);
}

/// Click/tap: advance the palette cycle and sweep the ensemble to it.
fn wire_palette_tap(w: &InputWiring, event: &str) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        let color = w.palette.borrow_mut().next();
        w.ensemble.borrow_mut().set_palette(color);
        log::info!(
            "[tap] palette -> ({:.2},{:.2},{:.2})",
            color[0],
            color[1],
            color[2]
        );
    }) as Box<dyn FnMut(web::Event)>);
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Mouse move retargets the smoothed parallax offset, normalized to [-1, 1].
fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = w.canvas.get_bounding_client_rect();
        let width = rect.width() as f32;
        let height = rect.height() as f32;
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let x = (ev.client_x() as f32 - rect.left() as f32) / width * 2.0 - 1.0;
        let y = (ev.client_y() as f32 - rect.top() as f32) / height * 2.0 - 1.0;
        w.parallax.borrow_mut().retarget(Vec2::new(x, y));
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
