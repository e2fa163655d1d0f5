use tube_core::constants::MAX_DPR;
use tube_core::ViewConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas backing store sized to CSS size * devicePixelRatio,
/// honoring any query-string overrides.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, cfg: &ViewConfig) {
    if let Some(w) = web::window() {
        let dpr = cfg
            .dpr
            .unwrap_or_else(|| (w.device_pixel_ratio() as f32).min(MAX_DPR)) as f64;
        let rect = canvas.get_bounding_client_rect();
        let width = cfg.width.map(f64::from).unwrap_or_else(|| rect.width());
        let height = cfg.height.map(f64::from).unwrap_or_else(|| rect.height());
        canvas.set_width(((width * dpr) as u32).max(1));
        canvas.set_height(((height * dpr) as u32).max(1));
    }
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, cfg: ViewConfig) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        sync_canvas_backing_size(&canvas_resize, &cfg);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Cursor affordance: grab handle in orbit mode, plain pointer otherwise.
pub fn set_cursor_class(canvas: &web::HtmlCanvasElement, orbit_controls: bool) {
    let cl = canvas.class_list();
    _ = cl.add_1(if orbit_controls { "grab" } else { "clickable" });
}
