#![cfg(target_arch = "wasm32")]
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use tube_core::constants::{
    PARALLAX_SMOOTH_DURATION, TOTAL_TUBES, TUBE_OPEN_ENDED, TUBE_SIDES, TUBE_SUBDIVISIONS,
};
use tube_core::{
    build_tube_geometry, Ease, Eased2, EnsembleConfig, PaletteCycle, TubeEnsemble, ViewConfig,
    PALETTES,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tube-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let cfg = ViewConfig::from_query(&window.location().search().unwrap_or_default());
    log::info!("[config] {:?}", cfg);

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas, &cfg);
    dom::wire_canvas_resize(&canvas, cfg.clone());
    dom::set_cursor_class(&canvas, cfg.orbit_controls);

    let geometry = build_tube_geometry(TUBE_SIDES, TUBE_SUBDIVISIONS, TUBE_OPEN_ENDED)?;
    log::info!(
        "[geometry] sides={} subdivisions={} verts={}",
        TUBE_SIDES,
        TUBE_SUBDIVISIONS,
        geometry.vertex_count()
    );

    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let ensemble = TubeEnsemble::new(TOTAL_TUBES, geometry, EnsembleConfig::default(), &mut rng)?;
    let palette = PaletteCycle::from_hex(&PALETTES)?;

    let gpu = frame::init_gpu(&canvas, ensemble.geometry(), ensemble.len()).await;

    let ensemble = Rc::new(RefCell::new(ensemble));
    let palette = Rc::new(RefCell::new(palette));
    let parallax = Rc::new(RefCell::new(Eased2::new(
        Vec2::ZERO,
        PARALLAX_SMOOTH_DURATION,
        Ease::ExpoOut,
    )));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        ensemble: ensemble.clone(),
        palette: palette.clone(),
        parallax: parallax.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        ensemble,
        parallax,
        canvas,
        gpu,
        cfg,
        last_instant: instant::Instant::now(),
        interval_ms: 0.0,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
