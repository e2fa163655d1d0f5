use crate::render;
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use tube_core::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, FRAME_SKIP_INTERVAL_MS};
use tube_core::{parallax_eye, Camera, Eased2, TubeEnsemble, TubeGeometry, ViewConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub ensemble: Rc<RefCell<TubeEnsemble>>,
    pub parallax: Rc<RefCell<Eased2>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub cfg: ViewConfig,
    pub last_instant: Instant,
    pub interval_ms: f32,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_ms = dt.as_secs_f64() as f32 * 1000.0;

        // 20 fps gate: when skip_frames is set, only interval crossings render
        self.interval_ms += dt_ms;
        if self.interval_ms > FRAME_SKIP_INTERVAL_MS {
            self.interval_ms = 0.0;
        } else if self.cfg.skip_frames {
            return;
        }

        // Transitions step inside update, before the time uniforms advance
        self.ensemble.borrow_mut().update(dt_ms);

        let offset = {
            let mut par = self.parallax.borrow_mut();
            par.step(dt_ms / 1000.0);
            par.value()
        };

        let aspect = self.canvas.width().max(1) as f32 / self.canvas.height().max(1) as f32;
        let camera = Camera {
            eye: parallax_eye(offset),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        };

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let ensemble = self.ensemble.borrow();
            if let Err(e) = g.render(&camera, &ensemble) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    geometry: &TubeGeometry,
    instance_capacity: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, geometry, instance_capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    if frame_ctx.borrow().cfg.render_once {
        frame_ctx.borrow_mut().frame();
        return;
    }

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
