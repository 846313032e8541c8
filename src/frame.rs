use crate::audio::AudioGraph;
use crate::core::{
    deform, spectrum, CameraRig, OrbState, SphereMesh, VizConfig, PARTICLE_BASS_SCALE,
    PARTICLE_SPIN, TIME_PHASE_PER_SEC,
};
use crate::render;
use glam::Vec3;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-session visualizer state, built once after the start gesture. All
/// state the render loop touches lives here rather than in module globals,
/// so several independent instances could coexist.
pub struct FrameContext {
    pub audio: Rc<AudioGraph>,
    pub config: VizConfig,
    pub camera: Rc<RefCell<CameraRig>>,
    pub orb: OrbState,
    pub base: SphereMesh,
    pub live: Vec<Vec3>,
    pub gpu: Option<render::GpuState<'static>>,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
    pub time_accum: f32,
}

impl FrameContext {
    /// One full reduce -> deform -> render pass.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        self.time_accum += dt_sec.max(0.0);
        let phase = self.time_accum * TIME_PHASE_PER_SEC;

        // Spectrum buffer is written here and read below, once per frame.
        let playing = self.audio.read_spectrum();
        let energy = {
            let bins = self.audio.spectrum.borrow();
            spectrum::reduce(&bins, &self.config, playing)
        };

        self.orb.advance_rotation(energy, &self.config);
        deform::displace(
            &self.base.positions,
            &mut self.live,
            energy,
            phase,
            &self.config,
        );
        let color = deform::orb_color(energy);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let cam = self.camera.borrow();
            let visuals = render::FrameVisuals {
                live_positions: &self.live,
                model: self.orb.model_matrix(),
                view: cam.view_matrix(),
                proj: cam.projection_matrix(),
                color,
                particle_yaw: -phase * PARTICLE_SPIN,
                particle_scale: 1.0 + energy.bass * PARTICLE_BASS_SCALE,
            };
            if let Err(e) = g.render(&visuals) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

/// Handle to a running frame loop. `stop` ends rescheduling after the
/// current frame; dropping the handle leaves the loop running for the life
/// of the page, like the keep-alive rAF chain it replaces.
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    mesh: &SphereMesh,
    particles: &[Vec3],
) -> Option<render::GpuState<'static>> {
    // The surface holds the canvas for the life of the page.
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, mesh, particles).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Drive the frame loop from requestAnimationFrame until stopped.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let running = Rc::new(Cell::new(true));
    let running_tick = running.clone();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
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
    LoopHandle { running }
}
