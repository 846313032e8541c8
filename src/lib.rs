#![cfg(target_arch = "wasm32")]
use crate::audio::AudioGraph;
use crate::core::{
    scatter_particles, CameraRig, OrbState, SphereMesh, VizConfig, PARTICLE_COUNT,
    PARTICLE_FIELD_EXTENT, PARTICLE_SEED, SPHERE_DETAIL,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
pub mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orb-web starting");

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

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, "orb-canvas")?;

    // The audio context needs a user gesture, so everything waits behind the
    // start button; the guard swallows double-clicks during startup.
    static STARTED: AtomicBool = AtomicBool::new(false);
    dom::add_click_listener(&document, "btn-init", move || {
        if STARTED.swap(true, Ordering::SeqCst) {
            log::warn!("[gesture] start already triggered; ignoring extra click");
            return;
        }
        let canvas = canvas.clone();
        spawn_local(async move {
            start_session(canvas).await;
        });
    });

    Ok(())
}

/// Build the whole session (audio graph, meshes, GPU, UI wiring) and kick
/// off the frame loop. Runs inside the start gesture.
async fn start_session(canvas: web::HtmlCanvasElement) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let config = VizConfig::classic();

    let media: web::HtmlAudioElement = match dom::element_by_id(&document, "audio-source") {
        Ok(el) => el,
        Err(e) => {
            log::error!("audio element error: {:?}", e);
            return;
        }
    };

    // Audio-context construction failure is fatal: tell the user and stop.
    let audio = match AudioGraph::new(media, &config) {
        Ok(graph) => Rc::new(graph),
        Err(e) => {
            log::error!("audio init error: {:?}", e);
            if let Some(w) = web::window() {
                _ = w.alert_with_message("Audio could not be initialized in this browser.");
            }
            return;
        }
    };

    overlay::dismiss_start_screen(&document);
    overlay::set_focus_mode(&document, false);

    dom::sync_canvas_backing_size(&canvas);
    let (width, height) = dom::viewport_size();
    let camera = Rc::new(RefCell::new(CameraRig::new(width, height)));

    let base = SphereMesh::icosphere(config.base_radius, SPHERE_DETAIL);
    let particles = scatter_particles(PARTICLE_COUNT, PARTICLE_FIELD_EXTENT, PARTICLE_SEED);
    log::info!(
        "[scene] orb vertices={} edges={} particles={}",
        base.vertex_count(),
        base.edges.len(),
        particles.len()
    );

    let gpu = frame::init_gpu(&canvas, &base, &particles).await;

    events::wire_play_pause(audio.clone());
    events::wire_file_input(audio.clone());
    events::wire_resize(canvas.clone(), camera.clone());

    let live = base.positions.clone();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        audio,
        config,
        camera,
        orb: OrbState::new(),
        base,
        live,
        gpu,
        canvas,
        last_instant: Instant::now(),
        time_accum: 0.0,
    }));
    // Runs until the page goes away; the handle's stop() is the teardown
    // path for embedders that need one.
    let _loop = frame::start_loop(frame_ctx);
}
