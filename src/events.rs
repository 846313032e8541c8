use crate::audio::AudioGraph;
use crate::core::CameraRig;
use crate::{dom, overlay};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Start playback. The UI flips to the playing state optimistically; if the
/// host rejects the play request (autoplay policy), fall back to the paused
/// icon state with no user-visible error.
pub fn request_play(audio: &Rc<AudioGraph>) {
    audio.resume_if_suspended();
    if let Some(document) = dom::window_document() {
        overlay::set_play_icon(&document, true);
        overlay::set_focus_mode(&document, true);
    }
    let promise = match audio.media.play() {
        Ok(p) => p,
        Err(e) => {
            log::warn!("[audio] play call failed: {e:?}");
            revert_to_paused();
            return;
        }
    };
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::warn!("[audio] autoplay rejected: {e:?}");
            revert_to_paused();
        }
    });
}

pub fn pause(audio: &AudioGraph) {
    _ = audio.media.pause();
    revert_to_paused();
}

fn revert_to_paused() {
    if let Some(document) = dom::window_document() {
        overlay::set_play_icon(&document, false);
        overlay::set_focus_mode(&document, false);
    }
}

pub fn wire_play_pause(audio: Rc<AudioGraph>) {
    let Some(document) = dom::window_document() else {
        return;
    };
    dom::add_click_listener(&document, "btn-play", move || {
        if audio.is_playing() {
            pause(&audio);
        } else {
            request_play(&audio);
        }
    });
}

/// File picker: turn the chosen file into an object URL, point the media
/// element at it and start playing.
pub fn wire_file_input(audio: Rc<AudioGraph>) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let Some(el) = document.get_element_by_id("file-input") else {
        log::warn!("[dom] no #file-input to wire");
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            return;
        };
        match web::Url::create_object_url_with_blob(&file) {
            Ok(url) => {
                audio.media.set_src(&url);
                if let Some(document) = dom::window_document() {
                    overlay::set_track_name(&document, &file.name());
                }
                log::info!("[audio] loaded {}", file.name());
                request_play(&audio);
            }
            Err(e) => log::error!("[audio] object URL error: {e:?}"),
        }
    }) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Window resize: resync the canvas backing store and retune the camera
/// (aspect plus the wide/narrow step distance).
pub fn wire_resize(canvas: web::HtmlCanvasElement, camera: Rc<RefCell<CameraRig>>) {
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
        let (width, height) = dom::viewport_size();
        camera.borrow_mut().retune(width, height);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
