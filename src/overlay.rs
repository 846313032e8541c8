use web_sys as web;

/// Hide the start screen and reveal the player controls once the audio
/// graph is up. CSS handles the fade; the style attribute is a fallback for
/// environments without the stylesheet.
pub fn dismiss_start_screen(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("start-screen") {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
    if let Some(el) = document.get_element_by_id("player-ui") {
        _ = el.class_list().remove_1("ui-hidden");
        _ = el.set_attribute("style", "display:flex");
    }
}

/// Cosmetic focus/blur treatment on the canvas container, driven purely by
/// playback state.
pub fn set_focus_mode(document: &web::Document, playing: bool) {
    if let Some(el) = document.get_element_by_id("canvas-container") {
        let classes = el.class_list();
        if playing {
            _ = classes.remove_1("blur-mode");
            _ = classes.add_1("focus-mode");
        } else {
            _ = classes.remove_1("focus-mode");
            _ = classes.add_1("blur-mode");
        }
    }
}

/// Swap the glyph on the transport button.
pub fn set_play_icon(document: &web::Document, playing: bool) {
    if let Some(el) = document.get_element_by_id("btn-play") {
        el.set_inner_html(if playing {
            "<i class=\"fas fa-pause\"></i>"
        } else {
            "<i class=\"fas fa-play\"></i>"
        });
    }
}

pub fn set_track_name(document: &web::Document, name: &str) {
    if let Some(el) = document.get_element_by_id("track-name") {
        el.set_text_content(Some(name));
    }
}
