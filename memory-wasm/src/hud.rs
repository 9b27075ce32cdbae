//! HUD text: counters, level indicator, message line, timer, end screen.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::State;

fn el(s: &State, id: &str) -> Option<HtmlElement> {
    s.document.get_element_by_id(id)?.dyn_into().ok()
}

fn set_text(s: &State, id: &str, text: &str) {
    if let Some(e) = el(s, id) {
        e.set_inner_text(text);
    }
}

/// Refresh everything shown for a freshly dealt board.
pub fn sync(s: &State) {
    update_counters(s);
    update_timer(s);
    set_text(s, "levelDisplay", &s.game.level_label());
    set_message(s, &s.game.level_message());
}

pub fn update_counters(s: &State) {
    set_text(s, "moveCounter", &s.game.moves().to_string());
    set_text(s, "matchCounter", &s.game.matches().to_string());
}

pub fn update_timer(s: &State) {
    set_text(s, "timer", &s.game.timer_text());
}

pub fn set_message(s: &State, msg: &str) {
    set_text(s, "message", msg);
}

pub fn show_end_screen(s: &State) {
    set_text(s, "endStats", &s.game.summary_text());
    if let Some(e) = el(s, "endScreen") {
        let _ = e.class_list().add_1("visible");
    }
}

pub fn hide_end_screen(s: &State) {
    if let Some(e) = el(s, "endScreen") {
        let _ = e.class_list().remove_1("visible");
    }
}
