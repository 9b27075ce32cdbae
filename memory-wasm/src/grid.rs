//! Card-grid visuals: building one DOM node per tile and flipping faces.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::State;

fn tile_id(idx: usize) -> String {
    format!("tile{idx}")
}

fn card_el(s: &State, idx: usize) -> Option<HtmlElement> {
    s.document.get_element_by_id(&tile_id(idx))?.dyn_into().ok()
}

/// Tear down and rebuild the card grid for the current board.
pub fn rebuild(state: &Rc<RefCell<State>>) -> Result<(), JsValue> {
    let s = state.borrow();
    let doc = s.document.clone();
    let grid = doc
        .get_element_by_id("memoryGrid")
        .ok_or_else(|| JsValue::from_str("#memoryGrid not found"))?;
    grid.set_inner_html("");

    // near-square column count for the CSS grid
    let cols = (s.game.tiles().len() as f64).sqrt().ceil() as usize;
    grid.set_attribute(
        "style",
        &format!("grid-template-columns: repeat({cols}, var(--card-size));"),
    )?;

    for (idx, tile) in s.game.tiles().iter().enumerate() {
        let card = doc.create_element("div")?;
        card.set_class_name("card");
        card.set_id(&tile_id(idx));

        let inner = doc.create_element("div")?;
        inner.set_class_name("card-inner");
        let back = doc.create_element("div")?;
        back.set_class_name("card-face card-back");
        back.set_text_content(Some("?"));
        let front = doc.create_element("div")?;
        front.set_class_name("card-face card-front");
        front.set_text_content(Some(tile.symbol));
        inner.append_child(&back)?;
        inner.append_child(&front)?;
        card.append_child(&inner)?;

        let card: HtmlElement = card.dyn_into()?;
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            crate::on_tile_click(&st, idx);
        }));
        card.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();

        grid.append_child(&card)?;
    }
    Ok(())
}

pub fn flip(s: &State, idx: usize) {
    if let Some(el) = card_el(s, idx) {
        let _ = el.class_list().add_1("flipped");
    }
}

pub fn unflip(s: &State, idx: usize) {
    if let Some(el) = card_el(s, idx) {
        let _ = el.class_list().remove_1("flipped");
    }
}

/// Matched tiles keep their face up and stop receiving input.
pub fn mark_matched(s: &State, idx: usize) {
    if let Some(el) = card_el(s, idx) {
        let _ = el.class_list().add_1("matched");
        el.set_onclick(None);
    }
}
