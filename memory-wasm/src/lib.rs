use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

use memory_core::constants::{LEVEL_ADVANCE_DELAY_MS, MISMATCH_DELAY_MS};
use memory_core::{Game, SelectOutcome};

mod grid;
mod hud;
mod sched;
mod utils;

/// Runtime state shared across the WASM callbacks.
pub struct State {
    pub window: Window,
    pub document: Document,
    pub game: Game,
    /// Interval handle of the running elapsed-time ticker, if any.
    pub tick_handle: Option<i32>,
}

thread_local! {
    static STATE: RefCell<Option<Rc<RefCell<State>>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let game = Game::new(js_sys::Date::now() as u64);

    // Optional ?level=N override for jumping straight to a later board.
    let mut start_at = 0;
    if let Ok(search) = window.location().search()
        && let Some(v) = utils::get_query_param(&search, "level")
        && let Ok(n) = v.parse::<usize>()
    {
        start_at = n;
    }

    let state = Rc::new(RefCell::new(State {
        window,
        document,
        game,
        tick_handle: None,
    }));
    STATE.with(|st| st.replace(Some(state.clone())));

    attach_ui(&state)?;

    if !state.borrow_mut().game.start_level(start_at) {
        utils::log(&format!("Ignoring out-of-range start level {start_at}"));
        state.borrow_mut().game.start_level(0);
    }
    present_level(&state)?;
    Ok(())
}

/// Wire the restart and play-again buttons.
fn attach_ui(state: &Rc<RefCell<State>>) -> Result<(), JsValue> {
    let doc = state.borrow().document.clone();

    if let Some(btn) = doc.get_element_by_id("restartBtn") {
        let btn: HtmlElement = btn.dyn_into()?;
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            st.borrow_mut().game.restart();
            let _ = present_level(&st);
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    if let Some(btn) = doc.get_element_by_id("playAgainBtn") {
        let btn: HtmlElement = btn.dyn_into()?;
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            hud::hide_end_screen(&st.borrow());
            st.borrow_mut().game.play_again();
            let _ = present_level(&st);
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    Ok(())
}

/// Bring the page in line with a freshly dealt board: rebuild the card
/// grid, refresh the HUD and restart the ticker.
fn present_level(state: &Rc<RefCell<State>>) -> Result<(), JsValue> {
    grid::rebuild(state)?;
    {
        let s = state.borrow();
        hud::sync(&s);
        utils::log(&format!("Dealt level {}", s.game.level_label()));
    }
    sched::restart_ticker(state)
}

/// Tile activation entry point, wired to each card's click handler.
pub(crate) fn on_tile_click(state: &Rc<RefCell<State>>, idx: usize) {
    let outcome = state.borrow_mut().game.select_tile(idx);
    match outcome {
        SelectOutcome::Ignored => {}
        SelectOutcome::FirstUp => grid::flip(&state.borrow(), idx),
        SelectOutcome::Mismatch => {
            let epoch = {
                let s = state.borrow();
                grid::flip(&s, idx);
                hud::update_counters(&s);
                s.game.epoch()
            };
            let st = state.clone();
            let deferred = sched::defer(&state.borrow().window, MISMATCH_DELAY_MS, move || {
                match st.borrow_mut().game.resolve_mismatch(epoch) {
                    Some((a, b)) => {
                        let s = st.borrow();
                        grid::unflip(&s, a);
                        grid::unflip(&s, b);
                    }
                    None => utils::log("Stale unflip callback ignored"),
                }
            });
            if let Err(e) = deferred {
                utils::log(&format!("Failed to schedule unflip: {e:?}"));
            }
        }
        SelectOutcome::Matched {
            first,
            second,
            level_cleared,
            game_over,
        } => {
            {
                let s = state.borrow();
                grid::flip(&s, second);
                grid::mark_matched(&s, first);
                grid::mark_matched(&s, second);
                hud::update_counters(&s);
            }
            if !level_cleared {
                return;
            }
            sched::stop_ticker(&mut state.borrow_mut());
            {
                let s = state.borrow();
                hud::update_timer(&s);
                hud::set_message(&s, &s.game.completion_message());
            }
            if game_over {
                hud::show_end_screen(&state.borrow());
                return;
            }
            let epoch = state.borrow().game.epoch();
            let st = state.clone();
            let deferred = sched::defer(
                &state.borrow().window,
                LEVEL_ADVANCE_DELAY_MS,
                move || {
                    if st.borrow_mut().game.advance_level(epoch).is_some() {
                        let _ = present_level(&st);
                    } else {
                        utils::log("Stale level-advance callback ignored");
                    }
                },
            );
            if let Err(e) = deferred {
                utils::log(&format!("Failed to schedule level advance: {e:?}"));
            }
        }
    }
}
