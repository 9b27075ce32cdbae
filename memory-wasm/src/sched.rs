//! Interval and timeout plumbing around `web_sys::Window`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use memory_core::constants::TIMER_TICK_MS;

use crate::{State, hud};

/// Start (or restart) the periodic elapsed-time ticker for the current
/// board.
pub fn restart_ticker(state: &Rc<RefCell<State>>) -> Result<(), JsValue> {
    stop_ticker(&mut state.borrow_mut());

    let st = state.clone();
    let on_tick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        let mut s = st.borrow_mut();
        s.game.tick();
        hud::update_timer(&s);
    }));
    let id = state
        .borrow()
        .window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            on_tick.as_ref().unchecked_ref(),
            TIMER_TICK_MS as i32,
        )?;
    state.borrow_mut().tick_handle = Some(id);
    on_tick.forget();
    Ok(())
}

/// Cancel the ticker. Calling with no ticker active is a no-op.
pub fn stop_ticker(s: &mut State) {
    if let Some(id) = s.tick_handle.take() {
        s.window.clear_interval_with_handle(id);
    }
}

/// Run `f` once after `delay_ms`. One-shots are never cancelled; the game
/// filters stale ones through its deal epoch instead.
pub fn defer<F>(window: &Window, delay_ms: u32, f: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let cb = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref(),
        delay_ms as i32,
    )?;
    Ok(())
}
