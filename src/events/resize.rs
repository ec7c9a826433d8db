use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use super::EventListener;

/// Runs a callback once resize activity has been quiet for `delay_ms`.
///
/// Dropping it removes the window listener and clears any pending timer.
pub struct ResizeDebouncer {
    _listener: Option<EventListener>,
    pending: Rc<Cell<Option<i32>>>,
    _settled: Rc<Closure<dyn FnMut()>>,
}

impl ResizeDebouncer {
    pub fn new(delay_ms: i32, on_settled: impl FnMut() + 'static) -> Option<Self> {
        let window = web::window()?;
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let mut on_settled = on_settled;
        let pending_fire = pending.clone();
        let settled = Rc::new(Closure::wrap(Box::new(move || {
            pending_fire.set(None);
            on_settled();
        }) as Box<dyn FnMut()>));

        let pending_arm = pending.clone();
        let settled_arm = settled.clone();
        let listener = EventListener::new(window.as_ref(), "resize", move |_| {
            let Some(w) = web::window() else { return };
            if let Some(id) = pending_arm.take() {
                w.clear_timeout_with_handle(id);
            }
            match w.set_timeout_with_callback_and_timeout_and_arguments_0(
                (*settled_arm).as_ref().unchecked_ref(),
                delay_ms,
            ) {
                Ok(id) => pending_arm.set(Some(id)),
                Err(e) => log::warn!("[resize] failed to arm timer: {:?}", e),
            }
        });

        Some(Self {
            _listener: listener,
            pending,
            _settled: settled,
        })
    }
}

impl Drop for ResizeDebouncer {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            w.clear_timeout_with_handle(id);
        }
    }
}
