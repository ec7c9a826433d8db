use crate::dom;
use crate::input;
use std::cell::Cell;
use std::rc::Rc;
use synapse_core::Pointer;
use wasm_bindgen::JsCast;
use web_sys as web;

use super::EventListener;

/// Mouse and touch handlers that keep `pointer` in canvas-local logical pixels.
pub fn wire_pointer_handlers(
    canvas: &web::HtmlCanvasElement,
    pointer: &Rc<Cell<Pointer>>,
) -> Vec<EventListener> {
    let target: &web::EventTarget = canvas.as_ref();
    let mut listeners = Vec::with_capacity(4);

    let (c, p) = (canvas.clone(), pointer.clone());
    listeners.extend(EventListener::new(target, "mousemove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            let local = input::client_to_local(input::mouse_client(ev), dom::element_top_left(&c));
            p.set(Pointer::At(local));
        }
    }));

    let p = pointer.clone();
    listeners.extend(EventListener::new(target, "mouseleave", move |_| {
        p.set(Pointer::Absent);
    }));

    let (c, p) = (canvas.clone(), pointer.clone());
    listeners.extend(EventListener::new_passive(target, "touchmove", move |ev| {
        let Some(client) = ev
            .dyn_ref::<web::TouchEvent>()
            .and_then(input::first_touch_client)
        else {
            return;
        };
        p.set(Pointer::At(input::client_to_local(client, dom::element_top_left(&c))));
    }));

    let p = pointer.clone();
    listeners.extend(EventListener::new(target, "touchend", move |_| {
        p.set(Pointer::Absent);
    }));

    listeners
}
