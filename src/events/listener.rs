use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener that unregisters itself when dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        Self::register(target, kind, handler, false)
    }

    /// Same as [`EventListener::new`] but promises the handler never calls `preventDefault`.
    pub fn new_passive(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        Self::register(target, kind, handler, true)
    }

    fn register(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
        passive: bool,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let result = if passive {
            let opts = web::AddEventListenerOptions::new();
            opts.set_passive(true);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                &opts,
            )
        } else {
            target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        };
        match result {
            Ok(()) => Some(Self {
                target: target.clone(),
                kind,
                closure,
            }),
            Err(e) => {
                log::warn!("[events] failed to register {}: {:?}", kind, e);
                None
            }
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}
