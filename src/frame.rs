use crate::dom;
use crate::render::{self, CanvasSurface};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use synapse_core::{Pointer, SynapseField};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// State the canvas loop touches every frame.
pub struct FrameContext {
    pub field: SynapseField,
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<Cell<Pointer>>,
    pub started: Instant,
}

impl FrameContext {
    /// Re-read the canvas box and rebuild the field for it.
    pub fn regenerate(&mut self) {
        let size = dom::sync_canvas_backing_size(&self.canvas);
        self.field.regenerate(size.x, size.y);
    }

    pub fn frame(&mut self) {
        // no context this frame: skip quietly and try again on the next one
        let Some(ctx) = render::context_2d(&self.canvas) else {
            return;
        };
        let dpr = dom::device_pixel_ratio();

        ctx.clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
        ctx.save();
        _ = ctx.scale(dpr, dpr);

        self.field.tick(self.pointer.get());
        let time_sec = self.started.elapsed().as_secs_f32();
        self.field.draw(&mut CanvasSurface::new(&ctx), time_sec);

        ctx.restore();
    }
}

struct LoopInner {
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopInner {
    fn schedule(&self) {
        let Some(window) = web::window() else { return };
        let callback = self.callback.borrow();
        let Some(cb) = callback.as_ref() else { return };
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.handle.set(Some(id)),
            Err(e) => log::warn!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}

/// A requestAnimationFrame loop that stops when dropped.
pub struct AnimationLoop {
    inner: Rc<LoopInner>,
}

impl AnimationLoop {
    pub fn start(mut step: impl FnMut() + 'static) -> Self {
        let inner = Rc::new(LoopInner {
            handle: Cell::new(None),
            callback: RefCell::new(None),
        });
        let weak: Weak<LoopInner> = Rc::downgrade(&inner);
        *inner.callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(inner) = weak.upgrade() else { return };
            inner.handle.set(None);
            step();
            inner.schedule();
        }) as Box<dyn FnMut()>));
        inner.schedule();
        Self { inner }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.inner.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.inner.callback.borrow_mut().take();
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> AnimationLoop {
    AnimationLoop::start(move || frame_ctx.borrow_mut().frame())
}
