#![cfg(target_arch = "wasm32")]
use crate::constants::{DEFAULT_CANVAS_ID, RESIZE_DEBOUNCE_MS};
use crate::error::MountError;
use crate::events::{EventListener, ResizeDebouncer};
use crate::frame::{AnimationLoop, FrameContext};
use crate::magnetic::MagnetBoard;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use synapse_core::{FieldParams, Pointer, SynapseField};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod error;
mod events;
mod frame;
mod input;
mod magnetic;
mod render;

thread_local! {
    static ACTIVE: RefCell<Option<SynapseHandle>> = const { RefCell::new(None) };
    static MAGNETS: RefCell<Option<MagnetBoard>> = const { RefCell::new(None) };
}

/// A mounted synapse field. Dropping or destroying it stops the animation
/// loop, clears any pending resize timer and removes every listener.
#[wasm_bindgen]
pub struct SynapseHandle {
    canvas_id: String,
    _loop: AnimationLoop,
    _resize: Option<ResizeDebouncer>,
    _listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl SynapseHandle {
    pub fn destroy(self) {}
}

impl Drop for SynapseHandle {
    fn drop(&mut self) {
        log::info!("[mount] #{} unmounted", self.canvas_id);
    }
}

/// Start the synapse field on the canvas with id `canvas_id`.
#[wasm_bindgen]
pub fn mount(canvas_id: &str) -> Result<SynapseHandle, JsValue> {
    mount_canvas(canvas_id).map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

/// Tear down whatever `start` mounted automatically.
#[wasm_bindgen]
pub fn unmount() {
    ACTIVE.with(|a| a.borrow_mut().take());
    MAGNETS.with(|m| m.borrow_mut().take());
}

fn mount_canvas(canvas_id: &str) -> anyhow::Result<SynapseHandle> {
    let window = web::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| MountError::MissingCanvas(canvas_id.to_owned()))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| MountError::NotACanvas(canvas_id.to_owned()))?;

    let pointer = Rc::new(Cell::new(Pointer::Absent));
    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        field: SynapseField::with_rng(FieldParams::default(), StdRng::from_entropy()),
        canvas: canvas.clone(),
        pointer: pointer.clone(),
        started: Instant::now(),
    }));
    frame_ctx.borrow_mut().regenerate();

    let listeners = events::wire_pointer_handlers(&canvas, &pointer);
    let ctx_resize = frame_ctx.clone();
    let resize = ResizeDebouncer::new(RESIZE_DEBOUNCE_MS, move || {
        ctx_resize.borrow_mut().regenerate();
    });
    if resize.is_none() {
        log::warn!("[mount] resize handling unavailable; field keeps its initial size");
    }

    {
        let ctx = frame_ctx.borrow();
        let size = ctx.field.viewport();
        log::info!(
            "[mount] #{} {:.0}x{:.0} nodes={} edges={}",
            canvas_id,
            size.x,
            size.y,
            ctx.field.nodes().len(),
            ctx.field.edges().len()
        );
    }

    Ok(SynapseHandle {
        canvas_id: canvas_id.to_owned(),
        _loop: frame::start_loop(frame_ctx),
        _resize: resize,
        _listeners: listeners,
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("synapse-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or(MountError::NoDocument)?;

    let board = magnetic::wire_magnetic_elements(&document);
    MAGNETS.with(|m| *m.borrow_mut() = Some(board));

    if document.get_element_by_id(DEFAULT_CANVAS_ID).is_some() {
        let handle = mount_canvas(DEFAULT_CANVAS_ID)?;
        ACTIVE.with(|a| *a.borrow_mut() = Some(handle));
    }
    Ok(())
}
