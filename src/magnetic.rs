//! DOM binding for the magnetic hover effect on `[data-magnetic]` elements.

use crate::constants::{MAGNETIC_RADIUS_ATTR, MAGNETIC_SELECTOR, MAGNETIC_STRENGTH_ATTR};
use crate::dom;
use crate::events::EventListener;
use crate::frame::AnimationLoop;
use crate::input;
use glam::Vec2;
use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;
use synapse_core::{magnetic_target, MagnetParams, Spring2};
use wasm_bindgen::JsCast;
use web_sys as web;

struct Magnet {
    el: web::HtmlElement,
    params: MagnetParams,
    target: Rc<Cell<Vec2>>,
    spring: Spring2,
    at_rest: bool,
}

impl Magnet {
    fn step(&mut self, dt_sec: f32) {
        let target = self.target.get();
        if self.at_rest && self.spring.is_settled(target) {
            return;
        }
        self.spring.step(target, dt_sec, &self.params);
        self.at_rest = self.spring.is_settled(target);
        if self.at_rest {
            self.spring.snap(target);
        }
        let p = self.spring.position;
        _ = self
            .el
            .style()
            .set_property("transform", &format!("translate({:.2}px, {:.2}px)", p.x, p.y));
    }
}

/// Keeps magnetic elements animated until dropped.
pub struct MagnetBoard {
    _listeners: Vec<EventListener>,
    _loop: Option<AnimationLoop>,
}

fn params_for(el: &web::Element) -> MagnetParams {
    let defaults = MagnetParams::default();
    MagnetParams {
        strength: input::parse_attr_f32(
            el.get_attribute(MAGNETIC_STRENGTH_ATTR).as_deref(),
            defaults.strength,
        ),
        radius: input::parse_attr_f32(
            el.get_attribute(MAGNETIC_RADIUS_ATTR).as_deref(),
            defaults.radius,
        ),
        ..defaults
    }
}

pub fn wire_magnetic_elements(document: &web::Document) -> MagnetBoard {
    let mut listeners = Vec::new();
    let mut magnets = Vec::new();

    if let Ok(list) = document.query_selector_all(MAGNETIC_SELECTOR) {
        for i in 0..list.length() {
            let Some(el) = list
                .item(i)
                .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
            else {
                continue;
            };
            let params = params_for(&el);
            let target = Rc::new(Cell::new(Vec2::ZERO));

            let (el_move, target_move) = (el.clone(), target.clone());
            listeners.extend(EventListener::new(el.as_ref(), "mousemove", move |ev| {
                if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                    let center = dom::element_center(&el_move);
                    target_move.set(magnetic_target(center, input::mouse_client(ev), &params));
                }
            }));
            let target_leave = target.clone();
            listeners.extend(EventListener::new(el.as_ref(), "mouseleave", move |_| {
                target_leave.set(Vec2::ZERO);
            }));

            magnets.push(Magnet {
                el,
                params,
                target,
                spring: Spring2::default(),
                at_rest: true,
            });
        }
    }

    if magnets.is_empty() {
        return MagnetBoard {
            _listeners: listeners,
            _loop: None,
        };
    }
    log::info!("[magnetic] bound {} elements", magnets.len());

    let mut last = Instant::now();
    let anim = AnimationLoop::start(move || {
        let now = Instant::now();
        let dt_sec = (now - last).as_secs_f32();
        last = now;
        for m in magnets.iter_mut() {
            m.step(dt_sec);
        }
    });

    MagnetBoard {
        _listeners: listeners,
        _loop: Some(anim),
    }
}
