//! Canvas 2D backend for the synapse field draw passes.

use glam::Vec2;
use std::f64::consts::TAU;
use synapse_core::{DrawSurface, GradientStop, Rgba};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CanvasSurface<'a> {
    ctx: &'a web::CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn disc(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
    }
}

impl DrawSurface for CanvasSurface<'_> {
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.disc(center, radius);
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill();
    }

    fn fill_radial_glow(
        &mut self,
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        stops: &[GradientStop],
    ) {
        let (x, y) = (center.x as f64, center.y as f64);
        let Ok(gradient) = self.ctx.create_radial_gradient(
            x,
            y,
            inner_radius.max(0.0) as f64,
            x,
            y,
            outer_radius.max(0.0) as f64,
        ) else {
            return;
        };
        for stop in stops {
            _ = gradient.add_color_stop(stop.offset, &stop.color.to_string());
        }
        self.disc(center, outer_radius);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill();
    }
}

/// The canvas' 2D context, or `None` when it cannot be acquired this frame.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|obj| obj.dyn_into::<web::CanvasRenderingContext2d>().ok())
}
