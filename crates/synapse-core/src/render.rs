//! Draw passes for the synapse field.
//!
//! The passes are written against [`DrawSurface`] so the same code paints a
//! browser canvas or a recording surface in tests. Coordinates are logical
//! pixels; any device-pixel scaling is the surface's concern.

use crate::constants::*;
use crate::field::{Edge, Node};
use crate::particles::EnergyParticle;
use glam::Vec2;
use std::f32::consts::TAU;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    #[inline]
    pub fn new(rgb: [u8; 3], a: f32) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }

    /// Channel-wise blend between two opaque tones, rounding like a CSS engine would.
    #[inline]
    pub fn mix(cold: [u8; 3], hot: [u8; 3], t: f32, a: f32) -> Self {
        let ch = |i: usize| lerp(cold[i] as f32, hot[i] as f32, t).round().clamp(0.0, 255.0) as u8;
        Self {
            r: ch(0),
            g: ch(1),
            b: ch(2),
            a,
        }
    }
}

/// Formats as a CSS `rgba(...)` color.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

pub trait DrawSurface {
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Fill a disc of `outer_radius` with a radial gradient starting at `inner_radius`.
    fn fill_radial_glow(
        &mut self,
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        stops: &[GradientStop],
    );
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

pub fn draw_edges<S: DrawSurface + ?Sized>(surface: &mut S, nodes: &[Node], edges: &[Edge]) {
    for edge in edges {
        let (Some(a), Some(b)) = (nodes.get(edge.from), nodes.get(edge.to)) else {
            continue;
        };
        let boost = a.activation.max(b.activation);
        let alpha = edge.opacity * EDGE_BASE_ALPHA + boost * EDGE_BOOST_ALPHA;
        if alpha < EDGE_MIN_ALPHA {
            continue;
        }
        surface.stroke_line(
            a.position,
            b.position,
            Rgba::mix(EDGE_COLOR_DIM, EDGE_COLOR_HOT, boost, alpha),
            EDGE_WIDTH_BASE + boost * EDGE_WIDTH_BOOST,
        );
    }
}

pub fn draw_particles<S: DrawSurface + ?Sized>(
    surface: &mut S,
    nodes: &[Node],
    edges: &[Edge],
    particles: &[EnergyParticle],
) {
    for p in particles {
        let Some(edge) = edges.get(p.edge_index) else {
            continue;
        };
        let (Some(a), Some(b)) = (nodes.get(edge.from), nodes.get(edge.to)) else {
            continue;
        };
        let pos = a.position.lerp(b.position, p.edge_t());
        let alpha = p.alpha * p.fade();
        let stops = [
            GradientStop {
                offset: 0.0,
                color: Rgba::new(PARTICLE_WHITE, alpha * 0.95),
            },
            GradientStop {
                offset: 0.4,
                color: Rgba::new(GLOW_BLUE, alpha * 0.5),
            },
            GradientStop {
                offset: 1.0,
                color: Rgba::new(GLOW_EDGE, 0.0),
            },
        ];
        surface.fill_radial_glow(pos, 0.0, PARTICLE_GLOW_RADIUS, &stops);
    }
}

/// Radius multiplier for the decorative node pulse at wall-clock `time_sec`.
#[inline]
pub fn pulse_scale(time_sec: f32, phase: f32) -> f32 {
    ((time_sec * PULSE_RATE + phase) % TAU).sin() * PULSE_DEPTH + 1.0
}

pub fn draw_nodes<S: DrawSurface + ?Sized>(surface: &mut S, nodes: &[Node], time_sec: f32) {
    for node in nodes {
        let act = node.activation;
        let r = node.radius * pulse_scale(time_sec, node.pulse_phase);

        if act > GLOW_THRESHOLD {
            let core = (act * 1.5).min(1.0);
            let stops = [
                GradientStop {
                    offset: 0.0,
                    color: Rgba::new(GLOW_WHITE, core * 0.5),
                },
                GradientStop {
                    offset: 0.3,
                    color: Rgba::new(GLOW_BLUE, act * 0.4),
                },
                GradientStop {
                    offset: 1.0,
                    color: Rgba::new(GLOW_EDGE, 0.0),
                },
            ];
            surface.fill_radial_glow(node.position, r * 0.5, r + act * GLOW_REACH, &stops);
        }

        surface.fill_circle(
            node.position,
            r,
            Rgba::mix(CORE_COLOR_COLD, CORE_COLOR_HOT, act, CORE_ALPHA_BASE + act * 0.75),
        );

        if act > PIP_THRESHOLD {
            let pip = (act - PIP_THRESHOLD) * 2.0;
            surface.fill_circle(
                node.position,
                r * PIP_RADIUS_FRACTION,
                Rgba::new(PIP_COLOR, pip * 0.8),
            );
        }
    }
}
