//! The synapse field: generation, per-tick update order and draw order.

use crate::activation;
use crate::field::{self, Bounds, Edge, Node};
use crate::params::{FieldParams, ViewportTier};
use crate::particles::{self, EnergyParticle};
use crate::render::{self, DrawSurface};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Pointer position in surface-local logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Pointer {
    /// Off-surface or touch released; treated as infinitely far away.
    #[default]
    Absent,
    At(Vec2),
}

impl Pointer {
    #[inline]
    pub fn position(self) -> Option<Vec2> {
        match self {
            Pointer::Absent => None,
            Pointer::At(p) => Some(p),
        }
    }
}

/// Everything the field owns between regenerations.
///
/// Particles index into `edges`, so the two are only ever replaced together.
pub struct SynapseField {
    pub params: FieldParams,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    particles: Vec<EnergyParticle>,
    bounds: Option<Bounds>,
    tier: ViewportTier,
    viewport: Vec2,
    snapshot: Vec<f32>,
    rng: StdRng,
}

impl SynapseField {
    pub fn new(params: FieldParams, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(params: FieldParams, rng: StdRng) -> Self {
        Self {
            params,
            nodes: Vec::new(),
            edges: Vec::new(),
            particles: Vec::new(),
            bounds: None,
            tier: ViewportTier::Wide,
            viewport: Vec2::ZERO,
            snapshot: Vec::new(),
            rng,
        }
    }

    /// Replace nodes, edges and particles with a fresh field for a `width` x `height` viewport.
    pub fn regenerate(&mut self, width: f32, height: f32) {
        self.particles.clear();
        self.viewport = Vec2::new(width, height);
        self.tier = self.params.tier_for_width(width);
        self.bounds = Bounds::inset(width, height, self.params.margin);

        let tier = self.params.tier(self.tier);
        match self.bounds {
            Some(bounds) => {
                self.nodes = field::generate_nodes(&mut self.rng, bounds, tier, &self.params);
                self.edges = field::generate_edges(&mut self.nodes, tier.connection_distance);
            }
            None => {
                self.nodes.clear();
                self.edges.clear();
            }
        }

        log::debug!(
            "[field] regenerated {:.0}x{:.0} tier={:?} nodes={}/{} edges={}",
            width,
            height,
            self.tier,
            self.nodes.len(),
            tier.node_count,
            self.edges.len()
        );
    }

    /// One simulation step: motion, pointer and decay, propagation, ambient firing, particles.
    pub fn tick(&mut self, pointer: Pointer) {
        if let Some(bounds) = self.bounds {
            field::step_nodes(&mut self.nodes, bounds);
        }
        activation::stimulate_and_decay(&mut self.nodes, pointer.position(), &self.params);
        activation::propagate(&mut self.nodes, &mut self.snapshot, &self.params);
        activation::ambient_fire(&mut self.nodes, &mut self.rng, &self.params);
        particles::advance_particles(&mut self.particles);
        particles::spawn_particles(
            &self.nodes,
            &self.edges,
            &mut self.particles,
            &mut self.rng,
            &self.params,
        );
    }

    /// Paint edges, then particles, then nodes.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S, time_sec: f32) {
        render::draw_edges(&mut *surface, &self.nodes, &self.edges);
        render::draw_particles(&mut *surface, &self.nodes, &self.edges, &self.particles);
        render::draw_nodes(surface, &self.nodes, time_sec);
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn particles(&self) -> &[EnergyParticle] {
        &self.particles
    }

    pub fn tier(&self) -> ViewportTier {
        self.tier
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_viewport_yields_empty_field() {
        let mut f = SynapseField::new(FieldParams::default(), 1);
        f.regenerate(80.0, 80.0);
        assert!(f.nodes().is_empty());
        assert!(f.edges().is_empty());
        f.tick(Pointer::At(Vec2::new(40.0, 40.0)));
        assert!(f.particles().is_empty());
    }

    #[test]
    fn same_seed_same_field() {
        let mut a = SynapseField::new(FieldParams::default(), 42);
        let mut b = SynapseField::new(FieldParams::default(), 42);
        a.regenerate(800.0, 600.0);
        b.regenerate(800.0, 600.0);
        assert_eq!(a.nodes().len(), b.nodes().len());
        assert_eq!(a.edges(), b.edges());
    }

    #[test]
    fn absent_pointer_is_default() {
        assert_eq!(Pointer::default(), Pointer::Absent);
        assert_eq!(Pointer::Absent.position(), None);
    }
}
