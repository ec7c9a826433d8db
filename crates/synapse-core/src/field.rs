//! Field generation: node placement, proximity edges and per-tick motion.
//!
//! Nodes live inside the margin-inset rectangle of the viewport. Edges are
//! derived once per generation from pairwise distances and never change
//! until the next regeneration.

use crate::constants::{NODE_RADIUS_MIN, NODE_RADIUS_SPAN, NODE_SPEED_SPAN};
use crate::params::{FieldParams, TierParams};
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct Node {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub activation: f32,
    /// Offset into the decorative radius pulse; has no effect on simulation.
    pub pulse_phase: f32,
    pub connections: SmallVec<[usize; 8]>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub opacity: f32,
}

/// Margin-inset rectangle nodes are confined to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Returns `None` when the viewport is too small to leave any room inside the margin.
    pub fn inset(width: f32, height: f32, margin: f32) -> Option<Self> {
        let min = Vec2::splat(margin);
        let max = Vec2::new(width - margin, height - margin);
        (max.x > min.x && max.y > min.y).then_some(Self { min, max })
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Rejection-sample up to `tier.node_count` nodes at least `min_node_spacing` apart.
///
/// Stops after `node_count * attempts_per_node` draws; an under-filled set is
/// a normal outcome.
pub fn generate_nodes<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: Bounds,
    tier: TierParams,
    params: &FieldParams,
) -> Vec<Node> {
    let target = tier.node_count;
    let budget = target * params.attempts_per_node;
    let min_sq = params.min_node_spacing * params.min_node_spacing;
    let size = bounds.size();
    let mut nodes: Vec<Node> = Vec::with_capacity(target);
    let mut attempts = 0usize;

    while nodes.len() < target && attempts < budget {
        attempts += 1;
        let candidate = bounds.min + Vec2::new(rng.gen::<f32>() * size.x, rng.gen::<f32>() * size.y);
        if nodes
            .iter()
            .any(|n| n.position.distance_squared(candidate) < min_sq)
        {
            continue;
        }
        nodes.push(Node {
            position: candidate,
            velocity: Vec2::new(
                (rng.gen::<f32>() - 0.5) * NODE_SPEED_SPAN,
                (rng.gen::<f32>() - 0.5) * NODE_SPEED_SPAN,
            ),
            radius: NODE_RADIUS_MIN + rng.gen::<f32>() * NODE_RADIUS_SPAN,
            activation: 0.0,
            pulse_phase: rng.gen::<f32>() * TAU,
            connections: SmallVec::new(),
        });
    }

    if nodes.len() < target {
        log::debug!(
            "[field] placed {}/{} nodes after {} attempts",
            nodes.len(),
            target,
            attempts
        );
    }
    nodes
}

/// Connect every pair closer than `max_dist` and record adjacency on both nodes.
///
/// This is the only quadratic step and belongs to generation, never to a tick.
pub fn generate_edges(nodes: &mut [Node], max_dist: f32) -> Vec<Edge> {
    let mut edges = Vec::new();
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let dist = nodes[i].position.distance(nodes[j].position);
            if dist < max_dist {
                nodes[i].connections.push(j);
                nodes[j].connections.push(i);
                edges.push(Edge {
                    from: i,
                    to: j,
                    opacity: 1.0 - dist / max_dist,
                });
            }
        }
    }
    edges
}

/// Drift every node by its velocity, bouncing off the bounds.
pub fn step_nodes(nodes: &mut [Node], bounds: Bounds) {
    for node in nodes.iter_mut() {
        node.position += node.velocity;

        if node.position.x < bounds.min.x || node.position.x > bounds.max.x {
            node.velocity.x = -node.velocity.x;
        }
        if node.position.y < bounds.min.y || node.position.y > bounds.max.y {
            node.velocity.y = -node.velocity.y;
        }
        node.position = node.position.clamp(bounds.min, bounds.max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn node_at(x: f32, y: f32) -> Node {
        Node {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            radius: 2.0,
            activation: 0.0,
            pulse_phase: 0.0,
            connections: SmallVec::new(),
        }
    }

    #[test]
    fn inset_rejects_tiny_viewports() {
        assert!(Bounds::inset(100.0, 600.0, 50.0).is_none());
        assert!(Bounds::inset(800.0, 90.0, 50.0).is_none());
        let b = Bounds::inset(800.0, 600.0, 50.0).unwrap();
        assert_eq!(b.min, Vec2::new(50.0, 50.0));
        assert_eq!(b.max, Vec2::new(750.0, 550.0));
    }

    #[test]
    fn placed_nodes_respect_bounds_and_spacing() {
        let params = FieldParams::default();
        let bounds = Bounds::inset(800.0, 600.0, params.margin).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let nodes = generate_nodes(&mut rng, bounds, params.wide, &params);
        assert!(!nodes.is_empty());
        assert!(nodes.len() <= params.wide.node_count);
        for (i, a) in nodes.iter().enumerate() {
            assert!(a.position.cmpge(bounds.min).all() && a.position.cmple(bounds.max).all());
            assert!(a.radius >= 1.5 && a.radius < 3.5);
            assert!(a.velocity.x.abs() <= 0.15 && a.velocity.y.abs() <= 0.15);
            for b in &nodes[i + 1..] {
                assert!(a.position.distance(b.position) >= params.min_node_spacing);
            }
        }
    }

    #[test]
    fn crowded_bounds_underfill_without_error() {
        let params = FieldParams::default();
        // 60x60 usable area fits only a handful of nodes 40 apart
        let bounds = Bounds::inset(160.0, 160.0, params.margin).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let nodes = generate_nodes(&mut rng, bounds, params.wide, &params);
        assert!(nodes.len() < params.wide.node_count);
        assert!(!nodes.is_empty());
    }

    #[test]
    fn edges_connect_only_close_pairs_symmetrically() {
        let mut nodes = vec![node_at(0.0, 0.0), node_at(100.0, 0.0), node_at(400.0, 0.0)];
        let edges = generate_edges(&mut nodes, 150.0);
        assert_eq!(edges.len(), 1);
        let e = edges[0];
        assert_eq!((e.from, e.to), (0, 1));
        assert!((e.opacity - (1.0 - 100.0 / 150.0)).abs() < 1e-6);
        assert_eq!(nodes[0].connections.as_slice(), &[1]);
        assert_eq!(nodes[1].connections.as_slice(), &[0]);
        assert!(nodes[2].connections.is_empty());
    }

    #[test]
    fn nodes_bounce_off_bounds() {
        let bounds = Bounds::inset(200.0, 200.0, 50.0).unwrap();
        let mut nodes = vec![node_at(149.9, 100.0)];
        nodes[0].velocity = Vec2::new(0.3, 0.0);
        step_nodes(&mut nodes, bounds);
        assert_eq!(nodes[0].position.x, 150.0);
        assert!(nodes[0].velocity.x < 0.0);
        step_nodes(&mut nodes, bounds);
        assert!(nodes[0].position.x < 150.0);
    }
}
