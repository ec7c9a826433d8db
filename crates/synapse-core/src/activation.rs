//! Activation engine.
//!
//! Every update raises activation through `max` with the current value and
//! never sums contributions, so values stay inside [0, 1].

use crate::field::Node;
use crate::params::FieldParams;
use glam::Vec2;
use rand::Rng;

/// Boost nodes near the pointer, then decay and snap small values to zero.
pub fn stimulate_and_decay(nodes: &mut [Node], pointer: Option<Vec2>, params: &FieldParams) {
    let radius = params.pointer_radius;
    for node in nodes.iter_mut() {
        if let Some(p) = pointer {
            let dist = node.position.distance(p);
            if dist < radius {
                let intensity = 1.0 - dist / radius;
                node.activation = node.activation.max(intensity * intensity);
            }
        }

        node.activation *= params.decay;
        if node.activation < params.epsilon {
            node.activation = 0.0;
        }
    }
}

/// Push a fraction of each sufficiently active node's activation to its neighbors.
///
/// Reads from a snapshot taken before the pass so the result does not depend
/// on iteration order. `snapshot` is scratch space reused across ticks.
pub fn propagate(nodes: &mut [Node], snapshot: &mut Vec<f32>, params: &FieldParams) {
    snapshot.clear();
    snapshot.extend(nodes.iter().map(|n| n.activation));

    for i in 0..nodes.len() {
        let source = snapshot[i];
        if source <= params.propagation_threshold {
            continue;
        }
        let transfer = source * params.propagation_strength;
        for k in 0..nodes[i].connections.len() {
            let j = nodes[i].connections[k];
            if let Some(n) = nodes.get_mut(j) {
                n.activation = n.activation.max(transfer);
            }
        }
    }
}

/// With a small per-tick chance, fire one random node. Returns the fired index.
pub fn ambient_fire<R: Rng + ?Sized>(
    nodes: &mut [Node],
    rng: &mut R,
    params: &FieldParams,
) -> Option<usize> {
    if nodes.is_empty() || rng.gen::<f32>() >= params.ambient_probability {
        return None;
    }
    let idx = rng.gen_range(0..nodes.len());
    let level = params.ambient_min + rng.gen::<f32>() * params.ambient_span;
    let node = &mut nodes[idx];
    node.activation = node.activation.max(level);
    Some(idx)
}
