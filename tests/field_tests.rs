// Host-side integration tests for the synapse field simulation.

use glam::Vec2;
use synapse_core::{FieldParams, Pointer, SynapseField, ViewportTier};

fn field(params: FieldParams, seed: u64) -> SynapseField {
    SynapseField::new(params, seed)
}

fn sweeping_pointer(tick: usize, w: f32, h: f32) -> Pointer {
    let t = tick as f32 * 0.05;
    Pointer::At(Vec2::new(
        w * 0.5 + (t.cos() * w * 0.35),
        h * 0.5 + ((t * 1.3).sin() * h * 0.35),
    ))
}

#[test]
fn wide_viewport_respects_spacing_and_edge_threshold() {
    let params = FieldParams::default();
    let mut f = field(params.clone(), 42);
    f.regenerate(800.0, 600.0);
    assert_eq!(f.tier(), ViewportTier::Wide);

    let nodes = f.nodes();
    assert!(!nodes.is_empty());
    assert!(nodes.len() <= params.wide.node_count);
    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            assert!(a.position.distance(b.position) >= params.min_node_spacing);
        }
    }

    let threshold = params.wide.connection_distance;
    for e in f.edges() {
        let d = nodes[e.from].position.distance(nodes[e.to].position);
        assert!(d < threshold, "edge {}-{} spans {d}", e.from, e.to);
        assert!(e.opacity > 0.0 && e.opacity <= 1.0);
        assert!((e.opacity - (1.0 - d / threshold)).abs() < 1e-5);
        assert!(nodes[e.from].connections.contains(&e.to));
        assert!(nodes[e.to].connections.contains(&e.from));
    }
}

#[test]
fn resize_to_narrow_regenerates_and_clears_particles() {
    let params = FieldParams {
        spawn_chance: 1.0,
        ..FieldParams::default()
    };
    let mut f = field(params.clone(), 7);
    f.regenerate(800.0, 600.0);
    for i in 0..300 {
        f.tick(sweeping_pointer(i, 800.0, 600.0));
        if !f.particles().is_empty() {
            break;
        }
    }
    assert!(!f.particles().is_empty(), "expected live particles before resize");

    f.regenerate(400.0, 300.0);
    assert_eq!(f.tier(), ViewportTier::Narrow);
    assert!(f.particles().is_empty());
    assert!(f.nodes().len() <= params.narrow.node_count);
    let nodes = f.nodes();
    for e in f.edges() {
        assert!(e.from < nodes.len() && e.to < nodes.len());
        let d = nodes[e.from].position.distance(nodes[e.to].position);
        assert!(d < params.narrow.connection_distance);
    }

    // ticking after the swap never touches a stale edge
    for i in 0..200 {
        f.tick(sweeping_pointer(i, 400.0, 300.0));
        for p in f.particles() {
            assert!(p.edge_index < f.edges().len());
        }
    }
}

#[test]
fn particle_cap_holds_and_live_particles_are_unfinished() {
    let params = FieldParams {
        spawn_chance: 1.0,
        max_particles: 12,
        ..FieldParams::default()
    };
    let mut f = field(params, 3);
    f.regenerate(1024.0, 768.0);
    let mut peak = 0;
    for i in 0..600 {
        f.tick(sweeping_pointer(i, 1024.0, 768.0));
        assert!(f.particles().len() <= 12);
        peak = peak.max(f.particles().len());
        for p in f.particles() {
            assert!(p.progress < 1.0);
        }
    }
    assert!(peak > 0);
}

#[test]
fn activations_stay_in_unit_range() {
    let params = FieldParams {
        ambient_probability: 0.2,
        ..FieldParams::default()
    };
    let mut f = field(params, 99);
    f.regenerate(1280.0, 720.0);
    for i in 0..500 {
        f.tick(sweeping_pointer(i, 1280.0, 720.0));
        for n in f.nodes() {
            assert!(n.activation >= 0.0 && n.activation <= 1.0, "activation {}", n.activation);
        }
    }
}

#[test]
fn decay_only_ticks_never_increase_activation() {
    let params = FieldParams {
        ambient_probability: 0.0,
        propagation_threshold: 2.0,
        ..FieldParams::default()
    };
    let mut f = field(params, 5);
    f.regenerate(800.0, 600.0);
    for (i, n) in f.nodes_mut().iter_mut().enumerate() {
        n.activation = (i % 10) as f32 / 10.0;
    }
    for _ in 0..400 {
        let before: Vec<f32> = f.nodes().iter().map(|n| n.activation).collect();
        f.tick(Pointer::Absent);
        for (b, n) in before.iter().zip(f.nodes()) {
            assert!(n.activation <= *b);
        }
    }
    assert!(f.nodes().iter().all(|n| n.activation == 0.0));
}

#[test]
fn nodes_stay_inside_margin_while_drifting() {
    let params = FieldParams::default();
    let margin = params.margin;
    let mut f = field(params, 21);
    f.regenerate(700.0, 500.0);
    for _ in 0..2000 {
        f.tick(Pointer::Absent);
    }
    for n in f.nodes() {
        assert!(n.position.x >= margin && n.position.x <= 700.0 - margin);
        assert!(n.position.y >= margin && n.position.y <= 500.0 - margin);
    }
}
