// Host-side tests for tuning constants and the relationships between them.

use synapse_core::constants::*;
use synapse_core::FieldParams;

#[test]
fn narrow_tier_is_cheaper_than_wide() {
    assert!(NODE_COUNT_NARROW < NODE_COUNT_WIDE);
    assert!(CONNECTION_DISTANCE_NARROW < CONNECTION_DISTANCE_WIDE);
}

#[test]
fn spacing_allows_connections() {
    // nodes closer than the spacing never exist, so edges need a longer reach
    assert!(MIN_NODE_SPACING < CONNECTION_DISTANCE_NARROW);
}

#[test]
fn decay_is_a_slow_exponential() {
    assert!(ACTIVATION_DECAY > 0.9 && ACTIVATION_DECAY < 1.0);
    assert!(ACTIVATION_EPSILON > 0.0 && ACTIVATION_EPSILON < PROPAGATION_THRESHOLD);
}

#[test]
fn boosts_never_exceed_unit_activation() {
    assert!(AMBIENT_FIRE_MIN + AMBIENT_FIRE_SPAN <= 1.0);
    assert!(PROPAGATION_STRENGTH < 1.0);
    // a propagated pulse cannot itself re-propagate
    assert!(PROPAGATION_STRENGTH < PROPAGATION_THRESHOLD);
}

#[test]
fn particle_bands_are_sane() {
    assert!(PARTICLE_SPEED_MIN > 0.0);
    assert!(PARTICLE_ALPHA_MIN + PARTICLE_ALPHA_SPAN <= 1.0);
    assert!(SPAWN_DIFF_THRESHOLD < SPAWN_PEAK_THRESHOLD);
    assert!(MAX_PARTICLES > 0);
}

#[test]
fn defaults_mirror_constants() {
    let p = FieldParams::default();
    assert_eq!(p.wide.node_count, NODE_COUNT_WIDE);
    assert_eq!(p.narrow.connection_distance, CONNECTION_DISTANCE_NARROW);
    assert_eq!(p.max_particles, MAX_PARTICLES);
    assert_eq!(p.decay, ACTIVATION_DECAY);
}

#[test]
fn magnet_substep_is_stable_for_spring() {
    // semi-implicit Euler needs omega * h well below 2
    let omega = MAGNET_STIFFNESS.sqrt();
    assert!(omega * MAGNET_SUBSTEP_SEC < 0.5);
}
