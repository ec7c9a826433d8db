use crate::constants::*;

/// Coarse viewport classification used to scale node density.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportTier {
    Narrow,
    Wide,
}

/// Per-tier generation settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TierParams {
    pub node_count: usize,
    pub connection_distance: f32,
}

#[derive(Clone, Debug)]
pub struct FieldParams {
    pub margin: f32,
    pub narrow_breakpoint: f32,
    pub narrow: TierParams,
    pub wide: TierParams,
    pub min_node_spacing: f32,
    pub attempts_per_node: usize,

    pub pointer_radius: f32,
    pub decay: f32,
    pub epsilon: f32,
    pub propagation_threshold: f32,
    pub propagation_strength: f32,
    pub ambient_probability: f32,
    pub ambient_min: f32,
    pub ambient_span: f32,

    pub max_particles: usize,
    pub spawn_diff_threshold: f32,
    pub spawn_peak_threshold: f32,
    pub spawn_chance: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            margin: MARGIN,
            narrow_breakpoint: NARROW_BREAKPOINT,
            narrow: TierParams {
                node_count: NODE_COUNT_NARROW,
                connection_distance: CONNECTION_DISTANCE_NARROW,
            },
            wide: TierParams {
                node_count: NODE_COUNT_WIDE,
                connection_distance: CONNECTION_DISTANCE_WIDE,
            },
            min_node_spacing: MIN_NODE_SPACING,
            attempts_per_node: PLACEMENT_ATTEMPTS_PER_NODE,
            pointer_radius: POINTER_RADIUS,
            decay: ACTIVATION_DECAY,
            epsilon: ACTIVATION_EPSILON,
            propagation_threshold: PROPAGATION_THRESHOLD,
            propagation_strength: PROPAGATION_STRENGTH,
            ambient_probability: AMBIENT_FIRE_PROBABILITY,
            ambient_min: AMBIENT_FIRE_MIN,
            ambient_span: AMBIENT_FIRE_SPAN,
            max_particles: MAX_PARTICLES,
            spawn_diff_threshold: SPAWN_DIFF_THRESHOLD,
            spawn_peak_threshold: SPAWN_PEAK_THRESHOLD,
            spawn_chance: SPAWN_CHANCE,
        }
    }
}

impl FieldParams {
    #[inline]
    pub fn tier_for_width(&self, width: f32) -> ViewportTier {
        if width < self.narrow_breakpoint {
            ViewportTier::Narrow
        } else {
            ViewportTier::Wide
        }
    }

    #[inline]
    pub fn tier(&self, tier: ViewportTier) -> TierParams {
        match tier {
            ViewportTier::Narrow => self.narrow,
            ViewportTier::Wide => self.wide,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_splits_tiers() {
        let p = FieldParams::default();
        assert_eq!(p.tier_for_width(400.0), ViewportTier::Narrow);
        assert_eq!(p.tier_for_width(639.9), ViewportTier::Narrow);
        assert_eq!(p.tier_for_width(640.0), ViewportTier::Wide);
        assert_eq!(p.tier_for_width(1920.0), ViewportTier::Wide);
    }

    #[test]
    fn narrow_tier_is_sparser() {
        let p = FieldParams::default();
        let n = p.tier(ViewportTier::Narrow);
        let w = p.tier(ViewportTier::Wide);
        assert!(n.node_count < w.node_count);
        assert!(n.connection_distance < w.connection_distance);
    }
}
