//! Magnetic hover: elements lean towards a nearby pointer and spring back.

use crate::constants::*;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnetParams {
    /// Fraction of the pointer offset the element follows.
    pub strength: f32,
    /// Pointer distance from the element center beyond which the pull stops.
    pub radius: f32,
    pub stiffness: f32,
    pub damping: f32,
}

impl Default for MagnetParams {
    fn default() -> Self {
        Self {
            strength: MAGNET_STRENGTH,
            radius: MAGNET_RADIUS,
            stiffness: MAGNET_STIFFNESS,
            damping: MAGNET_DAMPING,
        }
    }
}

/// Offset an element centered at `center` should move to for `pointer`.
#[inline]
pub fn magnetic_target(center: Vec2, pointer: Vec2, params: &MagnetParams) -> Vec2 {
    let delta = pointer - center;
    if delta.length() < params.radius {
        delta * params.strength
    } else {
        Vec2::ZERO
    }
}

/// Unit-mass damped spring in 2D.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spring2 {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Spring2 {
    /// Integrate towards `target` over `dt_sec`, in fixed sub-steps.
    pub fn step(&mut self, target: Vec2, dt_sec: f32, params: &MagnetParams) {
        let mut remaining = dt_sec.clamp(0.0, MAGNET_MAX_DT_SEC);
        while remaining > 0.0 {
            let h = remaining.min(MAGNET_SUBSTEP_SEC);
            let accel =
                (target - self.position) * params.stiffness - self.velocity * params.damping;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
    }

    pub fn is_settled(&self, target: Vec2) -> bool {
        self.position.distance(target) < MAGNET_REST_EPSILON
            && self.velocity.length() < MAGNET_REST_EPSILON
    }

    /// Jump to `target` with no residual motion.
    pub fn snap(&mut self, target: Vec2) {
        self.position = target;
        self.velocity = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_scales_offset_inside_radius() {
        let p = MagnetParams::default();
        let t = magnetic_target(Vec2::ZERO, Vec2::new(40.0, -20.0), &p);
        assert!((t - Vec2::new(12.0, -6.0)).length() < 1e-5);
    }

    #[test]
    fn target_is_zero_outside_radius() {
        let p = MagnetParams::default();
        assert_eq!(magnetic_target(Vec2::ZERO, Vec2::new(80.0, 0.0), &p), Vec2::ZERO);
        assert_eq!(magnetic_target(Vec2::ZERO, Vec2::new(300.0, 300.0), &p), Vec2::ZERO);
    }

    #[test]
    fn spring_converges_on_target() {
        let p = MagnetParams::default();
        let mut s = Spring2::default();
        let target = Vec2::new(10.0, -5.0);
        for _ in 0..240 {
            s.step(target, 1.0 / 60.0, &p);
        }
        assert!(s.is_settled(target), "spring at {:?}", s.position);
    }

    #[test]
    fn huge_frame_gaps_are_clamped() {
        let p = MagnetParams::default();
        let mut s = Spring2::default();
        s.step(Vec2::new(10.0, 0.0), 30.0, &p);
        assert!(s.position.x.is_finite());
        assert!(s.position.x.abs() < 20.0);
    }
}
