//! Energy particles travelling along edges whose endpoints disagree.

use crate::constants::{
    PARTICLE_ALPHA_MIN, PARTICLE_ALPHA_SPAN, PARTICLE_FADE_RATE, PARTICLE_SPEED_MIN,
    PARTICLE_SPEED_SPAN,
};
use crate::field::{Edge, Node};
use crate::params::FieldParams;
use rand::Rng;

/// Which endpoint of the edge a particle leaves from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// `edge.from` towards `edge.to`
    Forward,
    /// `edge.to` towards `edge.from`
    Reverse,
}

#[derive(Clone, Debug)]
pub struct EnergyParticle {
    /// Index into the edge list of the generation that spawned it.
    pub edge_index: usize,
    pub progress: f32,
    pub speed: f32,
    pub direction: Direction,
    pub alpha: f32,
}

impl EnergyParticle {
    /// Parameter along `from -> to` for the particle's current progress.
    #[inline]
    pub fn edge_t(&self) -> f32 {
        match self.direction {
            Direction::Forward => self.progress,
            Direction::Reverse => 1.0 - self.progress,
        }
    }

    /// Fade envelope: ramps in over the first fifth of the trip and out over the last.
    #[inline]
    pub fn fade(&self) -> f32 {
        (self.progress * PARTICLE_FADE_RATE)
            .min((1.0 - self.progress) * PARTICLE_FADE_RATE)
            .min(1.0)
            .max(0.0)
    }
}

/// Advance every particle and drop those that completed their trip.
/// Returns how many were retired.
pub fn advance_particles(particles: &mut Vec<EnergyParticle>) -> usize {
    for p in particles.iter_mut() {
        p.progress += p.speed;
    }
    let before = particles.len();
    particles.retain(|p| p.progress < 1.0);
    before - particles.len()
}

/// Spawn particles on edges with a steep activation gradient, up to the cap.
pub fn spawn_particles<R: Rng + ?Sized>(
    nodes: &[Node],
    edges: &[Edge],
    particles: &mut Vec<EnergyParticle>,
    rng: &mut R,
    params: &FieldParams,
) {
    if particles.len() >= params.max_particles {
        return;
    }

    for (i, edge) in edges.iter().enumerate() {
        let (Some(a), Some(b)) = (nodes.get(edge.from), nodes.get(edge.to)) else {
            continue;
        };
        let diff = a.activation - b.activation;
        if diff.abs() <= params.spawn_diff_threshold
            || a.activation.max(b.activation) <= params.spawn_peak_threshold
        {
            continue;
        }
        if rng.gen::<f32>() >= params.spawn_chance {
            continue;
        }

        particles.push(EnergyParticle {
            edge_index: i,
            progress: 0.0,
            speed: PARTICLE_SPEED_MIN + rng.gen::<f32>() * PARTICLE_SPEED_SPAN,
            // energy flows towards the quieter endpoint
            direction: if diff > 0.0 {
                Direction::Forward
            } else {
                Direction::Reverse
            },
            alpha: PARTICLE_ALPHA_MIN + rng.gen::<f32>() * PARTICLE_ALPHA_SPAN,
        });
        if particles.len() >= params.max_particles {
            return;
        }
    }
}
