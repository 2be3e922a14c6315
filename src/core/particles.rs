//! Floating particles behind the hero
//!
//! Positions and timings come from a seeded generator so the server and the
//! hydrating client produce identical markup.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub const PARTICLE_COUNT: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the container width
    pub left: f64,
    /// Seconds for one rise
    pub duration: f64,
    /// Seconds before the first rise
    pub delay: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {}%; animation-duration: {}s; animation-delay: {}s;",
            self.left, self.duration, self.delay
        )
    }
}

fn tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// The hero's particles, drawn in index order from a fixed seed
pub fn particles() -> impl Iterator<Item = Particle> {
    let mut rng = SmallRng::seed_from_u64(PARTICLE_COUNT as u64);
    let all: Vec<Particle> = (0..PARTICLE_COUNT)
        .map(|_| Particle {
            left: tenths(rng.gen_range(0.0..100.0)),
            duration: tenths(rng.gen_range(10.0..20.0)),
            delay: tenths(rng.gen_range(0.0..5.0)),
        })
        .collect();
    all.into_iter()
}
