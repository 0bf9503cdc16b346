//! Visual effects: hint flashes, celebration particles and light rays.
//!
//! `EffectsState` owns every ephemeral effect. It is advanced once per fixed
//! tick by the game and read by the paint pass; nothing here feeds back into
//! discovery progress.

mod hint;
mod particle;
mod rays;
mod rng;

pub use hint::HintFlash;
pub use particle::Particle;
pub use rays::{ray_intensity, ray_length, star_rays, Ray};
pub use rng::Rng;

use glam::Vec2;

use crate::api::config::GameConfig;
use crate::catalog::Star;

/// Post-completion celebration clock.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Celebration {
    /// Advances by `celebration_step` per tick.
    pub time: f32,
    /// Periodic bursts fired so far (the opening burst not included).
    bursts: u32,
}

/// Container for all visual effects.
pub struct EffectsState {
    pub particles: Vec<Particle>,
    pub flashes: Vec<HintFlash>,
    pub celebration: Option<Celebration>,
    pub rng: Rng,
}

impl EffectsState {
    /// Create a new EffectsState with the given RNG seed.
    pub fn new(seed: u64) -> Self {
        EffectsState {
            particles: Vec::with_capacity(512),
            flashes: Vec::with_capacity(4),
            celebration: None,
            rng: Rng::new(seed.wrapping_add(7919)),
        }
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebration.is_some()
    }

    /// Celebration clock, zero when not celebrating.
    pub fn celebration_time(&self) -> f32 {
        self.celebration.map_or(0.0, |c| c.time)
    }

    /// Start the celebration with an opening burst from every star.
    pub fn start_celebration(&mut self, stars: &[Star], config: &GameConfig) {
        self.celebration = Some(Celebration::default());
        self.burst(stars, config);
    }

    /// Spawn `burst_count` particles from every star in random directions.
    pub fn burst(&mut self, stars: &[Star], config: &GameConfig) {
        for star in stars {
            for _ in 0..config.burst_count {
                let velocity = Vec2::new(
                    self.rng.spread(config.burst_speed),
                    self.rng.spread(config.burst_speed),
                );
                let decay = self.rng.range(config.burst_decay.0, config.burst_decay.1);
                let size = self.rng.range(config.burst_size.0, config.burst_size.1);
                let shimmer = self.rng.range(0.0, std::f32::consts::TAU);
                self.particles
                    .push(Particle::new(star.screen, velocity, decay, size, star.color, shimmer));
            }
        }
    }

    /// Occasional upward sparkle from random stars.
    fn sparkle(&mut self, stars: &[Star], config: &GameConfig) {
        if !self.rng.chance(config.sparkle_tick_chance) {
            return;
        }
        for star in stars {
            if !self.rng.chance(config.sparkle_star_chance) {
                continue;
            }
            let half = config.sparkle_jitter;
            let position = star.screen + Vec2::new(self.rng.spread(half), self.rng.spread(half));
            let velocity = Vec2::new(self.rng.spread(1.0), -self.rng.range(1.0, 3.0));
            let size = self.rng.range(config.sparkle_size.0, config.sparkle_size.1);
            let shimmer = self.rng.range(0.0, std::f32::consts::TAU);
            self.particles.push(Particle::new(
                position,
                velocity,
                config.sparkle_decay,
                size,
                star.color,
                shimmer,
            ));
        }
    }

    /// Add a hint flash over a star.
    pub fn add_flash(&mut self, star: &Star, config: &GameConfig) {
        self.flashes.push(HintFlash::new(
            star.screen,
            config.hint_radius,
            star.color,
            config.hint_fade,
        ));
    }

    /// Advance one tick: fade flashes, run the celebration clock and
    /// integrate particles. Expired entries are swap-removed in place.
    pub fn tick(&mut self, stars: &[Star], config: &GameConfig) {
        let mut i = 0;
        while i < self.flashes.len() {
            if self.flashes[i].tick() {
                i += 1;
            } else {
                self.flashes.swap_remove(i);
            }
        }

        if let Some(mut celebration) = self.celebration {
            celebration.time += config.celebration_step;
            self.sparkle(stars, config);
            let due = (celebration.time / config.burst_interval) as u32;
            if due > celebration.bursts {
                celebration.bursts = due;
                self.burst(stars, config);
            }
            self.celebration = Some(celebration);
        }

        let mut i = 0;
        while i < self.particles.len() {
            if self.particles[i].tick(config.gravity, config.shimmer_step) {
                i += 1;
            } else {
                self.particles.swap_remove(i);
            }
        }
    }

    /// Stop the celebration and drop every effect.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.flashes.clear();
        self.celebration = None;
    }
}
