//! Runtime-tunable game configuration.
//!
//! Every field has a default matching the shipped game. A JSON document may
//! override any subset of fields; missing keys keep their defaults:
//!
//! ```ignore
//! let config = GameConfig::from_json(r#"{ "completion_delay": 2.5 }"#)?;
//! ```
//!
//! Durations are in seconds on the session clock. Per-tick rates (fades,
//! decay, gravity, phase steps) are applied once per fixed timestep.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Configuration for the game, layout and effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Timing ───────────────────────────────────────────────────────────
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Twinkle phase advance per tick.
    pub twinkle_step: f32,
    /// Celebration clock advance per tick.
    pub celebration_step: f32,

    // ── Layout ───────────────────────────────────────────────────────────
    /// Logical design space the catalog positions live in.
    pub design_width: f32,
    pub design_height: f32,
    /// Viewports at or below this width are treated as mobile.
    pub mobile_breakpoint: f32,
    pub header_mobile: f32,
    pub header_desktop: f32,
    pub footer_mobile: f32,
    pub footer_desktop: f32,
    /// Side margin on mobile, where panels flow below the canvas.
    pub mobile_side_margin: f32,
    /// Width reserved for the cultural panel on desktop.
    pub desktop_left_panel: f32,
    /// Width reserved for the star image panel on desktop.
    pub desktop_right_panel: f32,
    /// Smallest usable share of the viewport before falling back to a band.
    pub min_space_fraction: f32,
    /// Fallback vertical band on mobile, as fractions of viewport height.
    pub mobile_fallback_band: (f32, f32),
    /// Fallback horizontal band on desktop, as fractions of viewport width.
    pub desktop_fallback_band: (f32, f32),
    pub mobile_scale: f32,
    pub desktop_scale: f32,

    // ── Interaction ──────────────────────────────────────────────────────
    /// Hit radius for touch input or mobile viewports.
    pub hit_tolerance_touch: f32,
    /// Hit radius for a desktop pointer.
    pub hit_tolerance_pointer: f32,
    pub jiggle_duration: f32,
    /// Peak-to-peak jiggle displacement per axis.
    pub jiggle_amplitude: f32,
    /// Delay between the final discovery and the completion reveal.
    pub completion_delay: f32,

    // ── Hints ────────────────────────────────────────────────────────────
    /// How long a hint request locks out further hints.
    pub hint_duration: f32,
    pub hint_radius: f32,
    /// Opacity lost per tick.
    pub hint_fade: f32,

    // ── Particles ────────────────────────────────────────────────────────
    /// Particles per star in a burst.
    pub burst_count: usize,
    /// Half-range of burst velocity per axis.
    pub burst_speed: f32,
    pub burst_decay: (f32, f32),
    pub burst_size: (f32, f32),
    /// Celebration time between periodic bursts.
    pub burst_interval: f32,
    /// Chance per tick that sparkle spawning runs at all.
    pub sparkle_tick_chance: f32,
    /// Chance per star, once sparkle spawning runs.
    pub sparkle_star_chance: f32,
    pub sparkle_jitter: f32,
    pub sparkle_decay: f32,
    pub sparkle_size: (f32, f32),
    /// Downward acceleration per tick.
    pub gravity: f32,
    /// Shimmer phase advance per tick.
    pub shimmer_step: f32,

    // ── Light rays ───────────────────────────────────────────────────────
    pub ray_count: u32,

    // ── Misc ─────────────────────────────────────────────────────────────
    pub rng_seed: u64,
    /// Ambient points generated when the catalog supplies none.
    pub background_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            twinkle_step: 0.02,
            celebration_step: 0.02,

            design_width: 800.0,
            design_height: 600.0,
            mobile_breakpoint: 768.0,
            header_mobile: 90.0,
            header_desktop: 120.0,
            footer_mobile: 60.0,
            footer_desktop: 80.0,
            mobile_side_margin: 20.0,
            desktop_left_panel: 390.0,
            desktop_right_panel: 320.0,
            min_space_fraction: 0.3,
            mobile_fallback_band: (0.25, 0.75),
            desktop_fallback_band: (0.35, 0.65),
            mobile_scale: 0.8,
            desktop_scale: 0.9,

            hit_tolerance_touch: 80.0,
            hit_tolerance_pointer: 50.0,
            jiggle_duration: 0.5,
            jiggle_amplitude: 3.0,
            completion_delay: 1.0,

            hint_duration: 0.8,
            hint_radius: 150.0,
            hint_fade: 0.03,

            burst_count: 15,
            burst_speed: 2.0,
            burst_decay: (0.01, 0.03),
            burst_size: (2.0, 5.0),
            burst_interval: 10.0,
            sparkle_tick_chance: 0.3,
            sparkle_star_chance: 0.1,
            sparkle_jitter: 10.0,
            sparkle_decay: 0.015,
            sparkle_size: (1.0, 3.0),
            gravity: 0.1,
            shimmer_step: 0.2,

            ray_count: 8,

            rng_seed: 42,
            background_count: 150,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall the loop or break probability sampling.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("fixed_dt", self.fixed_dt),
            ("design_width", self.design_width),
            ("design_height", self.design_height),
            ("hint_fade", self.hint_fade),
            ("burst_interval", self.burst_interval),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::InvalidValue { field, value, expected: "> 0" });
            }
        }

        let unit = [
            ("min_space_fraction", self.min_space_fraction),
            ("sparkle_tick_chance", self.sparkle_tick_chance),
            ("sparkle_star_chance", self.sparkle_star_chance),
        ];
        for (field, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidValue { field, value, expected: "0..=1" });
            }
        }

        let durations = [
            ("jiggle_duration", self.jiggle_duration),
            ("hint_duration", self.hint_duration),
            ("completion_delay", self.completion_delay),
        ];
        for (field, value) in durations {
            if !(value >= 0.0) {
                return Err(ConfigError::InvalidValue { field, value, expected: ">= 0" });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "completion_delay": 2.5, "burst_count": 4 }"#)
            .unwrap();
        assert_eq!(config.completion_delay, 2.5);
        assert_eq!(config.burst_count, 4);
        assert_eq!(config.hint_radius, 150.0);
        assert_eq!(config.mobile_fallback_band, (0.25, 0.75));
    }

    #[test]
    fn rejects_zero_timestep() {
        let err = GameConfig::from_json(r#"{ "fixed_dt": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "fixed_dt", .. }));
    }

    #[test]
    fn rejects_probability_above_one() {
        let err = GameConfig::from_json(r#"{ "sparkle_star_chance": 1.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { field: "sparkle_star_chance", .. }
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
