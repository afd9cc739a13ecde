//! Game balance tunables
//!
//! Every value that shapes difficulty lives here so a run can be re-balanced
//! from JSON without touching the simulation. Velocities and accelerations are
//! expressed per nominal frame (see [`crate::consts::NOMINAL_FPS`]); durations
//! are in milliseconds.

use serde::{Deserialize, Serialize};

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Relaxed,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Relaxed => "Relaxed",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "relaxed" | "easy" => Some(Difficulty::Relaxed),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Per-level speed growth factor for this preset
    pub fn speed_growth(&self) -> f32 {
        match self {
            Difficulty::Relaxed => 1.1,
            Difficulty::Normal => 1.2,
            Difficulty::Hard => 1.3,
        }
    }

    /// Invulnerability granted after a harmful hit
    pub fn invulnerability_ms(&self) -> f64 {
        match self {
            Difficulty::Relaxed => 1500.0,
            Difficulty::Normal => 1000.0,
            Difficulty::Hard => 750.0,
        }
    }
}

/// Vertical motion model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GravityModel {
    /// Constant pull: leaving the ground snaps vertical speed to `pull_speed`,
    /// which then creeps up by `pull_accel` per frame until `max_pull_speed`.
    ConstantPull {
        pull_speed: f32,
        pull_accel: f32,
        max_pull_speed: f32,
    },
    /// Classic accelerating fall, capped at `max_fall_speed`.
    Accelerating { gravity: f32, max_fall_speed: f32 },
}

impl Default for GravityModel {
    fn default() -> Self {
        GravityModel::ConstantPull {
            pull_speed: 5.2,
            pull_accel: 0.02,
            max_pull_speed: 7.0,
        }
    }
}

/// All balance values for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub difficulty: Difficulty,

    // === Scrolling ===
    /// Auto-scroll speed at level 1
    pub base_speed: f32,
    /// Multiplier applied per level
    pub speed_growth: f32,
    /// Auto-scroll never exceeds this
    pub max_speed: f32,

    // === Runner motion ===
    pub gravity: GravityModel,
    /// Launch speed of a jump (against gravity)
    pub jump_speed: f32,
    /// Deceleration applied to a jump while it still moves against gravity
    pub jump_gravity: f32,
    /// Horizontal acceleration per frame while a direction is held
    pub horizontal_accel: f32,
    pub max_speed_left: f32,
    pub max_speed_right: f32,
    /// Horizontal velocity multiplier per frame with no input
    pub horizontal_decay: f32,

    // === Damage ===
    /// Fraction of the runner's box a hazard must cover to register
    pub hazard_hit_fraction: f32,
    /// Fraction of the runner's box outside the play bounds that ends the run
    pub out_of_bounds_fraction: f32,
    pub invulnerability_ms: f64,
    /// Cumulative harmful hits that kill outright
    pub fatal_damage: u8,
    /// Delay between dying and game over
    pub dead_delay_ms: f64,
    /// Downward speed of the dead runner (ignores gravity direction)
    pub dead_fall_speed: f32,

    // === Feedback ===
    pub landing_cooldown_ms: f64,
    pub coin_effect_ms: f64,
    pub heart_effect_ms: f64,
    pub heal_effect_ms: f64,

    // === Generation ===
    /// Generate a new batch when the frontier is closer than this
    pub generation_trigger: f32,
    pub opening_batch: usize,
    pub batch_size: usize,
    /// Empty run-up between batches
    pub batch_gap: f32,
    pub cloud_batch: usize,
    pub cloud_spacing: f32,
    /// Probability of a coin above / below a hazard-free platform
    pub coin_above_chance: f32,
    pub coin_below_chance: f32,
    /// Placement attempts before a coin slot is skipped
    pub coin_attempts: u32,

    // === Hearts ===
    pub heart_interval: u64,
    pub heart_min_ahead: f32,
    pub heart_max_ahead: f32,
    pub heart_min_platform_width: f32,

    // === Windowing ===
    pub platform_evict_distance: f32,
    pub cloud_evict_distance: f32,
    pub collectible_evict_distance: f32,
    pub marker_evict_distance: f32,

    // === Level markers ===
    /// Place a marker once the next level is this many platforms away
    pub marker_lookahead: u32,
    /// Approximate distance covered per platform, used to place markers
    pub marker_spacing: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,

            base_speed: 1.8,
            speed_growth: 1.2,
            max_speed: 6.0,

            gravity: GravityModel::default(),
            jump_speed: 5.0,
            jump_gravity: 0.42,
            horizontal_accel: 0.2,
            max_speed_left: -2.4,
            max_speed_right: 3.2,
            horizontal_decay: 0.82,

            hazard_hit_fraction: 0.3,
            out_of_bounds_fraction: 0.6,
            invulnerability_ms: 1000.0,
            fatal_damage: 3,
            dead_delay_ms: 2000.0,
            dead_fall_speed: 3.0,

            landing_cooldown_ms: 200.0,
            coin_effect_ms: 800.0,
            heart_effect_ms: 800.0,
            heal_effect_ms: 1000.0,

            generation_trigger: 800.0,
            opening_batch: 20,
            batch_size: 12,
            batch_gap: 200.0,
            cloud_batch: 12,
            cloud_spacing: 130.0,
            coin_above_chance: 0.6,
            coin_below_chance: 0.4,
            coin_attempts: 10,

            heart_interval: 25,
            heart_min_ahead: 420.0,
            heart_max_ahead: 1000.0,
            heart_min_platform_width: 110.0,

            platform_evict_distance: 400.0,
            cloud_evict_distance: 400.0,
            collectible_evict_distance: 100.0,
            marker_evict_distance: 200.0,

            marker_lookahead: 15,
            marker_spacing: 150.0,
        }
    }
}

impl Tuning {
    /// Create tuning from a difficulty preset (applies preset defaults)
    pub fn from_preset(preset: Difficulty) -> Self {
        let mut tuning = Self::default();
        tuning.apply_preset(preset);
        tuning
    }

    /// Apply a difficulty preset (updates preset-dependent values)
    pub fn apply_preset(&mut self, preset: Difficulty) {
        self.difficulty = preset;
        self.speed_growth = preset.speed_growth();
        self.invulnerability_ms = preset.invulnerability_ms();

        if preset == Difficulty::Hard {
            self.max_speed = 8.0;
        }
    }

    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Auto-scroll speed for a 1-based level
    pub fn speed_for_level(&self, level: u32) -> f32 {
        let exponent = level.saturating_sub(1).min(i32::MAX as u32) as i32;
        (self.base_speed * self.speed_growth.powi(exponent)).min(self.max_speed)
    }
}
