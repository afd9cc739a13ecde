//! Deterministic simulation module
//!
//! All gameplay logic lives here. Given the same inputs at the same
//! timestamps, a run is reproducible:
//! - Seeded LCG only, reseeded per run
//! - Stable iteration order (by entity id)
//! - No rendering, audio or storage dependencies

pub mod aabb;
pub mod collision;
pub mod generate;
pub mod rng;
pub mod state;
pub mod store;
pub mod tick;

pub use aabb::Aabb;
pub use collision::{Contact, hazard_hit, is_supported, out_of_bounds, resolve_platform};
pub use generate::{HAZARD_CYCLE, Progress, hazard_for_platform};
pub use rng::LcgRng;
pub use state::{
    Cloud, Collectible, CollectibleKind, Effect, EffectKind, GameEvent, GamePhase, GameState,
    GravityDir, Hazard, HazardFace, HazardKind, LevelMarker, Platform, Runner, level_for,
};
pub use store::EntityStore;
pub use tick::{Horizontal, TickInput, frame_scale, tick};
