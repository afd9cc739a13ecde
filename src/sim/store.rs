//! Entity store
//!
//! Live platforms, collectibles, clouds, effects and level markers. The store
//! only holds a window around the camera: generation appends ahead of the
//! runner, eviction drops whatever has scrolled far enough behind.

use serde::{Deserialize, Serialize};

use super::state::{Cloud, Collectible, CollectibleKind, Effect, LevelMarker, Platform};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityStore {
    /// Ordered by id (and therefore by x)
    pub platforms: Vec<Platform>,
    pub collectibles: Vec<Collectible>,
    pub clouds: Vec<Cloud>,
    pub effects: Vec<Effect>,
    pub markers: Vec<LevelMarker>,
    /// x where the next platform batch starts
    pub platform_frontier: f32,
    /// x where the next cloud batch starts
    pub cloud_frontier: f32,
    last_platform_id: u32,
    last_collectible_id: u32,
}

impl EntityStore {
    /// Allocate the next platform id (first id is 1)
    pub fn next_platform_id(&mut self) -> u32 {
        self.last_platform_id += 1;
        self.last_platform_id
    }

    pub fn next_collectible_id(&mut self) -> u32 {
        self.last_collectible_id += 1;
        self.last_collectible_id
    }

    pub fn needs_platforms(&self, runner_x: f32, trigger: f32) -> bool {
        self.platform_frontier - runner_x < trigger
    }

    pub fn needs_clouds(&self, runner_x: f32, trigger: f32) -> bool {
        self.cloud_frontier - runner_x < trigger
    }

    pub fn platform(&self, id: u32) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.id == id)
    }

    /// Uncollected items of one kind
    pub fn live(&self, kind: CollectibleKind) -> impl Iterator<Item = &Collectible> {
        self.collectibles
            .iter()
            .filter(move |c| c.kind == kind && !c.collected)
    }

    /// Drop everything that has scrolled far enough behind the camera
    pub fn evict_behind(&mut self, camera_x: f32, tuning: &Tuning) {
        let before = self.platforms.len();
        self.platforms
            .retain(|p| p.pos.x > camera_x - tuning.platform_evict_distance);
        self.clouds
            .retain(|c| c.pos.x > camera_x - tuning.cloud_evict_distance);
        self.collectibles
            .retain(|c| !c.collected && c.pos.x > camera_x - tuning.collectible_evict_distance);
        self.markers
            .retain(|m| m.x > camera_x - tuning.marker_evict_distance);

        let evicted = before - self.platforms.len();
        if evicted > 0 {
            log::trace!("Evicted {} platforms behind x={:.0}", evicted, camera_x);
        }
    }

    pub fn expire_effects(&mut self, now_ms: f64) {
        self.effects.retain(|e| !e.is_expired(now_ms));
    }

    /// Keep iteration order stable (by id)
    pub fn normalize_order(&mut self) {
        self.platforms.sort_by_key(|p| p.id);
        self.collectibles.sort_by_key(|c| c.id);
    }
}
