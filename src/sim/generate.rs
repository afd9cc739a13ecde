//! Level generation
//!
//! Platforms, hazards, coins, hearts and clouds are laid out ahead of the
//! runner in batches. Every random draw comes from the run's [`LcgRng`] in a
//! fixed order, so identical runs produce identical courses.

use glam::Vec2;
use rand::Rng;
use std::ops::Range;

use super::aabb::Aabb;
use super::rng::LcgRng;
use super::state::{Cloud, Collectible, CollectibleKind, Hazard, HazardFace, HazardKind, Platform};
use super::store::EntityStore;
use crate::consts::*;
use crate::tuning::Tuning;

/// Opening platforms: (x, y, width multiplier)
const OPENING_LAYOUT: [(f32, f32, f32); 5] = [
    (0.0, 317.0, 2.0),
    (170.0, 100.0, 1.0),
    (330.0, 240.0, 1.4),
    (480.0, 110.0, 1.0),
    (640.0, 200.0, 1.0),
];

/// First generated batch starts here
const OPENING_BATCH_X: f32 = 800.0;

/// Bonus coin rows: (platform index in the opening course, coin count)
const BONUS_COIN_ROWS: [(usize, usize); 3] = [(1, 5), (3, 3), (6, 6)];

const OPENING_CLOUDS: usize = 20;

/// Nominal platform width before the size ratio is applied
const BASE_PLATFORM_WIDTH: f32 = 100.0;
/// Platforms narrow by up to this much as difficulty ramps
const WIDTH_RAMP: f32 = 30.0;
/// Platforms passed before difficulty saturates
const DIFFICULTY_RAMP_PLATFORMS: f32 = 600.0;
/// Below this score, platforms get wider
const EARLY_BONUS_SCORE: u64 = 50;
const EARLY_BONUS_PER_POINT: f32 = 0.4;
const WIDTH_JITTER: f32 = 6.0;
/// Horizontal overlap between consecutive platforms, at zero and full difficulty
const STEP_OVERLAP_EASY: f32 = 25.0;
const STEP_OVERLAP_HARD: f32 = 15.0;
const STEP_JITTER: f32 = 5.0;

/// Clearances closer than this to the minimum still count as clear
const CLEARANCE_EPSILON: f32 = 1e-3;

/// Sideways displacement between coin placement attempts
const COIN_NUDGE: f32 = COIN_SIZE + 4.0;
/// Gap between a heart and the platform top
const HEART_GAP: f32 = 2.0;

const H_NONE: Option<Hazard> = None;
const FIRE_ABOVE: Option<Hazard> = Some(Hazard::new(HazardKind::Fire, HazardFace::Above));
const FIRE_BELOW: Option<Hazard> = Some(Hazard::new(HazardKind::Fire, HazardFace::Below));
const DROP_ABOVE: Option<Hazard> = Some(Hazard::new(HazardKind::Drop, HazardFace::Above));
const DROP_BELOW: Option<Hazard> = Some(Hazard::new(HazardKind::Drop, HazardFace::Below));

/// Hazard assignment, repeating every 25 platforms
#[rustfmt::skip]
pub const HAZARD_CYCLE: [Option<Hazard>; 25] = [
    H_NONE, H_NONE, DROP_BELOW, FIRE_ABOVE, DROP_ABOVE, // 1-5
    H_NONE, DROP_BELOW, DROP_ABOVE, H_NONE, FIRE_BELOW, // 6-10
    DROP_BELOW, H_NONE, FIRE_ABOVE, DROP_ABOVE, DROP_BELOW, // 11-15
    H_NONE, FIRE_ABOVE, DROP_ABOVE, H_NONE, DROP_BELOW, // 16-20
    FIRE_BELOW, DROP_ABOVE, H_NONE, DROP_BELOW, H_NONE, // 21-25
];

/// Run progress that shapes generated geometry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub platforms_passed: u32,
    pub score: u64,
}

impl Progress {
    /// Ramps from 0 to 1 over the first 600 platforms
    pub fn difficulty(&self) -> f32 {
        (self.platforms_passed as f32 / DIFFICULTY_RAMP_PLATFORMS).min(1.0)
    }

    fn base_width(&self) -> f32 {
        let mut width = BASE_PLATFORM_WIDTH - WIDTH_RAMP * self.difficulty();
        if self.score < EARLY_BONUS_SCORE {
            width += (EARLY_BONUS_SCORE - self.score) as f32 * EARLY_BONUS_PER_POINT;
        }
        width
    }

    fn step_overlap(&self) -> f32 {
        STEP_OVERLAP_EASY - (STEP_OVERLAP_EASY - STEP_OVERLAP_HARD) * self.difficulty()
    }
}

/// Hazard for a platform id (ids start at 1)
pub fn hazard_for_platform(id: u32) -> Option<Hazard> {
    HAZARD_CYCLE[(id.saturating_sub(1) % HAZARD_CYCLE.len() as u32) as usize]
}

/// Highest platform top that keeps a runner's clearance to the top bound
pub fn min_platform_y() -> f32 {
    TOP_BOUND + MIN_CLEARANCE / 2.0
}

/// Lowest platform top that keeps clearance to the bottom bound
pub fn max_platform_y() -> f32 {
    BOTTOM_BOUND - PLATFORM_HEIGHT - MIN_CLEARANCE / 2.0
}

fn pick_ratio(rng: &mut LcgRng) -> f32 {
    let r = rng.next_f32();
    if r < 0.34 {
        1.0
    } else if r < 0.67 {
        2.0
    } else {
        3.0
    }
}

/// Build the opening course, its first batch, coins and clouds
pub fn build_opening(rng: &mut LcgRng, store: &mut EntityStore, tuning: &Tuning) {
    let mut course: Vec<Platform> = OPENING_LAYOUT
        .iter()
        .map(|&(x, y, scale)| {
            let width = (BASE_PLATFORM_WIDTH * pick_ratio(rng))
                .clamp(PLATFORM_MIN_WIDTH, PLATFORM_MAX_WIDTH)
                * scale;
            let id = store.next_platform_id();
            Platform::new(id, x, y, width).with_hazard(hazard_for_platform(id))
        })
        .collect();
    separate_platforms(&mut course, &[]);

    let mut batch = generate_batch(
        rng,
        store,
        OPENING_BATCH_X,
        tuning.opening_batch,
        Progress::default(),
    );
    separate_platforms(&mut batch, &course);
    course.extend(batch);

    store.platform_frontier = course
        .last()
        .map(|p| p.right() + tuning.batch_gap)
        .unwrap_or(OPENING_BATCH_X);
    store.platforms = course;

    // Rows go in first so random coins steer around them
    for (index, count) in BONUS_COIN_ROWS {
        add_coin_row(store, index, count);
    }
    let count = store.platforms.len();
    attach_coins(rng, store, tuning, 0..count);

    generate_clouds(rng, store, 0.0, OPENING_CLOUDS);
    store.cloud_frontier = OPENING_CLOUDS as f32 * tuning.cloud_spacing;

    log::debug!(
        "Opening course: {} platforms, {} coins, frontier x={:.0}",
        store.platforms.len(),
        store.collectibles.len(),
        store.platform_frontier
    );
}

/// Append one batch at the current frontier
pub fn extend_platforms(
    rng: &mut LcgRng,
    store: &mut EntityStore,
    tuning: &Tuning,
    progress: Progress,
) {
    let start_x = store.platform_frontier;
    let mut batch = generate_batch(rng, store, start_x, tuning.batch_size, progress);
    separate_platforms(&mut batch, &store.platforms);

    let first_new = store.platforms.len();
    store.platforms.extend(batch);
    if let Some(last) = store.platforms.last() {
        store.platform_frontier = last.right() + tuning.batch_gap;
    }
    let end = store.platforms.len();
    attach_coins(rng, store, tuning, first_new..end);

    log::debug!(
        "Generated {} platforms from x={:.0} (difficulty {:.2})",
        end - first_new,
        start_x,
        progress.difficulty()
    );
}

/// Lay out `count` platforms left to right starting at `start_x`
fn generate_batch(
    rng: &mut LcgRng,
    store: &mut EntityStore,
    start_x: f32,
    count: usize,
    progress: Progress,
) -> Vec<Platform> {
    let base_width = progress.base_width();
    let step_overlap = progress.step_overlap();

    // Vertical zones, each tall enough for a platform plus runner clearance
    let span = BOTTOM_BOUND - TOP_BOUND - PLATFORM_HEIGHT;
    let zones = ((span / (PLATFORM_HEIGHT + MIN_CLEARANCE)).floor() as usize).max(1);
    let zone_height = span / zones as f32;

    let mut x = start_x;
    let mut batch = Vec::with_capacity(count);
    for _ in 0..count {
        let ratio = pick_ratio(rng);
        let width = (base_width * ratio + rng.range(-WIDTH_JITTER, WIDTH_JITTER))
            .clamp(PLATFORM_MIN_WIDTH, PLATFORM_MAX_WIDTH);

        let zone = rng.index(zones);
        let in_zone =
            rng.next_f32() * (zone_height - PLATFORM_HEIGHT - MIN_CLEARANCE).max(1.0);
        let y = (TOP_BOUND + zone as f32 * zone_height + in_zone + MIN_CLEARANCE / 2.0)
            .clamp(min_platform_y(), max_platform_y());

        let step = (width - step_overlap + rng.range(-STEP_JITTER, STEP_JITTER))
            .max(PLATFORM_MIN_STEP);

        let id = store.next_platform_id();
        batch.push(Platform::new(id, x, y, width).with_hazard(hazard_for_platform(id)));
        x += step;
    }
    batch
}

/// Push platforms vertically until every horizontally overlapping pair keeps
/// [`MIN_CLEARANCE`]. `batch` is checked against `existing` and against its
/// own earlier members, in x order.
pub fn separate_platforms(batch: &mut [Platform], existing: &[Platform]) {
    batch.sort_by(|a, b| a.pos.x.total_cmp(&b.pos.x));

    for i in 0..batch.len() {
        let (placed, rest) = batch.split_at_mut(i);
        let current = &mut rest[0];
        let span = current.bounds();

        let neighbours: Vec<f32> = existing
            .iter()
            .chain(placed.iter())
            .filter(|p| p.bounds().overlaps_x(&span))
            .map(|p| p.pos.y)
            .collect();

        if is_clear(current.pos.y, &neighbours) {
            continue;
        }
        match nearest_clear_y(current.pos.y, &neighbours) {
            Some(y) => current.pos.y = y,
            None => log::warn!(
                "No clear height for platform {} at x={:.0}",
                current.id,
                current.pos.x
            ),
        }
    }
}

fn is_clear(y: f32, neighbours: &[f32]) -> bool {
    neighbours
        .iter()
        .all(|&n| (y - n).abs() >= MIN_CLEARANCE - CLEARANCE_EPSILON)
}

/// Closest height to `desired` that clears every neighbour and stays in bounds
fn nearest_clear_y(desired: f32, neighbours: &[f32]) -> Option<f32> {
    let (lo, hi) = (min_platform_y(), max_platform_y());
    std::iter::once(desired)
        .chain(
            neighbours
                .iter()
                .flat_map(|&n| [n - MIN_CLEARANCE, n + MIN_CLEARANCE]),
        )
        .map(|y| y.clamp(lo, hi))
        .filter(|&y| is_clear(y, neighbours))
        .min_by(|a, b| (a - desired).abs().total_cmp(&(b - desired).abs()))
}

/// Evenly spaced coins centred above one opening platform
fn add_coin_row(store: &mut EntityStore, index: usize, count: usize) {
    let Some(platform) = store.platforms.get(index).cloned() else {
        return;
    };
    let spacing = (platform.width / (count + 1) as f32).max(COIN_SIZE + 2.0);
    let first_x = platform.center_x() - spacing * (count as f32 - 1.0) / 2.0;
    let y = platform.pos.y - COIN_SIZE - COIN_GAP;
    for i in 0..count {
        let pos = Vec2::new(
            (first_x + spacing * i as f32 - COIN_SIZE / 2.0).round(),
            y.round(),
        );
        let bounds = Aabb::from_pos_size(pos, CollectibleKind::Coin.size());
        if !slot_is_free(store, &platform, &bounds) {
            continue;
        }
        let id = store.next_collectible_id();
        store.collectibles.push(Collectible::new(
            id,
            CollectibleKind::Coin,
            pos,
            Some(platform.id),
        ));
    }
}

/// Random coins above/below hazard-free platforms in `range`
fn attach_coins(rng: &mut LcgRng, store: &mut EntityStore, tuning: &Tuning, range: Range<usize>) {
    for index in range {
        let Some(platform) = store.platforms.get(index).cloned() else {
            continue;
        };
        if platform.hazard.is_some() {
            continue;
        }

        if rng.chance(tuning.coin_above_chance) {
            let x = coin_x(rng, &platform);
            let y = platform.pos.y - COIN_SIZE - COIN_GAP;
            place_coin(store, &platform, x, y, tuning.coin_attempts);
        }
        if rng.chance(tuning.coin_below_chance) {
            let x = coin_x(rng, &platform);
            let y = platform.pos.y + PLATFORM_HEIGHT + COIN_GAP;
            place_coin(store, &platform, x, y, tuning.coin_attempts);
        }
    }
}

/// Near the platform centre, jittered across 40% of its width
fn coin_x(rng: &mut LcgRng, platform: &Platform) -> f32 {
    platform.center_x() - COIN_SIZE / 2.0 + rng.range(-0.5, 0.5) * platform.width * 0.4
}

/// Try successively nudged spots (0, +d, -d, +2d, ...) and keep the first
/// free one. Returns false when every attempt collides.
fn place_coin(store: &mut EntityStore, platform: &Platform, x: f32, y: f32, attempts: u32) -> bool {
    let min_x = platform.pos.x;
    let max_x = (platform.right() - COIN_SIZE).max(min_x);

    for attempt in 0..attempts {
        let sign = if attempt % 2 == 1 { 1.0 } else { -1.0 };
        let nudge = sign * attempt.div_ceil(2) as f32 * COIN_NUDGE;
        let pos = Vec2::new((x + nudge).clamp(min_x, max_x).round(), y.round());
        let bounds = Aabb::from_pos_size(pos, CollectibleKind::Coin.size());
        if slot_is_free(store, platform, &bounds) {
            let id = store.next_collectible_id();
            store.collectibles.push(Collectible::new(
                id,
                CollectibleKind::Coin,
                pos,
                Some(platform.id),
            ));
            return true;
        }
    }
    log::trace!("Skipped coin on platform {}", platform.id);
    false
}

/// Clear of the platform's hazard and of live items on the same platform
fn slot_is_free(store: &EntityStore, platform: &Platform, candidate: &Aabb) -> bool {
    if platform
        .hazard_bounds()
        .is_some_and(|h| h.intersects(candidate))
    {
        return false;
    }
    !store.collectibles.iter().any(|c| {
        !c.collected && c.platform_id == Some(platform.id) && c.bounds().intersects(candidate)
    })
}

/// Place a heart on the first wide platform inside the look-ahead window.
/// Returns false when nothing qualifies yet.
pub fn try_spawn_heart(store: &mut EntityStore, runner_x: f32, tuning: &Tuning) -> bool {
    let window = (runner_x + tuning.heart_min_ahead)..(runner_x + tuning.heart_max_ahead);
    let size = CollectibleKind::Heart.size();

    let spot = store.platforms.iter().find_map(|p| {
        if !window.contains(&p.center_x()) || p.width <= tuning.heart_min_platform_width {
            return None;
        }
        let pos = Vec2::new(
            (p.center_x() - size.x / 2.0).round(),
            (p.pos.y - size.y - HEART_GAP).round(),
        );
        slot_is_free(store, p, &Aabb::from_pos_size(pos, size)).then_some((p.id, pos))
    });

    let Some((platform_id, pos)) = spot else {
        return false;
    };
    let id = store.next_collectible_id();
    store.collectibles.push(Collectible::new(
        id,
        CollectibleKind::Heart,
        pos,
        Some(platform_id),
    ));
    log::debug!("Heart placed on platform {} at x={:.0}", platform_id, pos.x);
    true
}

/// Append `count` clouds starting at `start_x`
pub fn generate_clouds(rng: &mut LcgRng, store: &mut EntityStore, start_x: f32, count: usize) {
    for i in 0..count {
        let scale = rng.random_range(1.6f32..2.0) * rng.random_range(1.2f32..1.4);
        let x = start_x + i as f32 * rng.random_range(50.0f32..130.0);
        let y = rng.random_range(20.0f32..160.0);
        let size = Vec2::new(
            rng.random_range(40.0f32..90.0) * scale,
            rng.random_range(25.0f32..60.0) * scale,
        );
        let opacity = rng.random_range(0.25f32..0.65);
        store.clouds.push(Cloud {
            pos: Vec2::new(x, y),
            size,
            opacity,
        });
    }
}

/// Append a cloud batch at the cloud frontier
pub fn extend_clouds(rng: &mut LcgRng, store: &mut EntityStore, tuning: &Tuning) {
    let start_x = store.cloud_frontier;
    generate_clouds(rng, store, start_x, tuning.cloud_batch);
    store.cloud_frontier += tuning.cloud_batch as f32 * tuning.cloud_spacing;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn opening() -> (LcgRng, EntityStore, Tuning) {
        let tuning = Tuning::default();
        let mut rng = LcgRng::for_level();
        let mut store = EntityStore::default();
        build_opening(&mut rng, &mut store, &tuning);
        (rng, store, tuning)
    }

    fn assert_spacing(platforms: &[Platform]) {
        for (i, a) in platforms.iter().enumerate() {
            for b in &platforms[i + 1..] {
                if a.bounds().overlaps_x(&b.bounds()) {
                    let gap = (a.pos.y - b.pos.y).abs();
                    assert!(
                        gap >= MIN_CLEARANCE - 1e-2,
                        "platforms {} and {} only {:.2} apart",
                        a.id,
                        b.id,
                        gap
                    );
                }
            }
        }
    }

    #[test]
    fn test_opening_layout() {
        let (_, store, tuning) = opening();
        assert_eq!(store.platforms.len(), 5 + tuning.opening_batch);

        let ids: Vec<u32> = store.platforms.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=25).collect::<Vec<u32>>());

        let xs: Vec<f32> = store.platforms[..5].iter().map(|p| p.pos.x).collect();
        assert_eq!(xs, vec![0.0, 170.0, 330.0, 480.0, 640.0]);

        let first = &store.platforms[0];
        assert_eq!(first.pos.y, 317.0);
        assert!([200.0, 400.0, 600.0].contains(&first.width));
        assert_eq!(store.platforms[5].pos.x, OPENING_BATCH_X);
        assert_eq!(store.cloud_frontier, OPENING_CLOUDS as f32 * tuning.cloud_spacing);
        assert_spacing(&store.platforms);
    }

    #[test]
    fn test_bonus_row_on_second_platform() {
        let (_, store, _) = opening();
        let row = store
            .collectibles
            .iter()
            .filter(|c| c.platform_id == Some(2) && c.pos.y == 100.0 - COIN_SIZE - COIN_GAP)
            .count();
        assert!(row >= 5);
    }

    #[test]
    fn test_opening_is_deterministic() {
        let (rng_a, store_a, _) = opening();
        let (rng_b, store_b, _) = opening();
        assert_eq!(rng_a, rng_b);
        assert_eq!(
            serde_json::to_string(&store_a).unwrap(),
            serde_json::to_string(&store_b).unwrap()
        );
    }

    #[test]
    fn test_hazard_cycle() {
        assert_eq!(hazard_for_platform(1), None);
        assert_eq!(hazard_for_platform(3), DROP_BELOW);
        assert_eq!(hazard_for_platform(4), FIRE_ABOVE);
        for id in 1..=25 {
            assert_eq!(hazard_for_platform(id), hazard_for_platform(id + 25));
        }

        let fires = HAZARD_CYCLE
            .iter()
            .filter(|h| h.is_some_and(|h| h.kind == HazardKind::Fire))
            .count();
        let drops = HAZARD_CYCLE
            .iter()
            .filter(|h| h.is_some_and(|h| h.kind == HazardKind::Drop))
            .count();
        assert_eq!(fires, 5);
        assert_eq!(drops, 11);
    }

    #[test]
    fn test_generated_platform_geometry() {
        let (mut rng, mut store, tuning) = opening();
        for _ in 0..5 {
            extend_platforms(&mut rng, &mut store, &tuning, Progress::default());
        }
        let generated: Vec<&Platform> = store.platforms.iter().filter(|p| p.id > 5).collect();
        for p in &generated {
            assert!((PLATFORM_MIN_WIDTH..=PLATFORM_MAX_WIDTH).contains(&p.width));
            assert!(p.pos.y >= min_platform_y() - 1e-3 && p.pos.y <= max_platform_y() + 1e-3);
            assert_eq!(p.hazard, hazard_for_platform(p.id));
        }
        for pair in generated.windows(2) {
            assert!(pair[1].pos.x - pair[0].pos.x >= PLATFORM_MIN_STEP - 1e-3);
        }
    }

    #[test]
    fn test_coins_avoid_hazards_and_each_other() {
        let (mut rng, mut store, tuning) = opening();
        for _ in 0..10 {
            extend_platforms(&mut rng, &mut store, &tuning, Progress::default());
        }
        for (i, coin) in store.collectibles.iter().enumerate() {
            let Some(platform) = coin.platform_id.and_then(|id| store.platform(id)) else {
                continue;
            };
            if let Some(hazard) = platform.hazard_bounds() {
                assert!(!hazard.intersects(&coin.bounds()), "coin {} on a hazard", coin.id);
            }
            for other in &store.collectibles[i + 1..] {
                if other.platform_id == coin.platform_id {
                    assert!(!other.bounds().intersects(&coin.bounds()));
                }
            }
        }
    }

    #[test]
    fn test_difficulty_narrows_platforms() {
        let easy = Progress::default();
        let hard = Progress {
            platforms_passed: 600,
            score: 500,
        };
        assert_eq!(easy.difficulty(), 0.0);
        assert_eq!(hard.difficulty(), 1.0);
        assert!((easy.base_width() - 120.0).abs() < 1e-4);
        assert!((hard.base_width() - 70.0).abs() < 1e-4);
        assert!((hard.step_overlap() - 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_nearest_clear_y_prefers_closest() {
        assert_eq!(nearest_clear_y(300.0, &[]), Some(300.0));
        let y = nearest_clear_y(300.0, &[280.0]).unwrap();
        assert!((y - 346.0).abs() < 1e-3);
        let y = nearest_clear_y(300.0, &[320.0]).unwrap();
        assert!((y - 254.0).abs() < 1e-3);
    }

    #[test]
    fn test_heart_spawns_in_window() {
        let mut store = EntityStore::default();
        for (x, width) in [(100.0, 200.0), (500.0, 80.0), (700.0, 200.0)] {
            let id = store.next_platform_id();
            store.platforms.push(Platform::new(id, x, 300.0, width));
        }
        let tuning = Tuning::default();
        assert!(try_spawn_heart(&mut store, 0.0, &tuning));

        // Platform 1 is too close and platform 2 too narrow
        let heart = &store.collectibles[0];
        assert_eq!(heart.kind, CollectibleKind::Heart);
        assert_eq!(heart.platform_id, Some(3));

        let mut empty = EntityStore::default();
        assert!(!try_spawn_heart(&mut empty, 0.0, &tuning));
    }

    #[test]
    fn test_clouds_extend_frontier() {
        let (mut rng, mut store, tuning) = opening();
        let before = store.clouds.len();
        let frontier = store.cloud_frontier;
        extend_clouds(&mut rng, &mut store, &tuning);
        assert_eq!(store.clouds.len(), before + tuning.cloud_batch);
        assert_eq!(
            store.cloud_frontier,
            frontier + tuning.cloud_batch as f32 * tuning.cloud_spacing
        );
        assert!(store.clouds.iter().all(|c| (0.25..0.65).contains(&c.opacity)));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_overlapping_platforms_keep_clearance(
            batches in 1usize..15,
            platforms_passed in 0u32..900,
            score in 0u64..120,
        ) {
            let (mut rng, mut store, tuning) = opening();
            let progress = Progress { platforms_passed, score };
            for _ in 0..batches {
                extend_platforms(&mut rng, &mut store, &tuning, progress);
            }
            for (i, a) in store.platforms.iter().enumerate() {
                for b in &store.platforms[i + 1..] {
                    if a.bounds().overlaps_x(&b.bounds()) {
                        prop_assert!((a.pos.y - b.pos.y).abs() >= MIN_CLEARANCE - 1e-2);
                    }
                }
            }
        }
    }
}
