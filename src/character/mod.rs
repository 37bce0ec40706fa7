//! Pet character simulation.
//!
//! [`CharacterState`] owns the pet's needs and age.  Needs decay with
//! elapsed wall-clock time and are restored by discrete actions (see
//! [`actions`]).  Mood is never stored: [`CharacterState::mood`]
//! recomputes it from the needs every time it is asked.
//!
//! Need values are kept in fixed point (milli-points, `0..=100_000`) with
//! a per-need remainder, so a 1 point/minute decay sampled every 50 ms
//! lands on exactly the same value as one sampled every 10 minutes.

pub mod actions;

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Upper bound of every need, in points.
pub const NEED_MAX: u8 = 100;
/// Upper bound of every need, in milli-points.
pub const NEED_MAX_MILLI: u32 = NEED_MAX as u32 * 1000;

const MS_PER_MINUTE: u64 = 60_000;

// ---------------------------------------------------------------------------
// Need identity
// ---------------------------------------------------------------------------

/// One axis of pet well-being.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NeedKind {
    /// Satiation: 100 = full belly, 0 = starving.
    Hunger = 0,
    Energy = 1,
    Affection = 2,
    Fun = 3,
    Hygiene = 4,
}

impl NeedKind {
    pub const COUNT: usize = 5;

    pub const ALL: [NeedKind; Self::COUNT] = [
        Self::Hunger,
        Self::Energy,
        Self::Affection,
        Self::Fun,
        Self::Hygiene,
    ];

    /// Short display label (fits a 128 px row next to a bar).
    pub fn label(self) -> &'static str {
        match self {
            Self::Hunger => "Fullness",
            Self::Energy => "Energy",
            Self::Affection => "Affection",
            Self::Fun => "Fun",
            Self::Hygiene => "Hygiene",
        }
    }
}

/// One value per need, addressable by [`NeedKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerNeed<T> {
    pub hunger: T,
    pub energy: T,
    pub affection: T,
    pub fun: T,
    pub hygiene: T,
}

impl<T: Copy> PerNeed<T> {
    /// Same value for every need.
    pub const fn splat(value: T) -> Self {
        Self {
            hunger: value,
            energy: value,
            affection: value,
            fun: value,
            hygiene: value,
        }
    }

    pub fn get(&self, kind: NeedKind) -> T {
        match kind {
            NeedKind::Hunger => self.hunger,
            NeedKind::Energy => self.energy,
            NeedKind::Affection => self.affection,
            NeedKind::Fun => self.fun,
            NeedKind::Hygiene => self.hygiene,
        }
    }

    pub fn get_mut(&mut self, kind: NeedKind) -> &mut T {
        match kind {
            NeedKind::Hunger => &mut self.hunger,
            NeedKind::Energy => &mut self.energy,
            NeedKind::Affection => &mut self.affection,
            NeedKind::Fun => &mut self.fun,
            NeedKind::Hygiene => &mut self.hygiene,
        }
    }

    /// Iterate `(kind, value)` pairs in [`NeedKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (NeedKind, T)> + '_ {
        NeedKind::ALL.into_iter().map(move |k| (k, self.get(k)))
    }
}

// ---------------------------------------------------------------------------
// Fixed-point need level
// ---------------------------------------------------------------------------

/// A single need in milli-points, plus the sub-milli decay remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NeedLevel {
    milli: u32,
    /// Decay numerator not yet worth a whole milli-point (`< 60_000`).
    carry: u32,
}

impl NeedLevel {
    pub fn from_points(points: u8) -> Self {
        Self {
            milli: u32::from(points.min(NEED_MAX)) * 1000,
            carry: 0,
        }
    }

    /// Rebuild from raw parts; `None` if either part is out of range.
    pub fn from_raw(milli: u32, carry: u32) -> Option<Self> {
        if milli > NEED_MAX_MILLI || carry >= MS_PER_MINUTE as u32 {
            return None;
        }
        Some(Self { milli, carry })
    }

    pub fn milli(self) -> u32 {
        self.milli
    }

    pub fn carry(self) -> u32 {
        self.carry
    }

    /// Whole points, rounded down.
    pub fn points(self) -> u8 {
        (self.milli / 1000) as u8
    }

    /// Decay by `rate` milli-points per minute over `elapsed_ms`.
    fn decay(&mut self, rate_milli_per_min: u64, elapsed_ms: u64) {
        if self.milli == 0 {
            self.carry = 0;
            return;
        }
        let numerator = rate_milli_per_min
            .saturating_mul(elapsed_ms)
            .saturating_add(u64::from(self.carry));
        let whole = numerator / MS_PER_MINUTE;
        if whole >= u64::from(self.milli) {
            self.milli = 0;
            self.carry = 0;
        } else {
            self.milli -= whole as u32;
            self.carry = (numerator % MS_PER_MINUTE) as u32;
        }
    }

    /// Add `delta` whole points, clamped to `[0, 100]`.
    fn adjust(&mut self, delta_points: i16) {
        let next = i64::from(self.milli) + i64::from(delta_points) * 1000;
        self.milli = next.clamp(0, i64::from(NEED_MAX_MILLI)) as u32;
        if self.milli == 0 {
            self.carry = 0;
        }
    }
}

// ---------------------------------------------------------------------------
// Mood
// ---------------------------------------------------------------------------

/// Overall disposition derived from the needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
    Critical,
}

impl Mood {
    pub fn label(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Neutral => "Okay",
            Self::Sad => "Sad",
            Self::Critical => "Help!",
        }
    }
}

/// Mood boundaries, in need points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodThresholds {
    /// Any need at or below this makes the pet `Critical`.
    pub critical: u8,
    /// Average strictly below this makes the pet `Sad`.
    pub sad_below: u8,
    /// Average strictly above this makes the pet `Happy`.
    pub happy_above: u8,
}

impl Default for MoodThresholds {
    fn default() -> Self {
        Self {
            critical: 10,
            sad_below: 40,
            happy_above: 70,
        }
    }
}

// ---------------------------------------------------------------------------
// CharacterState
// ---------------------------------------------------------------------------

/// The pet.
///
/// Owned by the engine and lent to scenes; there is no ambient global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterState {
    needs: PerNeed<NeedLevel>,
    age_ms: u64,
    last_updated_ms: u64,
}

impl CharacterState {
    /// A freshly hatched pet with every need at `config.initial_need`.
    pub fn new(config: &GameConfig, now_ms: u64) -> Self {
        Self {
            needs: PerNeed::splat(NeedLevel::from_points(config.initial_need)),
            age_ms: 0,
            last_updated_ms: now_ms,
        }
    }

    /// Rebuild a state from already-validated parts (save decoding).
    pub(crate) fn from_parts(needs: PerNeed<NeedLevel>, age_ms: u64, last_updated_ms: u64) -> Self {
        Self {
            needs,
            age_ms,
            last_updated_ms,
        }
    }

    /// Override one need, in whole points.
    pub fn with_need(mut self, kind: NeedKind, points: u8) -> Self {
        *self.needs.get_mut(kind) = NeedLevel::from_points(points);
        self
    }

    // ── Queries ───────────────────────────────────────────────

    /// Whole points of one need.
    pub fn need(&self, kind: NeedKind) -> u8 {
        self.needs.get(kind).points()
    }

    pub fn need_milli(&self, kind: NeedKind) -> u32 {
        self.needs.get(kind).milli()
    }

    pub fn needs(&self) -> &PerNeed<NeedLevel> {
        &self.needs
    }

    /// Time the pet has been alive (simulated, excludes powered-off time).
    pub fn age_ms(&self) -> u64 {
        self.age_ms
    }

    pub fn last_updated_ms(&self) -> u64 {
        self.last_updated_ms
    }

    /// Mood as a pure function of the current needs.
    pub fn mood(&self, thresholds: &MoodThresholds) -> Mood {
        let critical = u32::from(thresholds.critical) * 1000;
        if self.needs.iter().any(|(_, n)| n.milli() <= critical) {
            return Mood::Critical;
        }

        // Compare sums rather than a truncated average.
        let sum: u64 = self.needs.iter().map(|(_, n)| u64::from(n.milli())).sum();
        let count = NeedKind::COUNT as u64;
        if sum < u64::from(thresholds.sad_below) * 1000 * count {
            Mood::Sad
        } else if sum > u64::from(thresholds.happy_above) * 1000 * count {
            Mood::Happy
        } else {
            Mood::Neutral
        }
    }

    // ── Simulation ────────────────────────────────────────────

    /// Advance decay to `now_ms`.
    ///
    /// Time that runs backwards (e.g. `now` older than the last update)
    /// counts as zero elapsed.
    pub fn tick(&mut self, now_ms: u64, config: &GameConfig) {
        let elapsed = now_ms.saturating_sub(self.last_updated_ms);
        if elapsed > 0 {
            for kind in NeedKind::ALL {
                let rate = rate_milli_per_min(config.decay_per_minute.get(kind));
                self.needs.get_mut(kind).decay(rate, elapsed);
            }
            self.age_ms = self.age_ms.saturating_add(elapsed);
        }
        self.last_updated_ms = self.last_updated_ms.max(now_ms);
    }

    /// Move the update anchor without simulating the gap.
    ///
    /// Used after loading a save: the monotonic clock restarts at boot, so
    /// the stored timestamp belongs to a previous power cycle.
    pub fn rebase(&mut self, now_ms: u64) {
        self.last_updated_ms = now_ms;
    }

    fn adjust(&mut self, kind: NeedKind, delta_points: i16) {
        self.needs.get_mut(kind).adjust(delta_points);
    }
}

fn rate_milli_per_min(points_per_min: f32) -> u64 {
    if points_per_min.is_finite() && points_per_min > 0.0 {
        (points_per_min * 1000.0).round() as u64
    } else {
        0
    }
}
