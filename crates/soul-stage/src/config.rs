//! Configuration for an encounter engine.

/// Default probability of a random major event once the cooldown has elapsed.
pub const DEFAULT_MAJOR_EVENT_CHANCE: f64 = 0.03;

/// Default number of turns between random major events.
pub const DEFAULT_MAJOR_EVENT_COOLDOWN: i64 = 10;

/// Host-side configuration for the engine.
///
/// Commands cannot change any of this. The host picks it once when it
/// builds its [`Host`](crate::host::Host).
#[derive(Debug, Clone)]
pub struct StageConfig {
    /// RNG seed for reproducible rolls and events.
    pub seed: u64,
    /// Chance in `[0, 1]` that a major event fires on an eligible turn.
    pub major_event_chance: f64,
    /// Minimum number of turns between random major events (at least 1).
    pub major_event_cooldown: i64,
    /// Participant targeted by `feed` and `burst` when no name is given.
    pub feed_default: String,
    /// Participant targeted by `incubate` when no name is given.
    pub incubate_default: String,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            major_event_chance: DEFAULT_MAJOR_EVENT_CHANCE,
            major_event_cooldown: DEFAULT_MAJOR_EVENT_COOLDOWN,
            feed_default: "Sera".to_string(),
            incubate_default: "Malik".to_string(),
        }
    }
}

impl StageConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the major event chance (clamped to 0-1).
    pub fn with_major_event_chance(mut self, chance: f64) -> Self {
        self.major_event_chance = if chance.is_nan() { 0.0 } else { chance.clamp(0.0, 1.0) };
        self
    }

    /// Set the major event cooldown (at least 1 turn).
    pub fn with_major_event_cooldown(mut self, turns: i64) -> Self {
        self.major_event_cooldown = turns.max(1);
        self
    }

    /// Set the fallback names used by `feed`/`burst` and `incubate`.
    pub fn with_default_names(
        mut self,
        feed: impl Into<String>,
        incubate: impl Into<String>,
    ) -> Self {
        self.feed_default = feed.into();
        self.incubate_default = incubate.into();
        self
    }
}
