//! The encounter snapshot and its participants.
//!
//! The host owns an [`EncounterState`] between calls and hands it to the
//! engine for every command. Participants are created lazily the first time
//! a name is referenced and are kept in the order they were first seen.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_MAJOR_EVENT_COOLDOWN, StageConfig};

/// Turn recorded as the last major event when none has happened yet.
pub const NEVER: i64 = -999;

/// One combat session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterState {
    /// Whether turn structure is being enforced.
    pub combat_active: bool,
    /// Current turn number.
    pub turn_number: u32,
    /// Participants by name, in first-reference order.
    pub participants: IndexMap<String, Participant>,
    /// Turn on which the last random major event fired.
    pub last_major_event_turn: i64,
    /// Minimum number of turns between random major events.
    pub major_event_cooldown: i64,
}

impl Default for EncounterState {
    fn default() -> Self {
        Self {
            combat_active: false,
            turn_number: 0,
            participants: IndexMap::new(),
            last_major_event_turn: NEVER,
            major_event_cooldown: DEFAULT_MAJOR_EVENT_COOLDOWN,
        }
    }
}

impl EncounterState {
    /// A fresh state whose cooldown comes from the given config.
    pub fn from_config(config: &StageConfig) -> Self {
        Self {
            major_event_cooldown: config.major_event_cooldown.max(1),
            ..Self::default()
        }
    }

    /// Return the participant called `name`, creating it with default
    /// values if it does not exist yet. Existing participants are never
    /// reset. `name` must not be empty.
    pub fn ensure_participant(&mut self, name: &str) -> &mut Participant {
        debug_assert!(!name.is_empty(), "participant names must not be empty");
        self.participants.entry(name.to_string()).or_default()
    }

    /// Look up a participant without creating it.
    pub fn participant(&self, name: &str) -> Option<&Participant> {
        self.participants.get(name)
    }

    /// Look up a participant mutably without creating it.
    pub fn participant_mut(&mut self, name: &str) -> Option<&mut Participant> {
        self.participants.get_mut(name)
    }

    /// Number of participants.
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Turns since the last random major event.
    pub fn turns_since_major_event(&self) -> i64 {
        i64::from(self.turn_number) - self.last_major_event_turn
    }
}

/// A named combatant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Hit points. Nominally 0-100, up to 150 after an awakening.
    pub hp: u32,
    /// Morale. Nominally 0-100, up to 200 after an awakening.
    pub resolve: u32,
    /// The parasite this participant hosts, if any.
    #[serde(default)]
    pub parasite: Option<Parasite>,
    /// The egg this participant carries, if any.
    #[serde(default)]
    pub egg: Option<Egg>,
    /// Concealed stats, not shown in reports.
    #[serde(default)]
    pub hidden_traits: HiddenTraits,
    /// Status labels in the order they were gained.
    #[serde(default)]
    pub status_tags: Vec<String>,
    /// Whether this participant is controlled by the narrator.
    #[serde(default, rename = "isNPC", alias = "isNpc")]
    pub is_npc: bool,
    #[serde(default)]
    awakening_eligible: bool,
}

impl Default for Participant {
    fn default() -> Self {
        Self {
            hp: 100,
            resolve: 100,
            parasite: None,
            egg: None,
            hidden_traits: HiddenTraits::default(),
            status_tags: Vec::new(),
            is_npc: false,
            awakening_eligible: false,
        }
    }
}

impl Participant {
    /// Append a status tag unless it is already present.
    /// Returns true if the tag was added.
    pub fn add_status(&mut self, tag: &str) -> bool {
        if self.has_status(tag) {
            return false;
        }
        self.status_tags.push(tag.to_string());
        true
    }

    /// Whether the participant carries the given status tag.
    pub fn has_status(&self, tag: &str) -> bool {
        self.status_tags.iter().any(|t| t == tag)
    }

    /// Lose hit points, stopping at zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Gain hit points, never ending above `cap`.
    pub fn heal(&mut self, amount: u32, cap: u32) {
        self.hp = self.hp.saturating_add(amount).min(cap);
    }

    /// Gain resolve, never ending above `cap`.
    pub fn raise_resolve(&mut self, amount: u32, cap: u32) {
        self.resolve = self.resolve.saturating_add(amount).min(cap);
    }

    /// Lose resolve, stopping at zero.
    pub fn drain_resolve(&mut self, amount: u32) {
        self.resolve = self.resolve.saturating_sub(amount);
    }

    /// Whether a pre-awakening aura is currently on this participant.
    pub fn is_awakening_eligible(&self) -> bool {
        self.awakening_eligible
    }

    /// Place a pre-awakening aura on this participant.
    pub fn mark_awakening_eligible(&mut self) {
        self.awakening_eligible = true;
    }

    /// Remove the aura, returning whether one was present.
    pub fn consume_awakening_eligibility(&mut self) -> bool {
        std::mem::take(&mut self.awakening_eligible)
    }
}

/// A hunger gauge tied to a host participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parasite {
    /// Current fullness, always within `0..=max_hunger`.
    pub hunger: u32,
    /// Gauge capacity.
    pub max_hunger: u32,
}

impl Default for Parasite {
    fn default() -> Self {
        Self {
            hunger: 70,
            max_hunger: 100,
        }
    }
}

impl Parasite {
    /// Fill the gauge by `amount`, stopping at capacity.
    pub fn feed(&mut self, amount: u32) {
        self.hunger = self.hunger.saturating_add(amount).min(self.max_hunger);
    }

    /// Drain the gauge by `amount`, stopping at zero.
    pub fn starve(&mut self, amount: u32) {
        self.hunger = self.hunger.saturating_sub(amount).min(self.max_hunger);
    }

    /// Whether the gauge is empty.
    pub fn is_starving(&self) -> bool {
        self.hunger == 0
    }
}

/// A multi-turn countdown that ends in a one-time hatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Egg {
    /// Whether the countdown is running.
    pub incubating: bool,
    /// Turns left until the egg hatches.
    pub turns_remaining: u32,
    /// Whether the egg has hatched. Never reverts.
    pub hatched: bool,
}

impl Default for Egg {
    fn default() -> Self {
        Self {
            incubating: false,
            turns_remaining: 3,
            hatched: false,
        }
    }
}

impl Egg {
    /// Start (or restart) incubation with the given countdown.
    /// A hatched egg is left untouched.
    pub fn start(&mut self, turns: u32) {
        if self.hatched {
            return;
        }
        self.incubating = true;
        self.turns_remaining = turns;
    }

    /// Advance the countdown by one turn. Returns true on the turn the egg
    /// hatches. Dormant and hatched eggs do not change.
    pub fn tick(&mut self) -> bool {
        if !self.incubating || self.hatched {
            return false;
        }
        self.turns_remaining = self.turns_remaining.saturating_sub(1);
        if self.turns_remaining == 0 {
            self.hatched = true;
            self.incubating = false;
            return true;
        }
        false
    }
}

/// Qualitative level of a concealed stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TraitLevel {
    /// Unremarkable.
    #[default]
    Average,
    /// Raised by an awakening.
    High,
}

impl std::fmt::Display for TraitLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Average => write!(f, "Average"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Concealed stats revealed or changed by special events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HiddenTraits {
    /// Physical power.
    pub strength: TraitLevel,
    /// Reaction and movement.
    pub speed: TraitLevel,
    /// Toughness.
    pub durability: TraitLevel,
}
