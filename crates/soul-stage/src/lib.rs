//! Turn-based encounter state engine for the SOUL combat stage.
//!
//! Tracks a roster of participants with health, resolve, a hunger-driven
//! parasite and a multi-turn egg incubation, advances a discrete turn
//! counter, and produces human-readable status reports. The engine is a
//! reducer: the host hands it a snapshot and a command, and gets back the
//! next snapshot plus the report lines to show.

pub mod command;
pub mod config;
pub mod dice;
pub mod engine;
pub mod error;
pub mod host;
pub mod random;
pub mod render;
pub mod report;
pub mod state;

pub use command::{CombatSwitch, Command};
pub use config::StageConfig;
pub use dice::{DiceSpec, RollResult};
pub use engine::Engine;
pub use error::{StageError, StageResult};
pub use host::{Actor, Host};
pub use random::{RandomSource, ScriptedRandom};
pub use report::{Hud, MajorEvent, Report};
pub use state::{Egg, EncounterState, HiddenTraits, Parasite, Participant, TraitLevel};
