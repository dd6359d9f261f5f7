//! The host dispatch contract.
//!
//! A chat host calls [`Host::on_command`] with a command, its arguments,
//! who sent it and the snapshot it persisted last time (or nothing on the
//! first call). It stores the snapshot it gets back and posts the messages.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::StageConfig;
use crate::engine::Engine;
use crate::random::RandomSource;
use crate::render::render_all;
use crate::state::EncounterState;

/// Who issued a command or message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// Display name of the sender.
    pub name: String,
    /// Whether the sender is a narrator-controlled character.
    pub is_npc: bool,
}

impl Actor {
    /// A player actor.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_npc: false,
        }
    }

    /// A narrator-controlled actor.
    pub fn npc(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_npc: true,
        }
    }
}

/// An engine paired with the random source it draws from.
#[derive(Debug)]
pub struct Host<R: RandomSource = StdRng> {
    engine: Engine,
    rng: R,
}

impl Host<StdRng> {
    /// Create a host whose generator is seeded from the config.
    pub fn new(config: StageConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self::with_random(config, rng)
    }
}

impl<R: RandomSource> Host<R> {
    /// Create a host with an explicit random source.
    pub fn with_random(config: StageConfig, rng: R) -> Self {
        Self {
            engine: Engine::new(config),
            rng,
        }
    }

    /// The engine this host drives.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// A fresh snapshot for a new session.
    pub fn default_state(&self) -> EncounterState {
        EncounterState::from_config(self.engine.config())
    }

    /// Apply a command to the given snapshot (or a fresh one) and return
    /// the next snapshot with the rendered messages.
    pub fn on_command<S: AsRef<str>>(
        &mut self,
        name: &str,
        args: &[S],
        actor: &Actor,
        state: Option<EncounterState>,
    ) -> (EncounterState, Vec<String>) {
        let state = state.unwrap_or_else(|| self.default_state());
        let (next, reports) = self
            .engine
            .apply_command(state, name, args, actor, &mut self.rng);
        (next, render_all(&reports))
    }

    /// Hook run before a chat message is posted. Passes the snapshot through.
    pub fn on_message_before(
        &self,
        _message: &str,
        _actor: &Actor,
        state: Option<EncounterState>,
    ) -> EncounterState {
        state.unwrap_or_else(|| self.default_state())
    }

    /// Hook run after a chat message is posted. Passes the snapshot through.
    pub fn on_message_after(
        &self,
        _message: &str,
        _actor: &Actor,
        state: Option<EncounterState>,
    ) -> EncounterState {
        state.unwrap_or_else(|| self.default_state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    fn host() -> Host<ScriptedRandom> {
        Host::with_random(StageConfig::default(), ScriptedRandom::new())
    }

    #[test]
    fn missing_state_is_defaulted() {
        let mut h = host();
        let (state, messages) = h.on_command("status", &[] as &[&str], &Actor::new("Kai"), None);
        assert_eq!(state, EncounterState::default());
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("```\n== SOUL HUD =="));
    }

    #[test]
    fn state_threads_through_calls() {
        let mut h = host();
        let gm = Actor::new("GM");
        let (state, _) = h.on_command("add", &["Sera", "parasite"], &gm, None);
        let (state, messages) = h.on_command("feed", &["Sera", "20"], &gm, Some(state));
        assert_eq!(state.participant("Sera").unwrap().parasite.unwrap().hunger, 90);
        assert!(messages[0].starts_with("**[SOUL STAGE]** 🍖 Sera feeds parasite"));
    }

    #[test]
    fn default_state_uses_configured_cooldown() {
        let h = Host::new(StageConfig::default().with_major_event_cooldown(4));
        assert_eq!(h.default_state().major_event_cooldown, 4);
    }

    #[test]
    fn message_hooks_pass_through() {
        let h = host();
        let actor = Actor::npc("Malik");
        let fresh = h.on_message_before("hello", &actor, None);
        assert_eq!(fresh, EncounterState::default());

        let mut state = EncounterState::default();
        state.ensure_participant("Sera").hp = 12;
        let after = h.on_message_after("hello", &actor, Some(state.clone()));
        assert_eq!(after, state);
        let before = h.on_message_before("hello", &actor, Some(state.clone()));
        assert_eq!(before, state);
    }

    #[test]
    fn seeded_hosts_agree() {
        let gm = Actor::new("GM");
        let mut a = Host::new(StageConfig::default().with_seed(5));
        let mut b = Host::new(StageConfig::default().with_seed(5));
        let (_, ma) = a.on_command("roll", &["4d20"], &gm, None);
        let (_, mb) = b.on_command("roll", &["4d20"], &gm, None);
        assert_eq!(ma, mb);
    }
}
