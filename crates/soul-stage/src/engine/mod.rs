//! The command/turn engine.
//!
//! [`Engine::apply`] is a reducer: it takes a snapshot, a command and a
//! random source, and returns the next snapshot plus the report items to
//! show. A rejected command returns the snapshot it was given, untouched,
//! with a single explanatory line.

mod turn;

use tracing::{debug, info};

use crate::command::{AddTag, CombatSwitch, Command};
use crate::config::StageConfig;
use crate::dice::{DEFAULT_SPEC, DiceSpec};
use crate::error::{StageError, StageResult};
use crate::host::Actor;
use crate::random::RandomSource;
use crate::report::{Hud, Report};
use crate::state::{Egg, EncounterState, Parasite, TraitLevel};

pub use turn::{HUNGER_DECAY, LOW_HP_THRESHOLD, LOW_HP_RESOLVE_DRAIN, STARVE_DAMAGE};

/// Hunger added by `feed` when no amount is given.
pub const FEED_DEFAULT_AMOUNT: u32 = 20;
/// Hit points `feed` can heal up to.
pub const FEED_HP_CAP: u32 = 100;
/// Resolve `feed` can raise up to.
pub const FEED_RESOLVE_CAP: u32 = 150;
/// Damage a burst deals to its own host.
pub const BURST_SELF_DAMAGE: u32 = 15;
/// Damage a burst deals to the bystander it hits.
pub const BURST_DAMAGE: u32 = 40;
/// Hunger a burst adds to the host's parasite.
pub const BURST_HUNGER: u32 = 10;
/// Incubation length when no turn count is given.
pub const INCUBATE_DEFAULT_TURNS: u32 = 3;
/// Resolve at which a participant may awaken without an aura.
pub const AWAKEN_RESOLVE_THRESHOLD: u32 = 90;
/// Hit points gained on awakening.
pub const AWAKEN_HP_BONUS: u32 = 20;
/// Hit point ceiling after awakening.
pub const AWAKEN_HP_CAP: u32 = 150;
/// Resolve gained on awakening.
pub const AWAKEN_RESOLVE_BONUS: u32 = 30;
/// Resolve ceiling after awakening.
pub const AWAKEN_RESOLVE_CAP: u32 = 200;

const HELP_TEXT: &str = "Commands: /combat on|off, /add <name> [parasite|egg|npc], /status, \
/feed <name> <amt>, /burst <name>, /incubate <name> [turns], /nextturn, /roll dX, /awaken <name>";

/// Applies commands to encounter snapshots.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: StageConfig,
}

impl Engine {
    /// Create an engine with the given configuration.
    pub fn new(config: StageConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// Parse a command name and arguments, then apply it.
    pub fn apply_command<S: AsRef<str>>(
        &self,
        state: EncounterState,
        name: &str,
        args: &[S],
        actor: &Actor,
        rng: &mut dyn RandomSource,
    ) -> (EncounterState, Vec<Report>) {
        let command = Command::parse(name, args);
        self.apply(state, &command, actor, rng)
    }

    /// Apply a command and return the next snapshot with its report.
    ///
    /// Never fails. Errors become a single report line and the input
    /// snapshot is returned unchanged.
    pub fn apply(
        &self,
        state: EncounterState,
        command: &Command,
        actor: &Actor,
        rng: &mut dyn RandomSource,
    ) -> (EncounterState, Vec<Report>) {
        debug!(
            command = command.name(),
            actor = %actor.name,
            npc = actor.is_npc,
            turn = state.turn_number,
            "applying command"
        );

        let mut next = state.clone();
        match self.dispatch(&mut next, command, rng) {
            Ok(reports) => (next, reports),
            Err(err) => {
                debug!(command = command.name(), error = %err, "command rejected");
                (state, vec![Report::line(err.to_string())])
            }
        }
    }

    fn dispatch(
        &self,
        state: &mut EncounterState,
        command: &Command,
        rng: &mut dyn RandomSource,
    ) -> StageResult<Vec<Report>> {
        match command {
            Command::Help => Ok(vec![Report::line(HELP_TEXT)]),
            Command::Combat(switch) => combat(state, switch),
            Command::Add { name, tags } => add(state, name.as_deref(), tags),
            Command::Status => Ok(vec![Report::Hud(Hud::full(state))]),
            Command::Roll { spec } => roll(state, spec.as_deref(), rng),
            Command::Feed { name, amount } => {
                let who = name.as_deref().unwrap_or(self.config.feed_default.as_str());
                feed(state, who, *amount)
            }
            Command::Burst { name } => {
                let who = name.as_deref().unwrap_or(self.config.feed_default.as_str());
                burst(state, who, rng)
            }
            Command::Incubate { name, turns } => {
                let who = name.as_deref().unwrap_or(self.config.incubate_default.as_str());
                incubate(state, who, *turns)
            }
            Command::NextTurn => Ok(turn::advance(state, &self.config, rng)),
            Command::Awaken { name } => awaken(state, name.as_deref()),
            Command::Unknown(name) => Err(StageError::UnknownCommand(name.clone())),
        }
    }
}

fn combat(state: &mut EncounterState, switch: &CombatSwitch) -> StageResult<Vec<Report>> {
    let line = match switch {
        CombatSwitch::On => {
            state.combat_active = true;
            state.turn_number = 1;
            "⚔️ Combat mode ACTIVATED"
        }
        CombatSwitch::Off => {
            state.combat_active = false;
            "🛑 Combat mode ENDED"
        }
        CombatSwitch::Other(_) => {
            return Err(StageError::Usage("/combat on OR /combat off".to_string()));
        }
    };
    Ok(vec![Report::line(line), Report::Hud(Hud::full(state))])
}

fn add(
    state: &mut EncounterState,
    name: Option<&str>,
    tags: &[AddTag],
) -> StageResult<Vec<Report>> {
    let name = name.ok_or_else(|| StageError::Usage("/add <name> [parasite|egg|npc]".to_string()))?;

    let p = state.ensure_participant(name);
    for tag in tags {
        match tag {
            AddTag::Parasite => p.parasite = Some(Parasite::default()),
            AddTag::Egg => {
                p.egg.get_or_insert_with(Egg::default);
            }
            AddTag::Npc => p.is_npc = true,
        }
    }

    let line = format!(
        "{name} added to the encounter{}{}{}.",
        if p.is_npc { " (NPC)" } else { "" },
        if p.parasite.is_some() { " (parasite)" } else { "" },
        if p.egg.is_some() { " (egg)" } else { "" },
    );
    Ok(vec![Report::Line(line), Report::Hud(Hud::full(state))])
}

fn roll(
    state: &mut EncounterState,
    spec: Option<&str>,
    rng: &mut dyn RandomSource,
) -> StageResult<Vec<Report>> {
    let raw = spec.unwrap_or(DEFAULT_SPEC);
    let dice = DiceSpec::parse(raw)?;
    let result = dice.roll(rng);
    debug!(dice = %dice, total = result.total(), "rolled");
    let mut reports = vec![Report::Line(format!("🎲 Roll {raw}: {result}"))];

    if result.stirs_aura() && !state.participants.is_empty() {
        let index = rng.pick(state.participant_count());
        if let Some((who, p)) = state.participants.get_index_mut(index) {
            p.mark_awakening_eligible();
            debug!(participant = %who, total = result.total(), "aura placed");
            reports.push(Report::Line(format!(
                "✨ {who} senses a shimmering pre-awakening aura."
            )));
        }
    }
    Ok(reports)
}

/// Resolve an optional numeric argument: missing or zero means the default,
/// negative is a usage error.
fn positive_or_default(value: Option<i64>, default: u32, usage: &str) -> StageResult<u32> {
    match value {
        None | Some(0) => Ok(default),
        Some(n) if n < 0 => Err(StageError::Usage(usage.to_string())),
        Some(n) => Ok(u32::try_from(n).unwrap_or(u32::MAX)),
    }
}

fn feed_heal(amount: u32, resolve: u32) -> u32 {
    let heal = (f64::from(amount) / 2.0) * (0.5 + f64::from(resolve) / 200.0);
    (heal.floor() as u32).max(1)
}

fn feed(state: &mut EncounterState, who: &str, amount: Option<i64>) -> StageResult<Vec<Report>> {
    let amount = positive_or_default(
        amount,
        FEED_DEFAULT_AMOUNT,
        "/feed <name> <amount> (amount must be positive)",
    )?;
    let p = state
        .participant_mut(who)
        .ok_or_else(|| StageError::NotFound(who.to_string()))?;
    let parasite = p
        .parasite
        .as_mut()
        .ok_or_else(|| StageError::NoParasite(who.to_string()))?;

    parasite.feed(amount);
    let (hunger, max_hunger) = (parasite.hunger, parasite.max_hunger);
    let heal = feed_heal(amount, p.resolve);
    p.heal(heal, FEED_HP_CAP);
    p.raise_resolve(heal / 2, FEED_RESOLVE_CAP);

    let line = format!(
        "🍖 {who} feeds parasite (+{amount} hunger). Heals {heal} HP. Hunger: {hunger}/{max_hunger}"
    );
    Ok(vec![Report::Line(line), Report::Hud(Hud::full(state))])
}

fn burst(
    state: &mut EncounterState,
    who: &str,
    rng: &mut dyn RandomSource,
) -> StageResult<Vec<Report>> {
    let p = state
        .participant_mut(who)
        .ok_or_else(|| StageError::NotFound(who.to_string()))?;
    if p.parasite.is_none() {
        return Err(StageError::NoParasite(who.to_string()));
    }
    p.take_damage(BURST_SELF_DAMAGE);

    let others: Vec<String> = state
        .participants
        .keys()
        .filter(|name| name.as_str() != who)
        .cloned()
        .collect();
    if others.is_empty() {
        let line = format!("{who} bursts but hits nothing. (self damage {BURST_SELF_DAMAGE})");
        return Ok(vec![Report::Line(line), Report::Hud(Hud::full(state))]);
    }

    let target = &others[rng.pick(others.len())];
    if let Some(victim) = state.participant_mut(target) {
        victim.take_damage(BURST_DAMAGE);
    }
    if let Some(parasite) = state.participant_mut(who).and_then(|p| p.parasite.as_mut()) {
        parasite.feed(BURST_HUNGER);
    }

    let line = format!(
        "💥 {who} chest-bursts! {target} takes {BURST_DAMAGE} piercing. {who} takes {BURST_SELF_DAMAGE}."
    );
    Ok(vec![Report::Line(line), Report::Hud(Hud::full(state))])
}

fn incubate(state: &mut EncounterState, who: &str, turns: Option<i64>) -> StageResult<Vec<Report>> {
    let turns = positive_or_default(
        turns,
        INCUBATE_DEFAULT_TURNS,
        "/incubate <name> [turns] (turns must be positive)",
    )?;
    let p = state
        .participant_mut(who)
        .ok_or_else(|| StageError::NotFound(who.to_string()))?;
    let egg = p
        .egg
        .as_mut()
        .ok_or_else(|| StageError::NoEgg(who.to_string()))?;
    if egg.hatched {
        return Err(StageError::EggAlreadyHatched);
    }
    egg.start(turns);

    let line = format!("🥚 {who} begins incubating an egg for {turns} turns.");
    Ok(vec![Report::Line(line), Report::Hud(Hud::full(state))])
}

fn awaken(state: &mut EncounterState, name: Option<&str>) -> StageResult<Vec<Report>> {
    let who = name.ok_or_else(|| StageError::Usage("/awaken <name>".to_string()))?;
    let p = state
        .participant_mut(who)
        .ok_or_else(|| StageError::NotFound(who.to_string()))?;
    if !p.is_awakening_eligible() && p.resolve < AWAKEN_RESOLVE_THRESHOLD {
        return Err(StageError::NotReadyToAwaken(who.to_string()));
    }

    p.add_status("Awakened");
    p.heal(AWAKEN_HP_BONUS, AWAKEN_HP_CAP);
    p.raise_resolve(AWAKEN_RESOLVE_BONUS, AWAKEN_RESOLVE_CAP);
    p.hidden_traits.strength = TraitLevel::High;
    let had_aura = p.consume_awakening_eligibility();
    info!(participant = %who, had_aura, "participant awakened");

    let line = format!("🌈 {who} EXPERIENCES AN AWAKENING — stats increased!");
    Ok(vec![Report::Line(line), Report::Hud(Hud::full(state))])
}
