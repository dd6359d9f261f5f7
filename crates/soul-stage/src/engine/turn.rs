//! Turn advancement.

use tracing::{debug, info};

use crate::config::StageConfig;
use crate::random::RandomSource;
use crate::report::{Hud, MajorEvent, Report};
use crate::state::{EncounterState, Egg};

/// Hunger a parasite loses each turn.
pub const HUNGER_DECAY: u32 = 3;
/// Damage a starving parasite deals its host each turn.
pub const STARVE_DAMAGE: u32 = 8;
/// Hit points below which a participant loses resolve each turn.
pub const LOW_HP_THRESHOLD: u32 = 30;
/// Resolve lost per turn while below [`LOW_HP_THRESHOLD`].
pub const LOW_HP_RESOLVE_DRAIN: u32 = 5;

const STARVING_TAG: &str = "Parasite starving";
const HATCHED_TAG: &str = "Egg hatched into a Beast";

/// Advance the encounter by one turn.
///
/// Each participant is processed on its own; the only global step is the
/// single major event roll at the end.
pub(crate) fn advance(
    state: &mut EncounterState,
    config: &StageConfig,
    rng: &mut dyn RandomSource,
) -> Vec<Report> {
    state.turn_number = state.turn_number.saturating_add(1);
    debug!(turn = state.turn_number, "advancing turn");

    let mut reports = Vec::new();
    for (name, p) in &mut state.participants {
        let starving = p.parasite.as_mut().is_some_and(|parasite| {
            parasite.starve(HUNGER_DECAY);
            parasite.is_starving()
        });
        if starving {
            p.take_damage(STARVE_DAMAGE);
            p.add_status(STARVING_TAG);
        }

        if p.egg.as_mut().is_some_and(Egg::tick) {
            p.add_status(HATCHED_TAG);
            info!(participant = %name, "egg hatched");
            reports.push(Report::MajorEvent(MajorEvent::EggHatched { name: name.clone() }));
        }

        if p.hp < LOW_HP_THRESHOLD {
            p.drain_resolve(LOW_HP_RESOLVE_DRAIN);
        }
    }

    if state.turns_since_major_event() >= state.major_event_cooldown
        && rng.chance() < config.major_event_chance
    {
        state.last_major_event_turn = i64::from(state.turn_number);
        info!(turn = state.turn_number, "major event");
        reports.push(Report::MajorEvent(MajorEvent::FigureArrives));
    }

    reports.push(Report::Line(format!("➡️ Turn {} processed.", state.turn_number)));
    reports.push(Report::Hud(Hud::compact(state)));
    reports
}
