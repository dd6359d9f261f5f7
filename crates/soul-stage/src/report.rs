//! Report lines produced by the engine.
//!
//! The engine never formats for a particular chat surface. It emits
//! [`Report`] values; [`render`](crate::render) turns them into text.

use crate::state::{Egg, EncounterState, Participant};

/// Title shown on every HUD.
pub const HUD_TITLE: &str = "SOUL HUD";

/// One item of engine output.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// A plain informational line.
    Line(String),
    /// A narratively significant occurrence.
    MajorEvent(MajorEvent),
    /// A multi-line status block.
    Hud(Hud),
}

impl Report {
    /// A plain line.
    pub fn line(text: impl Into<String>) -> Self {
        Self::Line(text.into())
    }
}

/// Kinds of major event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MajorEvent {
    /// A participant's egg finished incubating.
    EggHatched {
        /// The carrier.
        name: String,
    },
    /// The random cooldown-gated event.
    FigureArrives,
}

impl std::fmt::Display for MajorEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EggHatched { name } => {
                write!(f, "🐲 Major Event: {name}'s egg hatches into a beast!")
            }
            Self::FigureArrives => {
                write!(f, "🎺 MAJOR EVENT: An unexpected figure arrives on the field.")
            }
        }
    }
}

/// A titled block of status lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    /// Block title.
    pub title: String,
    /// Body lines, in display order.
    pub lines: Vec<String>,
}

impl Hud {
    /// The full status block: combat flag, turn, and every participant.
    pub fn full(state: &EncounterState) -> Self {
        let mut lines = vec![
            format!(
                "Combat: {} | Turn: {}",
                if state.combat_active { "ON" } else { "OFF" },
                state.turn_number
            ),
            String::new(),
        ];

        if state.participants.is_empty() {
            lines.push("No participants yet. Use /add <name> [parasite|egg|npc]".to_string());
        }
        for (name, p) in &state.participants {
            lines.push(format!("{name} — HP {}/100 {}", p.hp, bar(p.hp, 100, 12)));
            lines.push(detail_line(p));
            if !p.status_tags.is_empty() {
                lines.push(format!("Status: {}", p.status_tags.join(", ")));
            }
            lines.push(String::new());
        }

        Self {
            title: HUD_TITLE.to_string(),
            lines,
        }
    }

    /// The short block shown after a turn advance: turn number and one
    /// hp line per participant.
    pub fn compact(state: &EncounterState) -> Self {
        let mut lines = vec![format!("Turn {}", state.turn_number)];
        for (name, p) in &state.participants {
            let mut line = format!("{name}: HP {}/100 {}", p.hp, bar(p.hp, 100, 12));
            if let Some(parasite) = &p.parasite {
                line.push_str(&format!(
                    "  Parasite {}/{}",
                    parasite.hunger, parasite.max_hunger
                ));
            }
            lines.push(line);
        }
        Self {
            title: HUD_TITLE.to_string(),
            lines,
        }
    }
}

fn detail_line(p: &Participant) -> String {
    let mut more = format!("Resolve {}/100", p.resolve);
    if let Some(parasite) = &p.parasite {
        more.push_str(&format!(
            "   Parasite {}/{} {}",
            parasite.hunger,
            parasite.max_hunger,
            bar(parasite.hunger, parasite.max_hunger, 8)
        ));
    }
    if let Some(egg) = &p.egg {
        more.push_str(&format!("   Egg: {}", egg_stage(egg)));
    }
    more
}

fn egg_stage(egg: &Egg) -> String {
    if egg.hatched {
        "HATCHED".to_string()
    } else if egg.incubating {
        format!("Incubating({}t)", egg.turns_remaining)
    } else {
        "Dormant".to_string()
    }
}

/// A gauge of `len` cells, filled in proportion to `value / max`.
pub fn bar(value: u32, max: u32, len: usize) -> String {
    let pct = if max == 0 {
        0.0
    } else {
        (f64::from(value) / f64::from(max)).clamp(0.0, 1.0)
    };
    let filled = ((pct * len as f64).round() as usize).min(len);
    format!("{}{}", "▮".repeat(filled), "▯".repeat(len - filled))
}
