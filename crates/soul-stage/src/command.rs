//! Command parsing for host input.

use crate::dice::leading_int;

/// Sub-command of `combat`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatSwitch {
    /// Start enforcing turns.
    On,
    /// Stop enforcing turns.
    Off,
    /// Anything else, kept for the usage line.
    Other(String),
}

/// Participant tags accepted by `add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddTag {
    /// Give the participant a parasite.
    Parasite,
    /// Give the participant a dormant egg.
    Egg,
    /// Mark the participant as narrator-controlled.
    Npc,
}

impl AddTag {
    /// Parse a tag, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "parasite" => Some(Self::Parasite),
            "egg" => Some(Self::Egg),
            "npc" => Some(Self::Npc),
            _ => None,
        }
    }
}

/// A parsed engine command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Show the command summary.
    Help,
    /// Switch combat mode.
    Combat(CombatSwitch),
    /// Add (or update) a participant.
    Add {
        /// Participant name.
        name: Option<String>,
        /// Recognised tags; unknown words are dropped.
        tags: Vec<AddTag>,
    },
    /// Show the HUD.
    Status,
    /// Roll dice.
    Roll {
        /// Raw dice spec, if one was given.
        spec: Option<String>,
    },
    /// Feed a participant's parasite.
    Feed {
        /// Host name, if one was given.
        name: Option<String>,
        /// Hunger to add, if a number was given.
        amount: Option<i64>,
    },
    /// Chest-burst a participant's parasite at a random bystander.
    Burst {
        /// Host name, if one was given.
        name: Option<String>,
    },
    /// Start incubating a participant's egg.
    Incubate {
        /// Carrier name, if one was given.
        name: Option<String>,
        /// Countdown length, if a number was given.
        turns: Option<i64>,
    },
    /// Advance the turn counter.
    NextTurn,
    /// Awaken a participant.
    Awaken {
        /// Participant name.
        name: Option<String>,
    },
    /// Unrecognised command name, lowercased.
    Unknown(String),
}

impl Command {
    /// Build a command from a name and its arguments. The name is matched
    /// case-insensitively; this never fails.
    pub fn parse<S: AsRef<str>>(name: &str, args: &[S]) -> Self {
        let cmd = name.trim().trim_start_matches('/').to_lowercase();
        let arg = |i: usize| {
            args.get(i)
                .map(|s| s.as_ref().trim())
                .filter(|s| !s.is_empty())
        };
        let owned = |i: usize| arg(i).map(str::to_string);
        let number = |i: usize| arg(i).and_then(leading_int);

        match cmd.as_str() {
            "help" => Self::Help,
            "combat" => Self::Combat(match arg(0).map(str::to_lowercase).as_deref() {
                Some("on") => CombatSwitch::On,
                Some("off") => CombatSwitch::Off,
                other => CombatSwitch::Other(other.unwrap_or_default().to_string()),
            }),
            "add" => Self::Add {
                name: owned(0),
                tags: args
                    .iter()
                    .skip(1)
                    .filter_map(|s| AddTag::parse(s.as_ref().trim()))
                    .collect(),
            },
            "status" => Self::Status,
            "roll" => Self::Roll { spec: owned(0) },
            "feed" => Self::Feed {
                name: owned(0),
                amount: number(1),
            },
            "burst" => Self::Burst { name: owned(0) },
            "incubate" => Self::Incubate {
                name: owned(0),
                turns: number(1),
            },
            "nextturn" => Self::NextTurn,
            "awaken" => Self::Awaken { name: owned(0) },
            _ => Self::Unknown(cmd),
        }
    }

    /// Parse a whole input line such as `/feed Sera 20`.
    /// Returns `None` for a blank line.
    pub fn from_line(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let name = words.next()?;
        let args: Vec<&str> = words.collect();
        Some(Self::parse(name, &args))
    }

    /// The canonical command name.
    pub fn name(&self) -> &str {
        match self {
            Self::Help => "help",
            Self::Combat(_) => "combat",
            Self::Add { .. } => "add",
            Self::Status => "status",
            Self::Roll { .. } => "roll",
            Self::Feed { .. } => "feed",
            Self::Burst { .. } => "burst",
            Self::Incubate { .. } => "incubate",
            Self::NextTurn => "nextturn",
            Self::Awaken { .. } => "awaken",
            Self::Unknown(name) => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(Command::parse::<&str>("HELP", &[]), Command::Help);
        assert_eq!(Command::parse::<&str>("NextTurn", &[]), Command::NextTurn);
        assert_eq!(Command::parse::<&str>("/status", &[]), Command::Status);
    }

    #[test]
    fn combat_switch() {
        assert_eq!(
            Command::parse("combat", &["ON"]),
            Command::Combat(CombatSwitch::On)
        );
        assert_eq!(
            Command::parse("combat", &["off"]),
            Command::Combat(CombatSwitch::Off)
        );
        assert_eq!(
            Command::parse("combat", &["maybe"]),
            Command::Combat(CombatSwitch::Other("maybe".into()))
        );
        assert_eq!(
            Command::parse::<&str>("combat", &[]),
            Command::Combat(CombatSwitch::Other(String::new()))
        );
    }

    #[test]
    fn add_collects_known_tags() {
        let cmd = Command::parse("add", &["Sera", "parasite", "EGG", "wings", "npc"]);
        assert_eq!(
            cmd,
            Command::Add {
                name: Some("Sera".into()),
                tags: vec![AddTag::Parasite, AddTag::Egg, AddTag::Npc],
            }
        );
    }

    #[test]
    fn add_name_is_not_a_tag() {
        let cmd = Command::parse("add", &["egg"]);
        assert_eq!(
            cmd,
            Command::Add {
                name: Some("egg".into()),
                tags: vec![],
            }
        );
    }

    #[test]
    fn blank_arguments_count_as_missing() {
        assert_eq!(
            Command::parse("awaken", &["  "]),
            Command::Awaken { name: None }
        );
    }

    #[test]
    fn numbers_parse_loosely() {
        assert_eq!(
            Command::parse("feed", &["Sera", "15kg"]),
            Command::Feed {
                name: Some("Sera".into()),
                amount: Some(15),
            }
        );
        assert_eq!(
            Command::parse("incubate", &["Malik", "soon"]),
            Command::Incubate {
                name: Some("Malik".into()),
                turns: None,
            }
        );
        assert_eq!(
            Command::parse("feed", &["Sera", "-4"]),
            Command::Feed {
                name: Some("Sera".into()),
                amount: Some(-4),
            }
        );
    }

    #[test]
    fn unknown_is_lowercased() {
        assert_eq!(
            Command::parse::<&str>("Dance", &[]),
            Command::Unknown("dance".into())
        );
    }

    #[test]
    fn from_line() {
        assert_eq!(
            Command::from_line("/burst Sera"),
            Some(Command::Burst {
                name: Some("Sera".into())
            })
        );
        assert_eq!(
            Command::from_line("roll 3d6"),
            Some(Command::Roll {
                spec: Some("3d6".into())
            })
        );
        assert_eq!(Command::from_line("   "), None);
    }

    #[test]
    fn canonical_name() {
        assert_eq!(Command::NextTurn.name(), "nextturn");
        assert_eq!(Command::Unknown("dance".into()).name(), "dance");
    }
}
