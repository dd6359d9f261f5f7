//! Property tests: invariants that must hold after any command sequence.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use soul_stage::{Actor, Command, EncounterState, Engine, StageConfig};

const NAMES: &[&str] = &["Sera", "Malik", "Ash"];

fn name() -> impl Strategy<Value = String> {
    prop::sample::select(NAMES).prop_map(str::to_string)
}

fn command_line() -> impl Strategy<Value = String> {
    prop_oneof![
        (name(), prop::sample::select(vec!["", "parasite", "egg", "npc", "parasite egg"]))
            .prop_map(|(n, tags)| format!("add {n} {tags}")),
        (name(), -30i64..200).prop_map(|(n, amt)| format!("feed {n} {amt}")),
        name().prop_map(|n| format!("burst {n}")),
        (name(), -2i64..6).prop_map(|(n, t)| format!("incubate {n} {t}")),
        name().prop_map(|n| format!("awaken {n}")),
        prop::sample::select(vec!["d20", "2d6", "3d4", "d2", "x"])
            .prop_map(|spec| format!("roll {spec}")),
        Just("nextturn".to_string()),
        Just("nextturn".to_string()),
        Just("status".to_string()),
        Just("combat on".to_string()),
        Just("combat off".to_string()),
    ]
}

fn command_lines(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(command_line(), len)
}

fn apply(engine: &Engine, state: EncounterState, line: &str, rng: &mut StdRng) -> EncounterState {
    let command = Command::from_line(line).unwrap();
    engine.apply(state, &command, &Actor::new("GM"), rng).0
}

proptest! {
    #[test]
    fn stats_stay_in_bounds(seed in any::<u64>(), lines in command_lines(1..60)) {
        let engine = Engine::new(StageConfig::default().with_major_event_chance(0.5));
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = EncounterState::default();

        for line in &lines {
            state = apply(&engine, state, line, &mut rng);
            for (name, p) in &state.participants {
                prop_assert!(!name.is_empty());
                prop_assert!(p.hp <= 150, "{name} hp {} after {line}", p.hp);
                prop_assert!(p.resolve <= 200, "{name} resolve {} after {line}", p.resolve);
                if let Some(parasite) = &p.parasite {
                    prop_assert!(parasite.hunger <= parasite.max_hunger);
                }
            }
        }
    }

    #[test]
    fn eggs_only_count_down_and_never_unhatch(seed in any::<u64>(), lines in command_lines(1..60)) {
        let engine = Engine::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = EncounterState::default();

        for line in &lines {
            let before = state.clone();
            state = apply(&engine, state, line, &mut rng);
            let restarted = line.starts_with("incubate");

            for (name, p) in &before.participants {
                let after = state.participant(name).and_then(|q| q.egg);
                let (Some(old), Some(new)) = (p.egg, after) else {
                    continue;
                };
                if old.hatched {
                    prop_assert!(new.hatched);
                    prop_assert_eq!(new.turns_remaining, old.turns_remaining);
                } else if old.incubating && !restarted {
                    prop_assert!(new.turns_remaining <= old.turns_remaining);
                }
            }
        }
    }

    #[test]
    fn status_is_idempotent(seed in any::<u64>(), lines in command_lines(0..30)) {
        let engine = Engine::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = EncounterState::default();
        for line in &lines {
            state = apply(&engine, state, line, &mut rng);
        }
        let once = apply(&engine, state.clone(), "status", &mut rng);
        let twice = apply(&engine, once.clone(), "status", &mut rng);
        prop_assert_eq!(&once, &state);
        prop_assert_eq!(&twice, &state);
    }

    #[test]
    fn first_reference_creates_defaults_once(n in name()) {
        let mut state = EncounterState::default();
        state.ensure_participant(&n).hp = 33;
        let p = state.ensure_participant(&n);
        prop_assert_eq!(p.hp, 33);
        prop_assert_eq!(p.resolve, 100);
        prop_assert_eq!(state.participant_count(), 1);
    }
}
