use std::path::Path;

use soul_stage::{Actor, Host, StageConfig};

pub fn run(
    config: StageConfig,
    actor: &Actor,
    state_path: Option<&Path>,
    name: &str,
    args: &[String],
) -> Result<(), String> {
    let state = super::load_state(state_path)?;
    let mut host = Host::new(config);

    let (next, messages) = host.on_command(name, args, actor, state);
    for message in &messages {
        println!("{message}");
    }

    super::save_state(state_path, &next)
}
