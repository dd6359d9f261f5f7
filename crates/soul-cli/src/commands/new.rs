use std::path::Path;

use soul_stage::{EncounterState, StageConfig};

pub fn run(config: &StageConfig, state_path: Option<&Path>, force: bool) -> Result<(), String> {
    let path = state_path.ok_or("a state file is required: use --state <file>")?;
    if path.exists() && !force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ));
    }

    super::save_state(Some(path), &EncounterState::from_config(config))?;
    println!("Created encounter at {}", path.display());
    Ok(())
}
