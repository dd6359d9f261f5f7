pub mod exec;
pub mod new;
pub mod play;

use std::fs;
use std::path::Path;

use soul_stage::EncounterState;

/// Load the persisted encounter. A missing path or missing file means
/// there is no encounter yet.
fn load_state(path: Option<&Path>) -> Result<Option<EncounterState>, String> {
    let Some(path) = path else {
        return Ok(None);
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no state file yet");
        return Ok(None);
    }
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|e| format!("invalid state file {}: {e}", path.display()))
}

/// Persist the encounter, if a path was given.
fn save_state(path: Option<&Path>, state: &EncounterState) -> Result<(), String> {
    let Some(path) = path else {
        return Ok(());
    };
    let json = serde_json::to_string_pretty(state).map_err(|e| e.to_string())?;
    tracing::debug!(path = %path.display(), turn = state.turn_number, "saving state");
    fs::write(path, json).map_err(|e| format!("cannot write {}: {e}", path.display()))
}
