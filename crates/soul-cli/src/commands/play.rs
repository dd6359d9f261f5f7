use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use soul_stage::{Actor, Host, StageConfig};

pub fn run(config: StageConfig, actor: &Actor, state_path: Option<&Path>) -> Result<(), String> {
    let mut state = super::load_state(state_path)?;
    let mut host = Host::new(config);

    println!("  {} SOUL combat stage", "Starting".bold());
    println!("  Actor: {} | Type 'help' for commands, 'quit' to exit.\n", actor.name);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            continue;
        };
        if name.eq_ignore_ascii_case("quit") || name.eq_ignore_ascii_case("q") {
            break;
        }
        let args: Vec<&str> = words.collect();

        let (next, messages) = host.on_command(name, &args, actor, state.take());
        for message in &messages {
            if message.contains("Unknown command") || message.contains("Usage:") {
                println!("{}", message.yellow());
            } else {
                println!("{message}");
            }
        }
        println!();

        super::save_state(state_path, &next)?;
        state = Some(next);
    }

    Ok(())
}
