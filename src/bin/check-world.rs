use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use textquest::models::world::{WorldRecord, WorldState};
use textquest::renderer::ConditionRegistry;

// cargo run --bin check-world -- game_files/TUTORIAL_GAME.json

#[derive(Debug, Parser)]
#[command(name = "check-world", version, about = "Report problems in a world file")]
struct Args {
    /// World JSON file to check
    path: PathBuf,

    /// Also list the condition kinds that are understood
    #[arg(long)]
    kinds: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let conditions = Arc::new(ConditionRegistry::new());

    if args.kinds {
        println!("condition kinds: {}", conditions.kinds().join(", "));
    }

    let data = std::fs::read_to_string(&args.path).with_context(|| format!("failed to read {}", args.path.display()))?;
    let record: WorldRecord =
        serde_json::from_str(&data).with_context(|| format!("{} is not a world record", args.path.display()))?;

    let world = match WorldState::from_record(record, conditions) {
        Ok(w) => w,
        Err(e) => {
            println!("{}: {e}", args.path.display());
            return Ok(ExitCode::FAILURE);
        }
    };

    let issues = world.validate();
    if issues.is_empty() {
        println!(
            "{}: ok ({} rooms, {} items)",
            args.path.display(),
            world.rooms.len(),
            world.items.len()
        );
        return Ok(ExitCode::SUCCESS);
    }

    for issue in &issues {
        println!("{issue}");
    }
    println!("{} issue(s) found", issues.len());
    Ok(ExitCode::FAILURE)
}
