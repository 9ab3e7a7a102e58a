use crate::error::DomainError;
use crate::game::reached_milestones;
use crate::input::parser::{InputError, Verb, parse_command};
use crate::input::readline::{LineSource, ReadResult};
use crate::output::{OutFrame, Output};
use crate::state::interactive::InteractiveState;
use crate::state::session::Session;
use thiserror::Error;

mod drop;
mod fallback;
mod go;
mod inspect;
mod inventory;
mod load;
mod look;
mod restart;
mod save;
mod take;

pub const PROMPT: &str = "\n> ";

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(String),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("ERROR: {0}")]
    Domain(#[from] DomainError),
}

/// Command context passed to command handlers
pub struct CmdCtx<'a> {
    /// Collected output of this command
    pub output: &'a mut Output,
    /// The running game
    pub sess: &'a mut Session,
}

pub fn process_command(raw: &str, ctx: &mut CmdCtx<'_>) -> CommandResult {
    // A pending question swallows the line
    if ctx.sess.interactive() == InteractiveState::ConfirmRestart {
        ctx.sess.set_interactive(InteractiveState::None);
        return restart::confirm(ctx, raw);
    }

    let intent = parse_command(raw);
    intent.check()?;

    match &intent.verb {
        Verb::Quit => {
            ctx.output.system("Exiting game ...");
            ctx.sess.quit();
            return Ok(());
        }
        Verb::Help => ctx.output.system(help_text()),
        Verb::Look => look::look(ctx, &intent)?,
        Verb::Take => take::take(ctx, &intent)?,
        Verb::Drop => drop::drop(ctx, &intent)?,
        Verb::Move => go::go(ctx, &intent)?,
        Verb::Inventory => inventory::inventory(ctx, &intent)?,
        Verb::Inspect => inspect::inspect(ctx, &intent)?,
        Verb::Save => save::save(ctx, &intent)?,
        Verb::Load => load::load(ctx, &intent)?,
        Verb::Restart => restart::restart(ctx, &intent)?,
        // Item verbs ("on", "off", ...)
        Verb::Custom(_) => fallback::fallback(ctx, &intent)?,
    }

    for m in reached_milestones(ctx.sess.world()) {
        tracing::debug!(milestone = m.key, "milestone reached");
        ctx.output.line(m.message);
    }
    Ok(())
}

/// Runs one line and turns any error into player-facing text.
pub fn run_command(raw: &str, sess: &mut Session) -> Output {
    let mut output = Output::new();
    let mut ctx = CmdCtx {
        output: &mut output,
        sess,
    };

    if let Err(e) = process_command(raw, &mut ctx) {
        match &e {
            CommandError::Domain(inner) => tracing::error!(error = %inner, line = raw, "command failed"),
            _ => tracing::info!(error = %e, line = raw, "rejected command"),
        }
        ctx.output.system(e.to_string());
    }
    output
}

/// Reads lines until the player quits or input ends, handing each command's output to `emit`.
pub fn run_loop(sess: &mut Session, input: &mut dyn LineSource, mut emit: impl FnMut(&OutFrame)) -> Result<(), DomainError> {
    while sess.is_running() {
        let prompt = sess.interactive().prompt().unwrap_or(PROMPT);
        let line = match input.read_line(prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => continue,
            ReadResult::Eof => {
                tracing::info!("input closed");
                break;
            }
        };
        input.add_history(&line);

        for frame in run_command(&line, sess).frames() {
            emit(frame);
        }
    }
    Ok(())
}

pub fn help_text() -> String {
    r#"Available commands
------------------
  look [item]          Look around, or at an item
  take <item>          Pick up an item in this room
  drop <item>          Put down a carried item
  move <dir>           Move (n, s, e, w, ne, nw, se, sw, u, d, in, out)
  inventory            List what you carry
  inspect <item>       Take a closer look at a carried item
  <verb> <item>        Use an item, e.g. `on lamp`
  save [name]          Save the game
  load <name>          Load a saved game
  restart              Start over from the tutorial
  help                 Show this help
  q                    Quit"#
        .to_string()
}
