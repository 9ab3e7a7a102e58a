use crate::commands::{CmdCtx, CommandError, CommandResult};
use crate::input::parser::Intent;
use crate::state::interactive::{InteractiveState, is_confirmation};

/// Asks first; the answer arrives as the next line.
pub fn restart(ctx: &mut CmdCtx<'_>, intent: &Intent) -> CommandResult {
    if !intent.args.is_empty() {
        return Err(CommandError::Usage("restart".to_string()));
    }
    ctx.sess.set_interactive(InteractiveState::ConfirmRestart);
    Ok(())
}

pub fn confirm(ctx: &mut CmdCtx<'_>, answer: &str) -> CommandResult {
    if !is_confirmation(answer) {
        ctx.output.line("Very well, continue on ...");
        return Ok(());
    }

    let view = ctx.sess.restart()?;
    ctx.output.room_view(view.name, view.description);
    ctx.output.system("Game restarted");
    Ok(())
}
