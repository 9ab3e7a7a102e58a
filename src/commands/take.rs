use crate::commands::{CmdCtx, CommandResult};
use crate::input::parser::Intent;

pub fn take(ctx: &mut CmdCtx<'_>, intent: &Intent) -> CommandResult {
    let Some(target) = intent.arg() else {
        ctx.output
            .line("Take what? Me out, on me, to the ball game? None of which will work mind you.");
        return Ok(());
    };

    let outcome = ctx.sess.world_mut().take_item(target);
    ctx.output.line(outcome.message());
    Ok(())
}
