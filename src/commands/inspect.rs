use crate::commands::{CmdCtx, CommandResult};
use crate::input::parser::Intent;

pub fn inspect(ctx: &mut CmdCtx<'_>, intent: &Intent) -> CommandResult {
    let Some(target) = intent.arg() else {
        ctx.output.line("Invalid command format!");
        return Ok(());
    };

    let text = ctx.sess.world().inspect_item(target);
    ctx.output.line(text);
    Ok(())
}
