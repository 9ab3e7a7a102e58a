use crate::commands::{CmdCtx, CommandError, CommandResult};
use crate::input::parser::Intent;

pub fn drop(ctx: &mut CmdCtx<'_>, intent: &Intent) -> CommandResult {
    let Some(target) = intent.arg() else {
        return Err(CommandError::Usage("drop <item>".to_string()));
    };

    let outcome = ctx.sess.world_mut().drop_item(target);
    ctx.output.line(outcome.message());
    Ok(())
}
