use crate::commands::{CmdCtx, CommandResult};
use crate::input::parser::Intent;

pub fn save(ctx: &mut CmdCtx<'_>, intent: &Intent) -> CommandResult {
    match ctx.sess.save(intent.arg()) {
        Ok(path) => ctx.output.system(format!("Game save: {path}")),
        Err(e) => {
            tracing::error!(error = %e, "save failed");
            ctx.output.system(format!("Save game error: {e}"));
        }
    }
    Ok(())
}
