use crate::commands::{CmdCtx, CommandResult};
use crate::input::parser::Intent;
use crate::services::Namespace;

pub fn load(ctx: &mut CmdCtx<'_>, intent: &Intent) -> CommandResult {
    let Some(name) = intent.arg() else {
        ctx.output.system("Invalid cmd ERROR: Please provide filename to load");
        return Ok(());
    };

    // On failure the running game is untouched
    match ctx.sess.load(Namespace::SaveFiles, name) {
        Ok(view) => {
            ctx.output.system(format!("Game loaded: {name}"));
            ctx.output.room_view(view.name, view.description);
        }
        Err(e) => {
            tracing::error!(error = %e, name, "load failed");
            ctx.output.system(format!("ERROR: {e}"));
        }
    }
    Ok(())
}
