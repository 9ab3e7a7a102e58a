use crate::commands::{CmdCtx, CommandResult};
use crate::input::parser::Intent;

pub fn look(ctx: &mut CmdCtx<'_>, intent: &Intent) -> CommandResult {
    let world = ctx.sess.world();

    let Some(target) = intent.arg() else {
        let here = world.player.current_location.clone();
        ctx.output.line(world.describe_room(&here)?);
        return Ok(());
    };

    // Anything known can be looked at, wherever it is
    match world.look_target(target) {
        Some(desc) => ctx.output.line(desc),
        None => {
            tracing::info!(item = target, "look: not an item");
            ctx.output.line("Only 'item' objects are currently supported, please try again.");
        }
    }
    Ok(())
}
