use crate::commands::{CmdCtx, CommandError, CommandResult};
use crate::input::parser::Intent;

/// `<verb> <item>` for an item in reach runs the item's own action table.
pub fn fallback(ctx: &mut CmdCtx<'_>, intent: &Intent) -> CommandResult {
    let verb = intent.verb.as_str();

    let Some(target) = intent.arg() else {
        return Err(CommandError::UnknownCommand(verb.to_string()));
    };

    match ctx.sess.world_mut().apply_item_command(verb, target) {
        Some(result) => {
            ctx.output.line(result.message);
            Ok(())
        }
        None => Err(CommandError::UnknownCommand(format!("{verb} {target}"))),
    }
}
