use crate::commands::{CmdCtx, CommandError, CommandResult};
use crate::input::parser::Intent;

pub fn inventory(ctx: &mut CmdCtx<'_>, intent: &Intent) -> CommandResult {
    if !intent.args.is_empty() {
        return Err(CommandError::Usage("inventory".to_string()));
    }

    let items = &ctx.sess.world().player.inventory;
    if items.is_empty() {
        ctx.output.line("Your pockets are empty.");
        return Ok(());
    }

    let mut text = String::from("Items in pack:");
    for id in items {
        text.push_str("\n\t");
        text.push_str(id.as_str());
    }
    ctx.output.line(text);
    Ok(())
}
