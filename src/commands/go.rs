use crate::commands::{CmdCtx, CommandError, CommandResult};
use crate::input::parser::Intent;
use crate::models::types::VALID_DIRECTIONS;
use crate::models::world::MoveOutcome;

pub fn go(ctx: &mut CmdCtx<'_>, intent: &Intent) -> CommandResult {
    let Some(token) = intent.arg() else {
        return Err(CommandError::Usage("move <direction>".to_string()));
    };

    // 1. direction must come from the vocabulary
    if intent.direction.is_none() {
        ctx.output.line(format!(
            "Invalid direction provided: {token}\nChoose from the following: {}",
            VALID_DIRECTIONS.join(", ")
        ));
        return Ok(());
    }

    // 2. attempt the move; a blocked attempt still costs a move
    match ctx.sess.world_mut().move_player(token)? {
        MoveOutcome::Moved { view, .. } => ctx.output.room_view(view.name, view.description),
        blocked @ MoveOutcome::Blocked { .. } => ctx.output.line(blocked.message()),
    }
    Ok(())
}
