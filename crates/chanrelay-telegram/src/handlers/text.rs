use std::sync::Arc;

use teloxide::prelude::*;

use chanrelay_core::{commands::Command, domain::UserId};

use crate::handlers::commands::send_text_split;
use crate::router::AppState;

/// Plain text in a private chat. Only `channel: @name` is meaningful; anything
/// else is ignored.
pub async fn handle_text(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let Some(cmd) = Command::from_free_text(text) else {
        return Ok(());
    };

    let user_id = UserId(user.id.0 as i64);
    let reply = chanrelay_core::commands::execute(&state.relay, user_id, cmd).await;
    send_text_split(&state, msg.chat.id.0, &reply).await;
    Ok(())
}
