use std::sync::Arc;

use teloxide::prelude::*;

use chanrelay_core::messaging::types::IncomingPost;

use crate::router::AppState;

/// Identity a channel is matched by: `@username` when public, numeric id otherwise.
fn channel_identity(username: Option<&str>, chat_id: i64) -> String {
    match username {
        Some(u) if !u.is_empty() => format!("@{u}"),
        _ => chat_id.to_string(),
    }
}

pub async fn handle_channel_post(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let post = IncomingPost::new(
        channel_identity(msg.chat.username(), msg.chat.id.0),
        msg.text(),
    );

    let outcome = state.dispatcher.handle_post(post).await;
    tracing::debug!(?outcome, "channel post handled");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_channels_match_by_username() {
        assert_eq!(channel_identity(Some("foo"), -1001), "@foo");
    }

    #[test]
    fn private_channels_match_by_numeric_id() {
        assert_eq!(channel_identity(None, -1001234567890), "-1001234567890");
        assert_eq!(channel_identity(Some(""), -42), "-42");
    }
}
