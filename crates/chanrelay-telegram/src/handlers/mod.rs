//! Telegram update handlers.
//!
//! Each handler is a small adapter that turns a teloxide update into a core
//! call (`commands::execute` or `Dispatcher::handle_post`) and sends the reply.

use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use crate::router::AppState;
mod channel_post;
mod commands;
mod text;

pub async fn handle_channel_post(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    channel_post::handle_channel_post(msg, state).await
}

/// Where a non-channel message goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Route {
    Command,
    FreeText,
    Ignore,
}

fn route(text: Option<&str>, is_private: bool) -> Route {
    match text {
        Some(t) if t.starts_with('/') => Route::Command,
        // `channel: @name` shortcut only makes sense in a 1:1 chat with the bot.
        Some(_) if is_private => Route::FreeText,
        _ => Route::Ignore,
    }
}

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    match route(msg.text(), msg.chat.is_private()) {
        Route::Command => commands::handle_command(msg, state).await,
        Route::FreeText => text::handle_text(msg, state).await,
        Route::Ignore => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_routed_in_any_chat() {
        assert_eq!(route(Some("/list"), true), Route::Command);
        assert_eq!(route(Some("/list@relay_bot"), false), Route::Command);
    }

    #[test]
    fn free_text_only_in_private_chats() {
        assert_eq!(route(Some("channel: @foo"), true), Route::FreeText);
        assert_eq!(route(Some("channel: @foo"), false), Route::Ignore);
    }

    #[test]
    fn messages_without_text_are_ignored() {
        assert_eq!(route(None, true), Route::Ignore);
        assert_eq!(route(None, false), Route::Ignore);
    }
}
