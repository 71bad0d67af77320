use std::sync::Arc;

use teloxide::prelude::*;

use chanrelay_core::{
    commands::{execute, Command},
    domain::{ChatId, UserId},
};

use crate::router::AppState;

fn parse_command(text: &str) -> (String, Vec<&str>) {
    // Telegram may send `/cmd@botname arg1 ...`
    let mut parts = text.split_whitespace();
    let first = parts.next().unwrap_or("");

    let cmd = first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase();

    (cmd, parts.collect())
}

pub(crate) async fn send_text_split(state: &AppState, chat_id: i64, text: &str) {
    let limit = state
        .cfg
        .telegram_safe_limit
        .min(state.messenger.capabilities().max_message_len)
        .max(200);
    for chunk in split_text_chunks(text, limit) {
        if chunk.trim().is_empty() {
            continue;
        }
        if let Err(e) = state.messenger.send_text(ChatId(chat_id), &chunk).await {
            tracing::warn!(chat_id, error = %e, "failed to send reply");
        }
    }
}

/// Split on line boundaries into chunks of at most `limit` bytes. Lines longer
/// than `limit` are hard-split on char boundaries.
fn split_text_chunks(text: &str, limit: usize) -> Vec<String> {
    if text.len() <= limit {
        return vec![text.to_string()];
    }

    let mut out: Vec<String> = Vec::new();
    let mut chunk = String::new();

    for mut line in text.split_inclusive('\n') {
        while !line.is_empty() {
            if chunk.len() + line.len() <= limit {
                chunk.push_str(line);
                break;
            }
            if !chunk.is_empty() {
                out.push(std::mem::take(&mut chunk));
                continue;
            }
            let (head, tail) = split_utf8_prefix(line, limit);
            out.push(head.to_string());
            line = tail;
        }
    }

    if !chunk.is_empty() {
        out.push(chunk);
    }
    out
}

fn split_utf8_prefix(s: &str, max_bytes: usize) -> (&str, &str) {
    if s.len() <= max_bytes {
        return (s, "");
    }
    let mut idx = max_bytes;
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }
    if idx == 0 {
        // Limit smaller than one char; still make progress.
        let next = s.char_indices().nth(1).map(|(i, _)| i).unwrap_or(s.len());
        return (&s[..next], &s[next..]);
    }
    (&s[..idx], &s[idx..])
}

pub async fn handle_command(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let user_id = UserId(user.id.0 as i64);
    let chat_id = msg.chat.id.0;

    let (name, args) = parse_command(text);
    let cmd = Command::parse(&name, &args);
    tracing::debug!(%user_id, ?cmd, "command received");

    let reply = execute(&state.relay, user_id, cmd).await;
    send_text_split(&state, chat_id, &reply).await;
    Ok(())
}
