//! Bot commands: parsing into a closed set of actions and executing them
//! against [`RelayState`]. Every command produces exactly one text reply.

use std::sync::OnceLock;

use regex::Regex;

use crate::{domain::UserId, state::RelayState};

pub const START_TEXT: &str = "Hai! Saya adalah bot yang mengumpulkan dan mengorganisir pesan dari channel.\n\
Gunakan /help untuk melihat daftar perintah.";

pub const HELP_TEXT: &str = "Daftar perintah:\n\
/start - Memulai bot\n\
/help - Menampilkan pesan bantuan\n\
/getchannel <username> - Mendapatkan channel ID dari username channel\n\
/monitor <channel_id> <pattern> - Mulai memantau channel dengan ID tertentu\n\
/stop - Berhenti memantau channel\n\
/list - Menampilkan daftar pesan yang telah diproses\n\
/clear - Menghapus semua pesan yang telah diproses";

pub const GETCHANNEL_USAGE: &str =
    "Format: /getchannel <channel_username>\nContoh: /getchannel myChannel";
pub const MONITOR_USAGE: &str = "Format: /monitor <channel_id> <pattern>";
pub const NOTHING_MONITORED: &str = "Tidak ada channel yang sedang dipantau.";
pub const LIST_EMPTY: &str = "Tidak ada pesan yang telah diproses.";
pub const LIST_HEADER: &str = "Daftar pesan yang telah diproses:";
pub const CLEARED: &str = "Semua pesan telah dihapus.";

const ALL_TEXT_LABEL: &str = "Semua teks";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    GetChannel {
        raw: Option<String>,
    },
    Monitor {
        channel: Option<String>,
        pattern: Option<String>,
    },
    Stop,
    List,
    Clear,
    Unknown(String),
}

impl Command {
    /// Build a command from its (already lowercased, `/`-less) name and whitespace-split args.
    pub fn parse(name: &str, args: &[&str]) -> Self {
        match name {
            "start" => Command::Start,
            "help" => Command::Help,
            "getchannel" => Command::GetChannel {
                raw: args.first().map(|s| s.to_string()),
            },
            "monitor" => Command::Monitor {
                channel: args.first().map(|s| s.to_string()),
                pattern: (args.len() > 1).then(|| args[1..].join(" ")),
            },
            "stop" => Command::Stop,
            "list" => Command::List,
            "clear" => Command::Clear,
            other => Command::Unknown(other.to_string()),
        }
    }

    /// `channel: @name` sent as plain text in a private chat means `/monitor @name`.
    pub fn from_free_text(text: &str) -> Option<Self> {
        static IMPLICIT_MONITOR: OnceLock<Regex> = OnceLock::new();
        let re = IMPLICIT_MONITOR.get_or_init(|| {
            Regex::new(r"(?i)^\s*channel:\s*(@[A-Za-z0-9_]+)\s*$").expect("valid regex")
        });

        let caps = re.captures(text)?;
        Some(Command::Monitor {
            channel: Some(caps[1].to_string()),
            pattern: None,
        })
    }
}

/// Turn `myChannel`, `@myChannel` or `t.me/myChannel` into `@myChannel`.
///
/// Purely textual; the channel is not looked up.
pub fn resolve_channel_reference(raw: &str) -> String {
    let raw = raw.trim().trim_end_matches('/');
    let name = raw.rsplit('/').next().unwrap_or(raw);
    let name = name.strip_prefix('@').unwrap_or(name);
    format!("@{name}")
}

/// Prefix `@` unless already present.
pub fn normalize_channel_ref(raw: &str) -> String {
    if raw.starts_with('@') {
        raw.to_string()
    } else {
        format!("@{raw}")
    }
}

/// 1-indexed listing of processed messages, `None` when there are none.
pub fn render_processed_list(entries: &[String]) -> Option<String> {
    if entries.is_empty() {
        return None;
    }

    let mut out = format!("{LIST_HEADER}\n\n");
    for (idx, msg) in entries.iter().enumerate() {
        out.push_str(&format!("{}. {msg}\n", idx + 1));
    }
    Some(out)
}

/// Run `cmd` on behalf of `user` and return the reply text.
pub async fn execute(state: &RelayState, user: UserId, cmd: Command) -> String {
    match cmd {
        Command::Start => START_TEXT.to_string(),
        Command::Help => HELP_TEXT.to_string(),

        Command::GetChannel { raw } => match raw.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => {
                let channel_id = resolve_channel_reference(raw);
                let username = channel_id.trim_start_matches('@');
                format!("Channel ID untuk {username} adalah:\n{channel_id}")
            }
            _ => GETCHANNEL_USAGE.to_string(),
        },

        Command::Monitor { channel, pattern } => {
            let Some(channel) = channel.filter(|c| !c.trim().is_empty()) else {
                return MONITOR_USAGE.to_string();
            };
            let channel_ref = normalize_channel_ref(channel.trim());
            let label = pattern
                .clone()
                .unwrap_or_else(|| ALL_TEXT_LABEL.to_string());

            let replaced = state
                .registry
                .lock()
                .await
                .set_target(user, channel_ref.clone(), pattern);
            if let Some(prev) = replaced {
                tracing::info!(%user, from = %prev.channel_ref, to = %channel_ref, "monitor target replaced");
            } else {
                tracing::info!(%user, channel = %channel_ref, "monitor target set");
            }

            format!("Mulai memantau channel: {channel_ref}\nPola: {label}")
        }

        Command::Stop => match state.registry.lock().await.clear_target(user) {
            Some(prev) => {
                tracing::info!(%user, channel = %prev.channel_ref, "monitor target cleared");
                format!("Berhenti memantau channel: {}", prev.channel_ref)
            }
            None => NOTHING_MONITORED.to_string(),
        },

        Command::List => {
            let entries = state.processed().await;
            render_processed_list(&entries).unwrap_or_else(|| LIST_EMPTY.to_string())
        }

        Command::Clear => {
            state.store.lock().await.clear();
            tracing::info!(%user, "processed messages cleared");
            CLEARED.to_string()
        }

        Command::Unknown(name) => {
            format!("Perintah tidak dikenal: /{name}\nGunakan /help untuk melihat daftar perintah.")
        }
    }
}
