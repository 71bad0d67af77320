use std::sync::Arc;

use crate::{
    domain::{ChatId, UserId},
    filter::extract,
    messaging::{port::MessagingPort, types::IncomingPost},
    state::RelayState,
};

/// Header line of every relayed notification.
pub const NOTIFICATION_HEADER: &str = "Pesan baru diterima dan diproses:";

pub fn notification_text(formatted: &str) -> String {
    format!("{NOTIFICATION_HEADER}\n{formatted}")
}

/// Why a post was not relayed. Drops are silent towards users.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropReason {
    /// Nobody is monitoring anything.
    NoTargets,
    /// Somebody is monitoring, but not this channel.
    ChannelMismatch,
    /// The post carries no text (media without caption, service message, ...).
    NoText,
    /// Extraction left nothing but whitespace.
    EmptyExtraction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    Dropped(DropReason),
    Relayed {
        formatted: String,
        count: u64,
        recipients: Vec<UserId>,
        /// Recipients the messenger accepted the notification for.
        delivered: usize,
    },
}

/// Runs inbound channel posts through filter, ledger and log, then notifies watchers.
pub struct Dispatcher {
    state: Arc<RelayState>,
    messenger: Arc<dyn MessagingPort>,
}

impl Dispatcher {
    pub fn new(state: Arc<RelayState>, messenger: Arc<dyn MessagingPort>) -> Self {
        Self { state, messenger }
    }

    pub async fn handle_post(&self, post: IncomingPost) -> DispatchOutcome {
        let recipients = {
            let registry = self.state.registry.lock().await;
            if registry.is_empty() {
                return DispatchOutcome::Dropped(DropReason::NoTargets);
            }
            registry.watchers_of(&post.channel_id)
        };
        if recipients.is_empty() {
            tracing::debug!(channel = %post.channel_id, "post from unmonitored channel dropped");
            return DispatchOutcome::Dropped(DropReason::ChannelMismatch);
        }

        let Some(text) = post.text.as_deref() else {
            tracing::debug!(channel = %post.channel_id, "post without text dropped");
            return DispatchOutcome::Dropped(DropReason::NoText);
        };

        let extracted = extract(text);
        if extracted.trim().is_empty() {
            tracing::debug!(channel = %post.channel_id, "post with empty extraction dropped");
            return DispatchOutcome::Dropped(DropReason::EmptyExtraction);
        }

        // Record + append under one lock; released before any network I/O.
        let recorded = self.state.store.lock().await.record(&extracted);

        let body = notification_text(&recorded.formatted);
        let mut delivered = 0usize;
        for user in &recipients {
            match self.messenger.send_text(ChatId::from(*user), &body).await {
                Ok(_) => delivered += 1,
                Err(e) => {
                    tracing::warn!(user = %user, error = %e, "failed to deliver relayed post")
                }
            }
        }

        tracing::info!(
            channel = %post.channel_id,
            count = recorded.count,
            recipients = recipients.len(),
            delivered,
            "relayed channel post"
        );

        DispatchOutcome::Relayed {
            formatted: recorded.formatted,
            count: recorded.count,
            recipients,
            delivered,
        }
    }
}
