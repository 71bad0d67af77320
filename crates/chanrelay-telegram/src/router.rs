use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use chanrelay_core::{
    config::Config, dispatcher::Dispatcher as PostDispatcher, messaging::port::MessagingPort,
    state::RelayState,
};

use crate::handlers;
use crate::liveness;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub relay: Arc<RelayState>,
    pub messenger: Arc<dyn MessagingPort>,
    pub dispatcher: Arc<PostDispatcher>,
}

pub async fn run_polling(cfg: Arc<Config>, relay: Arc<RelayState>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    // Basic startup info.
    match bot.get_me().await {
        Ok(me) => tracing::info!("chanrelay started: @{}", me.username()),
        Err(e) => tracing::warn!(error = %e, "could not fetch bot identity"),
    }

    if cfg.liveness_enabled {
        liveness::spawn_or_log(cfg.liveness_addr).await;
    }

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let dispatcher = Arc::new(PostDispatcher::new(relay.clone(), messenger.clone()));

    let state = Arc::new(AppState {
        cfg,
        relay,
        messenger,
        dispatcher,
    });

    let handler = dptree::entry()
        .branch(Update::filter_channel_post().endpoint(handlers::handle_channel_post))
        .branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    Ok(())
}
