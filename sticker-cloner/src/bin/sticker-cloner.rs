use std::sync::Arc;

use sticker_cloner::discord::DiscordClient;
use sticker_cloner::plugin::{Plugin, StickerClonePlugin};
use sticker_cloner::settings::InputId;
use sticker_cloner::{Config, Result, TracingNotifier};
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    configure_observability(&config);

    let client = Arc::new(DiscordClient::new(&config)?);
    let plugin = StickerClonePlugin::with_discord_client(client, Arc::new(TracingNotifier));

    plugin.start();

    let mut panel = plugin.settings_panel();
    panel.set_input(InputId::SourceGuildId, config.source_guild_id.as_str());
    panel.set_input(InputId::TargetGuildId, config.target_guild_id.as_str());
    debug!("Settings panel:\n{}", panel.render());

    info!("Submitting settings panel");
    panel.click().await;

    plugin.stop();

    Ok(())
}

fn configure_observability(config: &Config) {
    // Toasts are logged at info, so they must stay visible without RUST_LOG
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if config.json_log {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
