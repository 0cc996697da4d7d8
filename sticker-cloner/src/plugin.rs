use std::sync::Arc;

use tracing::debug;

use crate::cloner::StickerCloner;
use crate::discord::DiscordClient;
use crate::registry::{ContentFetcher, GuildRegistry, StickerRegistry};
use crate::settings::SettingsPanel;
use crate::{Notifier, ToastKind};

/// Lifecycle hooks the host drives.
pub trait Plugin {
    fn name(&self) -> &'static str;
    fn start(&self);
    fn stop(&self);
}

pub struct StickerClonePlugin {
    cloner: Arc<StickerCloner>,
    notifier: Arc<dyn Notifier>,
}

impl StickerClonePlugin {
    pub fn new(
        guilds: Arc<dyn GuildRegistry>,
        stickers: Arc<dyn StickerRegistry>,
        fetcher: Arc<dyn ContentFetcher>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let cloner = StickerCloner::new(guilds, stickers, fetcher, Arc::clone(&notifier));

        Self {
            cloner: Arc::new(cloner),
            notifier,
        }
    }

    /// Uses one Discord client for every capability.
    pub fn with_discord_client(client: Arc<DiscordClient>, notifier: Arc<dyn Notifier>) -> Self {
        Self::new(client.clone(), client.clone(), client, notifier)
    }

    pub async fn clone_stickers(&self, source_guild_id: &str, target_guild_id: &str) {
        self.cloner
            .clone_stickers(source_guild_id, target_guild_id)
            .await;
    }

    pub fn settings_panel(&self) -> SettingsPanel {
        SettingsPanel::new(Arc::clone(&self.cloner), Arc::clone(&self.notifier))
    }
}

impl Plugin for StickerClonePlugin {
    fn name(&self) -> &'static str {
        "CloneStickers"
    }

    fn start(&self) {
        debug!(plugin = self.name(), "Starting plugin");
        self.notifier.show_toast("CloneStickers Plugin Enabled!", ToastKind::Default);
    }

    fn stop(&self) {
        debug!(plugin = self.name(), "Stopping plugin");
        self.notifier.show_toast("CloneStickers Plugin Disabled!", ToastKind::Default);
    }
}
