use std::sync::Arc;

use tracing::{debug, error, info};

use crate::registry::{ContentFetcher, GuildRegistry, NewSticker, StickerRegistry};
use crate::{Notifier, Result, ToastKind};

pub const INVALID_GUILDS_MESSAGE: &str = "Invalid server IDs provided.";
pub const NO_STICKERS_MESSAGE: &str = "No stickers found in the source server.";
pub const CLONE_FAILED_MESSAGE: &str = "An error occurred while cloning stickers.";

/// Copies every sticker of one guild into another, reporting progress through toasts.
pub struct StickerCloner {
    guilds: Arc<dyn GuildRegistry>,
    stickers: Arc<dyn StickerRegistry>,
    fetcher: Arc<dyn ContentFetcher>,
    notifier: Arc<dyn Notifier>,
}

impl StickerCloner {
    pub fn new(
        guilds: Arc<dyn GuildRegistry>,
        stickers: Arc<dyn StickerRegistry>,
        fetcher: Arc<dyn ContentFetcher>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            guilds,
            stickers,
            fetcher,
            notifier,
        }
    }

    /// Stickers are processed one at a time in source order. The first download or upload
    /// failure abandons the rest; stickers already created in the target are kept, and nothing
    /// prevents a second run from creating duplicates.
    ///
    /// Errors never reach the caller, they are logged and reported as a single generic toast.
    pub async fn clone_stickers(&self, source_guild_id: &str, target_guild_id: &str) {
        if let Err(e) = self.try_clone(source_guild_id, target_guild_id).await {
            error!(error = %e, %source_guild_id, %target_guild_id, "Error cloning stickers");
            self.notifier.show_toast(CLONE_FAILED_MESSAGE, ToastKind::Error);
        }
    }

    async fn try_clone(&self, source_guild_id: &str, target_guild_id: &str) -> Result<()> {
        let source = self.guilds.get_guild(source_guild_id).await?;
        let target = self.guilds.get_guild(target_guild_id).await?;

        let target = match (source, target) {
            (Some(_), Some(target)) => target,
            _ => {
                self.notifier.show_toast(INVALID_GUILDS_MESSAGE, ToastKind::Error);
                return Ok(());
            }
        };

        let stickers = match self.stickers.get_stickers(source_guild_id).await? {
            Some(stickers) if !stickers.is_empty() => stickers,
            _ => {
                self.notifier.show_toast(NO_STICKERS_MESSAGE, ToastKind::Error);
                return Ok(());
            }
        };

        info!(count = stickers.len(), %source_guild_id, %target_guild_id, "Cloning stickers");

        for sticker in &stickers {
            debug!(sticker_id = %sticker.id, url = %sticker.url, "Downloading sticker");
            let file = self.fetcher.fetch(&sticker.url).await?;

            self.stickers
                .upload_sticker(target_guild_id, NewSticker::from_source(sticker, file))
                .await?;

            self.notifier.show_toast(
                &format!("Cloned sticker: {}", sticker.name),
                ToastKind::Success,
            );
        }

        self.notifier.show_toast(
            &format!(
                "Successfully cloned {} stickers to {}.",
                stickers.len(),
                target.name
            ),
            ToastKind::Default,
        );

        Ok(())
    }
}
