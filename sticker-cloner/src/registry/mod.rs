//! Capabilities the clone operation consumes from its host.
//!
//! Each trait exposes exactly the operations needed to copy stickers between guilds, so a host
//! can supply any implementation at construction time. [`crate::discord::DiscordClient`]
//! implements all three against the Discord REST API.

use crate::Result;
use async_trait::async_trait;
use model::guild::Guild;

mod sticker;
pub use sticker::{NewSticker, SourceSticker};

#[async_trait]
pub trait GuildRegistry: Send + Sync {
    /// Resolves a guild id, returning `None` when no such guild is visible.
    async fn get_guild(&self, guild_id: &str) -> Result<Option<Guild>>;
}

#[async_trait]
pub trait StickerRegistry: Send + Sync {
    /// Lists the stickers owned by a guild, in the registry's order.
    async fn get_stickers(&self, guild_id: &str) -> Result<Option<Vec<SourceSticker>>>;

    async fn upload_sticker(&self, guild_id: &str, sticker: NewSticker) -> Result<()>;
}

#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Downloads the binary content behind a url. Non-success responses are errors.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
