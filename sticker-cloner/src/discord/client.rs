use crate::registry::{ContentFetcher, GuildRegistry, NewSticker, SourceSticker, StickerRegistry};
use crate::{Config, Error, Result};
use async_trait::async_trait;
use model::guild::Guild;
use model::sticker::{join_tags, Sticker, StickerItem};
use model::Snowflake;
use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Discord REST client covering guild lookup, sticker listing and creation, and CDN downloads.
pub struct DiscordClient {
    http_client: reqwest::Client,
    authorization: String,
    api_base_url: String,
    cdn_base_url: String,
}

impl DiscordClient {
    pub fn new(config: &Config) -> Result<DiscordClient> {
        // No request timeout: a stalled transfer stalls the clone
        let http_client = reqwest::ClientBuilder::new().use_rustls_tls().build()?;

        Ok(Self::new_with_client(config, http_client))
    }

    pub fn new_with_client(config: &Config, http_client: reqwest::Client) -> DiscordClient {
        DiscordClient {
            http_client,
            authorization: config.authorization_header(),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            cdn_base_url: config.cdn_base_url.clone(),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    /// GETs an API path. `404` (unknown guild) and `403` (guild not visible to this token) both
    /// map to `None`.
    async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let res = self
            .http_client
            .get(self.api_url(path))
            .header("Authorization", &self.authorization)
            .send()
            .await?;

        match res.status() {
            StatusCode::NOT_FOUND | StatusCode::FORBIDDEN => {
                debug!(%path, status = %res.status(), "Resource not visible");
                Ok(None)
            }
            status if status.is_success() => Ok(Some(res.json().await?)),
            _ => response_error(res).await.into(),
        }
    }
}

async fn response_error(res: Response) -> Error {
    let status = res.status();
    let body = res.text().await.unwrap_or_default();
    Error::ResponseError(status, body)
}

fn parse_guild_id(guild_id: &str) -> Option<Snowflake> {
    match guild_id.parse() {
        Ok(id) => Some(id),
        Err(e) => {
            debug!(%guild_id, error = %e, "Guild id is not a snowflake");
            None
        }
    }
}

#[async_trait]
impl GuildRegistry for DiscordClient {
    async fn get_guild(&self, guild_id: &str) -> Result<Option<Guild>> {
        let Some(guild_id) = parse_guild_id(guild_id) else {
            return Ok(None);
        };

        self.get_optional(&format!("/guilds/{}", guild_id)).await
    }
}

#[async_trait]
impl StickerRegistry for DiscordClient {
    async fn get_stickers(&self, guild_id: &str) -> Result<Option<Vec<SourceSticker>>> {
        let Some(guild_id) = parse_guild_id(guild_id) else {
            return Ok(None);
        };

        let stickers: Option<Vec<Sticker>> = self
            .get_optional(&format!("/guilds/{}/stickers", guild_id))
            .await?;

        Ok(stickers.map(|stickers| {
            stickers
                .iter()
                .map(|sticker| SourceSticker::from_model(sticker, &self.cdn_base_url))
                .collect()
        }))
    }

    async fn upload_sticker(&self, guild_id: &str, sticker: NewSticker) -> Result<()> {
        let mime_type = sticker.mime_type();
        let file = Part::bytes(sticker.file)
            .file_name(sticker.filename)
            .mime_str(mime_type)?;

        let form = Form::new()
            .text("name", sticker.name)
            .text("description", sticker.description.unwrap_or_default())
            .text("tags", join_tags(&sticker.tags))
            .part("file", file);

        let res = self
            .http_client
            .post(self.api_url(&format!("/guilds/{}/stickers", guild_id)))
            .header("Authorization", &self.authorization)
            .multipart(form)
            .send()
            .await?;

        if !res.status().is_success() {
            return response_error(res).await.into();
        }

        // The sticker exists at this point, an unexpected body only affects logging
        let status = res.status();
        match res.json::<StickerItem>().await {
            Ok(created) => {
                debug!(%guild_id, sticker_id = %created.id, "Created sticker {}", created.name);
            }
            Err(e) => {
                warn!(%guild_id, %status, error = %e, "Created sticker, response unreadable");
            }
        }

        Ok(())
    }
}

#[async_trait]
impl ContentFetcher for DiscordClient {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let res = self.http_client.get(url).send().await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Error::DownloadError(status, body).into();
        }

        Ok(res.bytes().await?.to_vec())
    }
}
