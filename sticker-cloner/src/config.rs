use crate::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub discord_token: String,
    #[serde(default)]
    pub token_type: TokenType,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_cdn_base_url")]
    pub cdn_base_url: String,

    // Settings panel inputs, validated by the panel rather than here
    #[serde(default)]
    pub source_guild_id: String,
    #[serde(default)]
    pub target_guild_id: String,

    #[serde(default)]
    pub json_log: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    #[default]
    Bot,
    User,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        envy::from_env().map_err(Into::into)
    }

    pub fn authorization_header(&self) -> String {
        match self.token_type {
            TokenType::Bot => format!("Bot {}", self.discord_token),
            TokenType::User => self.discord_token.clone(),
        }
    }
}

fn default_api_base_url() -> String {
    "https://discord.com/api/v10".to_string()
}

fn default_cdn_base_url() -> String {
    "https://media.discordapp.net".to_string()
}
