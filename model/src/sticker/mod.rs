use crate::Snowflake;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Sticker {
    pub id: Snowflake,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pack_id: Option<Snowflake>,
    pub name: Box<str>,
    pub description: Option<Box<str>>,
    /// Comma separated autocomplete / suggestion tags.
    pub tags: Box<str>,
    pub r#type: StickerType,
    pub format_type: FormatType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_value: Option<usize>,
}

impl Sticker {
    pub fn tag_list(&self) -> Vec<String> {
        split_tags(&self.tags)
    }

    /// Path of the sticker's image relative to the media CDN root.
    pub fn image_path(&self) -> String {
        format!("/stickers/{}.{}", self.id, self.format_type.extension())
    }
}

mod sticker_type;
pub use sticker_type::StickerType;

mod format_type;
pub use format_type::FormatType;

mod sticker_item;
pub use sticker_item::StickerItem;

mod tags;
pub use tags::{join_tags, split_tags};
