use crate::sticker::FormatType;
use crate::Snowflake;
use serde::{Deserialize, Serialize};

/// The minimal sticker representation returned in place of a full sticker object, e.g. in the
/// response to a sticker upload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StickerItem {
    pub id: Snowflake,
    pub name: Box<str>,
    pub format_type: FormatType,
}
