use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize_repr, Serialize_repr)]
#[repr(u8)]
pub enum FormatType {
    Png = 1,
    Apng = 2,
    Lottie = 3,
    Gif = 4,
}

impl FormatType {
    /// File extension the CDN serves this format under.
    pub fn extension(self) -> &'static str {
        match self {
            FormatType::Png | FormatType::Apng => "png",
            FormatType::Lottie => "json",
            FormatType::Gif => "gif",
        }
    }

    pub fn from_extension(ext: &str) -> Option<FormatType> {
        match ext.to_ascii_lowercase().as_str() {
            "png" | "apng" => Some(FormatType::Png),
            "json" => Some(FormatType::Lottie),
            "gif" => Some(FormatType::Gif),
            _ => None,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            FormatType::Png | FormatType::Apng => "image/png",
            FormatType::Lottie => "application/json",
            FormatType::Gif => "image/gif",
        }
    }
}
