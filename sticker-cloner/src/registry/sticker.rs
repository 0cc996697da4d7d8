use model::sticker::{FormatType, Sticker};
use url::Url;

/// Read-only view of a sticker in the source guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSticker {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub url: String,
}

impl SourceSticker {
    /// Builds the view from a Discord sticker object, pointing `url` at the media CDN.
    pub fn from_model(sticker: &Sticker, cdn_base_url: &str) -> Self {
        Self {
            id: sticker.id.to_string(),
            name: sticker.name.to_string(),
            description: sticker.description.as_deref().map(str::to_string),
            tags: sticker.tag_list(),
            url: format!(
                "{}{}",
                cdn_base_url.trim_end_matches('/'),
                sticker.image_path()
            ),
        }
    }

    /// Last path segment of the content url, falling back to the sticker id.
    pub fn filename(&self) -> String {
        Url::parse(&self.url)
            .ok()
            .and_then(|url| {
                url.path_segments()
                    .and_then(Iterator::last)
                    .filter(|segment| !segment.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| format!("{}.png", self.id))
    }
}

/// A sticker creation request for the target guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSticker {
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub file: Vec<u8>,
    pub filename: String,
}

impl NewSticker {
    /// Copies name, description and tags from the source unchanged.
    pub fn from_source(source: &SourceSticker, file: Vec<u8>) -> Self {
        Self {
            name: source.name.clone(),
            description: source.description.clone(),
            tags: source.tags.clone(),
            file,
            filename: source.filename(),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        self.filename
            .rsplit_once('.')
            .and_then(|(_, ext)| FormatType::from_extension(ext))
            .map(FormatType::mime_type)
            .unwrap_or("application/octet-stream")
    }
}
