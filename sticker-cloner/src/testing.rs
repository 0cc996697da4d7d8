//! In-memory registries and a recording notifier for exercising the clone flow.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use model::guild::Guild;
use model::Snowflake;
use parking_lot::Mutex;
use reqwest::StatusCode;

use crate::cloner::StickerCloner;
use crate::registry::{ContentFetcher, GuildRegistry, NewSticker, SourceSticker, StickerRegistry};
use crate::{Error, Notifier, Result, ToastKind};

pub fn sticker(id: u64, name: &str) -> SourceSticker {
    SourceSticker {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(format!("{} description", name)),
        tags: vec![name.to_string(), "tag".to_string()],
        url: format!("https://cdn.test/stickers/{}.png", id),
    }
}

/// Guild "1" is the source and guild "2" the target.
#[derive(Default)]
pub struct FakeGuilds {
    fail: AtomicBool,
}

impl FakeGuilds {
    pub fn fail(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl GuildRegistry for FakeGuilds {
    async fn get_guild(&self, guild_id: &str) -> Result<Option<Guild>> {
        if self.fail.load(Ordering::SeqCst) {
            return Error::ResponseError(StatusCode::BAD_GATEWAY, "registry down".to_string())
                .into();
        }

        let name = match guild_id {
            "1" => "Source",
            "2" => "Target",
            _ => return Ok(None),
        };

        Ok(Some(Guild {
            id: Snowflake(guild_id.parse().unwrap()),
            name: name.into(),
            description: None,
            owner_id: None,
        }))
    }
}

pub struct FakeStickers {
    source: Vec<SourceSticker>,
    absent: AtomicBool,
    fail_list: AtomicBool,
    fail_on_attempt: Mutex<Option<usize>>,
    attempts: AtomicUsize,
    uploads: Mutex<Vec<(String, NewSticker)>>,
}

impl FakeStickers {
    fn new(source: Vec<SourceSticker>) -> Self {
        Self {
            source,
            absent: AtomicBool::new(false),
            fail_list: AtomicBool::new(false),
            fail_on_attempt: Mutex::new(None),
            attempts: AtomicUsize::new(0),
            uploads: Mutex::new(Vec::new()),
        }
    }

    pub fn set_absent(&self) {
        self.absent.store(true, Ordering::SeqCst);
    }

    pub fn fail_list(&self) {
        self.fail_list.store(true, Ordering::SeqCst);
    }

    /// Makes the n-th upload (1-indexed) fail.
    pub fn fail_on_upload(&self, attempt: usize) {
        *self.fail_on_attempt.lock() = Some(attempt);
    }

    pub fn upload_attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn uploads(&self) -> Vec<(String, NewSticker)> {
        self.uploads.lock().clone()
    }
}

#[async_trait]
impl StickerRegistry for FakeStickers {
    async fn get_stickers(&self, _guild_id: &str) -> Result<Option<Vec<SourceSticker>>> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Error::ResponseError(StatusCode::FORBIDDEN, "Missing Access".to_string())
                .into();
        }

        if self.absent.load(Ordering::SeqCst) {
            return Ok(None);
        }

        Ok(Some(self.source.clone()))
    }

    async fn upload_sticker(&self, guild_id: &str, sticker: NewSticker) -> Result<()> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if *self.fail_on_attempt.lock() == Some(attempt) {
            return Error::ResponseError(StatusCode::BAD_REQUEST, "rejected".to_string()).into();
        }

        self.uploads.lock().push((guild_id.to_string(), sticker));
        Ok(())
    }
}

pub struct FakeFetcher {
    content: HashMap<String, Vec<u8>>,
    fail_url: Mutex<Option<String>>,
    requested: Mutex<Vec<String>>,
}

impl FakeFetcher {
    fn new(source: &[SourceSticker]) -> Self {
        let content = source
            .iter()
            .map(|s| (s.url.clone(), format!("content of {}", s.name).into_bytes()))
            .collect();

        Self {
            content,
            fail_url: Mutex::new(None),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn fail_on(&self, url: &str) {
        *self.fail_url.lock() = Some(url.to_string());
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().clone()
    }
}

#[async_trait]
impl ContentFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.requested.lock().push(url.to_string());

        if self.fail_url.lock().as_deref() == Some(url) {
            return Error::DownloadError(StatusCode::NOT_FOUND, String::new()).into();
        }

        match self.content.get(url) {
            Some(data) => Ok(data.clone()),
            None => Error::DownloadError(StatusCode::NOT_FOUND, url.to_string()).into(),
        }
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<(String, ToastKind)>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<(String, ToastKind)> {
        self.toasts.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn show_toast(&self, message: &str, kind: ToastKind) {
        self.toasts.lock().push((message.to_string(), kind));
    }
}

pub struct Harness {
    pub guilds: Arc<FakeGuilds>,
    pub stickers: Arc<FakeStickers>,
    pub fetcher: Arc<FakeFetcher>,
    pub notifier: Arc<RecordingNotifier>,
}

impl Harness {
    pub fn new(source: Vec<SourceSticker>) -> Self {
        Self {
            guilds: Arc::new(FakeGuilds::default()),
            fetcher: Arc::new(FakeFetcher::new(&source)),
            stickers: Arc::new(FakeStickers::new(source)),
            notifier: Arc::new(RecordingNotifier::default()),
        }
    }

    pub fn cloner(&self) -> StickerCloner {
        StickerCloner::new(
            self.guilds.clone(),
            self.stickers.clone(),
            self.fetcher.clone(),
            self.notifier.clone(),
        )
    }
}
