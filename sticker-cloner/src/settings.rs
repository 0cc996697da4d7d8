use std::fmt;
use std::sync::Arc;

use crate::cloner::StickerCloner;
use crate::{Notifier, ToastKind};

pub const MISSING_IDS_MESSAGE: &str = "Please enter both Source and Target Server IDs.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputId {
    SourceGuildId,
    TargetGuildId,
}

impl InputId {
    pub fn element_id(self) -> &'static str {
        match self {
            InputId::SourceGuildId => "sourceGuildId",
            InputId::TargetGuildId => "targetGuildId",
        }
    }

    fn label(self) -> &'static str {
        match self {
            InputId::SourceGuildId => "Source Server ID:",
            InputId::TargetGuildId => "Target Server ID:",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            InputId::SourceGuildId => "Enter Source Server ID",
            InputId::TargetGuildId => "Enter Target Server ID",
        }
    }
}

/// Rendered form: what the host should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub title: &'static str,
    pub inputs: Vec<TextInput>,
    pub button: Button,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub id: &'static str,
    pub label: &'static str,
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for input in &self.inputs {
            let value = if input.value.is_empty() {
                input.placeholder
            } else {
                input.value.as_str()
            };
            writeln!(f, "{} [{}]", input.label, value)?;
        }
        write!(f, "<{}>", self.button.label)
    }
}

/// Two-field form that triggers a clone.
pub struct SettingsPanel {
    cloner: Arc<StickerCloner>,
    notifier: Arc<dyn Notifier>,
    source_guild_id: String,
    target_guild_id: String,
}

impl SettingsPanel {
    pub fn new(cloner: Arc<StickerCloner>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            cloner,
            notifier,
            source_guild_id: String::new(),
            target_guild_id: String::new(),
        }
    }

    pub fn render(&self) -> Panel {
        let input = |id: InputId, value: &str| TextInput {
            id: id.element_id(),
            label: id.label(),
            placeholder: id.placeholder(),
            value: value.to_string(),
        };

        Panel {
            title: "Clone Stickers Settings",
            inputs: vec![
                input(InputId::SourceGuildId, &self.source_guild_id),
                input(InputId::TargetGuildId, &self.target_guild_id),
            ],
            button: Button {
                id: "cloneButton",
                label: "Clone Stickers",
            },
        }
    }

    pub fn set_input(&mut self, id: InputId, value: impl Into<String>) {
        match id {
            InputId::SourceGuildId => self.source_guild_id = value.into(),
            InputId::TargetGuildId => self.target_guild_id = value.into(),
        }
    }

    /// Handles the clone button. Values are trimmed; a blank field is reported and nothing
    /// else happens.
    pub async fn click(&self) {
        let source = self.source_guild_id.trim();
        let target = self.target_guild_id.trim();

        if source.is_empty() || target.is_empty() {
            self.notifier.show_toast(MISSING_IDS_MESSAGE, ToastKind::Error);
            return;
        }

        self.cloner.clone_stickers(source, target).await;
    }
}
