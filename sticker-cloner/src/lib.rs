mod config;
pub use config::{Config, TokenType};

mod error;
pub use error::{Error, Result};

mod notifier;
pub use notifier::{Notifier, ToastKind, TracingNotifier};

pub mod cloner;
pub mod discord;
pub mod plugin;
pub mod registry;
pub mod settings;

#[cfg(test)]
pub(crate) mod testing;
