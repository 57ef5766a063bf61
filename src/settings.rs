// std imports
use std::include_str;
use std::path::PathBuf;

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;
use wildcards::Cards;

// local imports
use crate::error::Result;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub cards: CardSettings,
    pub ignore_case: bool,
}

impl Settings {
    /// Loads settings from the embedded defaults overlaid with the given sources in order.
    pub fn load<I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = Source>,
    {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));

        for source in sources {
            log::debug!("add configuration source {:?}", source);
            builder = match source {
                Source::File(path) => builder.add_source(File::from(path).required(true)),
                Source::OptionalFile(path) => builder.add_source(File::from(path).required(false)),
                Source::String(data, format) => builder.add_source(File::from_str(&data, format)),
            };
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

// ---

/// A configuration source.
#[derive(Debug, Clone)]
pub enum Source {
    File(PathBuf),
    OptionalFile(PathBuf),
    String(String, FileFormat),
}

// ---

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct CardSettings {
    pub anything: char,
    pub single: char,
    pub escape: char,
    pub set_open: char,
    pub set_close: char,
    pub set_not: char,
    pub sets: bool,
}

impl Default for CardSettings {
    fn default() -> Self {
        Cards::default().into()
    }
}

impl From<Cards<char>> for CardSettings {
    fn from(cards: Cards<char>) -> Self {
        Self {
            anything: cards.anything,
            single: cards.single,
            escape: cards.escape,
            set_open: cards.set_open,
            set_close: cards.set_close,
            set_not: cards.set_not,
            sets: cards.set_enabled,
        }
    }
}

impl From<CardSettings> for Cards<char> {
    fn from(settings: CardSettings) -> Self {
        Cards::new(
            settings.anything,
            settings.single,
            settings.escape,
            settings.set_open,
            settings.set_close,
            settings.set_not,
        )
        .with_sets_enabled(settings.sets)
    }
}
