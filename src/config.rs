// std imports
use std::path::PathBuf;

// local imports
use crate::{
    error::Result,
    settings::{Settings, Source},
};

// ---

pub const APP_NAME: &str = "wcmatch";

/// Returns a loader of settings from the given configuration files, applied in order.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    Loader::new(paths.into_iter().map(|path| path.into()).collect())
}

/// Returns the path of the configuration file in the user's configuration directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.yaml"))
}

// ---

pub struct Loader {
    paths: Vec<PathBuf>,
    no_default: bool,
}

impl Loader {
    fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            no_default: false,
        }
    }

    /// Skips the configuration file in the user's configuration directory.
    pub fn no_default(mut self, value: bool) -> Self {
        self.no_default = value;
        self
    }

    pub fn load(self) -> Result<Settings> {
        Settings::load(self.sources())
    }

    fn sources(&self) -> Vec<Source> {
        let mut sources = Vec::new();

        if !self.no_default {
            if let Some(path) = default_path() {
                sources.push(Source::OptionalFile(path));
            }
        }

        sources.extend(self.paths.iter().cloned().map(Source::File));
        sources
    }
}
