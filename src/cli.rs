// std imports
use std::path::PathBuf;

// third-party imports
use clap::Parser;
use wildcards::Cards;

// local imports
use crate::settings::Settings;

// ---

/// Prints lines that match a wildcard pattern as a whole.
///
/// Pattern syntax: '*' matches any run of characters, '?' matches a single character,
/// '[abc]' matches one of the listed characters, '[!abc]' matches any other character
/// and '\' makes the next character match literally.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Opt {
    /// Configuration file path, may be specified multiple times, use '-' to skip the default configuration file.
    #[arg(long, value_name = "FILE", env = "WCMATCH_CONFIG", num_args = 1)]
    pub config: Vec<String>,

    /// Compare literals and set members ignoring letter case.
    #[arg(short, long, env = "WCMATCH_IGNORE_CASE", overrides_with_all = ["ignore_case", "match_case"])]
    pub ignore_case: bool,

    /// Compare literals and set members exactly, overrides --ignore-case and the configuration.
    #[arg(long, overrides_with_all = ["ignore_case", "match_case"])]
    pub match_case: bool,

    /// Treat set symbols literally.
    #[arg(long, env = "WCMATCH_NO_SETS")]
    pub no_sets: bool,

    /// Symbol matching zero or more characters.
    #[arg(long, value_name = "CHAR", env = "WCMATCH_ANYTHING", help_heading = "Cards")]
    pub anything: Option<char>,

    /// Symbol matching exactly one character.
    #[arg(long, value_name = "CHAR", env = "WCMATCH_SINGLE", help_heading = "Cards")]
    pub single: Option<char>,

    /// Symbol making the next pattern character match literally.
    #[arg(long, value_name = "CHAR", env = "WCMATCH_ESCAPE", help_heading = "Cards")]
    pub escape: Option<char>,

    /// Symbol opening a set.
    #[arg(long, value_name = "CHAR", env = "WCMATCH_SET_OPEN", help_heading = "Cards")]
    pub set_open: Option<char>,

    /// Symbol closing a set.
    #[arg(long, value_name = "CHAR", env = "WCMATCH_SET_CLOSE", help_heading = "Cards")]
    pub set_close: Option<char>,

    /// Symbol negating a set when it directly follows the opening symbol.
    #[arg(long, value_name = "CHAR", env = "WCMATCH_SET_NOT", help_heading = "Cards")]
    pub set_not: Option<char>,

    /// Print lines that do not match.
    #[arg(short = 'v', long)]
    pub invert_match: bool,

    /// Print only the number of selected lines per input.
    #[arg(short, long)]
    pub count: bool,

    /// Prefix each selected line with its line number.
    #[arg(short = 'n', long)]
    pub line_number: bool,

    /// Print how the pattern is interpreted and exit.
    #[arg(long)]
    pub explain: bool,

    /// Pattern to match whole lines against.
    pub pattern: String,

    /// Files to process, standard input is used if none are given or '-' is specified.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Opt {
    /// Returns the configuration files to load and whether the default one should be skipped.
    pub fn config_files(&self) -> (&[String], bool) {
        match self.config.iter().rposition(|x| x.is_empty() || x == "-") {
            Some(i) => (&self.config[i + 1..], true),
            None => (&self.config, false),
        }
    }

    /// Returns the cards from the settings with the command-line overrides applied.
    pub fn cards(&self, settings: &Settings) -> Cards<char> {
        let base = Cards::from(settings.cards);
        Cards {
            anything: self.anything.unwrap_or(base.anything),
            single: self.single.unwrap_or(base.single),
            escape: self.escape.unwrap_or(base.escape),
            set_open: self.set_open.unwrap_or(base.set_open),
            set_close: self.set_close.unwrap_or(base.set_close),
            set_not: self.set_not.unwrap_or(base.set_not),
            set_enabled: base.set_enabled && !self.no_sets,
        }
    }

    /// Returns whether case should be ignored, the command line takes precedence over the settings.
    pub fn ignore_case(&self, settings: &Settings) -> bool {
        if self.match_case {
            false
        } else {
            self.ignore_case || settings.ignore_case
        }
    }
}
