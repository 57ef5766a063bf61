// std imports
use std::{
    io::{BufWriter, Write, stdout},
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};
use wildcards::Pattern;

// local imports
use wcmatch::{
    app::{self, App},
    cli,
    config,
    error::*,
    input::InputReference,
};

const WCMATCH_DEBUG_LOG: &str = "WCMATCH_DEBUG_LOG";
const WCMATCH_DEBUG_LOG_STYLE: &str = "WCMATCH_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(WCMATCH_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(WCMATCH_DEBUG_LOG).write_style(WCMATCH_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<bool> {
    bootstrap();

    let opt = cli::Opt::parse();
    let (configs, no_default_configs) = opt.config_files();
    let settings = config::at(configs).no_default(no_default_configs).load()?;
    log::debug!("settings: {:?}", settings);

    let cards = opt.cards(&settings);
    let pattern = Pattern::with_cards(&opt.pattern, cards);
    log::debug!("pattern {:?} with cards {:?}", opt.pattern, cards);

    let inputs = InputReference::from_paths(opt.files.iter().cloned());
    let app = App::new(app::Options {
        pattern,
        ignore_case: opt.ignore_case(&settings),
        invert_match: opt.invert_match,
        count: opt.count,
        line_number: opt.line_number,
        with_filename: inputs.len() > 1,
    });

    let mut output = BufWriter::new(stdout().lock());
    if opt.explain {
        app.explain(&mut output)?;
        output.flush()?;
        return Ok(true);
    }

    let selected = app.run(&inputs, &mut output)?;
    output.flush()?;
    Ok(selected)
}

fn main() {
    match run() {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(err) if err.is_broken_pipe() => process::exit(0),
        Err(err) => {
            err.log();
            process::exit(2);
        }
    }
}
