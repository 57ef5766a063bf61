// std imports
use std::{
    borrow::Cow,
    io::{BufRead, Write},
};

// third-party imports
use wildcards::{IgnoreCase, Pattern};

// local imports
use crate::{
    error::{Error, Result},
    input::InputReference,
};

// ---

pub struct Options {
    pub pattern: Pattern,
    pub ignore_case: bool,
    pub invert_match: bool,
    pub count: bool,
    pub line_number: bool,
    pub with_filename: bool,
}

pub struct App {
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Processes the inputs in order and returns true if any line was selected.
    pub fn run(&self, inputs: &[InputReference], output: &mut impl Write) -> Result<bool> {
        let mut selected = false;
        for input in inputs {
            let reader = input.open()?;
            selected |= self.process(input, reader, output)? != 0;
        }
        Ok(selected)
    }

    /// Writes the pattern tokens one per line.
    pub fn explain(&self, output: &mut impl Write) -> Result<()> {
        for token in self.options.pattern.tokens() {
            writeln!(output, "{}", token)?;
        }
        Ok(())
    }

    /// Returns true if the line passes the pattern taking inversion into account.
    pub fn selects(&self, line: &str) -> bool {
        let pattern = &self.options.pattern;
        let matched = if self.options.ignore_case {
            pattern.matches_by(line, &IgnoreCase)
        } else {
            pattern.matches(line)
        };
        matched != self.options.invert_match
    }

    fn process(&self, input: &InputReference, mut reader: impl BufRead, output: &mut impl Write) -> Result<usize> {
        let name = self.options.with_filename.then(|| input.name());
        let mut buf = Vec::new();
        let mut n = 0;
        let mut selected = 0;

        loop {
            buf.clear();
            let size = reader.read_until(b'\n', &mut buf).map_err(|e| Error::Input {
                source_name: input.description(),
                source: e,
            })?;
            if size == 0 {
                break;
            }
            n += 1;

            let line = trim_newline(&buf);
            let text = String::from_utf8_lossy(line);
            if let Cow::Owned(_) = text {
                log::debug!("{}: line {} is not valid UTF-8", input.description(), n);
            }
            if !self.selects(&text) {
                continue;
            }

            selected += 1;
            if self.options.count {
                continue;
            }
            if let Some(name) = &name {
                write!(output, "{}:", name)?;
            }
            if self.options.line_number {
                write!(output, "{}:", n)?;
            }
            output.write_all(line)?;
            output.write_all(b"\n")?;
        }

        if self.options.count {
            if let Some(name) = &name {
                write!(output, "{}:", name)?;
            }
            writeln!(output, "{}", selected)?;
        }

        log::debug!("{}: {} of {} lines selected", input.description(), selected, n);
        Ok(selected)
    }
}

fn trim_newline(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
