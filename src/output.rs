use std::fs::File;
use std::io::{self, Write};

use bstr::BString;

use crate::config::Config;
use crate::debug::render_slots;
use crate::error::ListError;
use crate::exec::Outcome;

/// Render an outcome as its result line, without delimiter
pub fn render_outcome(outcome: &Outcome) -> BString {
    match outcome {
        Outcome::Done => BString::from("ok"),
        Outcome::Value(value) => value.clone(),
        Outcome::Flag(flag) => BString::from(flag.to_string()),
        Outcome::Count(n) => BString::from(n.to_string()),
        Outcome::Slots(slots) => render_slots(slots),
    }
}

/// Write the result line of a successful command
pub fn write_outcome<W: Write>(writer: &mut W, outcome: &Outcome, delimiter: u8) -> io::Result<()> {
    writer.write_all(&render_outcome(outcome))?;
    writer.write_all(&[delimiter])
}

/// Write the result line of a failed command
pub fn write_error<W: Write>(writer: &mut W, err: &ListError, delimiter: u8) -> io::Result<()> {
    write!(writer, "error: {}", err)?;
    writer.write_all(&[delimiter])
}

/// Open output file or return stdout
pub fn open_output(config: &Config) -> io::Result<Box<dyn Write>> {
    match &config.output_file {
        Some(path) => {
            let file = File::create(path)?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
