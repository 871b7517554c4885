use std::io::Write;

use bstr::BString;

use crate::config::Config;
use crate::debug;
use crate::error::{ArrlistError, ListError, Result};
use crate::input::Record;
use crate::list::ArrayList;
use crate::output;
use crate::script::Command;

/// What a successful command produced
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Mutation succeeded with nothing to report
    Done,
    Value(BString),
    Flag(bool),
    Count(usize),
    /// Snapshot of the backing buffer
    Slots(Vec<Option<BString>>),
}

/// Map a signed script index onto the list's index space
fn to_index(raw: i64, size: usize) -> std::result::Result<usize, ListError> {
    usize::try_from(raw).map_err(|_| ListError::OutOfRange { index: raw, size })
}

/// Apply a single command to the list
pub fn execute(list: &mut ArrayList<BString>, command: Command) -> std::result::Result<Outcome, ListError> {
    let outcome = match command {
        Command::InsertAt { index, value } => {
            list.insert_at(to_index(index, list.len())?, value)?;
            Outcome::Done
        }
        Command::InsertFront(value) => {
            list.insert_front(value)?;
            Outcome::Done
        }
        Command::InsertBack(value) => {
            list.insert_back(value)?;
            Outcome::Done
        }
        Command::RemoveAt(index) => Outcome::Value(list.remove_at(to_index(index, list.len())?)?),
        Command::RemoveFront => Outcome::Value(list.remove_front()?),
        Command::RemoveBack => Outcome::Value(list.remove_back()?),
        Command::Get(index) => Outcome::Value(list.get(to_index(index, list.len())?)?.clone()),
        Command::IsEmpty => Outcome::Flag(list.is_empty()),
        Command::Size => Outcome::Count(list.len()),
        Command::Capacity => Outcome::Count(list.capacity()),
        Command::Clear => {
            list.clear();
            Outcome::Done
        }
        Command::Dump => Outcome::Slots(list.backing_array().to_vec()),
    };
    Ok(outcome)
}

/// Run script records against `list`, writing one result per command
///
/// A malformed record aborts the run. A failing list operation is written
/// as an `error:` result, or aborts the run when `config.strict` is set.
/// Debug annotations go to `diag` after every command.
pub fn run_script<W: Write, D: Write>(
    list: &mut ArrayList<BString>,
    records: &[Record],
    config: &Config,
    out: &mut W,
    diag: &mut D,
) -> Result<()> {
    for record in records {
        let command = Command::parse(&record.text).map_err(|message| ArrlistError::InvalidCommand {
            line: record.line,
            message,
        })?;

        let result = execute(list, command);

        if config.debug {
            debug::debug_step(diag, &record.text, list)?;
        }

        match result {
            Ok(outcome) => output::write_outcome(out, &outcome, config.record_delimiter)?,
            Err(source) if config.strict => {
                return Err(ArrlistError::Operation {
                    line: record.line,
                    source,
                });
            }
            Err(err) => output::write_error(out, &err, config.record_delimiter)?,
        }
    }
    Ok(())
}
